use std::sync::OnceLock;

use crate::format::{BasemapError, PolygonSet};

/// Load-once cache for the basemap dataset.
///
/// Lifecycle: the first successful `get_or_load` wins and the set is shared
/// read-only for the rest of the process; a failed load leaves the store
/// empty so a later attempt can retry. Invalidation only happens on
/// process restart.
#[derive(Debug, Default)]
pub struct BasemapStore {
    cell: OnceLock<PolygonSet>,
}

impl BasemapStore {
    pub const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
        }
    }

    /// The process-wide store.
    pub fn global() -> &'static BasemapStore {
        static STORE: BasemapStore = BasemapStore::new();
        &STORE
    }

    pub fn get(&self) -> Option<&PolygonSet> {
        self.cell.get()
    }

    /// Return the cached set, loading it on first need.
    pub fn get_or_load<F>(&self, load: F) -> Result<&PolygonSet, BasemapError>
    where
        F: FnOnce() -> Result<PolygonSet, BasemapError>,
    {
        if let Some(set) = self.cell.get() {
            return Ok(set);
        }
        let set = load()?;
        Ok(self.cell.get_or_init(|| set))
    }
}
