use serde::{Deserialize, Serialize};

/// Which path model to compute and draw.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathType {
    #[default]
    Orthodromic,
    Loxodromic,
}

/// Which visualization the host is showing.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Globe,
    Map,
}

/// The externally controlled knobs of the core.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionConfig {
    pub path_type: PathType,
    pub view_mode: ViewMode,
}
