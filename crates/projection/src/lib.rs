pub mod mercator;
pub mod orthographic;
pub mod view;

pub use mercator::*;
pub use orthographic::*;
pub use view::*;

use foundation::math::{Coordinates, Vec2};

/// A projection variant together with its view parameters.
///
/// Both variants are pure value types; "changing the view" means building a
/// new `Projection`, never mutating one in place.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Projection {
    Orthographic(OrthographicView),
    Mercator(MercatorView),
}

impl Projection {
    /// Project to screen pixels. `None` means the point is on the back
    /// hemisphere of an orthographic view; Mercator never culls.
    pub fn project(&self, coord: Coordinates, viewport: Viewport) -> Option<Vec2> {
        match self {
            Projection::Orthographic(view) => project_orthographic(coord, *view, viewport),
            Projection::Mercator(view) => Some(project_mercator(coord, *view, viewport)),
        }
    }

    /// Zoom relative to the mode's baseline, used to keep stroke weight
    /// visually constant across zoom levels.
    pub fn zoom_fraction(&self, viewport: Viewport) -> f64 {
        match self {
            Projection::Orthographic(view) => view.scale / viewport.orthographic_scale(),
            Projection::Mercator(view) => view.transform.k,
        }
    }
}
