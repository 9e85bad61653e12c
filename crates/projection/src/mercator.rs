use foundation::math::{Coordinates, Vec2, stretched_latitude};

use crate::view::{MercatorView, Viewport};

/// Cylindrical conformal mapping at the viewport baseline scale, centered
/// on the canvas, with the view's pan/zoom transform applied on top.
///
/// Total over valid latitudes: the pole singularity is absorbed by the
/// stretched-latitude clamp, so `lat = ±90` projects to a finite point.
pub fn project_mercator(coord: Coordinates, view: MercatorView, viewport: Viewport) -> Vec2 {
    let scale = viewport.mercator_scale();
    let center = viewport.center();
    let base = Vec2::new(
        center.x + scale * coord.lon_rad(),
        center.y - scale * stretched_latitude(coord.lat_rad()),
    );
    view.transform.apply(base)
}
