use foundation::bounds::Aabb2;
use foundation::math::{Coordinates, great_circle_interpolate};
use projection::{MercatorView, OrthographicView, Transform2D, Viewport, project_mercator};

/// Mercator zoom factor bounds.
pub const MERCATOR_MIN_ZOOM: f64 = 0.8;
pub const MERCATOR_MAX_ZOOM: f64 = 18.0;
/// Orthographic scale bounds as multiples of the viewport baseline.
pub const ORTHO_MIN_ZOOM: f64 = 0.8;
pub const ORTHO_MAX_ZOOM: f64 = 10.0;

/// Fraction of the viewport the fitted bounding box may occupy.
const FIT_PADDING: f64 = 0.9;

/// Pan/zoom transform framing both endpoints on a Mercator map.
///
/// Pure in its inputs, so repeated fits of the same path can never drift.
/// Coincident endpoints degrade to the maximum zoom centered on the point.
pub fn mercator_fit_target(p1: Coordinates, p2: Coordinates, viewport: Viewport) -> Transform2D {
    let base = MercatorView::default();
    let a = project_mercator(p1, base, viewport);
    let b = project_mercator(p2, base, viewport);

    let mut bounds = Aabb2::new(a, a);
    bounds.expand(b);
    let size = bounds.size();
    let spread = (size.x / viewport.width).max(size.y / viewport.height);
    let k = (FIT_PADDING / spread).clamp(MERCATOR_MIN_ZOOM, MERCATOR_MAX_ZOOM);

    let c = bounds.center();
    let vc = viewport.center();
    Transform2D::new(vc.x - c.x * k, vc.y - c.y * k, k)
}

/// Rotation framing both endpoints on the globe: center the great-circle
/// midpoint, keep the current scale.
pub fn orthographic_fit_target(
    p1: Coordinates,
    p2: Coordinates,
    current: OrthographicView,
) -> OrthographicView {
    let mid = great_circle_interpolate(p1, p2, 0.5);
    OrthographicView::new([-mid.lon_deg, -mid.lat_deg, 0.0], current.scale)
}
