use foundation::math::{Coordinates, Vec2, Vec3, unit_vector};

use crate::view::{OrthographicView, Viewport};

/// Rotate a position into view space.
///
/// Composition order matches the map-projection convention: longitude
/// offset first, then pitch about the screen-horizontal axis, then roll
/// about the viewing axis. In view space the viewing axis is +x; the
/// visible hemisphere is `x >= 0`.
fn rotate_to_view(coord: Coordinates, view: OrthographicView) -> Vec3 {
    let [lambda, phi, gamma] = view.rotation;

    // Longitude offset folds into the initial spherical-to-cartesian step.
    let shifted = Coordinates::unchecked(coord.lat_deg, coord.lon_deg + lambda);
    let v = unit_vector(shifted);

    // Pitch: rotate about the y axis so latitude -phi moves to the view
    // center, i.e. rotate([0, -phi0]) centers phi0.
    let (sin_phi, cos_phi) = phi.to_radians().sin_cos();
    let x = v.x * cos_phi - v.z * sin_phi;
    let z = v.z * cos_phi + v.x * sin_phi;
    let y = v.y;

    // Roll about the viewing axis.
    let (sin_gamma, cos_gamma) = gamma.to_radians().sin_cos();
    let y2 = y * cos_gamma - z * sin_gamma;
    let z2 = y * sin_gamma + z * cos_gamma;

    Vec3::new(x, y2, z2)
}

/// Whether a position lies on the visible hemisphere of the view.
///
/// A point is visible while its angular distance from the view center does
/// not exceed π/2; the cosine of that distance is the view-space x.
pub fn orthographic_visible(coord: Coordinates, view: OrthographicView) -> bool {
    rotate_to_view(coord, view).x >= 0.0
}

/// Orthographic projection to screen pixels. `None` for back-hemisphere
/// points.
pub fn project_orthographic(
    coord: Coordinates,
    view: OrthographicView,
    viewport: Viewport,
) -> Option<Vec2> {
    let v = rotate_to_view(coord, view);
    if v.x < 0.0 {
        return None;
    }
    let center = viewport.center();
    Some(Vec2::new(
        center.x + v.y * view.scale,
        center.y - v.z * view.scale,
    ))
}

#[cfg(test)]
mod tests {
    use super::{orthographic_visible, project_orthographic};
    use crate::view::{OrthographicView, Viewport};
    use foundation::math::Coordinates;

    fn coord(lat: f64, lon: f64) -> Coordinates {
        Coordinates::new(lat, lon).unwrap()
    }

    fn viewport() -> Viewport {
        Viewport::new(800.0, 600.0)
    }

    #[test]
    fn view_center_projects_to_canvas_center() {
        let view = OrthographicView::default_for(viewport());
        let p = project_orthographic(coord(0.0, 0.0), view, viewport()).unwrap();
        assert!((p.x - 400.0).abs() < 1e-9);
        assert!((p.y - 300.0).abs() < 1e-9);
    }

    #[test]
    fn rotation_centers_the_negated_coordinate() {
        // rotate([-lon, -lat]) centers (lat, lon).
        let target = coord(40.7128, -74.0060);
        let view = OrthographicView::new([74.0060, -40.7128, 0.0], 300.0);
        let p = project_orthographic(target, view, viewport()).unwrap();
        assert!((p.x - 400.0).abs() < 1e-6);
        assert!((p.y - 300.0).abs() < 1e-6);
        assert!(orthographic_visible(target, view));
    }

    #[test]
    fn back_hemisphere_is_culled() {
        let view = OrthographicView::default_for(viewport());
        assert!(project_orthographic(coord(0.0, 179.0), view, viewport()).is_none());
        assert!(!orthographic_visible(coord(10.0, -120.0), view));
    }

    #[test]
    fn hemisphere_boundary_is_still_visible() {
        let view = OrthographicView::default_for(viewport());
        assert!(orthographic_visible(coord(0.0, 90.0), view));
        assert!(orthographic_visible(coord(90.0, 0.0), view));
    }

    #[test]
    fn north_pole_projects_upward() {
        let view = OrthographicView::default_for(viewport());
        let p = project_orthographic(coord(90.0, 0.0), view, viewport()).unwrap();
        assert!((p.x - 400.0).abs() < 1e-9);
        assert!(p.y < 300.0);
    }

    #[test]
    fn east_is_screen_right() {
        let view = OrthographicView::default_for(viewport());
        let p = project_orthographic(coord(0.0, 30.0), view, viewport()).unwrap();
        assert!(p.x > 400.0);
        assert!((p.y - 300.0).abs() < 1e-9);
    }
}
