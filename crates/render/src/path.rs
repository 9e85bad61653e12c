use foundation::math::{
    Coordinates, GeoPath, Vec2, central_angle_rad, great_circle_interpolate, wrap_longitude_rad,
};
use projection::{Projection, Viewport};

use crate::primitive::{
    MARKER_FILL, MARKER_STROKE, PATH_STROKE, PrimitiveStyle, RenderPrimitive, zoom_compensated,
};

/// Stroke width and marker radius at zoom fraction 1.0.
pub const PATH_BASE_WIDTH: f64 = 2.0;
pub const MARKER_BASE_RADIUS: f64 = 5.0;
const MARKER_STROKE_WIDTH: f64 = 1.5;

/// Sample the great-circle arc between two positions, one sample per
/// degree of central angle. Longitudes are unwrapped to a continuous
/// sequence so a seam-crossing arc never jumps under Mercator.
pub fn geodesic_arc(p1: Coordinates, p2: Coordinates) -> GeoPath {
    let degrees = central_angle_rad(p1, p2).to_degrees();
    let segments = (degrees.ceil() as usize).max(1);
    let samples: Vec<Coordinates> = (0..=segments)
        .map(|i| great_circle_interpolate(p1, p2, i as f64 / segments as f64))
        .collect();
    GeoPath::new(unwrap_seam(samples))
}

fn unwrap_seam(points: Vec<Coordinates>) -> Vec<Coordinates> {
    let mut out: Vec<Coordinates> = Vec::with_capacity(points.len());
    let mut prev_lon: Option<f64> = None;
    for p in points {
        let lon = match prev_lon {
            None => p.lon_deg,
            Some(prev) => {
                prev + wrap_longitude_rad((p.lon_deg - prev).to_radians()).to_degrees()
            }
        };
        prev_lon = Some(lon);
        out.push(Coordinates::unchecked(p.lat_deg, lon));
    }
    out
}

/// First `fraction` of a sampled path, with the cut point interpolated
/// between the neighboring samples. Drives the draw-in animation.
pub fn trim_path(points: &[Coordinates], fraction: f64) -> Vec<Coordinates> {
    if points.len() < 2 || fraction >= 1.0 {
        return points.to_vec();
    }
    if fraction <= 0.0 {
        return Vec::new();
    }
    let scaled = fraction * (points.len() - 1) as f64;
    let whole = scaled.floor() as usize;
    let partial = scaled - whole as f64;
    let mut out = points[..=whole].to_vec();
    if partial > 1e-9 && whole + 1 < points.len() {
        let a = points[whole];
        let b = points[whole + 1];
        out.push(Coordinates::unchecked(
            a.lat_deg + (b.lat_deg - a.lat_deg) * partial,
            a.lon_deg + (b.lon_deg - a.lon_deg) * partial,
        ));
    }
    out
}

/// Project a vertex sequence and split it at hemisphere-visibility
/// boundaries: one polyline per visible run, never a stroke across the
/// back of the sphere. Runs shorter than two points are dropped.
pub fn project_visible_runs(
    points: &[Coordinates],
    projection: &Projection,
    viewport: Viewport,
) -> Vec<Vec<Vec2>> {
    let mut runs: Vec<Vec<Vec2>> = Vec::new();
    let mut current: Vec<Vec2> = Vec::new();
    for &p in points {
        match projection.project(p, viewport) {
            Some(screen) => current.push(screen),
            None => {
                if current.len() >= 2 {
                    runs.push(std::mem::take(&mut current));
                } else {
                    current.clear();
                }
            }
        }
    }
    if current.len() >= 2 {
        runs.push(current);
    }
    runs
}

/// Screen primitives for the path polyline, revealed up to `fraction`.
pub fn render_route(
    path: &GeoPath,
    projection: &Projection,
    viewport: Viewport,
    fraction: f64,
) -> Vec<RenderPrimitive> {
    let revealed = trim_path(path.points(), fraction);
    let width = zoom_compensated(PATH_BASE_WIDTH, projection.zoom_fraction(viewport));
    let style = PrimitiveStyle::stroke(PATH_STROKE, width);
    project_visible_runs(&revealed, projection, viewport)
        .into_iter()
        .map(|points| RenderPrimitive::Polyline { points, style })
        .collect()
}

/// Endpoint marker circles. Markers on the back hemisphere are culled;
/// fully transparent markers are not emitted at all.
pub fn render_markers(
    p1: Coordinates,
    p2: Coordinates,
    projection: &Projection,
    viewport: Viewport,
    opacity: f64,
) -> Vec<RenderPrimitive> {
    if opacity <= 0.0 {
        return Vec::new();
    }
    let zoom = projection.zoom_fraction(viewport);
    let radius = zoom_compensated(MARKER_BASE_RADIUS, zoom);
    let style = PrimitiveStyle {
        stroke: Some(MARKER_STROKE),
        fill: Some(MARKER_FILL),
        stroke_width: zoom_compensated(MARKER_STROKE_WIDTH, zoom),
        opacity,
    };
    [p1, p2]
        .into_iter()
        .filter_map(|p| projection.project(p, viewport))
        .map(|center| RenderPrimitive::Circle {
            center,
            radius,
            style,
        })
        .collect()
}
