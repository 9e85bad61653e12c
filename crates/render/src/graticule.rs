use foundation::math::Coordinates;
use projection::{Projection, Viewport};

use crate::path::project_visible_runs;
use crate::primitive::{GRATICULE, PrimitiveStyle, RenderPrimitive};

const LINE_STEP_DEG: f64 = 15.0;
const SAMPLE_STEP_DEG: f64 = 5.0;
/// Meridians stop short of the poles, where they would converge to noise.
const MERIDIAN_LAT_LIMIT_DEG: f64 = 80.0;
const PARALLEL_LAT_LIMIT_DEG: f64 = 75.0;
const GRATICULE_OPACITY: f64 = 0.2;
const GRATICULE_WIDTH: f64 = 0.5;

fn sample_range(from: f64, to: f64, step: f64, line: impl Fn(f64) -> Coordinates) -> Vec<Coordinates> {
    let count = ((to - from) / step).round() as usize;
    (0..=count).map(|i| line(from + i as f64 * step)).collect()
}

/// Graticule lines as screen polylines, split at the hemisphere boundary
/// exactly like path vertices.
pub fn render_graticule(projection: &Projection, viewport: Viewport) -> Vec<RenderPrimitive> {
    let style = PrimitiveStyle::stroke(GRATICULE, GRATICULE_WIDTH).with_opacity(GRATICULE_OPACITY);
    let mut out = Vec::new();

    let mut emit = |samples: Vec<Coordinates>| {
        for points in project_visible_runs(&samples, projection, viewport) {
            out.push(RenderPrimitive::Polyline { points, style });
        }
    };

    let mut lon = -180.0;
    while lon < 180.0 {
        emit(sample_range(
            -MERIDIAN_LAT_LIMIT_DEG,
            MERIDIAN_LAT_LIMIT_DEG,
            SAMPLE_STEP_DEG,
            |lat| Coordinates::unchecked(lat, lon),
        ));
        lon += LINE_STEP_DEG;
    }

    let mut lat = -PARALLEL_LAT_LIMIT_DEG;
    while lat <= PARALLEL_LAT_LIMIT_DEG {
        emit(sample_range(-180.0, 180.0, SAMPLE_STEP_DEG, |lon| {
            Coordinates::unchecked(lat, lon)
        }));
        lat += LINE_STEP_DEG;
    }

    out
}
