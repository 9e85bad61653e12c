use basemap::PolygonSet;
use earcutr::earcut;
use foundation::math::{Coordinates, Vec2};
use projection::{Projection, Viewport};

use crate::primitive::{LAND_FILL, PrimitiveStyle, RenderPrimitive};

/// Project the basemap polygon set into screen-space fill primitives.
///
/// Re-invoked on every view change; the set itself is shared read-only.
/// Under orthographic projection, back-hemisphere vertices are dropped and
/// rings that keep fewer than three visible vertices disappear entirely.
pub fn render_basemap(
    set: &PolygonSet,
    projection: &Projection,
    viewport: Viewport,
) -> Vec<RenderPrimitive> {
    let style = PrimitiveStyle::fill(LAND_FILL);
    let mut out = Vec::new();

    for feature in &set.features {
        let mut rings: Vec<Vec<Vec2>> = Vec::with_capacity(feature.rings.len());
        for ring in &feature.rings {
            let projected: Vec<Vec2> = ring
                .iter()
                .filter_map(|&[lon, lat]| {
                    projection.project(Coordinates::unchecked(lat, lon), viewport)
                })
                .collect();
            if projected.len() >= 3 {
                rings.push(projected);
            }
        }
        if !rings.is_empty() {
            out.push(RenderPrimitive::Polygon { rings, style });
        }
    }

    out
}

/// Flat triangle list (3 vertices per triangle) for backends that consume
/// fills as meshes rather than even-odd polygons. Outer ring first, then
/// holes; a closing duplicate vertex is removed before triangulation.
pub fn triangulate_rings(rings: &[Vec<Vec2>]) -> Vec<Vec2> {
    let mut coords: Vec<f64> = Vec::new();
    let mut vertices: Vec<Vec2> = Vec::new();
    let mut hole_indices: Vec<usize> = Vec::new();

    for (ring_i, ring) in rings.iter().enumerate() {
        let mut pts = ring.clone();
        drop_closing_duplicate(&mut pts);
        if pts.len() < 3 {
            continue;
        }
        if ring_i > 0 {
            hole_indices.push(vertices.len());
        }
        for p in pts {
            coords.push(p.x);
            coords.push(p.y);
            vertices.push(p);
        }
    }

    if vertices.len() < 3 {
        return Vec::new();
    }

    let indices = match earcut(&coords, &hole_indices, 2) {
        Ok(ix) => ix,
        Err(_) => return Vec::new(),
    };

    indices
        .into_iter()
        .filter_map(|i| vertices.get(i).copied())
        .collect()
}

fn drop_closing_duplicate(points: &mut Vec<Vec2>) {
    if points.len() >= 2 {
        let first = points[0];
        let last = points[points.len() - 1];
        if (first.x - last.x).abs() < 1e-9 && (first.y - last.y).abs() < 1e-9 {
            points.pop();
        }
    }
}
