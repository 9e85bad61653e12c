use basemap::{BasemapError, BasemapStore, PolygonSet, parse_polygon_set};
use foundation::math::{
    Coordinates, DEFAULT_RHUMB_SEGMENTS, GeoPath, Vec2, loxodromic_distance_km, loxodromic_path,
    orthodromic_distance_km,
};
use foundation::time::Time;
use projection::{Projection, Viewport};
use render::{
    RenderPrimitive, Reveal, geodesic_arc, render_basemap, render_graticule, render_markers,
    render_route,
};
use viewport::{GlobeController, MapController};

use crate::config::{PathType, SessionConfig, ViewMode};

/// Both distances for the current endpoint pair, computed once per
/// visualize request and never on view changes.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Distances {
    pub orthodromic_km: f64,
    pub loxodromic_km: f64,
}

/// One rendered frame: the ordered primitives for the drawing backend plus
/// the distances to display, when a path is active.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub primitives: Vec<RenderPrimitive>,
    pub distances: Option<Distances>,
}

#[derive(Debug, Clone)]
struct ActiveRequest {
    start: Coordinates,
    end: Coordinates,
    path: GeoPath,
    distances: Distances,
    reveal: Reveal,
}

/// Owns all interactive state: one controller per visualization mode, the
/// current visualize request, and the shared basemap reference.
///
/// Single logical thread of control: all mutation goes through `&mut self`
/// on pointer events, wheel events, and frame ticks.
#[derive(Debug)]
pub struct Session {
    globe: GlobeController,
    map: MapController,
    view_mode: ViewMode,
    path_type: PathType,
    request: Option<ActiveRequest>,
    basemap: Option<&'static PolygonSet>,
}

impl Session {
    pub fn new(viewport: Viewport) -> Self {
        Self::with_config(viewport, SessionConfig::default())
    }

    /// Start from host-supplied settings, e.g. deserialized from a URL
    /// fragment or saved state.
    pub fn with_config(viewport: Viewport, config: SessionConfig) -> Self {
        Self {
            globe: GlobeController::new(viewport),
            map: MapController::new(viewport),
            view_mode: config.view_mode,
            path_type: config.path_type,
            request: None,
            basemap: None,
        }
    }

    /// Current settings in the externally visible form.
    pub fn config(&self) -> SessionConfig {
        SessionConfig {
            path_type: self.path_type,
            view_mode: self.view_mode,
        }
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.globe.set_viewport(viewport);
        self.map.set_viewport(viewport);
    }

    /// Parse and cache the basemap through the process-wide store. A load
    /// failure is reported but not fatal: frames simply omit land polygons.
    pub fn load_basemap(&mut self, json: &str) -> Result<(), BasemapError> {
        let set = BasemapStore::global().get_or_load(|| parse_polygon_set(json))?;
        self.basemap = Some(set);
        Ok(())
    }

    /// Hand an already-loaded polygon set to this session.
    pub fn attach_basemap(&mut self, set: &'static PolygonSet) {
        self.basemap = Some(set);
    }

    pub fn has_basemap(&self) -> bool {
        self.basemap.is_some()
    }

    pub fn distances(&self) -> Option<Distances> {
        self.request.as_ref().map(|r| r.distances)
    }

    /// Start visualizing a new endpoint pair.
    ///
    /// Replaces the previous request wholesale: geodesy is recomputed once,
    /// any in-flight auto-fit tween is cancelled by the new one, and old
    /// path/marker primitives can never reappear because frames are rebuilt
    /// from the new request only.
    pub fn visualize(&mut self, p1: Coordinates, p2: Coordinates, path_type: PathType, now: Time) {
        let distances = Distances {
            orthodromic_km: orthodromic_distance_km(p1, p2),
            loxodromic_km: loxodromic_distance_km(p1, p2),
        };
        let path = match path_type {
            PathType::Orthodromic => geodesic_arc(p1, p2),
            PathType::Loxodromic => loxodromic_path(p1, p2, DEFAULT_RHUMB_SEGMENTS),
        };
        self.path_type = path_type;
        self.request = Some(ActiveRequest {
            start: p1,
            end: p2,
            path,
            distances,
            reveal: Reveal::started_at(now),
        });
        self.globe.fit_to_path(p1, p2, now);
        self.map.fit_to_path(p1, p2, now);
    }

    /// Drop the current path and animate back to the default view.
    pub fn clear(&mut self, now: Time) {
        self.request = None;
        self.globe.reset(now);
        self.map.reset(now);
    }

    pub fn pointer_down(&mut self, pos: Vec2) {
        match self.view_mode {
            ViewMode::Globe => self.globe.pointer_down(pos),
            ViewMode::Map => self.map.pointer_down(pos),
        }
    }

    pub fn pointer_move(&mut self, pos: Vec2) -> bool {
        match self.view_mode {
            ViewMode::Globe => self.globe.pointer_move(pos),
            ViewMode::Map => self.map.pointer_move(pos),
        }
    }

    pub fn pointer_up(&mut self) {
        match self.view_mode {
            ViewMode::Globe => self.globe.pointer_up(),
            ViewMode::Map => self.map.pointer_up(),
        }
    }

    pub fn wheel(&mut self, delta: f64, cursor: Vec2) {
        match self.view_mode {
            ViewMode::Globe => self.globe.wheel(delta),
            ViewMode::Map => self.map.wheel(delta, cursor),
        }
    }

    pub fn globe(&self) -> &GlobeController {
        &self.globe
    }

    pub fn map(&self) -> &MapController {
        &self.map
    }

    fn active_projection(&self) -> (Projection, Viewport) {
        match self.view_mode {
            ViewMode::Globe => (
                Projection::Orthographic(self.globe.view()),
                self.globe.viewport(),
            ),
            ViewMode::Map => (Projection::Mercator(self.map.view()), self.map.viewport()),
        }
    }

    /// Advance animations and rebuild every primitive for the active mode.
    /// Draw order: land, graticule, path, markers.
    pub fn frame(&mut self, now: Time) -> Frame {
        self.globe.tick(now);
        self.map.tick(now);

        let (projection, viewport) = self.active_projection();
        let mut primitives = Vec::new();

        if let Some(set) = self.basemap {
            primitives.extend(render_basemap(set, &projection, viewport));
        }
        primitives.extend(render_graticule(&projection, viewport));

        if let Some(req) = &self.request {
            primitives.extend(render_route(
                &req.path,
                &projection,
                viewport,
                req.reveal.path_fraction(now),
            ));
            primitives.extend(render_markers(
                req.start,
                req.end,
                &projection,
                viewport,
                req.reveal.marker_opacity(now),
            ));
        }

        Frame {
            primitives,
            distances: self.request.as_ref().map(|r| r.distances),
        }
    }
}
