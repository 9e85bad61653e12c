use foundation::math::{Coordinates, Vec2};
use foundation::time::Time;
use projection::{MercatorView, Transform2D, Viewport};

use crate::autofit::{MERCATOR_MAX_ZOOM, MERCATOR_MIN_ZOOM, mercator_fit_target};
use crate::tween::Tween;
use crate::{FIT_DURATION_S, RESET_DURATION_S, WHEEL_ZOOM_RATE};

/// Interactive state machine for the Mercator map: idle ⇄ panning, with
/// cursor-centered wheel zoom and tweened auto-fit transitions.
#[derive(Debug, Clone)]
pub struct MapController {
    view: MercatorView,
    viewport: Viewport,
    panning: bool,
    last_pos: Vec2,
    tween: Option<Tween<Transform2D>>,
}

impl MapController {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            view: MercatorView::default(),
            viewport,
            panning: false,
            last_pos: Vec2::new(0.0, 0.0),
            tween: None,
        }
    }

    pub fn view(&self) -> MercatorView {
        self.view
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn is_panning(&self) -> bool {
        self.panning
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn zoom_fraction(&self) -> f64 {
        self.view.transform.k
    }

    pub fn pointer_down(&mut self, pos: Vec2) {
        self.tween = None;
        self.panning = true;
        self.last_pos = pos;
    }

    /// Returns whether the view changed.
    pub fn pointer_move(&mut self, pos: Vec2) -> bool {
        if !self.panning {
            return false;
        }
        let delta = pos - self.last_pos;
        self.view.transform.tx += delta.x;
        self.view.transform.ty += delta.y;
        self.last_pos = pos;
        delta.x != 0.0 || delta.y != 0.0
    }

    pub fn pointer_up(&mut self) {
        self.panning = false;
    }

    /// Wheel zoom recentered on the cursor; positive delta zooms out.
    pub fn wheel(&mut self, delta: f64, cursor: Vec2) {
        self.tween = None;
        let factor = (-delta * WHEEL_ZOOM_RATE).exp();
        let k = (self.view.transform.k * factor).clamp(MERCATOR_MIN_ZOOM, MERCATOR_MAX_ZOOM);
        self.view.transform = self.view.transform.rescaled_about(cursor, k);
    }

    /// Animate to frame both endpoints, replacing any tween in flight.
    pub fn fit_to_path(&mut self, p1: Coordinates, p2: Coordinates, now: Time) {
        let target = mercator_fit_target(p1, p2, self.viewport);
        self.tween = Some(Tween::new(self.view.transform, target, now, FIT_DURATION_S));
    }

    /// Animate back to the identity transform.
    pub fn reset(&mut self, now: Time) {
        let target = Transform2D::identity();
        self.tween = Some(Tween::new(self.view.transform, target, now, RESET_DURATION_S));
    }

    /// Destination of the transition in flight, if any.
    pub fn tween_target(&self) -> Option<Transform2D> {
        self.tween.map(|t| t.target())
    }

    /// Advance the active tween. Returns whether the view changed.
    pub fn tick(&mut self, now: Time) -> bool {
        let Some(tween) = self.tween else {
            return false;
        };
        let (transform, done) = tween.sample(now);
        self.view.transform = transform;
        if done {
            self.tween = None;
        }
        true
    }
}
