use foundation::math::{Coordinates, Vec2};
use foundation::time::Time;
use projection::{OrthographicView, Viewport};

use crate::autofit::{ORTHO_MAX_ZOOM, ORTHO_MIN_ZOOM, orthographic_fit_target};
use crate::tween::Tween;
use crate::{FIT_DURATION_S, RESET_DURATION_S, WHEEL_ZOOM_RATE};

/// Drag-to-rotation sensitivity; divided by the current scale so rotation
/// speed stays constant in sphere-surface terms while zoomed.
const DRAG_SENSITIVITY: f64 = 0.25;
const DRAG_GAIN: f64 = 100.0;

/// Interactive state machine for the orthographic globe: idle ⇄ dragging,
/// with wheel zoom and tweened auto-fit transitions layered on top.
///
/// All time comes in through method arguments; the controller never reads
/// a clock.
#[derive(Debug, Clone)]
pub struct GlobeController {
    view: OrthographicView,
    viewport: Viewport,
    dragging: bool,
    last_pos: Vec2,
    tween: Option<Tween<OrthographicView>>,
}

impl GlobeController {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            view: OrthographicView::default_for(viewport),
            viewport,
            dragging: false,
            last_pos: Vec2::new(0.0, 0.0),
            tween: None,
        }
    }

    pub fn view(&self) -> OrthographicView {
        self.view
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Resize the canvas. The scale clamp is re-derived from the new
    /// baseline rather than trusting state from the old viewport.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.view.scale = self.clamp_scale(self.view.scale);
    }

    fn clamp_scale(&self, scale: f64) -> f64 {
        let baseline = self.viewport.orthographic_scale();
        scale.clamp(baseline * ORTHO_MIN_ZOOM, baseline * ORTHO_MAX_ZOOM)
    }

    /// Zoom relative to the baseline, in `[ORTHO_MIN_ZOOM, ORTHO_MAX_ZOOM]`.
    pub fn zoom_fraction(&self) -> f64 {
        self.view.scale / self.viewport.orthographic_scale()
    }

    pub fn pointer_down(&mut self, pos: Vec2) {
        // User interaction overrides any running transition.
        self.tween = None;
        self.dragging = true;
        self.last_pos = pos;
    }

    /// Returns whether the view changed (drives a re-render).
    pub fn pointer_move(&mut self, pos: Vec2) -> bool {
        if !self.dragging {
            return false;
        }
        let delta = pos - self.last_pos;
        let s = DRAG_SENSITIVITY / self.view.scale;
        self.view.rotation[0] += delta.x * s * DRAG_GAIN;
        self.view.rotation[1] -= delta.y * s * DRAG_GAIN;
        self.last_pos = pos;
        delta.x != 0.0 || delta.y != 0.0
    }

    pub fn pointer_up(&mut self) {
        self.dragging = false;
    }

    /// Wheel zoom; positive delta zooms out, matching browser wheel signs.
    pub fn wheel(&mut self, delta: f64) {
        self.tween = None;
        let factor = (-delta * WHEEL_ZOOM_RATE).exp();
        self.view.scale = self.clamp_scale(self.view.scale * factor);
    }

    /// Animate to frame both endpoints, replacing any tween in flight.
    pub fn fit_to_path(&mut self, p1: Coordinates, p2: Coordinates, now: Time) {
        let target = orthographic_fit_target(p1, p2, self.view);
        self.tween = Some(Tween::new(self.view, target, now, FIT_DURATION_S));
    }

    /// Animate back to the identity view.
    pub fn reset(&mut self, now: Time) {
        let target = OrthographicView::default_for(self.viewport);
        self.tween = Some(Tween::new(self.view, target, now, RESET_DURATION_S));
    }

    /// Destination of the transition in flight, if any.
    pub fn tween_target(&self) -> Option<OrthographicView> {
        self.tween.map(|t| t.target())
    }

    /// Advance the active tween. Returns whether the view changed.
    pub fn tick(&mut self, now: Time) -> bool {
        let Some(tween) = self.tween else {
            return false;
        };
        let (view, done) = tween.sample(now);
        self.view = view;
        if done {
            self.tween = None;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::GlobeController;
    use foundation::math::{Coordinates, Vec2};
    use foundation::time::Time;
    use projection::Viewport;

    fn coord(lat: f64, lon: f64) -> Coordinates {
        Coordinates::new(lat, lon).unwrap()
    }

    fn controller() -> GlobeController {
        GlobeController::new(Viewport::new(800.0, 600.0))
    }

    #[test]
    fn drag_rotates_with_expected_signs() {
        let mut c = controller();
        c.pointer_down(Vec2::new(100.0, 100.0));
        assert!(c.pointer_move(Vec2::new(110.0, 90.0)));
        let rot = c.view().rotation;
        // Dragging east increases lambda; dragging up increases phi.
        assert!(rot[0] > 0.0);
        assert!(rot[1] > 0.0);
        c.pointer_up();
        assert!(!c.pointer_move(Vec2::new(200.0, 200.0)));
    }

    #[test]
    fn wheel_zoom_never_leaves_clamp_range() {
        let mut c = controller();
        let baseline = c.viewport().orthographic_scale();
        for _ in 0..500 {
            c.wheel(-120.0);
        }
        assert!((c.view().scale - baseline * 10.0).abs() < 1e-9);
        for _ in 0..500 {
            c.wheel(120.0);
        }
        assert!((c.view().scale - baseline * 0.8).abs() < 1e-9);
    }

    #[test]
    fn fit_tween_settles_on_target_rotation() {
        let mut c = controller();
        let a = coord(0.0, 0.0);
        let b = coord(0.0, 90.0);
        c.fit_to_path(a, b, Time(0.0));
        assert!(c.tick(Time(0.6)));
        // Mid-flight: rotation moving but not settled.
        let mid = c.view().rotation[0];
        assert!(mid < 0.0 && mid > -45.0);
        c.tick(Time(1.25));
        assert!((c.view().rotation[0] + 45.0).abs() < 1e-9);
        // Tween finished; further ticks are no-ops.
        assert!(!c.tick(Time(2.0)));
    }

    #[test]
    fn fit_exposes_its_target_until_settled() {
        use crate::autofit::orthographic_fit_target;

        let mut c = controller();
        let a = coord(0.0, 0.0);
        let b = coord(0.0, 90.0);
        assert!(c.tween_target().is_none());
        c.fit_to_path(a, b, Time(0.0));
        let target = c.tween_target().unwrap();
        assert_eq!(target, orthographic_fit_target(a, b, c.view()));
        c.tick(Time(2.0));
        assert!(c.tween_target().is_none());
    }

    #[test]
    fn new_fit_replaces_the_old_tween() {
        let mut c = controller();
        c.fit_to_path(coord(0.0, 0.0), coord(0.0, 90.0), Time(0.0));
        c.fit_to_path(coord(0.0, 0.0), coord(0.0, -90.0), Time(0.5));
        c.tick(Time(2.0));
        assert!((c.view().rotation[0] - 45.0).abs() < 1e-9);
    }

    #[test]
    fn pointer_down_cancels_transition() {
        let mut c = controller();
        c.fit_to_path(coord(10.0, 10.0), coord(20.0, 20.0), Time(0.0));
        c.pointer_down(Vec2::new(0.0, 0.0));
        assert!(!c.tick(Time(1.0)));
    }

    #[test]
    fn reset_returns_to_identity() {
        let mut c = controller();
        c.pointer_down(Vec2::new(0.0, 0.0));
        c.pointer_move(Vec2::new(50.0, 30.0));
        c.pointer_up();
        c.reset(Time(0.0));
        c.tick(Time(0.75));
        assert_eq!(c.view().rotation, [0.0, 0.0, 0.0]);
    }
}
