use foundation::time::Time;

/// Seconds for the path draw-in animation.
pub const PATH_REVEAL_S: f64 = 1.5;
/// Marker fade starts this long after the path starts drawing.
pub const MARKER_DELAY_S: f64 = 1.0;
/// Seconds for the marker fade itself.
pub const MARKER_FADE_S: f64 = 0.5;

/// Presentation clock for the first draw of a path.
///
/// Pure function of elapsed time: the path strokes in over 1.5 s and the
/// endpoint markers fade in afterwards. Correctness of the geometry never
/// depends on this; it only shapes what fraction gets emitted per frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Reveal {
    started: Time,
}

impl Reveal {
    pub fn started_at(now: Time) -> Self {
        Self { started: now }
    }

    /// Fraction of the path length to draw, in [0, 1].
    pub fn path_fraction(&self, now: Time) -> f64 {
        (now.since(self.started) / PATH_REVEAL_S).clamp(0.0, 1.0)
    }

    /// Marker opacity in [0, 1]; zero until the delay has passed.
    pub fn marker_opacity(&self, now: Time) -> f64 {
        ((now.since(self.started) - MARKER_DELAY_S) / MARKER_FADE_S).clamp(0.0, 1.0)
    }

    pub fn finished(&self, now: Time) -> bool {
        self.path_fraction(now) >= 1.0 && self.marker_opacity(now) >= 1.0
    }
}
