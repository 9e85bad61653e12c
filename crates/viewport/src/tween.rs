use foundation::time::Time;
use projection::{OrthographicView, Transform2D};

/// Linear interpolation between two view states.
pub trait Lerp: Copy {
    fn lerp(self, other: Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(self, other: Self, t: f64) -> Self {
        self + (other - self) * t
    }
}

impl Lerp for Transform2D {
    fn lerp(self, other: Self, t: f64) -> Self {
        Transform2D::new(
            self.tx.lerp(other.tx, t),
            self.ty.lerp(other.ty, t),
            self.k.lerp(other.k, t),
        )
    }
}

impl Lerp for OrthographicView {
    fn lerp(self, other: Self, t: f64) -> Self {
        OrthographicView::new(
            [
                self.rotation[0].lerp(other.rotation[0], t),
                self.rotation[1].lerp(other.rotation[1], t),
                self.rotation[2].lerp(other.rotation[2], t),
            ],
            self.scale.lerp(other.scale, t),
        )
    }
}

/// Cubic ease-in-out on [0, 1].
pub fn ease_cubic_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// An animated transition between two view states.
///
/// A tween is a plain value advanced by `sample(now)`; there is no internal
/// clock. Installing a new tween in its place is the cancellation model —
/// at most one interpolation ever runs per view state.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Tween<S> {
    start: S,
    end: S,
    start_time: Time,
    duration_s: f64,
}

impl<S: Lerp> Tween<S> {
    pub fn new(start: S, end: S, start_time: Time, duration_s: f64) -> Self {
        Self {
            start,
            end,
            start_time,
            duration_s,
        }
    }

    pub fn target(&self) -> S {
        self.end
    }

    /// Interpolated state at `now` and whether the tween has finished.
    /// At or past the duration the result settles on the exact target.
    pub fn sample(&self, now: Time) -> (S, bool) {
        let elapsed = now.since(self.start_time);
        if self.duration_s <= 0.0 || elapsed >= self.duration_s {
            return (self.end, true);
        }
        let t = ease_cubic_in_out(elapsed / self.duration_s);
        (self.start.lerp(self.end, t), false)
    }
}
