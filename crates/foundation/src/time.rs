/// Engine time in seconds.
///
/// There is no wall clock anywhere in the workspace: the host supplies
/// `Time` on every tick, so animation is pure and replayable with virtual
/// time.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct Time(pub f64);

impl Time {
    pub fn seconds(self) -> f64 {
        self.0
    }

    /// Seconds elapsed since `earlier`, never negative.
    pub fn since(self, earlier: Time) -> f64 {
        (self.0 - earlier.0).max(0.0)
    }
}
