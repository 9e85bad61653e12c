pub mod autofit;
pub mod globe;
pub mod map;
pub mod tween;

pub use autofit::*;
pub use globe::*;
pub use map::*;
pub use tween::*;

/// Seconds for the auto-fit transition after a new path is set.
pub const FIT_DURATION_S: f64 = 1.25;
/// Seconds for the return-to-default transition when the path is cleared.
pub const RESET_DURATION_S: f64 = 0.75;
/// Wheel delta to zoom-factor exponent, shared by both modes.
pub const WHEEL_ZOOM_RATE: f64 = 0.002;
