use foundation::math::Coordinates;

/// Geocoding boundary: an opaque lookup from a place name to coordinates.
///
/// The core never retries a failed lookup; the caller decides. A failed
/// resolve aborts the visualize request and leaves all view state intact.
pub trait LocationResolver {
    fn resolve(&self, name: &str) -> Result<Coordinates, ResolveError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    NotFound(String),
    Upstream(String),
}

impl std::fmt::Display for ResolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResolveError::NotFound(name) => write!(f, "location not found: {name}"),
            ResolveError::Upstream(msg) => write!(f, "geocoding upstream error: {msg}"),
        }
    }
}

impl std::error::Error for ResolveError {}
