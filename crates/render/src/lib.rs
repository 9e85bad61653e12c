pub mod graticule;
pub mod land;
pub mod path;
pub mod primitive;
pub mod reveal;

pub use graticule::*;
pub use land::*;
pub use path::*;
pub use primitive::*;
pub use reveal::*;
