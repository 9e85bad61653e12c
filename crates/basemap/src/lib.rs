pub mod format;
pub mod store;

pub use format::*;
pub use store::*;
