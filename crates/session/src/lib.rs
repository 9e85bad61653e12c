pub mod config;
pub mod resolve;
pub mod session;

pub use config::*;
pub use resolve::*;
pub use session::*;
