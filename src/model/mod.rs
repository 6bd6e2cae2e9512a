pub mod config;
pub mod progress;
pub mod project;

pub use config::*;
pub use progress::*;
pub use project::*;
