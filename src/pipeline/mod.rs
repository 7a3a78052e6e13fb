pub mod config;
pub mod orchestrator;

pub use config::*;
pub use orchestrator::*;
