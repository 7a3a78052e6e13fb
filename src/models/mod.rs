pub mod sentence;
pub mod summary;

pub use sentence::*;
pub use summary::*;
