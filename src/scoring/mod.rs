//! Sentence importance scoring and top-N selection

pub mod selector;
pub mod term_frequency;

pub use selector::*;
pub use term_frequency::*;
