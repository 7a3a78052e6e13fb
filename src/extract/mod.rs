//! Key-point and action-item extraction

pub mod action_items;
pub mod key_points;

pub use action_items::*;
pub use key_points::*;

/// Extracted statements must be longer than this many characters
pub const MIN_STATEMENT_CHARS: usize = 15;

/// Drop one trailing period, if any
pub(crate) fn strip_trailing_period(text: &str) -> &str {
    text.strip_suffix('.').unwrap_or(text)
}
