use thiserror::Error;

/// Errors reported by the summarization engine
///
/// Degenerate input (empty or whitespace-only text) is not an error; it
/// produces an empty `SummaryResult`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SummarizeError {
    /// The caller asked for a summary of zero sentences
    #[error("target sentence count must be at least 1, got {0}")]
    InvalidSentenceCount(usize),

    /// A configuration value could not be used
    #[error("invalid configuration value {value:?} for {key}: {reason}")]
    InvalidConfig {
        key: String,
        value: String,
        reason: String,
    },
}

impl SummarizeError {
    pub(crate) fn invalid_config(key: &str, value: impl ToString, reason: &str) -> Self {
        Self::InvalidConfig {
            key: key.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}
