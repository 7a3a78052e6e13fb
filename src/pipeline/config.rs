use crate::error::SummarizeError;
use crate::extract::DEFAULT_MAX_KEY_POINTS;

/// Default number of summary sentences
pub const DEFAULT_SENTENCE_COUNT: usize = 5;
/// Largest summary length a caller may request
pub const MAX_SENTENCE_COUNT: usize = 20;

/// Configuration for the summarization pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummarizerConfig {
    /// Summary length used when the caller does not ask for one
    pub default_sentence_count: usize,
    /// Maximum number of key points, never above `DEFAULT_MAX_KEY_POINTS`
    pub max_key_points: usize,
    /// Transcripts with more sentences than this use map-reduce
    pub long_transcript_threshold: usize,
    /// Sentences per map-reduce segment
    pub segment_size: usize,
    /// Summary length of each segment in the map step
    pub segment_sentence_count: usize,
    /// Run the map step on the rayon thread pool
    pub parallel_segments: bool,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            default_sentence_count: DEFAULT_SENTENCE_COUNT,
            max_key_points: DEFAULT_MAX_KEY_POINTS,
            long_transcript_threshold: 50,
            segment_size: 20,
            segment_sentence_count: 3,
            parallel_segments: true,
        }
    }
}

impl SummarizerConfig {
    /// Create config from environment variables, falling back to defaults
    ///
    /// Reads `SUMMARY_SENTENCE_COUNT`, `SUMMARY_MAX_KEY_POINTS` and
    /// `SUMMARY_PARALLEL`.
    pub fn from_env() -> Result<Self, SummarizeError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create config from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SummarizeError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup("SUMMARY_SENTENCE_COUNT") {
            config.default_sentence_count =
                parse_count("SUMMARY_SENTENCE_COUNT", &value, MAX_SENTENCE_COUNT)?;
        }
        if let Some(value) = lookup("SUMMARY_MAX_KEY_POINTS") {
            config.max_key_points =
                parse_count("SUMMARY_MAX_KEY_POINTS", &value, DEFAULT_MAX_KEY_POINTS)?;
        }
        if let Some(value) = lookup("SUMMARY_PARALLEL") {
            config.parallel_segments = parse_flag("SUMMARY_PARALLEL", &value)?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Reject zero sizes and counts, and counts above their caps
    pub fn validate(&self) -> Result<(), SummarizeError> {
        if self.default_sentence_count > MAX_SENTENCE_COUNT {
            return Err(SummarizeError::invalid_config(
                "default_sentence_count",
                self.default_sentence_count,
                "must be at most 20",
            ));
        }
        if self.max_key_points > DEFAULT_MAX_KEY_POINTS {
            return Err(SummarizeError::invalid_config(
                "max_key_points",
                self.max_key_points,
                "must be at most 7",
            ));
        }

        let checks = [
            ("default_sentence_count", self.default_sentence_count),
            ("max_key_points", self.max_key_points),
            ("segment_size", self.segment_size),
            ("segment_sentence_count", self.segment_sentence_count),
        ];
        for (key, value) in checks {
            if value == 0 {
                return Err(SummarizeError::invalid_config(key, value, "must be at least 1"));
            }
        }
        Ok(())
    }
}

fn parse_count(key: &str, value: &str, max: usize) -> Result<usize, SummarizeError> {
    let count: usize = value
        .trim()
        .parse()
        .map_err(|_| SummarizeError::invalid_config(key, value, "expected a positive integer"))?;
    if count == 0 || count > max {
        return Err(SummarizeError::invalid_config(
            key,
            value,
            &format!("must be between 1 and {max}"),
        ));
    }
    Ok(count)
}

fn parse_flag(key: &str, value: &str) -> Result<bool, SummarizeError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(SummarizeError::invalid_config(key, value, "expected true or false")),
    }
}
