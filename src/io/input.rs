use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

/// A transcript as handed over by the transcription step
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TranscriptDocument {
    /// Full transcript text
    pub text: String,
    /// Detected language, when the transcriber reported one
    #[serde(default)]
    pub language: Option<String>,
}

impl TranscriptDocument {
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            language: None,
        }
    }
}

/// Read a transcript from a file
pub fn read_transcript_file(path: &Path) -> Result<TranscriptDocument> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {:?}", path))?;
    parse_transcript(&content).with_context(|| format!("Failed to parse transcript: {:?}", path))
}

/// Read a transcript from standard input
pub fn read_transcript_stdin() -> Result<TranscriptDocument> {
    let mut content = String::new();
    std::io::stdin()
        .read_to_string(&mut content)
        .context("Failed to read transcript from stdin")?;
    parse_transcript(&content)
}

/// Parse transcript content
///
/// Content that starts with `{` is read as a JSON transcription document
/// with a `text` field; anything else is taken as plain transcript text.
pub fn parse_transcript(content: &str) -> Result<TranscriptDocument> {
    if content.trim_start().starts_with('{') {
        debug!("Parsing transcript as JSON document");
        let document: TranscriptDocument =
            serde_json::from_str(content).context("Failed to parse transcript JSON")?;
        return Ok(document);
    }
    Ok(TranscriptDocument::from_text(content))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_parse_plain_text() {
        let doc = parse_transcript("We met today. Budget was approved.").unwrap();
        assert_eq!(doc.text, "We met today. Budget was approved.");
        assert_eq!(doc.language, None);
    }

    #[test]
    fn test_parse_json_document() {
        let json = r#"{"text": "We need to ship the beta next week.", "language": "en", "duration": 12.5}"#;
        let doc = parse_transcript(json).unwrap();
        assert_eq!(doc.text, "We need to ship the beta next week.");
        assert_eq!(doc.language.as_deref(), Some("en"));
    }

    #[test]
    fn test_parse_json_without_text_fails() {
        assert!(parse_transcript(r#"{"language": "en"}"#).is_err());
    }

    #[test]
    fn test_read_transcript_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "  {{\"text\": \"Hello from the standup meeting.\"}}").unwrap();

        let doc = read_transcript_file(file.path()).unwrap();
        assert_eq!(doc.text, "Hello from the standup meeting.");
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_transcript_file(&dir.path().join("missing.txt")).unwrap_err();
        assert!(err.to_string().contains("Failed to read file"));
    }
}
