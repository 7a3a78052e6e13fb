use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::TranscriptDocument;
use crate::models::{derive_title, Strategy, SummaryResult, TranscriptStats};
use crate::pipeline::SummaryOutcome;

/// Machine-readable summary report
#[derive(Debug, Clone, Serialize)]
pub struct SummaryReport {
    /// Unique identifier for this report
    pub id: Uuid,
    /// Title derived from the opening words of the transcript
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub language: Option<String>,
    pub stats: TranscriptStats,
    pub strategy: Strategy,
    #[serde(flatten)]
    pub result: SummaryResult,
}

impl SummaryReport {
    pub fn new(document: &TranscriptDocument, outcome: SummaryOutcome, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: derive_title(&document.text, now),
            created_at: now,
            language: document.language.clone(),
            stats: TranscriptStats::with_sentence_count(&document.text, outcome.sentence_count),
            strategy: outcome.strategy,
            result: outcome.result,
        }
    }

    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize report")
    }

    /// Write to a JSON file
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create file: {:?}", path))?;
        serde_json::to_writer_pretty(file, self).context("Failed to write JSON")?;
        Ok(())
    }
}

/// Human-readable summary report
pub struct HumanSummary<'a> {
    report: &'a SummaryReport,
}

impl<'a> HumanSummary<'a> {
    pub fn new(report: &'a SummaryReport) -> Self {
        Self { report }
    }

    /// Format the report as plain text with wrapped paragraphs
    pub fn format(&self) -> String {
        let report = self.report;
        let mut output = String::new();

        output.push_str(&report.title);
        output.push('\n');
        output.push_str(&"=".repeat(report.title.chars().count()));
        output.push_str("\n\n");
        output.push_str(&format!(
            "{} words, {} sentences ({})\n\n",
            report.stats.word_count,
            report.stats.sentence_count,
            match report.strategy {
                Strategy::Direct => "direct",
                Strategy::MapReduce => "map-reduce",
            }
        ));

        output.push_str("Summary\n-------\n");
        if report.result.summary.is_empty() {
            output.push_str("(none)");
        } else {
            output.push_str(&wrap_text(&report.result.summary, 80));
        }
        output.push_str("\n\n");

        output.push_str("Key Points\n----------\n");
        push_list(&mut output, &report.result.key_points, "- ");
        output.push('\n');

        output.push_str("Action Items\n------------\n");
        push_list(&mut output, &report.result.action_items, "[ ] ");

        output
    }

    /// Write to a text file
    pub fn write_file(&self, path: &Path) -> Result<()> {
        let mut file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create file: {:?}", path))?;
        write!(file, "{}", self.format())?;
        Ok(())
    }
}

fn push_list(output: &mut String, items: &[String], marker: &str) {
    if items.is_empty() {
        output.push_str("(none)\n");
        return;
    }
    let indent = " ".repeat(marker.len());
    for item in items {
        let wrapped = wrap_text(item, 80 - marker.len());
        for (i, line) in wrapped.lines().enumerate() {
            output.push_str(if i == 0 { marker } else { indent.as_str() });
            output.push_str(line);
            output.push('\n');
        }
    }
}

/// Wrap text at approximately the given width
fn wrap_text(text: &str, width: usize) -> String {
    let mut result = String::new();
    let mut line_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if line_len + word_len + 1 > width && line_len > 0 {
            result.push('\n');
            line_len = 0;
        }
        if line_len > 0 {
            result.push(' ');
            line_len += 1;
        }
        result.push_str(word);
        line_len += word_len;
    }

    result
}
