//! Verdict and analysis report models.
//!
//! Reports are display values: no persistence, no identity beyond the
//! current render. Confidence percentages are placeholder values drawn
//! by the mock detector, not computed probabilities.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::mode::DetectionMode;

/// Unique identifier for one render of a report.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct ReportId(pub String);

impl ReportId {
    /// Generate a new random report ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Get the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ReportId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ReportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Categorical label attached to a piece of analyzed content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// Content judged to be AI-generated.
    AiGenerated,
    /// Content judged to be human-created.
    LikelyHuman,
}

impl Verdict {
    /// Display label for this verdict.
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::AiGenerated => "AI-Generated",
            Verdict::LikelyHuman => "Likely Human-Created",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Maximum excerpt length shown on the result page.
const EXCERPT_MAX_CHARS: usize = 300;

/// Verdict for a text submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TextReport {
    /// Headline verdict, e.g. "AI-Generated Content Detected".
    pub verdict_label: String,

    /// Displayed confidence percentage.
    pub confidence_percent: u8,

    /// Explanation shown under the verdict.
    pub explanation: String,

    /// Excerpt of the analyzed text, truncated for display.
    pub excerpt: String,
}

impl TextReport {
    /// Create a report for `text`, truncating the excerpt for display.
    pub fn new(
        verdict_label: impl Into<String>,
        confidence_percent: u8,
        explanation: impl Into<String>,
        text: &str,
    ) -> Self {
        Self {
            verdict_label: verdict_label.into(),
            confidence_percent,
            explanation: explanation.into(),
            excerpt: truncate_excerpt(text),
        }
    }
}

fn truncate_excerpt(text: &str) -> String {
    if text.chars().count() > EXCERPT_MAX_CHARS {
        let cut: String = text.chars().take(EXCERPT_MAX_CHARS).collect();
        format!("{}...", cut)
    } else {
        text.to_string()
    }
}

/// Verdict for a single submitted file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FileVerdict {
    /// Name of the analyzed file.
    pub file_name: String,

    /// Verdict label for this file.
    pub verdict: Verdict,

    /// Displayed confidence percentage.
    pub confidence_percent: u8,
}

/// Result body, depending on what was submitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ReportOutcome {
    /// Single verdict for a text submission.
    Text(TextReport),
    /// One verdict per file plus a summary count line.
    Files {
        verdicts: Vec<FileVerdict>,
        summary: String,
    },
}

/// A complete analysis report for one submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AnalysisReport {
    /// Identifier for this render of the report.
    pub report_id: ReportId,

    /// Mode the content was analyzed under.
    pub mode: DetectionMode,

    /// When the report was generated.
    pub generated_at: DateTime<Utc>,

    /// Report body.
    pub outcome: ReportOutcome,
}

impl AnalysisReport {
    /// Wrap an outcome with a fresh id and timestamp.
    pub fn new(mode: DetectionMode, outcome: ReportOutcome) -> Self {
        Self {
            report_id: ReportId::new(),
            mode,
            generated_at: Utc::now(),
            outcome,
        }
    }

    /// Number of verdicts carried (1 for text).
    pub fn verdict_count(&self) -> usize {
        match &self.outcome {
            ReportOutcome::Text(_) => 1,
            ReportOutcome::Files { verdicts, .. } => verdicts.len(),
        }
    }
}

/// Summary line for a file report, e.g. "Analyzed 3 images".
pub fn file_summary(count: usize, mode: DetectionMode) -> String {
    let plural = if count > 1 { "s" } else { "" };
    format!("Analyzed {} {}{}", count, mode.as_str(), plural)
}
