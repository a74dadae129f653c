//! Shared data models for the BuddyScan detection core.
//!
//! This crate provides Serde-serializable types for:
//! - Detection modes (text, image, video)
//! - Submitted file metadata and per-mode upload limits
//! - Submission payloads (single-slot text/files union)
//! - Verdicts and analysis reports

pub mod file;
pub mod limits;
pub mod mode;
pub mod submission;
pub mod verdict;

// Re-export common types
pub use file::{format_bytes, FileMeta};
pub use limits::{limit_for, AUDIO_LIMIT_BYTES, IMAGE_LIMIT_BYTES, VIDEO_LIMIT_BYTES};
pub use mode::{DetectionMode, ModeParseError};
pub use submission::Submission;
pub use verdict::{
    file_summary, AnalysisReport, FileVerdict, ReportId, ReportOutcome, TextReport, Verdict,
};
