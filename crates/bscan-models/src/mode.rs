//! Detection mode definitions.
//!
//! A mode is the content category currently selected for analysis:
//!
//! - `Text`: pasted or typed text
//! - `Image`: uploaded image files
//! - `Video`: uploaded video files (audio files ride along in this mode)

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Content category selected for analysis.
///
/// Selecting a mode resets all input buffers in the session; the mode
/// also decides which file validation rules apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "lowercase")]
pub enum DetectionMode {
    /// Plain text analysis.
    #[default]
    Text,

    /// Image file analysis.
    Image,

    /// Video file analysis. Audio files are accepted under this mode
    /// with their own size ceiling.
    Video,
}

impl DetectionMode {
    /// All available detection modes.
    pub const ALL: &'static [DetectionMode] = &[
        DetectionMode::Text,
        DetectionMode::Image,
        DetectionMode::Video,
    ];

    /// Returns the mode name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            DetectionMode::Text => "text",
            DetectionMode::Image => "image",
            DetectionMode::Video => "video",
        }
    }

    /// Feature-card title for this mode.
    pub fn title(&self) -> &'static str {
        match self {
            DetectionMode::Text => "Text Analysis",
            DetectionMode::Image => "Image Detection",
            DetectionMode::Video => "Video Verification",
        }
    }

    /// Returns a human-readable description.
    pub fn description(&self) -> &'static str {
        match self {
            DetectionMode::Text => {
                "Advanced detection of AI-generated text content, articles, and documents with high accuracy"
            }
            DetectionMode::Image => {
                "Identify AI-generated and manipulated images using state-of-the-art visual analysis"
            }
            DetectionMode::Video => {
                "Detect synthetic videos, deepfakes, and AI-modified video content in real-time"
            }
        }
    }

    /// File extensions offered by the picker for this mode.
    ///
    /// Presentation-level filter only, not a security boundary.
    pub fn accepted_extensions(&self) -> &'static [&'static str] {
        match self {
            DetectionMode::Text => &[".txt"],
            DetectionMode::Image => &[".jpg", ".jpeg", ".png"],
            DetectionMode::Video => &[".mp4", ".mp3", ".wav"],
        }
    }

    /// Supported-formats hint shown under the input area.
    pub fn supported_formats_hint(&self) -> &'static str {
        match self {
            DetectionMode::Text => "Supported formats: Plain text or text files (.txt)",
            DetectionMode::Image => "Supported formats: Images (.jpg, .png)",
            DetectionMode::Video => "Supported formats: Video (.mp4) and Audio (.mp3, .wav)",
        }
    }

    /// Returns true if this mode takes file input.
    ///
    /// Text mode accepts no files; drag-and-drop is disabled there.
    pub fn accepts_files(&self) -> bool {
        !matches!(self, DetectionMode::Text)
    }
}

impl fmt::Display for DetectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DetectionMode {
    type Err = ModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(DetectionMode::Text),
            "image" => Ok(DetectionMode::Image),
            "video" => Ok(DetectionMode::Video),
            _ => Err(ModeParseError(s.to_string())),
        }
    }
}

#[derive(Debug, Error)]
#[error("Unknown detection mode: {0}")]
pub struct ModeParseError(String);
