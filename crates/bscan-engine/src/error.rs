//! Error types for the detection engine.

use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, RejectReason>;

/// The single error kind in this core: a file rejected by validation.
///
/// Always recoverable and display-only; the session keeps the last
/// rejection around until the next valid input action clears it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RejectReason {
    #[error("Image {name} exceeds the 10 MB limit")]
    ImageTooLarge { name: String },

    #[error("Audio {name} exceeds the 50 MB limit")]
    AudioTooLarge { name: String },

    #[error("Video {name} exceeds the 100 MB limit")]
    VideoTooLarge { name: String },
}

impl RejectReason {
    /// Create an image rejection.
    pub fn image_too_large(name: impl Into<String>) -> Self {
        Self::ImageTooLarge { name: name.into() }
    }

    /// Create an audio rejection.
    pub fn audio_too_large(name: impl Into<String>) -> Self {
        Self::AudioTooLarge { name: name.into() }
    }

    /// Create a video rejection.
    pub fn video_too_large(name: impl Into<String>) -> Self {
        Self::VideoTooLarge { name: name.into() }
    }

    /// Name of the offending file.
    pub fn file_name(&self) -> &str {
        match self {
            Self::ImageTooLarge { name }
            | Self::AudioTooLarge { name }
            | Self::VideoTooLarge { name } => name,
        }
    }
}
