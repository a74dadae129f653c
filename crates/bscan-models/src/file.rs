//! Submitted file metadata.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::mode::DetectionMode;

/// Metadata for a file handed over by the host environment's picker or
/// drag-and-drop surface.
///
/// The core never reads file contents; name, byte size, and declared
/// MIME type are all it sees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FileMeta {
    /// File name as reported by the host.
    pub name: String,

    /// File size in bytes.
    pub size_bytes: u64,

    /// Declared MIME type (e.g. "image/png", "audio/mpeg"). May be empty
    /// when the host does not know.
    #[serde(default)]
    pub content_type: String,
}

impl FileMeta {
    /// Create new file metadata.
    pub fn new(name: impl Into<String>, size_bytes: u64, content_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size_bytes,
            content_type: content_type.into(),
        }
    }

    /// Returns true if the declared MIME type is an audio type.
    pub fn is_audio(&self) -> bool {
        self.content_type.starts_with("audio/")
    }

    /// Returns true if the declared MIME type is an image type.
    pub fn is_image(&self) -> bool {
        self.content_type.starts_with("image/")
    }

    /// Size shown next to the file name, e.g. "2.5 MB".
    pub fn size_display(&self) -> String {
        format!("{:.1} MB", self.size_bytes as f64 / (1024.0 * 1024.0))
    }

    /// Returns true if the file name carries one of the extensions the
    /// picker offers for `mode`. Presentation-level filter only.
    pub fn matches_extension(&self, mode: DetectionMode) -> bool {
        let lower = self.name.to_lowercase();
        mode.accepted_extensions()
            .iter()
            .any(|ext| lower.ends_with(ext))
    }
}

/// Format bytes as human-readable string (KB, MB, GB).
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
