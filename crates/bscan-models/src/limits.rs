//! Per-category upload size ceilings.
//!
//! Fixed policy: the thresholds are not configurable.

use crate::file::FileMeta;
use crate::mode::DetectionMode;

/// Size ceilings in bytes for each upload category (binary mega-bytes).
pub const IMAGE_LIMIT_BYTES: u64 = 10 * 1024 * 1024; // 10 MB
pub const AUDIO_LIMIT_BYTES: u64 = 50 * 1024 * 1024; // 50 MB for audio files within video mode
pub const VIDEO_LIMIT_BYTES: u64 = 100 * 1024 * 1024; // 100 MB

/// Returns the byte ceiling that applies to `file` under `mode`.
///
/// Text mode takes no files, so no ceiling applies there. In video mode
/// the ceiling depends on whether the file declares an audio MIME type.
pub fn limit_for(mode: DetectionMode, file: &FileMeta) -> Option<u64> {
    match mode {
        DetectionMode::Text => None,
        DetectionMode::Image => Some(IMAGE_LIMIT_BYTES),
        DetectionMode::Video => {
            if file.is_audio() {
                Some(AUDIO_LIMIT_BYTES)
            } else {
                Some(VIDEO_LIMIT_BYTES)
            }
        }
    }
}
