//! Upload validation rules.
//!
//! Pure functions over file metadata; no side effects. Validation
//! short-circuits on the first offending file in input order, so a batch
//! reports at most one rejection.

use bscan_models::{limits, DetectionMode, FileMeta};

use crate::error::{EngineResult, RejectReason};

/// Check a candidate batch against the size ceilings for `mode`.
///
/// Text mode takes no files and accepts any batch vacuously. In video
/// mode, files declaring an `audio/` MIME type get the audio ceiling and
/// everything else the video ceiling.
pub fn validate_files(files: &[FileMeta], mode: DetectionMode) -> EngineResult<()> {
    for file in files {
        check_file(file, mode)?;
    }
    Ok(())
}

fn check_file(file: &FileMeta, mode: DetectionMode) -> EngineResult<()> {
    match mode {
        DetectionMode::Text => Ok(()),
        DetectionMode::Image => {
            if file.size_bytes > limits::IMAGE_LIMIT_BYTES {
                Err(RejectReason::image_too_large(&file.name))
            } else {
                Ok(())
            }
        }
        DetectionMode::Video => {
            if file.is_audio() {
                if file.size_bytes > limits::AUDIO_LIMIT_BYTES {
                    Err(RejectReason::audio_too_large(&file.name))
                } else {
                    Ok(())
                }
            } else if file.size_bytes > limits::VIDEO_LIMIT_BYTES {
                Err(RejectReason::video_too_large(&file.name))
            } else {
                Ok(())
            }
        }
    }
}
