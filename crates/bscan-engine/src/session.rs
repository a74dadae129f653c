//! Submission session state machine.
//!
//! Holds the state behind the input surface: selected mode, the single
//! input slot (text or files, never both), the drag-hover flag, and the
//! last validation rejection. All transitions are synchronous and run in
//! response to discrete user actions.

use tracing::{debug, warn};

use bscan_models::{DetectionMode, FileMeta, Submission};

use crate::error::RejectReason;
use crate::validate::validate_files;

/// The single input slot.
///
/// A tagged union instead of two nullable buffers, so text and files can
/// never be simultaneously populated.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum InputSlot {
    /// Nothing entered yet.
    #[default]
    Empty,
    /// Non-empty text buffer.
    Text(String),
    /// Non-empty file buffer, in insertion order.
    Files(Vec<FileMeta>),
}

impl InputSlot {
    /// Returns true if the slot holds no content.
    pub fn is_empty(&self) -> bool {
        matches!(self, InputSlot::Empty)
    }
}

/// In-memory state for one detection session.
#[derive(Debug, Default)]
pub struct DetectionSession {
    mode: DetectionMode,
    input: InputSlot,
    drag_active: bool,
    last_error: Option<RejectReason>,
}

impl DetectionSession {
    /// Create a session starting in text mode with empty buffers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session starting in the given mode.
    pub fn with_mode(mode: DetectionMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Currently selected mode.
    pub fn mode(&self) -> DetectionMode {
        self.mode
    }

    /// Current text buffer, empty when the slot holds files or nothing.
    pub fn text(&self) -> &str {
        match &self.input {
            InputSlot::Text(s) => s,
            _ => "",
        }
    }

    /// Current file buffer, empty when the slot holds text or nothing.
    pub fn files(&self) -> &[FileMeta] {
        match &self.input {
            InputSlot::Files(files) => files,
            _ => &[],
        }
    }

    /// Whether a drag is currently hovering the input surface.
    pub fn drag_active(&self) -> bool {
        self.drag_active
    }

    /// Last validation rejection, if any.
    pub fn last_error(&self) -> Option<&RejectReason> {
        self.last_error.as_ref()
    }

    /// Returns true if there is anything to submit or clear.
    ///
    /// Drives the submit and Clear-All buttons at the presentation
    /// boundary.
    pub fn has_content(&self) -> bool {
        !self.input.is_empty()
    }

    /// Select a detection mode.
    ///
    /// Resets all buffers, the error, and the drag flag — even when the
    /// new mode equals the current one.
    pub fn select_mode(&mut self, mode: DetectionMode) {
        debug!("Mode selected: {}", mode);
        self.mode = mode;
        self.input = InputSlot::Empty;
        self.last_error = None;
        self.drag_active = false;
    }

    /// Replace the text buffer.
    ///
    /// Non-empty text takes over the input slot, dropping any files and
    /// clearing the error. Empty text only empties a text slot; an
    /// existing file buffer is left alone.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text.is_empty() {
            if matches!(self.input, InputSlot::Text(_)) {
                self.input = InputSlot::Empty;
            }
            return;
        }
        self.input = InputSlot::Text(text);
        self.last_error = None;
    }

    /// Add candidate files from the picker or a drop.
    ///
    /// Single entry point for both paths. The candidate batch alone is
    /// validated; on rejection the existing buffer is untouched and the
    /// error is recorded. On success the candidates are appended, any
    /// text is dropped, and the error is cleared. No-op in text mode.
    pub fn ingest(&mut self, candidates: Vec<FileMeta>) {
        if !self.mode.accepts_files() {
            debug!("Ignoring {} file(s): {} mode takes no files", candidates.len(), self.mode);
            return;
        }

        if let Err(reason) = validate_files(&candidates, self.mode) {
            warn!("Upload rejected: {}", reason);
            self.last_error = Some(reason);
            return;
        }

        debug!("Accepted {} file(s)", candidates.len());
        let mut files = match std::mem::take(&mut self.input) {
            InputSlot::Files(existing) => existing,
            _ => Vec::new(),
        };
        files.extend(candidates);
        self.input = if files.is_empty() {
            InputSlot::Empty
        } else {
            InputSlot::Files(files)
        };
        self.last_error = None;
    }

    /// Remove the file at `index` from the buffer.
    ///
    /// Out-of-range indices are ignored. Removing the last file empties
    /// the slot and clears the error.
    pub fn remove_file(&mut self, index: usize) {
        let InputSlot::Files(files) = &mut self.input else {
            return;
        };
        if index >= files.len() {
            return;
        }
        let removed = files.remove(index);
        debug!("Removed file: {}", removed.name);
        if files.is_empty() {
            self.input = InputSlot::Empty;
            self.last_error = None;
        }
    }

    /// Clear all input and the error. The mode is untouched.
    pub fn clear_all(&mut self) {
        debug!("Cleared session input");
        self.input = InputSlot::Empty;
        self.last_error = None;
    }

    /// A drag entered the input surface.
    ///
    /// The flag is never set in text mode, where file interaction is
    /// disabled.
    pub fn drag_enter(&mut self) {
        if self.mode.accepts_files() {
            self.drag_active = true;
        }
    }

    /// A drag left the input surface.
    pub fn drag_leave(&mut self) {
        self.drag_active = false;
    }

    /// Files were dropped on the input surface.
    ///
    /// Equivalent to picking the same files; runs the same validation
    /// and append logic as [`ingest`](Self::ingest).
    pub fn drop_files(&mut self, candidates: Vec<FileMeta>) {
        self.drag_active = false;
        self.ingest(candidates);
    }

    /// Build the submission payload, if there is content.
    ///
    /// Returns `None` when both buffers are empty; callers disable the
    /// submit action in that case.
    pub fn submit(&self) -> Option<Submission> {
        match &self.input {
            InputSlot::Empty => None,
            InputSlot::Text(text) => Some(Submission::Text(text.clone())),
            InputSlot::Files(files) => Some(Submission::Files(files.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MB: u64 = 1024 * 1024;

    fn png(name: &str, size_mb: u64) -> FileMeta {
        FileMeta::new(name, size_mb * MB, "image/png")
    }

    #[test]
    fn test_new_session_is_empty_text_mode() {
        let session = DetectionSession::new();
        assert_eq!(session.mode(), DetectionMode::Text);
        assert_eq!(session.text(), "");
        assert!(session.files().is_empty());
        assert!(session.last_error().is_none());
        assert!(!session.drag_active());
        assert!(!session.has_content());
    }

    #[test]
    fn test_select_mode_resets_everything() {
        let mut session = DetectionSession::with_mode(DetectionMode::Image);
        session.ingest(vec![png("a.png", 1)]);
        session.drag_enter();
        assert!(session.has_content());

        // Re-selecting the same mode still resets.
        session.select_mode(DetectionMode::Image);
        assert_eq!(session.mode(), DetectionMode::Image);
        assert_eq!(session.text(), "");
        assert!(session.files().is_empty());
        assert!(session.last_error().is_none());
        assert!(!session.drag_active());
    }

    #[test]
    fn test_text_and_files_are_mutually_exclusive() {
        let mut session = DetectionSession::with_mode(DetectionMode::Image);
        session.ingest(vec![png("a.png", 1)]);
        assert_eq!(session.files().len(), 1);

        session.set_text("hello");
        assert_eq!(session.text(), "hello");
        assert!(session.files().is_empty());

        session.ingest(vec![png("b.png", 1)]);
        assert_eq!(session.text(), "");
        assert_eq!(session.files().len(), 1);
    }

    #[test]
    fn test_empty_text_keeps_file_buffer() {
        let mut session = DetectionSession::with_mode(DetectionMode::Image);
        session.ingest(vec![png("a.png", 1)]);

        session.set_text("");
        assert_eq!(session.files().len(), 1);

        session.set_text("typed");
        session.set_text("");
        assert_eq!(session.text(), "");
        assert!(!session.has_content());
    }

    #[test]
    fn test_rejected_batch_leaves_buffer_unchanged() {
        let mut session = DetectionSession::with_mode(DetectionMode::Image);
        session.ingest(vec![png("ok.png", 1)]);
        session.ingest(vec![png("a.png", 11)]);

        let err = session.last_error().unwrap();
        assert!(err.to_string().contains("a.png"));
        assert!(err.to_string().contains("10 MB limit"));
        assert_eq!(session.files().len(), 1);
        assert_eq!(session.files()[0].name, "ok.png");
    }

    #[test]
    fn test_accepted_batch_appends_and_clears_error() {
        let mut session = DetectionSession::with_mode(DetectionMode::Image);
        session.ingest(vec![png("a.png", 11)]);
        assert!(session.last_error().is_some());

        session.ingest(vec![png("b.png", 2)]);
        assert!(session.last_error().is_none());
        assert_eq!(session.files().len(), 1);
    }

    #[test]
    fn test_video_mode_mixed_batch_scenario() {
        let mut session = DetectionSession::with_mode(DetectionMode::Video);
        session.ingest(vec![FileMeta::new("clip.mp4", 50 * MB, "video/mp4")]);
        assert_eq!(session.files().len(), 1);

        session.ingest(vec![FileMeta::new("song.mp3", 60 * MB, "audio/mpeg")]);
        assert!(session.last_error().unwrap().to_string().contains("50 MB limit"));
        // First file stays accepted.
        assert_eq!(session.files().len(), 1);
        assert_eq!(session.files()[0].name, "clip.mp4");
    }

    #[test]
    fn test_remove_file() {
        let mut session = DetectionSession::with_mode(DetectionMode::Image);
        session.ingest(vec![png("a.png", 1), png("b.png", 2)]);

        session.remove_file(0);
        assert_eq!(session.files().len(), 1);
        assert_eq!(session.files()[0].name, "b.png");

        // Out of range is a no-op.
        session.remove_file(5);
        assert_eq!(session.files().len(), 1);

        session.remove_file(0);
        assert!(session.files().is_empty());
        assert!(session.last_error().is_none());
        assert!(!session.has_content());
    }

    #[test]
    fn test_clear_all_keeps_mode() {
        let mut session = DetectionSession::with_mode(DetectionMode::Image);
        session.ingest(vec![png("a.png", 1), png("b.png", 2)]);

        session.clear_all();
        assert!(session.files().is_empty());
        assert!(session.last_error().is_none());
        assert_eq!(session.mode(), DetectionMode::Image);
    }

    #[test]
    fn test_drag_flag_disabled_in_text_mode() {
        let mut session = DetectionSession::new();
        session.drag_enter();
        assert!(!session.drag_active());

        session.select_mode(DetectionMode::Video);
        session.drag_enter();
        assert!(session.drag_active());
        session.drag_leave();
        assert!(!session.drag_active());
    }

    #[test]
    fn test_drop_matches_picker_path() {
        let mut session = DetectionSession::with_mode(DetectionMode::Image);
        session.drag_enter();
        session.drop_files(vec![png("a.png", 1)]);
        assert!(!session.drag_active());
        assert_eq!(session.files().len(), 1);

        // Dropping in text mode is ignored entirely.
        session.select_mode(DetectionMode::Text);
        session.drop_files(vec![png("a.png", 1)]);
        assert!(session.files().is_empty());
    }

    #[test]
    fn test_submit_payloads() {
        let mut session = DetectionSession::new();
        assert_eq!(session.submit(), None);

        session.set_text("hello");
        assert_eq!(session.submit(), Some(Submission::Text("hello".to_string())));

        session.select_mode(DetectionMode::Image);
        session.ingest(vec![png("a.png", 1)]);
        let payload = session.submit().unwrap();
        assert_eq!(payload.files().unwrap().len(), 1);
    }
}
