//! Top-level screen flow: input surface or result page.

use tracing::{debug, info};

use bscan_models::{AnalysisReport, DetectionMode};

use crate::detector::Detector;
use crate::report::build_report;
use crate::session::DetectionSession;

/// Which screen is showing.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    /// The input surface (mode cards plus text area or upload area).
    Input,
    /// The result page for the last submission.
    Results(AnalysisReport),
}

/// Application state driving one user's detection flow.
///
/// Owns the session and a detector; the presentation layer renders the
/// current screen and forwards raw input events to the session via
/// [`session_mut`](Self::session_mut).
pub struct DetectApp {
    session: DetectionSession,
    detector: Box<dyn Detector>,
    screen: Screen,
}

impl DetectApp {
    /// Create an app with the given detector, starting on the input
    /// screen in text mode.
    pub fn new(detector: Box<dyn Detector>) -> Self {
        info!("Starting detection flow with detector '{}'", detector.name());
        Self {
            session: DetectionSession::new(),
            detector,
            screen: Screen::Input,
        }
    }

    /// Current screen.
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Read access to the session.
    pub fn session(&self) -> &DetectionSession {
        &self.session
    }

    /// Mutable access for input events (text edits, file ingest, drag).
    pub fn session_mut(&mut self) -> &mut DetectionSession {
        &mut self.session
    }

    /// Select a detection mode on the input screen.
    pub fn select_mode(&mut self, mode: DetectionMode) {
        self.session.select_mode(mode);
    }

    /// Submit the current input and move to the result page.
    ///
    /// No-op when the session has nothing to submit; the submit action
    /// is disabled in that state.
    pub fn submit(&mut self) {
        let Some(submission) = self.session.submit() else {
            debug!("Submit ignored: no content");
            return;
        };
        let report = build_report(self.detector.as_ref(), &submission, self.session.mode());
        info!(
            "Generated report {} with {} verdict(s)",
            report.report_id,
            report.verdict_count()
        );
        self.screen = Screen::Results(report);
    }

    /// Return from the result page to the input screen.
    ///
    /// The session is left as it was, so the user can tweak and resubmit.
    pub fn back(&mut self) {
        self.screen = Screen::Input;
    }
}
