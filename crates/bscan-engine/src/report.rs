//! Report assembly.

use tracing::debug;

use bscan_models::{file_summary, AnalysisReport, DetectionMode, ReportOutcome, Submission};

use crate::detector::Detector;

/// Run `detector` over a submission and wrap the outcome in a report
/// with a fresh id, timestamp, and summary line.
pub fn build_report(
    detector: &dyn Detector,
    submission: &Submission,
    mode: DetectionMode,
) -> AnalysisReport {
    debug!("Building {} report with detector '{}'", mode, detector.name());
    let outcome = match submission {
        Submission::Text(text) => ReportOutcome::Text(detector.analyze_text(text)),
        Submission::Files(files) => {
            let verdicts = detector.analyze_files(files, mode);
            let summary = file_summary(verdicts.len(), mode);
            ReportOutcome::Files { verdicts, summary }
        }
    };
    AnalysisReport::new(mode, outcome)
}
