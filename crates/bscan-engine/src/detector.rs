//! Detector seam and mock implementation.
//!
//! The trait gives analysis a uniform interface so a real inference
//! backend can be substituted without touching session or report logic.
//! The mock implementation fabricates verdicts with random placeholder
//! values; it performs no analysis of any kind.

use rand::Rng;

use bscan_models::{DetectionMode, FileMeta, FileVerdict, TextReport, Verdict};

/// Content analysis provider.
///
/// Total over its input domain: analysis itself has no failure modes in
/// this core (validation happens before submission).
pub trait Detector: Send + Sync {
    /// Produce a verdict for a text submission.
    fn analyze_text(&self, text: &str) -> TextReport;

    /// Produce one verdict per submitted file.
    fn analyze_files(&self, files: &[FileMeta], mode: DetectionMode) -> Vec<FileVerdict>;

    /// Provider name for logging.
    fn name(&self) -> &'static str;

    /// Whether this provider runs real AI/ML inference (vs placeholder
    /// values).
    fn uses_ai(&self) -> bool;
}

/// Confidence range for mock file verdicts, in percent.
const MOCK_CONFIDENCE_MIN: u8 = 70;
const MOCK_CONFIDENCE_MAX: u8 = 100; // exclusive

const MOCK_TEXT_LABEL: &str = "AI-Generated Content Detected";
const MOCK_TEXT_CONFIDENCE: u8 = 87;
const MOCK_TEXT_EXPLANATION: &str = "This text shows characteristics commonly associated with \
    AI-generated content, including repetitive patterns and specific language structures.";

/// Placeholder detector with randomized verdicts.
///
/// Re-invoking with the same payload produces different output; the
/// randomness is intentional and documents the seam where a real
/// detection call belongs.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockDetector;

impl MockDetector {
    pub fn new() -> Self {
        Self
    }
}

impl Detector for MockDetector {
    fn analyze_text(&self, text: &str) -> TextReport {
        TextReport::new(MOCK_TEXT_LABEL, MOCK_TEXT_CONFIDENCE, MOCK_TEXT_EXPLANATION, text)
    }

    fn analyze_files(&self, files: &[FileMeta], _mode: DetectionMode) -> Vec<FileVerdict> {
        let mut rng = rand::thread_rng();
        files
            .iter()
            .map(|file| FileVerdict {
                file_name: file.name.clone(),
                verdict: if rng.gen_bool(0.5) {
                    Verdict::AiGenerated
                } else {
                    Verdict::LikelyHuman
                },
                confidence_percent: rng.gen_range(MOCK_CONFIDENCE_MIN..MOCK_CONFIDENCE_MAX),
            })
            .collect()
    }

    fn name(&self) -> &'static str {
        "mock"
    }

    fn uses_ai(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_detector_creation() {
        let detector = MockDetector::new();
        assert_eq!(detector.name(), "mock");
        assert!(!detector.uses_ai());
    }

    #[test]
    fn test_mock_text_report_is_fixed() {
        let detector = MockDetector::new();
        let report = detector.analyze_text("hello");
        assert_eq!(report.verdict_label, "AI-Generated Content Detected");
        assert_eq!(report.confidence_percent, 87);
        assert_eq!(report.excerpt, "hello");

        // Text analysis is deterministic, unlike file analysis.
        assert_eq!(detector.analyze_text("hello"), report);
    }

    #[test]
    fn test_mock_file_verdicts_stay_in_range() {
        let detector = MockDetector::new();
        let files = vec![
            FileMeta::new("a.png", 1024, "image/png"),
            FileMeta::new("b.png", 2048, "image/png"),
            FileMeta::new("c.png", 4096, "image/png"),
        ];

        for _ in 0..50 {
            let verdicts = detector.analyze_files(&files, DetectionMode::Image);
            assert_eq!(verdicts.len(), 3);
            for (verdict, file) in verdicts.iter().zip(&files) {
                assert_eq!(verdict.file_name, file.name);
                assert!((70..100).contains(&verdict.confidence_percent));
                assert!(matches!(
                    verdict.verdict,
                    Verdict::AiGenerated | Verdict::LikelyHuman
                ));
            }
        }
    }

    #[test]
    fn test_detector_is_object_safe() {
        let detector: Box<dyn Detector> = Box::new(MockDetector::new());
        assert_eq!(detector.name(), "mock");
    }
}
