//! Demo: BuddyScan detection flow walkthrough
//!
//! Run with: cargo run -p bscan-engine --example detect_demo

use bscan_engine::{DetectApp, MockDetector, Screen};
use bscan_models::{DetectionMode, FileMeta, ReportOutcome};

fn main() {
    tracing_subscriber::fmt().with_env_filter("debug").init();

    let mut app = DetectApp::new(Box::new(MockDetector::new()));

    println!("\n{}", "=".repeat(60));
    println!("TEXT MODE");
    println!("{}", "=".repeat(60));
    app.session_mut()
        .set_text("The quick brown fox jumps over the lazy dog.");
    app.submit();
    print_report(&app);
    app.back();

    println!("\n{}", "=".repeat(60));
    println!("IMAGE MODE");
    println!("{}", "=".repeat(60));
    app.select_mode(DetectionMode::Image);

    // Oversized upload: rejected with a recoverable message.
    app.session_mut()
        .ingest(vec![FileMeta::new("poster.png", 11 * 1024 * 1024, "image/png")]);
    if let Some(err) = app.session().last_error() {
        println!("REJECTED: {}", err);
    }

    app.session_mut().ingest(vec![
        FileMeta::new("photo.jpg", 3 * 1024 * 1024, "image/jpeg"),
        FileMeta::new("scan.png", 5 * 1024 * 1024, "image/png"),
    ]);
    for file in app.session().files() {
        println!("queued: {} ({})", file.name, file.size_display());
    }
    app.submit();
    print_report(&app);
}

fn print_report(app: &DetectApp) {
    let Screen::Results(report) = app.screen() else {
        println!("(no report)");
        return;
    };
    println!("report {} [{}]", report.report_id, report.mode.title());
    match &report.outcome {
        ReportOutcome::Text(text) => {
            println!("  {} ({}%)", text.verdict_label, text.confidence_percent);
            println!("  {}", text.explanation);
        }
        ReportOutcome::Files { verdicts, summary } => {
            println!("  {}", summary);
            for v in verdicts {
                println!("  {}: {} ({}%)", v.file_name, v.verdict, v.confidence_percent);
            }
        }
    }
}
