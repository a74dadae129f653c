//! Validation, submission session, and detector seam for BuddyScan.
//!
//! This crate holds the logical core behind the input surface:
//! - Per-mode upload validation (pure rules over file metadata)
//! - The submission session state machine (single input slot, drag
//!   flags, recoverable validation errors)
//! - The `Detector` trait and the mock implementation that fabricates
//!   placeholder verdicts
//! - Report assembly and the input/results screen flow

pub mod detector;
pub mod error;
pub mod flow;
pub mod report;
pub mod session;
pub mod validate;

// Re-export common types
pub use detector::{Detector, MockDetector};
pub use error::{EngineResult, RejectReason};
pub use flow::{DetectApp, Screen};
pub use report::build_report;
pub use session::{DetectionSession, InputSlot};
pub use validate::validate_files;
