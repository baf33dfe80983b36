//! Conformance testing harness for kernlibc.
//!
//! This crate provides:
//! - Fixtures: JSON cases naming a function, its inputs and the expected
//!   rendered output
//! - Execution: dispatch of each case to the `kernlibc-core` implementation
//! - Verification and reports: pass/fail summaries as markdown and JSON
//! - Structured logs: JSONL run records and a SHA-256 artifact index

#![forbid(unsafe_code)]

pub mod diff;
pub mod error;
pub mod execute;
pub mod fixtures;
pub mod report;
pub mod runner;
pub mod structured_log;
pub mod verify;

pub use error::HarnessError;
pub use fixtures::{FixtureCase, FixtureSet};
pub use report::ConformanceReport;
pub use runner::TestRunner;
pub use verify::{VerificationResult, VerificationSummary};
