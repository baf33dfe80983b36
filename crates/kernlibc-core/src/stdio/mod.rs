//! Formatted output.
//!
//! Only the bounded `snprintf` exists; there are no streams and no console
//! here. Callers hand the rendered bytes to whatever sink they own.

pub mod printf;

pub use printf::{format_bounded, snprintf, BoundedWriter, FormatOutcome, FormatSegment, ScanState, Segments};
