//! Error handling and session statistics.
//!
//! This module provides:
//! - Error type definitions for each service boundary
//! - The recoverable error classes (`ErrorType`) and their per-session counters
//! - The `Reporter` abstraction used to surface errors to the user

mod reporter;
mod stats;
mod types;

// Re-export public API
pub use reporter::{ConsoleReporter, RecordingReporter, Reporter};
pub use stats::SessionStats;
pub use types::{ErrorType, GeoLookupError, InitializationError, SummaryError, ValidationError};
