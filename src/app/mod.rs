//! Main application modules.
//!
//! This module provides console rendering and the interactive loop used by the
//! main application.

pub mod render;
pub mod session;

// Re-export public API
pub use render::{maps_link, render_record, render_summary, render_summary_header};
pub use session::{
    analyze, ask_continue, run_session, AnalysisOutcome, Analyzer, SessionOptions, SessionReport,
};
