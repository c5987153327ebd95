//! cyber_scan_x library: IP address geolocation with a written report
//!
//! This library reads an IP address, looks it up with a public geolocation
//! service, prints the result with a map link, and asks a chat-completion API
//! for a short professional report in French.
//!
//! # Example
//!
//! ```no_run
//! use cyber_scan_x::{run_session, Analyzer, Config, ConsoleReporter, SessionOptions};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::default();
//! let analyzer = Analyzer::from_config(&config)?;
//!
//! let mut input = std::io::Cursor::new("8.8.8.8\nn\n");
//! let mut output = Vec::new();
//! let report = run_session(
//!     &analyzer,
//!     &mut input,
//!     &mut output,
//!     &mut ConsoleReporter::stdout(),
//!     &SessionOptions::default(),
//! )
//! .await?;
//! println!("{} analyses", report.analyses);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! The service clients are async; call them from within a Tokio runtime.

mod app;
pub mod config;
pub mod error_handling;
pub mod geo;
pub mod initialization;
pub mod summary;
pub mod validate;

// Re-export public API
pub use app::{
    analyze, ask_continue, maps_link, render_record, render_summary, render_summary_header,
    run_session, AnalysisOutcome, Analyzer, SessionOptions, SessionReport,
};
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{ConsoleReporter, ErrorType, RecordingReporter, Reporter, SessionStats};
pub use geo::{GeoClient, GeoRecord};
pub use summary::{ApiKey, Summary, SummaryClient};
pub use validate::{parse_address, prompt_for_address, Address};
