//! User-visible error reporting.
//!
//! The session never prints errors directly; it hands them to a [`Reporter`]
//! together with their class so callers can decide where they go.

use std::io::{self, Write};

use super::types::ErrorType;

/// Sink for recoverable errors raised during a session.
pub trait Reporter {
    /// Reports one error. `message` is the complete user-facing line.
    fn report(&mut self, kind: ErrorType, message: &str);
}

/// Prints reported errors one line each, to stdout unless built with another
/// writer.
///
/// A failed write is logged at debug level and the report is dropped.
#[derive(Debug)]
pub struct ConsoleReporter<W: Write = io::Stdout> {
    out: W,
}

impl ConsoleReporter {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::stdout()
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn report(&mut self, kind: ErrorType, message: &str) {
        log::debug!("Reporting {}: {}", kind, message);
        if let Err(e) = writeln!(self.out, "{}", message).and_then(|()| self.out.flush()) {
            log::debug!("Failed to print {} report: {}", kind, e);
        }
    }
}

/// Keeps every reported error in memory.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    pub reports: Vec<(ErrorType, String)>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the classes reported so far, in order.
    pub fn kinds(&self) -> Vec<ErrorType> {
        self.reports.iter().map(|(kind, _)| *kind).collect()
    }
}

impl Reporter for RecordingReporter {
    fn report(&mut self, kind: ErrorType, message: &str) {
        self.reports.push((kind, message.to_string()));
    }
}
