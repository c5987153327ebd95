//! Error type definitions.
//!
//! This module defines the error types raised at each service boundary and the
//! categories used to count recoverable errors over a session.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Rejected address input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The text is not an IPv4 or IPv6 literal.
    #[error("invalid IP address literal: {0:?}")]
    InvalidAddress(String),
}

/// Failure of a geolocation lookup.
///
/// Any status other than `"success"` is a `ServiceFailure`; the service's
/// reasons (rate limiting, reserved range, bad query) are not told apart.
#[derive(Error, Debug)]
pub enum GeoLookupError {
    /// Connection, timeout, or body read failure.
    #[error("{0}")]
    Transport(#[from] ReqwestError),

    /// The body is not the expected JSON document.
    #[error("malformed response: {0}")]
    Decode(String),

    /// The service answered with a non-success status.
    #[error("{message}")]
    ServiceFailure {
        /// Message supplied by the service
        message: String,
    },
}

/// Failure of a report generation request.
#[derive(Error, Debug)]
pub enum SummaryError {
    /// No API key was configured.
    #[error("no API key configured (set OPENAI_API_KEY)")]
    MissingCredential,

    /// Connection, timeout, or body read failure.
    #[error("{0}")]
    Transport(#[from] ReqwestError),

    /// The API answered with an error status.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Message supplied by the API, or the status reason
        message: String,
    },

    /// The body is not the expected JSON document.
    #[error("malformed response: {0}")]
    Decode(String),

    /// The API returned no completion choice.
    #[error("the API returned no completion")]
    EmptyResponse,
}

/// Recoverable error classes reported to the user during a session.
///
/// None of these abort the session: invalid input is re-prompted, and the two
/// service failures only cut the current analysis short.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    InvalidAddress,
    GeolocationFailure,
    SummaryFailure,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::InvalidAddress => "Invalid address input",
            ErrorType::GeolocationFailure => "Geolocation failure",
            ErrorType::SummaryFailure => "Report generation failure",
        }
    }
}
