//! Written report generation.
//!
//! This module provides:
//! - The prompt built from a [`GeoRecord`](crate::geo::GeoRecord)
//! - The chat-completion client and its wire types
//! - The [`ApiKey`] credential holder

mod client;
mod credentials;
mod prompt;
mod wire;

// Re-export public API
pub use client::{Summary, SummaryClient};
pub use credentials::ApiKey;
pub use prompt::build_prompt;
