//! IP geolocation.
//!
//! This module queries the external geolocation service for one address and
//! turns its JSON answer into a [`GeoRecord`].

mod client;
mod types;

// Re-export public API
pub use client::GeoClient;
pub use types::GeoRecord;
