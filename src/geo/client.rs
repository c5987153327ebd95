//! Geolocation service client.

use std::time::Instant;

use crate::config::GEO_STATUS_SUCCESS;
use crate::error_handling::GeoLookupError;
use crate::validate::Address;

use super::types::{GeoRecord, GeoResponse};

/// Client for the geolocation service.
///
/// Issues one GET per lookup against `<base_url>/<address>`. No retries.
#[derive(Debug, Clone)]
pub struct GeoClient {
    client: reqwest::Client,
    base_url: String,
}

impl GeoClient {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Builds the lookup URL. The address is always the final path segment.
    pub fn request_url(&self, address: &Address) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), address)
    }

    /// Looks up `address`.
    ///
    /// # Errors
    ///
    /// - `Transport` if the request fails or the body cannot be read
    /// - `Decode` if the body is not a JSON object with a `status` field, or
    ///   if a failure status comes without a `message`
    /// - `ServiceFailure` if `status` is anything but `"success"`
    pub async fn lookup(&self, address: &Address) -> Result<GeoRecord, GeoLookupError> {
        let url = self.request_url(address);
        log::debug!("Geolocation request: GET {}", url);

        let start = Instant::now();
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        let body = response.text().await?;
        log::debug!(
            "Geolocation response: HTTP {} in {:.2}s",
            status.as_u16(),
            start.elapsed().as_secs_f64()
        );

        parse_response(&body, address)
    }
}

/// Interprets a geolocation response body for the lookup of `address`.
pub(crate) fn parse_response(body: &str, address: &Address) -> Result<GeoRecord, GeoLookupError> {
    let parsed: GeoResponse =
        serde_json::from_str(body).map_err(|e| GeoLookupError::Decode(e.to_string()))?;

    if parsed.status != GEO_STATUS_SUCCESS {
        log::info!("Geolocation service returned status {:?}", parsed.status);
        return Err(match parsed.message {
            Some(message) => GeoLookupError::ServiceFailure { message },
            None => GeoLookupError::Decode(format!(
                "status {:?} without a message",
                parsed.status
            )),
        });
    }

    let mut record = parsed.record;
    if let Some(query) = record.query.as_deref() {
        if query != address.as_str() {
            log::debug!("Service echoed query {} for {}", query, address);
        }
    } else {
        record.query = Some(address.to_string());
    }
    Ok(record)
}
