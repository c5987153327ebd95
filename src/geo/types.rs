//! Geolocation data structures.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::config::MISSING_MARKER;

/// Geolocation fields for one address.
///
/// Every field is optional: the service may omit any of them, and an absent
/// field is shown as a missing marker rather than treated as an error.
/// Values are kept as the service's text, so coordinates are echoed verbatim
/// and a field of an unexpected JSON type never fails the whole record.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct GeoRecord {
    #[serde(deserialize_with = "lenient_text")]
    pub query: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub country: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub city: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub lat: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub lon: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub isp: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub timezone: Option<String>,
}

/// Accepts any JSON scalar as text. Null, arrays and objects are absent.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    })
}

impl GeoRecord {
    pub fn query_or_missing(&self) -> String {
        display_or_missing(&self.query)
    }

    pub fn country_or_missing(&self) -> String {
        display_or_missing(&self.country)
    }

    pub fn city_or_missing(&self) -> String {
        display_or_missing(&self.city)
    }

    pub fn lat_or_missing(&self) -> String {
        display_or_missing(&self.lat)
    }

    pub fn lon_or_missing(&self) -> String {
        display_or_missing(&self.lon)
    }

    pub fn isp_or_missing(&self) -> String {
        display_or_missing(&self.isp)
    }

    pub fn timezone_or_missing(&self) -> String {
        display_or_missing(&self.timezone)
    }
}

fn display_or_missing(value: &Option<String>) -> String {
    value.as_deref().unwrap_or(MISSING_MARKER).to_string()
}

/// Raw response body of the geolocation service.
#[derive(Debug, Deserialize)]
pub(crate) struct GeoResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(flatten)]
    pub record: GeoRecord,
}
