// Shared test helpers for building clients against mock servers.

use cyber_scan_x::{ApiKey, Analyzer, GeoClient, SummaryClient};
use serde_json::{json, Value};

/// Base URL on which nothing listens; requests to it fail at connect time.
pub const UNREACHABLE_BASE: &str = "http://127.0.0.1:1";

pub const TEST_API_KEY: &str = "sk-test-key";

/// Builds an analyzer whose geolocation and report clients point at the given bases.
#[allow(dead_code)] // Used by session tests only
pub fn analyzer_for(geo_base: &str, openai_base: &str, api_key: Option<&str>) -> Analyzer {
    let client = reqwest::Client::new();
    Analyzer::new(
        GeoClient::new(client.clone(), geo_base),
        SummaryClient::new(
            client,
            openai_base,
            api_key.map(ApiKey::new),
            "gpt-3.5-turbo",
            0.7,
        ),
    )
}

pub fn google_dns_record() -> Value {
    json!({
        "status": "success",
        "query": "8.8.8.8",
        "country": "United States",
        "city": "Mountain View",
        "lat": 37.4,
        "lon": -122.1,
        "isp": "Google LLC",
        "timezone": "America/Los_Angeles"
    })
}

#[allow(dead_code)] // Used by session tests only
pub fn completion(text: &str) -> Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [
            {"index": 0, "message": {"role": "assistant", "content": text}, "finish_reason": "stop"}
        ]
    })
}
