//! Text-generation client.

use std::time::Instant;

use crate::config::CHAT_COMPLETIONS_PATH;
use crate::error_handling::SummaryError;
use crate::geo::GeoRecord;

use super::credentials::ApiKey;
use super::prompt::build_prompt;
use super::wire::{ApiErrorBody, ChatMessage, ChatRequest, ChatResponse};

/// Generated prose describing one [`GeoRecord`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary(String);

impl Summary {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for Summary {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Client for the chat-completion API.
///
/// Model and temperature are fixed at construction. The key is optional so the
/// tool still geolocates without one; each generation then fails with
/// [`SummaryError::MissingCredential`].
#[derive(Debug, Clone)]
pub struct SummaryClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<ApiKey>,
    model: String,
    temperature: f32,
}

impl SummaryClient {
    pub fn new(
        client: reqwest::Client,
        base_url: impl Into<String>,
        api_key: Option<ApiKey>,
        model: impl Into<String>,
        temperature: f32,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            api_key,
            model: model.into(),
            temperature,
        }
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    fn completions_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            CHAT_COMPLETIONS_PATH
        )
    }

    /// Asks the model for a short report on `record`.
    ///
    /// The first choice's text is returned trimmed; it may be empty.
    ///
    /// # Errors
    ///
    /// Returns a [`SummaryError`] for a missing key, a transport failure, an
    /// error status, or a body without any choice.
    pub async fn generate(&self, record: &GeoRecord) -> Result<Summary, SummaryError> {
        let api_key = self
            .api_key
            .as_ref()
            .ok_or(SummaryError::MissingCredential)?;

        let prompt = build_prompt(record);
        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: &prompt,
            }],
            temperature: self.temperature,
        };

        let url = self.completions_url();
        log::debug!("Report request: POST {} (model {})", url, self.model);

        let start = Instant::now();
        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key.expose())
            .json(&request)
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;
        log::debug!(
            "Report response: HTTP {} in {:.2}s",
            status.as_u16(),
            start.elapsed().as_secs_f64()
        );

        if !status.is_success() {
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .map(|b| b.error.message)
                .unwrap_or_else(|_| {
                    status
                        .canonical_reason()
                        .unwrap_or("unknown error")
                        .to_string()
                });
            return Err(SummaryError::Api {
                status: status.as_u16(),
                message,
            });
        }

        parse_completion(&body)
    }
}

/// Extracts the first choice's text from a successful completion body.
pub(crate) fn parse_completion(body: &str) -> Result<Summary, SummaryError> {
    let parsed: ChatResponse =
        serde_json::from_str(body).map_err(|e| SummaryError::Decode(e.to_string()))?;
    let first = parsed
        .choices
        .into_iter()
        .next()
        .ok_or(SummaryError::EmptyResponse)?;
    let text = first.message.content.unwrap_or_default();
    Ok(Summary(text.trim().to_string()))
}
