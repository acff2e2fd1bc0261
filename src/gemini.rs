//! Generative-language API client
//! Carries prompts to the hosted Gemini model and returns its raw text

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Default generateContent endpoint.
pub const DEFAULT_API_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent";

#[derive(Debug, Error)]
pub enum GeminiError {
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("API error: {0}")]
    Api(String),
    #[error("Response contained no generated text")]
    EmptyResponse,
    #[error("Authentication failed - check your API key")]
    AuthFailed,
    #[error("Rate limited - try again later")]
    RateLimited,
    #[error("Request timeout")]
    Timeout,
}

/// Request tuning for the generative-language calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiRequestConfig {
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
    /// Number of retries for transient errors (default: 2)
    pub max_retries: u32,
    /// Retry delay in milliseconds (default: 1000)
    pub retry_delay_ms: u64,
}

impl Default for GeminiRequestConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            max_retries: 2,
            retry_delay_ms: 1000,
        }
    }
}

/// Client for the hosted generative-language endpoint.
///
/// The API key travels as a query parameter and is never logged; error
/// logging records status and body size only.
pub struct GeminiClient {
    client: Client,
    api_url: String,
    api_key: String,
    config: GeminiRequestConfig,
}

impl GeminiClient {
    pub fn new(api_key: &str) -> Self {
        Self::with_config(DEFAULT_API_URL, api_key, GeminiRequestConfig::default())
    }

    pub fn with_config(api_url: &str, api_key: &str, config: GeminiRequestConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_default();

        Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            config,
        }
    }

    /// Send a text-only prompt and return the model's raw text.
    pub async fn generate(&self, prompt: &str) -> Result<String, GeminiError> {
        let body = serde_json::json!({
            "contents": [{
                "parts": [{ "text": prompt }]
            }]
        });
        self.generate_inner(body).await
    }

    /// Send a prompt plus an inline base64 image and return the raw text.
    pub async fn generate_with_image(
        &self,
        prompt: &str,
        image_data: &str,
        image_type: &str,
    ) -> Result<String, GeminiError> {
        let body = serde_json::json!({
            "contents": [{
                "parts": [
                    { "text": prompt },
                    {
                        "inline_data": {
                            "mime_type": image_type,
                            "data": image_data
                        }
                    }
                ]
            }]
        });
        self.generate_inner(body).await
    }

    async fn generate_inner(&self, body: serde_json::Value) -> Result<String, GeminiError> {
        let url = format!("{}?key={}", self.api_url, self.api_key);

        let response = self
            .execute_with_retry(|| async {
                self.client
                    .post(&url)
                    .header(reqwest::header::CONTENT_TYPE, "application/json")
                    .json(&body)
                    .send()
                    .await
            })
            .await?;

        let json: serde_json::Value = response.json().await?;
        let text = Self::extract_text(&json).ok_or(GeminiError::EmptyResponse)?;
        tracing::debug!("generative response received ({} bytes)", text.len());
        Ok(text)
    }

    /// Pull the generated text out of a generateContent response.
    fn extract_text(json: &serde_json::Value) -> Option<String> {
        json["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .map(|s| s.to_string())
    }

    /// Execute a request with retry logic for transient errors.
    /// Does NOT retry on auth errors (401/403) or rate limiting (429).
    async fn execute_with_retry<F, Fut>(&self, request_fn: F) -> Result<reqwest::Response, GeminiError>
    where
        F: Fn() -> Fut,
        Fut: std::future::Future<Output = Result<reqwest::Response, reqwest::Error>>,
    {
        let mut last_error = None;

        for attempt in 0..=self.config.max_retries {
            match request_fn().await {
                Ok(response) => {
                    let status = response.status();

                    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
                        return Err(GeminiError::AuthFailed);
                    }

                    if status == StatusCode::TOO_MANY_REQUESTS {
                        return Err(GeminiError::RateLimited);
                    }

                    if status.is_success() {
                        return Ok(response);
                    }

                    if status.is_server_error() {
                        last_error = Some(GeminiError::Api(format!("Server error: {}", status)));
                        if attempt < self.config.max_retries {
                            tokio::time::sleep(Duration::from_millis(
                                self.config.retry_delay_ms * (attempt as u64 + 1),
                            ))
                            .await;
                            continue;
                        }
                    }

                    // Log size only to avoid echoing upstream payloads
                    if let Ok(text) = response.text().await {
                        tracing::debug!(
                            "generative API error response received (status: {}, bytes: {})",
                            status,
                            text.len()
                        );
                    }
                    return Err(GeminiError::Api(format!(
                        "HTTP {} from generative-language API",
                        status
                    )));
                }
                Err(e) => {
                    if e.is_timeout() {
                        last_error = Some(GeminiError::Timeout);
                    } else if e.is_connect() || e.is_request() {
                        last_error = Some(GeminiError::Request(e));
                    } else {
                        return Err(GeminiError::Request(e));
                    }

                    if attempt < self.config.max_retries {
                        tokio::time::sleep(Duration::from_millis(
                            self.config.retry_delay_ms * (attempt as u64 + 1),
                        ))
                        .await;
                    }
                }
            }
        }

        Err(last_error.unwrap_or(GeminiError::Api("Unknown error".to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_text_from_candidates() {
        let json = serde_json::json!({
            "candidates": [{
                "content": {
                    "parts": [{ "text": "Snake Plant" }]
                }
            }]
        });
        assert_eq!(GeminiClient::extract_text(&json), Some("Snake Plant".to_string()));
    }

    #[test]
    fn test_extract_text_missing_candidates() {
        let json = serde_json::json!({ "candidates": [] });
        assert_eq!(GeminiClient::extract_text(&json), None);

        let json = serde_json::json!({ "promptFeedback": { "blockReason": "SAFETY" } });
        assert_eq!(GeminiClient::extract_text(&json), None);
    }

    #[test]
    fn test_request_config_defaults() {
        let config = GeminiRequestConfig::default();
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.max_retries, 2);
        assert_eq!(config.retry_delay_ms, 1000);
    }

    #[test]
    fn test_with_config_trims_trailing_slash() {
        let client = GeminiClient::with_config(
            "https://example.test/v1beta/models/gemini:generateContent/",
            "k",
            GeminiRequestConfig::default(),
        );
        assert!(!client.api_url.ends_with('/'));
    }
}
