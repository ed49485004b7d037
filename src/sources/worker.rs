use std::time::Duration;

use reqwest::Client;
use serde_json::{json, Value};
use tracing::debug;

use crate::error::SetupError;
use crate::utils::constants::{WORKER_TIMEOUT_SECS, WORKER_URL};

/// Client for the Cloudflare Worker that mints BGG application tokens.
#[derive(Debug, Clone)]
pub struct WorkerSource {
    url: String,
    client: Client,
}

impl WorkerSource {
    pub fn new() -> Result<Self, SetupError> {
        Self::with_url(WORKER_URL)
    }

    pub fn with_url(url: impl Into<String>) -> Result<Self, SetupError> {
        Self::with_url_and_timeout(url, Duration::from_secs(WORKER_TIMEOUT_SECS))
    }

    pub fn with_url_and_timeout(
        url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, SetupError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SetupError::Transport(e.to_string()))?;
        Ok(Self {
            url: url.into(),
            client,
        })
    }

    /// Ask the worker to mint a token for `username`.
    ///
    /// Succeeds only on a `{"success": true, "token": "<non-empty>"}`
    /// payload; any other shape is surfaced in full for diagnosis. No retry
    /// here, a failed run is simply rerun by the operator.
    pub async fn request_token(&self, username: &str) -> Result<String, SetupError> {
        let response = self
            .client
            .post(&self.url)
            .json(&json!({ "username": username }))
            .send()
            .await
            .map_err(classify_transport)?;

        if !response.status().is_success() {
            return Err(SetupError::Transport(format!(
                "HTTP request failed: {}",
                response.status()
            )));
        }

        let body = response.text().await.map_err(classify_transport)?;
        if body.trim().is_empty() {
            return Err(SetupError::EmptyResponse);
        }

        let payload: Value = serde_json::from_str(&body)
            .map_err(|e| SetupError::Transport(format!("invalid JSON response: {e}")))?;
        debug!("worker response: {payload}");

        match token_from_payload(&payload) {
            Some(token) => Ok(token),
            None => Err(SetupError::UnexpectedResponse(payload)),
        }
    }
}

fn token_from_payload(payload: &Value) -> Option<String> {
    if payload.get("success").and_then(Value::as_bool) != Some(true) {
        return None;
    }
    payload
        .get("token")
        .and_then(Value::as_str)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
}

fn classify_transport(err: reqwest::Error) -> SetupError {
    if err.is_timeout() {
        SetupError::Timeout
    } else if err.is_connect() {
        SetupError::Connection
    } else {
        SetupError::Transport(err.to_string())
    }
}
