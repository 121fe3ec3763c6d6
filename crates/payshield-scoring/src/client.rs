//! HTTP client for the fraud scoring service.
//!
//! Wraps `reqwest` with typed request/response handling for the `/predict`
//! endpoint. Rejection bodies are preserved verbatim since they surface in
//! user-facing messages.

use reqwest::{Client, Url};

use crate::error::ScoringError;
use crate::types::{ScoreVerdict, TransactionCandidate};

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Client for the fraud scoring service.
///
/// Use [`ScoringClient::new`] for the default local deployment or
/// [`ScoringClient::with_base_url`] to point at a configured endpoint or a
/// mock server in tests.
pub struct ScoringClient {
    client: Client,
    predict_url: Url,
}

impl ScoringClient {
    /// Creates a client pointed at the default local scoring deployment.
    ///
    /// # Errors
    ///
    /// Returns [`ScoringError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new() -> Result<Self, ScoringError> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// No request timeout is configured: a submission waits as long as the
    /// service takes to answer.
    ///
    /// # Errors
    ///
    /// Returns [`ScoringError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ScoringError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn with_base_url(base_url: &str) -> Result<Self, ScoringError> {
        let client = Client::builder()
            .user_agent("payshield/0.1 (transaction-screening)")
            .build()?;

        let joined = format!("{}/predict", base_url.trim_end_matches('/'));
        let predict_url = Url::parse(&joined).map_err(|e| ScoringError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            predict_url,
        })
    }

    /// Scores one candidate transaction via `POST /predict`.
    ///
    /// # Errors
    ///
    /// - [`ScoringError::Http`] on network failure.
    /// - [`ScoringError::Rejected`] if the service answers with a non-success
    ///   status; the response body is preserved verbatim.
    /// - [`ScoringError::Deserialize`] if a success response does not match
    ///   the verdict shape.
    pub async fn score(
        &self,
        candidate: &TransactionCandidate,
    ) -> Result<ScoreVerdict, ScoringError> {
        let response = self
            .client
            .post(self.predict_url.clone())
            .json(candidate)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ScoringError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| ScoringError::Deserialize {
            context: self.predict_url.to_string(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_base_url_appends_the_predict_path() {
        let client = ScoringClient::with_base_url("http://127.0.0.1:5000")
            .expect("client construction should not fail");
        assert_eq!(
            client.predict_url.as_str(),
            "http://127.0.0.1:5000/predict"
        );
    }

    #[test]
    fn with_base_url_strips_trailing_slashes() {
        let client = ScoringClient::with_base_url("http://scoring.internal/")
            .expect("client construction should not fail");
        assert_eq!(
            client.predict_url.as_str(),
            "http://scoring.internal/predict"
        );
    }

    #[test]
    fn with_base_url_rejects_unparseable_input() {
        let result = ScoringClient::with_base_url("not a url");
        assert!(matches!(result, Err(ScoringError::InvalidBaseUrl { .. })));
    }
}
