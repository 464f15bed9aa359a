//! HTTP client for the hosted waitlist provider.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::outcome::SubmitOutcome;

/// The production waitlist instance.
pub const DEFAULT_ENDPOINT: &str =
    "https://api.freewaitlists.com/waitlists/cmjwqyyax004801s4ulp6t6y1";

/// Source tag sent with every signup so the provider can attribute it.
pub const DEFAULT_SOURCE: &str = "landing-page";

/// Errors that can occur when submitting a signup.
#[derive(Error, Debug)]
pub enum WaitlistError {
    /// The request could not complete at all (DNS, connectivity, CORS).
    #[error("Request failed to complete: {0}")]
    Transport(String),

    /// The provider answered with a non-2xx status.
    #[error("Signup rejected with HTTP {status}")]
    Rejected {
        status: u16,
        /// Server-supplied explanation, when the payload carried one.
        message: Option<String>,
    },
}

/// Request body for a signup, as the provider documents it.
#[derive(Debug, Clone, Serialize)]
pub struct SignupRequest {
    pub email: String,
    pub meta: SignupMeta,
}

/// Attribution metadata nested in the signup body.
#[derive(Debug, Clone, Serialize)]
pub struct SignupMeta {
    pub source: String,
}

/// Response payload from the provider.
///
/// Only the optional `message` field matters; anything else is ignored and an
/// empty body `{}` is a valid acceptance.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SignupResponse {
    pub message: Option<String>,
}

/// Configuration for the waitlist client.
#[derive(Debug, Clone)]
pub struct WaitlistConfig {
    /// Provider endpoint identifying the waitlist instance.
    pub endpoint: String,
    /// Attribution tag sent in `meta.source`.
    pub source: String,
}

impl Default for WaitlistConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            source: DEFAULT_SOURCE.to_string(),
        }
    }
}

impl WaitlistConfig {
    /// Point the client at a different endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Change the attribution tag.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }
}

/// Client for the waitlist provider.
///
/// Issues exactly one POST per call; no retries, no timeout, no idempotency
/// key. Anything smarter lives inside the provider.
#[derive(Clone)]
pub struct WaitlistClient {
    config: WaitlistConfig,
    http: reqwest::Client,
}

impl Default for WaitlistClient {
    fn default() -> Self {
        Self::new()
    }
}

impl WaitlistClient {
    /// Create a client pointed at the production waitlist.
    pub fn new() -> Self {
        Self::with_config(WaitlistConfig::default())
    }

    /// Create a client with explicit configuration.
    pub fn with_config(config: WaitlistConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    /// Get the configuration.
    pub fn config(&self) -> &WaitlistConfig {
        &self.config
    }

    /// POST one signup to the provider.
    ///
    /// Success is decided solely by the HTTP status class. On rejection the
    /// payload's `message` field is kept when it parses; the body is
    /// otherwise ignored.
    pub async fn signup(&self, email: &str) -> Result<SignupResponse, WaitlistError> {
        let request = SignupRequest {
            email: email.to_string(),
            meta: SignupMeta {
                source: self.config.source.clone(),
            },
        };

        let response = self
            .http
            .post(&self.config.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "waitlist signup failed to complete");
                WaitlistError::Transport(e.to_string())
            })?;

        let status = response.status();
        if status.is_success() {
            Ok(response.json::<SignupResponse>().await.unwrap_or_default())
        } else {
            let message = response
                .json::<SignupResponse>()
                .await
                .ok()
                .and_then(|body| body.message);
            tracing::debug!(status = status.as_u16(), "waitlist signup rejected");
            Err(WaitlistError::Rejected {
                status: status.as_u16(),
                message,
            })
        }
    }

    /// Submit a signup and map the result to its user-facing outcome.
    pub async fn submit(&self, email: &str) -> SubmitOutcome {
        SubmitOutcome::from_result(self.signup(email).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::{
        CONFIRMATION_MESSAGE, CONNECTIVITY_FAILURE_MESSAGE, GENERIC_FAILURE_MESSAGE,
    };
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> WaitlistClient {
        WaitlistClient::with_config(
            WaitlistConfig::default().with_endpoint(format!("{}/waitlists/test", server.uri())),
        )
    }

    // === Config Tests ===

    #[test]
    fn test_config_default() {
        let config = WaitlistConfig::default();

        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.source, "landing-page");
    }

    #[test]
    fn test_config_builder() {
        let config = WaitlistConfig::default()
            .with_endpoint("https://example.com/waitlists/abc")
            .with_source("footer");

        assert_eq!(config.endpoint, "https://example.com/waitlists/abc");
        assert_eq!(config.source, "footer");
    }

    // === Wire Format Tests ===

    #[test]
    fn test_signup_request_body() {
        let request = SignupRequest {
            email: "a@b.com".to_string(),
            meta: SignupMeta {
                source: "landing-page".to_string(),
            },
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"email": "a@b.com", "meta": {"source": "landing-page"}})
        );
    }

    #[test]
    fn test_signup_response_tolerates_extra_fields() {
        let body = r#"{"message": "ok", "id": "xyz", "position": 42}"#;
        let response: SignupResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.message.as_deref(), Some("ok"));

        let empty: SignupResponse = serde_json::from_str("{}").unwrap();
        assert!(empty.message.is_none());
    }

    // === Signup Tests ===

    #[tokio::test]
    async fn test_signup_sends_one_post_with_source_tag() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/waitlists/test"))
            .and(header("content-type", "application/json"))
            .and(body_json(serde_json::json!({
                "email": "a@b.com",
                "meta": {"source": "landing-page"}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .expect(1)
            .mount(&server)
            .await;

        let result = client_for(&server).signup("a@b.com").await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_submit_success_empty_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .mount(&server)
            .await;

        let outcome = client_for(&server).submit("a@b.com").await;

        assert!(outcome.is_accepted());
        assert_eq!(outcome.message(), CONFIRMATION_MESSAGE);
    }

    #[tokio::test]
    async fn test_submit_rejected_with_server_message() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(400)
                    .set_body_json(serde_json::json!({"message": "Already subscribed"})),
            )
            .mount(&server)
            .await;

        let outcome = client_for(&server).submit("a@b.com").await;

        assert!(!outcome.is_accepted());
        assert_eq!(outcome.message(), "Already subscribed");
    }

    #[tokio::test]
    async fn test_submit_rejected_without_parseable_message() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let outcome = client_for(&server).submit("a@b.com").await;

        assert!(!outcome.is_accepted());
        assert_eq!(outcome.message(), GENERIC_FAILURE_MESSAGE);
    }

    #[tokio::test]
    async fn test_submit_connectivity_failure() {
        // Nothing listens on the discard port, so the connection is refused
        // before any HTTP exchange happens.
        let client = WaitlistClient::with_config(
            WaitlistConfig::default().with_endpoint("http://127.0.0.1:9/waitlists/test"),
        );

        let outcome = client.submit("a@b.com").await;

        assert!(!outcome.is_accepted());
        assert_eq!(outcome.message(), CONNECTIVITY_FAILURE_MESSAGE);
    }

    #[tokio::test]
    async fn test_success_locks_out_further_requests() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let mut submission = crate::Submission::new();
        submission.set_email("a@b.com");

        assert!(submission.begin());
        let email = submission.email.clone();
        submission.finish(client.submit(&email).await);

        // A second attempt is refused before any request could be issued;
        // the expect(1) above verifies the provider saw exactly one POST.
        submission.set_email("second@b.com");
        assert!(!submission.begin());
    }

    #[tokio::test]
    async fn test_signup_rejected_keeps_status() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429).set_body_json(serde_json::json!({})))
            .mount(&server)
            .await;

        let error = client_for(&server).signup("a@b.com").await.unwrap_err();
        match error {
            WaitlistError::Rejected { status, message } => {
                assert_eq!(status, 429);
                assert!(message.is_none());
            }
            other => panic!("expected Rejected, got {other:?}"),
        }
    }
}
