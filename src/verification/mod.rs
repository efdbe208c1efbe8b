//! Human verification against the challenge provider.
//!
//! [`RecaptchaClient`] is a synchronous HTTP client for the provider's
//! site-verify endpoint. [`RecaptchaVerifier`] wraps it behind the async
//! [`HumanVerifier`] trait, running requests on tokio's blocking pool.

mod async_wrapper;
pub use async_wrapper::{HumanVerifier, RecaptchaVerifier};

use crate::config::Config;
use crate::error::{VerificationError, VerificationResult};
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;

/// Response body of the site-verify endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteVerifyResponse {
    /// Whether the token was valid for this site
    pub success: bool,

    /// Timestamp of the challenge load
    #[serde(default)]
    pub challenge_ts: Option<String>,

    /// Hostname of the site where the challenge was solved
    #[serde(default)]
    pub hostname: Option<String>,

    /// Provider error codes, present when `success` is false
    #[serde(default, rename = "error-codes")]
    pub error_codes: Vec<String>,
}

/// HTTP client for the challenge provider's site-verify endpoint.
///
/// This client uses `ureq` for synchronous HTTP requests and can be called
/// from async contexts using `tokio::task::spawn_blocking`.
#[derive(Clone)]
pub struct RecaptchaClient {
    /// Site-verify endpoint URL
    verify_url: String,

    /// Server-held provider secret
    secret: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,
}

impl RecaptchaClient {
    /// Create a new RecaptchaClient from configuration.
    pub fn new(config: &Config) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.verify_timeout))
            .build();

        Self {
            verify_url: config.verify_url.clone(),
            secret: config.recaptcha_secret.clone(),
            agent: Arc::new(agent),
        }
    }

    /// Create a RecaptchaClient with a custom endpoint (useful for testing).
    #[doc(hidden)]
    pub fn with_endpoint(verify_url: String, secret: String) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(5))
            .build();

        Self {
            verify_url,
            secret,
            agent: Arc::new(agent),
        }
    }

    /// Ask the provider whether `token` was produced by a solved challenge.
    ///
    /// Sends `secret` and `response` as query parameters of a single POST.
    /// No retry is attempted.
    pub fn site_verify(&self, token: &str) -> VerificationResult<SiteVerifyResponse> {
        if token.trim().is_empty() {
            return Err(VerificationError::MissingToken);
        }

        tracing::debug!("POST {}", self.verify_url);

        let response = self
            .agent
            .post(&self.verify_url)
            .query("secret", &self.secret)
            .query("response", token)
            .call()
            .map_err(Self::map_error)?;

        let body = response
            .into_string()
            .map_err(|e| VerificationError::HttpError(e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| VerificationError::JsonError(e.to_string()))
    }

    /// Whether the transport failed because a socket read or write timed out.
    fn is_timeout(transport: &ureq::Transport) -> bool {
        transport.kind() == ureq::ErrorKind::Io
            && std::error::Error::source(transport)
                .and_then(|e| e.downcast_ref::<std::io::Error>())
                .is_some_and(|e| {
                    matches!(
                        e.kind(),
                        std::io::ErrorKind::TimedOut | std::io::ErrorKind::WouldBlock
                    )
                })
    }

    /// Map a ureq error to a VerificationError.
    fn map_error(error: ureq::Error) -> VerificationError {
        match error {
            ureq::Error::Status(code, response) => {
                let message = response
                    .into_string()
                    .unwrap_or_else(|_| "Unknown error".to_string());
                VerificationError::ApiError {
                    status: code,
                    message,
                }
            }
            ureq::Error::Transport(transport) => {
                if transport.kind() == ureq::ErrorKind::ConnectionFailed {
                    VerificationError::HttpError("Connection failed".to_string())
                } else if Self::is_timeout(&transport) {
                    VerificationError::Timeout
                } else {
                    VerificationError::HttpError(transport.to_string())
                }
            }
        }
    }
}
