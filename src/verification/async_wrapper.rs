//! Async human verifier over the synchronous RecaptchaClient.
//!
//! Requests run on tokio's blocking pool via `tokio::task::spawn_blocking`,
//! so the HTTP call never stalls the async runtime.

use super::RecaptchaClient;
use async_trait::async_trait;
use std::sync::Arc;

/// Confirms a one-time challenge token came from a real user.
#[async_trait]
pub trait HumanVerifier: Send + Sync {
    /// Returns `true` only when the provider explicitly reports success.
    ///
    /// Missing tokens, provider failures, transport errors and timeouts all
    /// return `false`.
    async fn verify(&self, token: &str) -> bool;
}

/// Async wrapper around RecaptchaClient.
#[derive(Clone)]
pub struct RecaptchaVerifier {
    client: Arc<RecaptchaClient>,
}

impl RecaptchaVerifier {
    pub fn new(client: RecaptchaClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

#[async_trait]
impl HumanVerifier for RecaptchaVerifier {
    async fn verify(&self, token: &str) -> bool {
        let client = self.client.clone();
        let token = token.to_string();

        let outcome = tokio::task::spawn_blocking(move || client.site_verify(&token)).await;

        match outcome {
            Ok(Ok(response)) => {
                if !response.success {
                    tracing::warn!(
                        "Verification provider rejected token: {:?}",
                        response.error_codes
                    );
                }
                response.success
            }
            Ok(Err(e)) => {
                tracing::warn!("Human verification failed: {}", e);
                false
            }
            Err(e) => {
                tracing::error!("Verification task join error: {}", e);
                false
            }
        }
    }
}
