//! Error types for the contact form relay.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Field-level validation errors live in [`crate::domain`] because they never reach
//! the submission pipeline.

use thiserror::Error;

/// Message returned to the submitter when the human check fails.
pub const BOT_SENTINEL: &str = "It's a bot! ❤️ ❌ 🤖";

/// Message returned to the submitter when the email body cannot be composed.
pub const RENDER_FAILURE_MESSAGE: &str = "Unable to compose the message";

/// Errors that can occur when talking to the human-verification provider.
#[derive(Error, Debug)]
pub enum VerificationError {
    /// The token was empty or contained only whitespace
    #[error("Verification token is missing")]
    MissingToken,

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Provider returned an error status code
    #[error("Verification provider error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// Failed to parse the provider's JSON response
    #[error("JSON parse error: {0}")]
    JsonError(String),

    /// Network timeout
    #[error("Verification request timeout")]
    Timeout,
}

/// Errors that can occur while compiling or rendering a template.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// Template source could not be compiled
    #[error("Template syntax error: {0}")]
    Syntax(String),

    /// A compiled template failed during substitution
    #[error("Template rendering failed: {0}")]
    Render(String),
}

/// Errors that can occur while delivering a message to the SMTP relay.
#[derive(Error, Debug)]
pub enum DeliveryError {
    /// A header address could not be parsed
    #[error("Invalid address {address}: {reason}")]
    InvalidAddress { address: String, reason: String },

    /// The message could not be assembled
    #[error("Failed to build message: {0}")]
    Message(String),

    /// TLS parameters could not be constructed
    #[error("TLS setup failed: {0}")]
    Tls(String),

    /// Connection, authentication or protocol failure reported by the relay
    #[error("{0}")]
    Transport(String),

    /// The relay did not answer in time
    #[error("SMTP request timeout")]
    Timeout,
}

/// Terminal failure of a single submission.
#[derive(Error, Debug)]
pub enum SubmissionError {
    /// The human check rejected the token
    #[error("Human verification rejected the submission")]
    VerificationRejected,

    /// The email body could not be rendered
    #[error("Render failed: {0}")]
    Render(#[from] RenderError),

    /// The SMTP relay refused or failed the delivery
    #[error("Delivery failed: {0}")]
    Delivery(#[from] DeliveryError),
}

impl SubmissionError {
    /// The string surfaced to the submitter.
    ///
    /// Render failures are opaque; delivery failures carry the relay's detail.
    pub fn user_message(&self) -> String {
        match self {
            Self::VerificationRejected => BOT_SENTINEL.to_string(),
            Self::Render(_) => RENDER_FAILURE_MESSAGE.to_string(),
            Self::Delivery(e) => e.to_string(),
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Failed to read a file referenced by the configuration
    #[error("Failed to read {path}: {reason}")]
    FileError { path: String, reason: String },
}

/// Convenience type alias for Results with VerificationError
pub type VerificationResult<T> = Result<T, VerificationError>;

/// Convenience type alias for Results with RenderError
pub type RenderResult<T> = Result<T, RenderError>;

/// Convenience type alias for Results with DeliveryError
pub type DeliveryResult<T> = Result<T, DeliveryError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConfigError::MissingVar("CONTACT_FORM_HOST".to_string());
        assert_eq!(
            err.to_string(),
            "Missing required environment variable: CONTACT_FORM_HOST"
        );

        let err = VerificationError::Timeout;
        assert_eq!(err.to_string(), "Verification request timeout");

        let err = RenderError::Syntax("unclosed block".to_string());
        assert_eq!(err.to_string(), "Template syntax error: unclosed block");
    }

    #[test]
    fn test_user_message_for_rejection_is_sentinel() {
        assert_eq!(
            SubmissionError::VerificationRejected.user_message(),
            "It's a bot! ❤️ ❌ 🤖"
        );
    }

    #[test]
    fn test_user_message_hides_render_internals() {
        let err = SubmissionError::from(RenderError::Syntax("unclosed tag".to_string()));
        let message = err.user_message();
        assert_eq!(message, RENDER_FAILURE_MESSAGE);
        assert!(!message.contains("unclosed"));
    }

    #[test]
    fn test_user_message_carries_relay_detail() {
        let err = SubmissionError::from(DeliveryError::Transport(
            "permanent error (535): 5.7.8 Authentication failed".to_string(),
        ));
        assert_eq!(
            err.user_message(),
            "permanent error (535): 5.7.8 Authentication failed"
        );
    }
}
