//! Mail dispatch over an authenticated, implicit-TLS SMTP connection.
//!
//! [`SmtpDispatcher`] opens a fresh connection per message, authenticates,
//! transmits exactly one email and reports the relay's response on failure.
//! There is no retry and no queue.

mod smtp;

pub use smtp::{SmtpDispatcher, SmtpSettings};

use crate::error::DeliveryResult;
use crate::models::RenderedMessage;
use async_trait::async_trait;

/// Transmits one composed message.
#[async_trait]
pub trait MailDispatcher: Send + Sync {
    /// Deliver `message`; each call is an independent all-or-nothing attempt.
    ///
    /// # Errors
    ///
    /// Returns `DeliveryError` carrying the relay's detail when the message
    /// cannot be built, the connection or authentication fails, or the relay
    /// does not answer in time.
    async fn send(&self, message: &RenderedMessage) -> DeliveryResult<()>;
}
