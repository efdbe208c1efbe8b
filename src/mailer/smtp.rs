//! SMTP dispatcher backed by `lettre`.

use super::MailDispatcher;
use crate::config::Config;
use crate::error::{DeliveryError, DeliveryResult};
use crate::models::RenderedMessage;
use async_trait::async_trait;
use lettre::message::{header::ContentType, Mailbox};
use lettre::transport::smtp::authentication::Credentials;
use lettre::transport::smtp::client::{Tls, TlsParameters};
use lettre::{Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use std::fmt;
use std::time::Duration;

/// Connection and identity settings for the relay.
#[derive(Clone)]
pub struct SmtpSettings {
    /// Relay host
    pub host: String,

    /// Implicit-TLS port
    pub port: u16,

    /// Sending account; also the From address
    pub username: String,

    /// Sending account password
    pub password: String,

    /// Accept certificates that cannot be verified
    pub accept_invalid_certs: bool,

    /// Upper bound for one delivery attempt
    pub timeout: Duration,

    /// Display label in From
    pub from_label: String,
}

impl From<&Config> for SmtpSettings {
    fn from(config: &Config) -> Self {
        Self {
            host: config.smtp_host.clone(),
            port: config.smtp_port,
            username: config.smtp_username.clone(),
            password: config.smtp_password.clone(),
            accept_invalid_certs: config.smtp_accept_invalid_certs,
            timeout: Duration::from_secs(config.smtp_timeout),
            from_label: config.from_label.clone(),
        }
    }
}

impl fmt::Debug for SmtpSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmtpSettings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("accept_invalid_certs", &self.accept_invalid_certs)
            .field("timeout", &self.timeout)
            .field("from_label", &self.from_label)
            .finish()
    }
}

/// Sends each message through its own authenticated SMTPS connection.
#[derive(Debug, Clone)]
pub struct SmtpDispatcher {
    settings: SmtpSettings,
}

impl SmtpDispatcher {
    pub fn new(settings: SmtpSettings) -> Self {
        if settings.accept_invalid_certs {
            tracing::warn!(
                "SMTP certificate validation is disabled for {}",
                settings.host
            );
        }
        Self { settings }
    }

    /// Build the RFC 5322 message: From, Reply-To, To, Subject and an HTML body.
    pub fn build_email(&self, message: &RenderedMessage) -> DeliveryResult<Message> {
        let sender = parse_address(&self.settings.username)?;
        let from = Mailbox::new(Some(self.settings.from_label.clone()), sender);
        let reply_to = Mailbox::new(None, parse_address(message.reply_to())?);
        let to = Mailbox::new(None, parse_address(message.recipient())?);

        Message::builder()
            .from(from)
            .reply_to(reply_to)
            .to(to)
            .subject(message.subject_line())
            .header(ContentType::TEXT_HTML)
            .body(message.html_body().to_string())
            .map_err(|e| DeliveryError::Message(e.to_string()))
    }

    /// Build a single-use transport: implicit TLS on the configured port.
    fn build_transport(&self) -> DeliveryResult<AsyncSmtpTransport<Tokio1Executor>> {
        let tls = TlsParameters::builder(self.settings.host.clone())
            .dangerous_accept_invalid_certs(self.settings.accept_invalid_certs)
            .build()
            .map_err(|e| DeliveryError::Tls(e.to_string()))?;

        let credentials = Credentials::new(
            self.settings.username.clone(),
            self.settings.password.clone(),
        );

        Ok(
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(self.settings.host.as_str())
                .port(self.settings.port)
                .tls(Tls::Wrapper(tls))
                .credentials(credentials)
                .timeout(Some(self.settings.timeout))
                .build(),
        )
    }
}

#[async_trait]
impl MailDispatcher for SmtpDispatcher {
    async fn send(&self, message: &RenderedMessage) -> DeliveryResult<()> {
        let email = self.build_email(message)?;
        let transport = self.build_transport()?;

        tracing::debug!(
            "Sending via {}:{} (subject: {})",
            self.settings.host,
            self.settings.port,
            message.subject_line()
        );

        match tokio::time::timeout(self.settings.timeout, transport.send(email)).await {
            Ok(Ok(response)) => {
                tracing::debug!("Relay accepted message (code {})", response.code());
                Ok(())
            }
            Ok(Err(e)) => Err(DeliveryError::Transport(e.to_string())),
            Err(_) => Err(DeliveryError::Timeout),
        }
    }
}

fn parse_address(address: &str) -> DeliveryResult<Address> {
    address
        .parse::<Address>()
        .map_err(|e| DeliveryError::InvalidAddress {
            address: address.to_string(),
            reason: e.to_string(),
        })
}
