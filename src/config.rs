//! Configuration management for the contact form relay.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file is honored if present. The resulting [`Config`] is injected into the
//! verifier, dispatcher and orchestrator constructors; nothing reads the environment
//! after startup.

use crate::domain::EmailAddress;
use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::fmt;

/// Default human-verification endpoint.
pub const DEFAULT_VERIFY_URL: &str = "https://www.google.com/recaptcha/api/siteverify";

/// Default From display label.
pub const DEFAULT_FROM_LABEL: &str = "Website Contact Form";

/// Configuration for the contact form relay.
#[derive(Clone)]
pub struct Config {
    /// SMTP relay host
    pub smtp_host: String,

    /// SMTP port (default: 465, implicit TLS)
    pub smtp_port: u16,

    /// Sending account; used both as SMTP username and From address
    pub smtp_username: String,

    /// Sending account password
    pub smtp_password: String,

    /// Accept unverifiable relay certificates (default: false)
    pub smtp_accept_invalid_certs: bool,

    /// SMTP timeout in seconds (default: 10)
    pub smtp_timeout: u64,

    /// Address that receives contact form emails
    pub recipient: String,

    /// Display label placed before the sending address in From
    pub from_label: String,

    /// Verification provider secret
    pub recaptcha_secret: String,

    /// Public site key for the client-side widget
    pub recaptcha_site_key: String,

    /// Verification endpoint URL
    pub verify_url: String,

    /// Verification HTTP timeout in seconds (default: 5)
    pub verify_timeout: u64,

    /// Optional template file overriding the built-in asset
    pub template_path: Option<String>,

    /// Log level (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `CONTACT_FORM_HOST`: SMTP relay host
    /// - `CONTACT_FORM_SEND_EMAIL`: sending account address
    /// - `CONTACT_FORM_PASS`: sending account password
    /// - `CONTACT_FORM_RECEIVE_EMAIL`: destination address
    /// - `RECAPTCHA_SECRET_KEY`: verification provider secret
    ///
    /// Optional environment variables:
    /// - `RECAPTCHA_SITE_KEY`: public site key (default: empty)
    /// - `RECAPTCHA_VERIFY_URL`: verification endpoint
    /// - `SMTP_PORT`: SMTP port (default: 465)
    /// - `SMTP_ACCEPT_INVALID_CERTS`: relax certificate validation (default: false)
    /// - `SMTP_TIMEOUT`: SMTP timeout in seconds (default: 10)
    /// - `VERIFY_TIMEOUT`: verification timeout in seconds (default: 5)
    /// - `CONTACT_FORM_FROM_LABEL`: From display label (default: "Website Contact Form")
    /// - `CONTACT_TEMPLATE_PATH`: template file path (default: built-in)
    /// - `LOG_LEVEL`: Logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        // Missing .env is fine; real deployments inject the environment directly
        let _ = dotenvy::dotenv();

        let smtp_host = Self::required("CONTACT_FORM_HOST")?;
        let smtp_username = Self::required("CONTACT_FORM_SEND_EMAIL")?;
        let smtp_password = Self::required_raw("CONTACT_FORM_PASS")?;
        let recipient = Self::required("CONTACT_FORM_RECEIVE_EMAIL")?;
        let recaptcha_secret = Self::required("RECAPTCHA_SECRET_KEY")?;

        Self::check_address("CONTACT_FORM_SEND_EMAIL", &smtp_username)?;
        Self::check_address("CONTACT_FORM_RECEIVE_EMAIL", &recipient)?;

        let verify_url =
            env::var("RECAPTCHA_VERIFY_URL").unwrap_or_else(|_| DEFAULT_VERIFY_URL.to_string());
        if !verify_url.starts_with("http://") && !verify_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "RECAPTCHA_VERIFY_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        let smtp_port = Self::parse_env_u16("SMTP_PORT", 465)?;
        let smtp_accept_invalid_certs = Self::parse_env_bool("SMTP_ACCEPT_INVALID_CERTS", false)?;
        let smtp_timeout = Self::parse_env_u64("SMTP_TIMEOUT", 10)?;
        let verify_timeout = Self::parse_env_u64("VERIFY_TIMEOUT", 5)?;

        let from_label = env::var("CONTACT_FORM_FROM_LABEL")
            .unwrap_or_else(|_| DEFAULT_FROM_LABEL.to_string());
        let recaptcha_site_key = env::var("RECAPTCHA_SITE_KEY").unwrap_or_default();
        let template_path = env::var("CONTACT_TEMPLATE_PATH")
            .ok()
            .filter(|p| !p.trim().is_empty());
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Config {
            smtp_host,
            smtp_port,
            smtp_username,
            smtp_password,
            smtp_accept_invalid_certs,
            smtp_timeout,
            recipient,
            from_label,
            recaptcha_secret,
            recaptcha_site_key,
            verify_url,
            verify_timeout,
            template_path,
            log_level,
        })
    }

    /// Read the template source: the configured file, or the built-in asset.
    pub fn load_template(&self) -> ConfigResult<String> {
        match &self.template_path {
            Some(path) => std::fs::read_to_string(path).map_err(|e| ConfigError::FileError {
                path: path.clone(),
                reason: e.to_string(),
            }),
            None => Ok(crate::template::CONTACT_TEMPLATE.to_string()),
        }
    }

    /// Read a required, non-blank variable (trimmed).
    fn required(var_name: &str) -> ConfigResult<String> {
        let value = Self::required_raw(var_name)?;
        Ok(value.trim().to_string())
    }

    /// Read a required, non-blank variable exactly as given.
    fn required_raw(var_name: &str) -> ConfigResult<String> {
        let value =
            env::var(var_name).map_err(|_| ConfigError::MissingVar(var_name.to_string()))?;
        if value.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }
        Ok(value)
    }

    fn check_address(var_name: &str, value: &str) -> ConfigResult<()> {
        EmailAddress::new(value)
            .map(|_| ())
            .map_err(|e| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: e.to_string(),
            })
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as u16 with a default value.
    fn parse_env_u16(var_name: &str, default: u16) -> ConfigResult<u16> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a port number between 0-65535, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as a boolean flag with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" => Ok(true),
                "false" | "0" | "no" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            smtp_host: "localhost".to_string(),
            smtp_port: 465,
            smtp_username: String::new(),
            smtp_password: String::new(),
            smtp_accept_invalid_certs: false,
            smtp_timeout: 10,
            recipient: String::new(),
            from_label: DEFAULT_FROM_LABEL.to_string(),
            recaptcha_secret: String::new(),
            recaptcha_site_key: String::new(),
            verify_url: DEFAULT_VERIFY_URL.to_string(),
            verify_timeout: 5,
            template_path: None,
            log_level: "info".to_string(),
        }
    }
}

// Secrets stay out of logs
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("smtp_host", &self.smtp_host)
            .field("smtp_port", &self.smtp_port)
            .field("smtp_username", &self.smtp_username)
            .field("smtp_password", &"<redacted>")
            .field("smtp_accept_invalid_certs", &self.smtp_accept_invalid_certs)
            .field("smtp_timeout", &self.smtp_timeout)
            .field("recipient", &self.recipient)
            .field("from_label", &self.from_label)
            .field("recaptcha_secret", &"<redacted>")
            .field("recaptcha_site_key", &self.recaptcha_site_key)
            .field("verify_url", &self.verify_url)
            .field("verify_timeout", &self.verify_timeout)
            .field("template_path", &self.template_path)
            .field("log_level", &self.log_level)
            .finish()
    }
}
