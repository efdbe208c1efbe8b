//! Contact Form Relay - a contact-form submission pipeline.
//!
//! This library validates contact form input, verifies the submitter is human
//! through a challenge provider, renders the notification email from a
//! template and delivers it through an authenticated SMTP relay.
//!
//! # Architecture
//!
//! - **domain**: Value objects and the contact form schema validator
//! - **models**: Render context, composed message and the uniform result
//! - **error**: Error types for each pipeline stage
//! - **config**: Configuration management from environment variables
//! - **verification**: Human verifier backed by the provider's HTTP API
//! - **template**: Template renderer for the email body
//! - **mailer**: SMTP mail dispatcher
//! - **services**: The submission orchestrator
//! - **metrics**: Pipeline outcome counters
//! - **server**: Inbound RPC surface

pub mod config;
pub mod domain;
pub mod error;
pub mod mailer;
pub mod metrics;
pub mod models;
pub mod server;
pub mod services;
pub mod template;
pub mod verification;

// Re-export commonly used types
pub use config::Config;
pub use domain::{ContactForm, ContactSubmission, FieldErrors};
pub use error::{ConfigError, DeliveryError, RenderError, SubmissionError, VerificationError};
pub use mailer::{MailDispatcher, SmtpDispatcher, SmtpSettings};
pub use metrics::{Metrics, MetricsSummary};
pub use models::{RenderedMessage, SubmissionResult, TemplateContext};
pub use server::ContactFormServer;
pub use services::{ContactSubmissionService, SubmissionService, SubmissionState};
pub use template::{HandlebarsRenderer, TemplateRenderer};
pub use verification::{HumanVerifier, RecaptchaClient, RecaptchaVerifier};
