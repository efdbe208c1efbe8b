//! Contact Form Relay - Main entry point
//!
//! Loads configuration, wires the submission pipeline and serves the inbound
//! RPC entry point over stdio.

use anyhow::Result;
use contact_form_relay::{
    Config, ContactFormServer, ContactSubmissionService, HumanVerifier, MailDispatcher, Metrics,
    HandlebarsRenderer, RecaptchaClient, RecaptchaVerifier, SmtpDispatcher, SmtpSettings,
    SubmissionService, TemplateRenderer,
};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            // Logging is not set up yet; the subscriber needs the configured level
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Initialize logging (stderr only; stdout carries the RPC transport)
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Configuration loaded successfully");
    info!(
        "Relaying contact forms via {}:{}",
        config.smtp_host, config.smtp_port
    );

    let template = match config.load_template() {
        Ok(template) => template,
        Err(e) => {
            error!("Failed to load template: {}", e);
            return Err(e.into());
        }
    };

    let metrics = Metrics::new();

    let verifier =
        Arc::new(RecaptchaVerifier::new(RecaptchaClient::new(&config))) as Arc<dyn HumanVerifier>;
    let renderer = Arc::new(HandlebarsRenderer::new()) as Arc<dyn TemplateRenderer>;
    let dispatcher =
        Arc::new(SmtpDispatcher::new(SmtpSettings::from(&config))) as Arc<dyn MailDispatcher>;

    let submission_service = Arc::new(
        ContactSubmissionService::new(&config, template, verifier, renderer, dispatcher)
            .with_metrics(metrics.clone()),
    ) as Arc<dyn SubmissionService>;

    let server = ContactFormServer::new(
        submission_service,
        config.recaptcha_site_key.clone(),
        metrics.clone(),
    );

    info!("Starting contact form server with stdio transport");
    contact_form_relay::server::run_server(server).await?;

    info!("Contact form relay shutdown complete: {:?}", metrics.summary());
    Ok(())
}
