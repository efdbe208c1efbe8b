//! Submission orchestrator.
//!
//! Sequences human verification, template rendering and mail dispatch for one
//! validated submission, and folds every outcome into a [`SubmissionResult`].
//! Each step awaits the previous one; any failure stops the pipeline.

use crate::config::Config;
use crate::domain::ContactSubmission;
use crate::error::SubmissionError;
use crate::mailer::MailDispatcher;
use crate::metrics::{CallTimer, Metrics};
use crate::models::{RenderedMessage, SubmissionResult, TemplateContext};
use crate::template::TemplateRenderer;
use crate::verification::HumanVerifier;
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

/// Pipeline position of a single submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionState {
    Received,
    Verifying,
    Rendering,
    Dispatching,
    Done,
    Failed(String),
}

impl fmt::Display for SubmissionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Received => write!(f, "received"),
            Self::Verifying => write!(f, "verifying"),
            Self::Rendering => write!(f, "rendering"),
            Self::Dispatching => write!(f, "dispatching"),
            Self::Done => write!(f, "done"),
            Self::Failed(reason) => write!(f, "failed: {}", reason),
        }
    }
}

/// Submission service trait for the inbound entry point.
#[async_trait]
pub trait SubmissionService: Send + Sync {
    /// Run one validated submission through the pipeline.
    ///
    /// Never fails: every error is converted into `SubmissionResult::Error`.
    async fn submit(&self, submission: ContactSubmission) -> SubmissionResult;
}

/// Default implementation of SubmissionService.
pub struct ContactSubmissionService {
    verifier: Arc<dyn HumanVerifier>,
    renderer: Arc<dyn TemplateRenderer>,
    dispatcher: Arc<dyn MailDispatcher>,
    template: String,
    recipient: String,
    metrics: Metrics,
}

impl ContactSubmissionService {
    /// Create a new submission service.
    ///
    /// `template` is the template source rendered for every submission; the
    /// destination address comes from `config`.
    pub fn new(
        config: &Config,
        template: String,
        verifier: Arc<dyn HumanVerifier>,
        renderer: Arc<dyn TemplateRenderer>,
        dispatcher: Arc<dyn MailDispatcher>,
    ) -> Self {
        Self {
            verifier,
            renderer,
            dispatcher,
            template,
            recipient: config.recipient.clone(),
            metrics: Metrics::new(),
        }
    }

    /// Share an existing metrics collector.
    pub fn with_metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    async fn process(
        &self,
        submission: &ContactSubmission,
        state: &mut SubmissionState,
    ) -> Result<(), SubmissionError> {
        Self::advance(state, SubmissionState::Verifying);
        let timer = CallTimer::start();
        let human = self
            .verifier
            .verify(submission.verification_token())
            .await;
        self.metrics.record_verify_duration(timer.elapsed());
        if !human {
            self.metrics.record_verification_rejected();
            return Err(SubmissionError::VerificationRejected);
        }

        Self::advance(state, SubmissionState::Rendering);
        let context = TemplateContext::from(submission);
        let html_body = self
            .renderer
            .render(&self.template, &context)
            .inspect_err(|_| self.metrics.record_render_failure())?;
        let message = RenderedMessage::compose(submission, html_body, self.recipient.as_str());

        Self::advance(state, SubmissionState::Dispatching);
        let timer = CallTimer::start();
        let sent = self.dispatcher.send(&message).await;
        self.metrics.record_dispatch_duration(timer.elapsed());
        sent.inspect_err(|_| self.metrics.record_delivery_failure())?;

        self.metrics.record_delivered();
        Self::advance(state, SubmissionState::Done);
        Ok(())
    }

    fn advance(state: &mut SubmissionState, next: SubmissionState) {
        tracing::debug!("Submission {} -> {}", state, next);
        *state = next;
    }
}

#[async_trait]
impl SubmissionService for ContactSubmissionService {
    async fn submit(&self, submission: ContactSubmission) -> SubmissionResult {
        self.metrics.record_submission();
        tracing::info!(
            "Contact submission received from @{}",
            submission.email().domain()
        );

        let mut state = SubmissionState::Received;
        match self.process(&submission, &mut state).await {
            Ok(()) => {
                tracing::info!("Contact submission delivered");
                SubmissionResult::Success
            }
            Err(e) => {
                let stage = state.to_string();
                Self::advance(&mut state, SubmissionState::Failed(e.to_string()));
                match &e {
                    SubmissionError::VerificationRejected => {
                        tracing::warn!("Submission stopped while {}: {}", stage, e);
                    }
                    _ => tracing::error!("Submission stopped while {}: {}", stage, e),
                }
                SubmissionResult::Error(e.user_message())
            }
        }
    }
}
