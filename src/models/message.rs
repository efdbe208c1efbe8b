//! Render context and the composed outbound message.

use crate::domain::ContactSubmission;
use serde::Serialize;

/// The four business fields a template may reference.
///
/// Template tags use the camelCase names: `fullName`, `email`, `phone`, `message`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateContext {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl From<&ContactSubmission> for TemplateContext {
    fn from(submission: &ContactSubmission) -> Self {
        Self {
            full_name: submission.full_name().to_string(),
            email: submission.email().to_string(),
            phone: submission.phone().to_string(),
            message: submission.message().to_string(),
        }
    }
}

/// A fully composed email, ready for the mail dispatcher.
///
/// Built once per submission and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedMessage {
    subject_line: String,
    html_body: String,
    reply_to: String,
    recipient: String,
}

impl RenderedMessage {
    /// Compose the message for a submission.
    ///
    /// The subject names the submitter and replies go back to the submitter's address.
    pub fn compose(
        submission: &ContactSubmission,
        html_body: String,
        recipient: impl Into<String>,
    ) -> Self {
        Self {
            subject_line: format!("A contact form from - {}", submission.full_name()),
            html_body,
            reply_to: submission.email().to_string(),
            recipient: recipient.into(),
        }
    }

    pub fn subject_line(&self) -> &str {
        &self.subject_line
    }

    pub fn html_body(&self) -> &str {
        &self.html_body
    }

    pub fn reply_to(&self) -> &str {
        &self.reply_to
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }
}
