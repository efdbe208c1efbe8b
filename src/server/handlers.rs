//! MCP tool handlers for the contact form relay.
//!
//! This module implements the inbound RPC surface using the rmcp SDK's
//! tool_router pattern. Field validation runs here, before the submission
//! pipeline is entered, so invalid forms never cause a network call.

use crate::domain::ContactForm;
use crate::metrics::Metrics;
use crate::models::SubmissionResult;
use crate::services::SubmissionService;
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde_json::{json, Value};
use std::borrow::Cow;
use std::sync::Arc;

/// Message shown to the submitter after a successful send.
pub const SUCCESS_NOTICE: &str = "Message sent successfully.";

/// Error string returned when field validation fails.
pub const VALIDATION_FAILED: &str = "Validation failed";

/// The RPC server that accepts contact form submissions.
#[derive(Clone)]
pub struct ContactFormServer {
    submission_service: Arc<dyn SubmissionService>,
    site_key: String,
    metrics: Metrics,
    tool_router: ToolRouter<Self>,
}

// Implement ServerHandler using the tool_handler macro
#[tool_handler]
impl ServerHandler for ContactFormServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                ..Default::default()
            },
            server_info: Implementation {
                name: "contact-form-relay".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some("Contact form relay - validates a contact form, verifies the submitter is human and emails the submission to the site owner.".into()),
        }
    }
}

// Helper function to convert errors to MCP errors
fn to_mcp_error(e: impl std::fmt::Display) -> McpError {
    McpError {
        code: ErrorCode::INTERNAL_ERROR,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

fn json_result(value: &Value) -> Result<CallToolResult, McpError> {
    Ok(CallToolResult::success(vec![Content::text(
        serde_json::to_string_pretty(value).map_err(to_mcp_error)?,
    )]))
}

// Tool router implementation
#[tool_router]
impl ContactFormServer {
    /// Create a new contact form server.
    pub fn new(
        submission_service: Arc<dyn SubmissionService>,
        site_key: String,
        metrics: Metrics,
    ) -> Self {
        Self {
            submission_service,
            site_key,
            metrics,
            tool_router: Self::tool_router(),
        }
    }

    /// Validate and deliver one contact form submission.
    #[tool(
        description = "Submit a contact form (fullName, email, phone, message, token). Fields are validated first; valid submissions are checked for bots and emailed to the site owner. Returns {success: true} or {error: string}."
    )]
    async fn send_contact_form(
        &self,
        params: Parameters<ContactForm>,
    ) -> Result<CallToolResult, McpError> {
        let response = self.handle_form(params.0).await;
        json_result(&response)
    }

    /// Public site key for the client-side challenge widget.
    #[tool(description = "Get the public site key for the client-side human verification widget")]
    async fn get_site_key(&self) -> Result<CallToolResult, McpError> {
        json_result(&json!({ "siteKey": self.site_key }))
    }
}

impl ContactFormServer {
    /// Run the schema validator, then the submission pipeline.
    ///
    /// Validation failures return `{error, fieldErrors}` without touching
    /// the pipeline.
    pub async fn handle_form(&self, form: ContactForm) -> Value {
        let submission = match form.validate() {
            Ok(submission) => submission,
            Err(field_errors) => {
                self.metrics.record_validation_failure();
                tracing::debug!("Contact form rejected: {} invalid field(s)", field_errors.len());
                return json!({
                    "error": VALIDATION_FAILED,
                    "fieldErrors": field_errors,
                });
            }
        };

        let result = self.submission_service.submit(submission).await;
        let mut response = json!(result);
        if let (SubmissionResult::Success, Some(map)) = (&result, response.as_object_mut()) {
            map.insert("message".to_string(), json!(SUCCESS_NOTICE));
        }
        response
    }
}
