//! Template rendering for the notification email body.
//!
//! The orchestrator only sees the narrow [`TemplateRenderer`] interface, so the
//! engine behind it can be swapped without touching the pipeline. Templates are
//! static assets: the built-in one ships in `templates/contact.hbs`, and a
//! different file can be supplied through configuration.

use crate::error::{RenderError, RenderResult};
use crate::models::TemplateContext;
use handlebars::Handlebars;

/// Built-in contact notification template.
pub const CONTACT_TEMPLATE: &str = include_str!("../../templates/contact.hbs");

const TEMPLATE_NAME: &str = "contact";

/// Turns template source plus a context into an HTML body.
///
/// Implementations must be deterministic and free of side effects: rendering
/// the same template and context twice yields identical output.
pub trait TemplateRenderer: Send + Sync {
    /// Compile `template` and substitute the context fields.
    ///
    /// # Errors
    ///
    /// Returns `RenderError` if the template source is malformed or cannot be
    /// rendered against the context.
    fn render(&self, template: &str, context: &TemplateContext) -> RenderResult<String>;
}

/// Default renderer backed by the `handlebars` crate.
///
/// Each call compiles into a fresh registry; no state is kept between
/// requests. `{{field}}` output is HTML-escaped, `{{{field}}}` is raw, and
/// unknown fields render empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct HandlebarsRenderer;

impl HandlebarsRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for HandlebarsRenderer {
    fn render(&self, template: &str, context: &TemplateContext) -> RenderResult<String> {
        let mut registry = Handlebars::new();
        registry
            .register_template_string(TEMPLATE_NAME, template)
            .map_err(|e| RenderError::Syntax(e.to_string()))?;

        registry
            .render(TEMPLATE_NAME, context)
            .map_err(|e| RenderError::Render(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> TemplateContext {
        TemplateContext {
            full_name: "Jane Doe".to_string(),
            email: "jane@x.com".to_string(),
            phone: "2025551234".to_string(),
            message: "Hello, this is a test message.".to_string(),
        }
    }

    fn render(source: &str) -> RenderResult<String> {
        HandlebarsRenderer::new().render(source, &context())
    }

    #[test]
    fn test_builtin_template_contains_all_fields() {
        let html = render(CONTACT_TEMPLATE).unwrap();
        assert!(html.contains("Jane Doe"));
        assert!(html.contains("mailto:jane@x.com"));
        assert!(html.contains("2025551234"));
        assert!(html.contains("Hello, this is a test message."));
        assert!(!html.contains("{{"));
        assert!(!html.contains("Fields: fullName"));
    }

    #[test]
    fn test_render_is_idempotent() {
        let first = render(CONTACT_TEMPLATE).unwrap();
        let second = render(CONTACT_TEMPLATE).unwrap();
        assert_eq!(first.as_bytes(), second.as_bytes());
    }

    #[test]
    fn test_render_swapped_template() {
        assert_eq!(render("<h1>{{fullName}}</h1>").unwrap(), "<h1>Jane Doe</h1>");
    }

    #[test]
    fn test_double_brace_escapes_html() {
        let context = TemplateContext {
            message: "Hi <b>there</b> & \"you\"".to_string(),
            ..context()
        };
        let renderer = HandlebarsRenderer::new();

        assert_eq!(
            renderer.render("{{message}}", &context).unwrap(),
            "Hi &lt;b&gt;there&lt;/b&gt; &amp; &quot;you&quot;"
        );
        assert_eq!(
            renderer.render("{{{message}}}", &context).unwrap(),
            "Hi <b>there</b> & \"you\""
        );
    }

    #[test]
    fn test_comments_and_unknown_fields() {
        assert_eq!(render("a{{! note }}b").unwrap(), "ab");
        assert_eq!(render("[{{company}}]").unwrap(), "[]");
    }

    #[test]
    fn test_standard_handlebars_constructs() {
        assert_eq!(
            render("{{#if phone}}Phone: {{phone}}{{/if}}").unwrap(),
            "Phone: 2025551234"
        );
        assert_eq!(render("<p>\n  {{~fullName~}}\n</p>").unwrap(), "<p>Jane Doe</p>");
        assert_eq!(render("{{this.fullName}}").unwrap(), "Jane Doe");
        assert_eq!(
            render(r"\{{literal}} {{fullName}}").unwrap(),
            "{{literal}} Jane Doe"
        );
    }

    #[test]
    fn test_malformed_template_is_syntax_error() {
        let err = render("<p>{{#if fullName}}unclosed</p>").unwrap_err();
        assert!(matches!(err, RenderError::Syntax(_)));
    }
}
