use super::CallLog;
use contact_form_relay::error::{RenderError, RenderResult};
use contact_form_relay::models::TemplateContext;
use contact_form_relay::template::{HandlebarsRenderer, TemplateRenderer};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Mock renderer delegating to the real engine, or failing on demand.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockTemplateRenderer {
    fail: bool,
    calls: Arc<AtomicUsize>,
    log: CallLog,
}

#[allow(dead_code)]
impl MockTemplateRenderer {
    pub fn new(log: CallLog) -> Self {
        Self {
            fail: false,
            calls: Arc::new(AtomicUsize::new(0)),
            log,
        }
    }

    pub fn failing(log: CallLog) -> Self {
        Self {
            fail: true,
            ..Self::new(log)
        }
    }

    pub fn get_call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl TemplateRenderer for MockTemplateRenderer {
    fn render(&self, template: &str, context: &TemplateContext) -> RenderResult<String> {
        self.log.push("render");
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(RenderError::Syntax("forced failure".to_string()));
        }
        HandlebarsRenderer::new().render(template, context)
    }
}
