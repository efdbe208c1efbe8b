use super::CallLog;
use async_trait::async_trait;
use contact_form_relay::error::{DeliveryError, DeliveryResult};
use contact_form_relay::mailer::MailDispatcher;
use contact_form_relay::models::RenderedMessage;
use std::sync::{Arc, Mutex};

/// Mock dispatcher recording every message it is asked to send.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockMailDispatcher {
    failure: Option<String>,
    sent: Arc<Mutex<Vec<RenderedMessage>>>,
    log: CallLog,
}

#[allow(dead_code)]
impl MockMailDispatcher {
    pub fn new(log: CallLog) -> Self {
        Self {
            failure: None,
            sent: Arc::new(Mutex::new(Vec::new())),
            log,
        }
    }

    /// A dispatcher whose relay always rejects with `detail`.
    pub fn rejecting(detail: &str, log: CallLog) -> Self {
        Self {
            failure: Some(detail.to_string()),
            ..Self::new(log)
        }
    }

    pub fn get_call_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    pub fn sent(&self) -> Vec<RenderedMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl MailDispatcher for MockMailDispatcher {
    async fn send(&self, message: &RenderedMessage) -> DeliveryResult<()> {
        self.log.push("dispatch");
        self.sent.lock().unwrap().push(message.clone());
        match &self.failure {
            Some(detail) => Err(DeliveryError::Transport(detail.clone())),
            None => Ok(()),
        }
    }
}
