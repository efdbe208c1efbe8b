use super::CallLog;
use async_trait::async_trait;
use contact_form_relay::verification::HumanVerifier;
use std::sync::{Arc, Mutex};

/// Mock human verifier returning a fixed answer.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockHumanVerifier {
    human: bool,
    tokens: Arc<Mutex<Vec<String>>>,
    log: CallLog,
}

#[allow(dead_code)]
impl MockHumanVerifier {
    pub fn new(human: bool, log: CallLog) -> Self {
        Self {
            human,
            tokens: Arc::new(Mutex::new(Vec::new())),
            log,
        }
    }

    pub fn get_call_count(&self) -> usize {
        self.tokens.lock().unwrap().len()
    }

    pub fn tokens(&self) -> Vec<String> {
        self.tokens.lock().unwrap().clone()
    }
}

#[async_trait]
impl HumanVerifier for MockHumanVerifier {
    async fn verify(&self, token: &str) -> bool {
        self.log.push("verify");
        self.tokens.lock().unwrap().push(token.to_string());
        self.human
    }
}
