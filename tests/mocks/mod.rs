mod mock_dispatcher;
mod mock_renderer;
mod mock_verifier;

pub use mock_dispatcher::MockMailDispatcher;
pub use mock_renderer::MockTemplateRenderer;
pub use mock_verifier::MockHumanVerifier;

use std::sync::{Arc, Mutex};

/// Ordered record of collaborator calls shared by the mocks.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct CallLog {
    calls: Arc<Mutex<Vec<&'static str>>>,
}

#[allow(dead_code)]
impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, call: &'static str) {
        self.calls.lock().unwrap().push(call);
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }
}
