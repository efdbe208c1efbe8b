//! The uniform outcome returned to the caller of the submission pipeline.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Terminal outcome of one submission.
///
/// Serializes as `{"success": true}` or `{"error": "<message>"}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionResult {
    /// The message was handed to the relay.
    Success,

    /// The pipeline stopped; the string is safe to show to the submitter.
    Error(String),
}

impl SubmissionResult {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// The error message, if the submission failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Success => None,
            Self::Error(message) => Some(message),
        }
    }
}

impl Serialize for SubmissionResult {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(1))?;
        match self {
            Self::Success => map.serialize_entry("success", &true)?,
            Self::Error(message) => map.serialize_entry("error", message)?,
        }
        map.end()
    }
}
