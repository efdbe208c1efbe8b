//! Application service layer.
//!
//! The submission service owns the pipeline state machine and the uniform
//! result contract. It depends only on the verifier, renderer and dispatcher
//! traits, so each collaborator can be replaced independently.

mod submission_service;

pub use submission_service::{ContactSubmissionService, SubmissionService, SubmissionState};
