//! Data models flowing through the submission pipeline.
//!
//! This module contains the render context, the composed outbound message and
//! the uniform submission result.

pub mod message;
pub mod result;

pub use message::{RenderedMessage, TemplateContext};
pub use result::SubmissionResult;
