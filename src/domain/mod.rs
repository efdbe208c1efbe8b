//! Domain value objects and the contact form schema validator.
//!
//! This module contains type-safe wrappers for email addresses and phone
//! numbers, plus the [`ContactForm`] → [`ContactSubmission`] validation step.
//! These types validate at construction time and prevent invalid input from
//! reaching the submission pipeline.

pub mod email;
pub mod errors;
pub mod phone;
pub mod submission;

pub use email::EmailAddress;
pub use errors::ValidationError;
pub use phone::PhoneNumber;
pub use submission::{
    ContactForm, ContactSubmission, FieldErrors, MESSAGE_MAX_CHARS, MESSAGE_MIN_CHARS,
};
