//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was empty.
    Required(&'static str),

    /// The provided email address is invalid.
    InvalidEmail(String),

    /// The provided phone number is invalid.
    InvalidPhone(String),

    /// The message is shorter than the minimum length.
    MessageTooShort { min: usize, actual: usize },

    /// The message is longer than the maximum length.
    MessageTooLong { max: usize, actual: usize },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required(field) => write!(f, "{} is required", field),
            Self::InvalidEmail(email) => write!(f, "Invalid email address: {}", email),
            Self::InvalidPhone(phone) => write!(f, "Invalid phone number: {}", phone),
            Self::MessageTooShort { min, actual } => {
                write!(f, "Message has {} characters, minimum is {}", actual, min)
            }
            Self::MessageTooLong { max, actual } => {
                write!(f, "Message has {} characters, maximum is {}", actual, max)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
