//! Contact form input and the schema validator.
//!
//! [`ContactForm`] is the raw payload as the browser sends it. [`ContactForm::validate`]
//! is the only way to obtain a [`ContactSubmission`], so anything that reaches the
//! submission pipeline already satisfies every field rule. Validation is pure and
//! performs no I/O.

use super::email::EmailAddress;
use super::errors::ValidationError;
use super::phone::PhoneNumber;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Minimum message length in characters.
pub const MESSAGE_MIN_CHARS: usize = 10;

/// Maximum message length in characters.
pub const MESSAGE_MAX_CHARS: usize = 1000;

/// Raw contact form payload.
#[derive(Debug, Clone, Default, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactForm {
    /// Submitter's full name
    #[serde(default)]
    pub full_name: String,

    /// Submitter's email address
    #[serde(default)]
    pub email: String,

    /// Submitter's phone number
    #[serde(default)]
    pub phone: String,

    /// Free-form message
    #[serde(default)]
    pub message: String,

    /// One-time token produced by the client-side challenge widget
    #[serde(default, alias = "verificationToken")]
    pub token: String,
}

/// A contact form that passed every field rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    full_name: String,
    email: EmailAddress,
    phone: PhoneNumber,
    message: String,
    verification_token: String,
}

impl ContactSubmission {
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    pub fn phone(&self) -> &PhoneNumber {
        &self.phone
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The challenge token. May be empty: the human verifier decides what an
    /// empty token means, never the form.
    pub fn verification_token(&self) -> &str {
        &self.verification_token
    }
}

/// Field name to human-readable error, one entry per failing field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    fn insert(&mut self, field: &'static str, message: &str) {
        self.0.insert(field, message.to_string());
    }

    /// Error message for a field, if that field failed.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate over `(field, message)` pairs in field-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

impl ContactForm {
    /// Check every field rule and produce a typed submission.
    ///
    /// All failing fields are reported together, each with the message the
    /// browser form shows under the field.
    ///
    /// # Errors
    ///
    /// Returns the [`FieldErrors`] for every field that failed.
    pub fn validate(&self) -> Result<ContactSubmission, FieldErrors> {
        let mut errors = FieldErrors::default();

        if let Err(e) = Self::check_full_name(&self.full_name) {
            errors.insert("fullName", Self::field_message(&e));
        }
        let email = EmailAddress::new(self.email.as_str());
        if let Err(e) = &email {
            errors.insert("email", Self::email_message(&self.email, e));
        }
        let phone = PhoneNumber::new(self.phone.as_str());
        if let Err(e) = &phone {
            errors.insert("phone", Self::phone_message(&self.phone, e));
        }
        if let Err(e) = Self::check_message(&self.message) {
            errors.insert("message", Self::field_message(&e));
        }

        match (email, phone) {
            (Ok(email), Ok(phone)) if errors.is_empty() => Ok(ContactSubmission {
                full_name: self.full_name.clone(),
                email,
                phone,
                message: self.message.clone(),
                verification_token: self.token.clone(),
            }),
            _ => Err(errors),
        }
    }

    fn check_full_name(full_name: &str) -> Result<(), ValidationError> {
        if full_name.trim().is_empty() {
            return Err(ValidationError::Required("Full name"));
        }
        Ok(())
    }

    fn check_message(message: &str) -> Result<(), ValidationError> {
        let actual = message.chars().count();
        if actual < MESSAGE_MIN_CHARS {
            return Err(ValidationError::MessageTooShort {
                min: MESSAGE_MIN_CHARS,
                actual,
            });
        }
        if actual > MESSAGE_MAX_CHARS {
            return Err(ValidationError::MessageTooLong {
                max: MESSAGE_MAX_CHARS,
                actual,
            });
        }
        Ok(())
    }

    fn email_message(raw: &str, error: &ValidationError) -> &'static str {
        if raw.is_empty() {
            "Email is required"
        } else {
            Self::field_message(error)
        }
    }

    fn phone_message(raw: &str, error: &ValidationError) -> &'static str {
        if raw.is_empty() {
            "Phone is required"
        } else {
            Self::field_message(error)
        }
    }

    fn field_message(error: &ValidationError) -> &'static str {
        match error {
            ValidationError::Required(_) => "Full name is required",
            ValidationError::InvalidEmail(_) => "Must be a valid email",
            ValidationError::InvalidPhone(_) => "Must be a valid phone number",
            ValidationError::MessageTooShort { .. } => "Message must be at least 10 characters",
            ValidationError::MessageTooLong { .. } => "Message must be less than 1000 characters",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ContactForm {
        ContactForm {
            full_name: "Jane Doe".to_string(),
            email: "jane@x.com".to_string(),
            phone: "2025551234".to_string(),
            message: "Hello, this is a test message.".to_string(),
            token: "token-abc".to_string(),
        }
    }

    #[test]
    fn test_valid_form_produces_submission() {
        let submission = valid_form().validate().unwrap();
        assert_eq!(submission.full_name(), "Jane Doe");
        assert_eq!(submission.email().as_str(), "jane@x.com");
        assert_eq!(submission.phone().as_str(), "2025551234");
        assert_eq!(submission.message(), "Hello, this is a test message.");
        assert_eq!(submission.verification_token(), "token-abc");
    }

    #[test]
    fn test_short_phone_rejected() {
        let form = ContactForm {
            phone: "123".to_string(),
            ..valid_form()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("phone"), Some("Must be a valid phone number"));
    }

    #[test]
    fn test_short_message_rejected() {
        let form = ContactForm {
            message: "short".to_string(),
            ..valid_form()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(
            errors.get("message"),
            Some("Message must be at least 10 characters")
        );
    }

    #[test]
    fn test_message_length_bounds_inclusive() {
        let at_min = ContactForm {
            message: "a".repeat(MESSAGE_MIN_CHARS),
            ..valid_form()
        };
        assert!(at_min.validate().is_ok());

        let at_max = ContactForm {
            message: "a".repeat(MESSAGE_MAX_CHARS),
            ..valid_form()
        };
        assert!(at_max.validate().is_ok());

        let over_max = ContactForm {
            message: "a".repeat(MESSAGE_MAX_CHARS + 1),
            ..valid_form()
        };
        assert_eq!(
            over_max.validate().unwrap_err().get("message"),
            Some("Message must be less than 1000 characters")
        );
    }

    #[test]
    fn test_message_length_counts_characters() {
        // Ten characters, thirty bytes
        let form = ContactForm {
            message: "日本語のメッセージです".chars().take(10).collect(),
            ..valid_form()
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_required_messages_for_empty_fields() {
        let errors = ContactForm::default().validate().unwrap_err();
        assert_eq!(errors.len(), 4);
        assert_eq!(errors.get("fullName"), Some("Full name is required"));
        assert_eq!(errors.get("email"), Some("Email is required"));
        assert_eq!(errors.get("phone"), Some("Phone is required"));
        assert_eq!(
            errors.get("message"),
            Some("Message must be at least 10 characters")
        );
    }

    #[test]
    fn test_blank_full_name_rejected() {
        let form = ContactForm {
            full_name: "   ".to_string(),
            ..valid_form()
        };
        assert_eq!(
            form.validate().unwrap_err().get("fullName"),
            Some("Full name is required")
        );
    }

    #[test]
    fn test_invalid_email_message() {
        let form = ContactForm {
            email: "jane@".to_string(),
            ..valid_form()
        };
        assert_eq!(
            form.validate().unwrap_err().get("email"),
            Some("Must be a valid email")
        );
    }

    #[test]
    fn test_missing_token_is_not_a_field_error() {
        let form = ContactForm {
            token: String::new(),
            ..valid_form()
        };
        let submission = form.validate().unwrap();
        assert_eq!(submission.verification_token(), "");
    }

    #[test]
    fn test_deserialize_camel_case_payload() {
        let form: ContactForm = serde_json::from_str(
            r#"{
                "fullName": "Jane Doe",
                "email": "jane@x.com",
                "phone": "2025551234",
                "message": "Hello, this is a test message.",
                "verificationToken": "tok"
            }"#,
        )
        .unwrap();
        assert_eq!(form.full_name, "Jane Doe");
        assert_eq!(form.token, "tok");
    }

    #[test]
    fn test_field_errors_serialize_as_map() {
        let form = ContactForm {
            phone: "123".to_string(),
            ..valid_form()
        };
        let errors = form.validate().unwrap_err();
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json["phone"], "Must be a valid phone number");
    }
}
