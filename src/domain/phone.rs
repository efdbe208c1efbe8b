//! PhoneNumber value object.

use super::errors::ValidationError;
use std::fmt;

/// A type-safe wrapper for North American phone numbers.
///
/// The accepted shape is ten digits with an optional `1` or `+1` prefix:
/// the area code starts with 2-9, the exchange starts with 2-9 and its
/// last two digits are not `11`. No separators are accepted.
///
/// # Example
///
/// ```
/// use contact_form_relay::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("+12025551234").unwrap();
/// assert_eq!(phone.as_str(), "+12025551234");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the phone format is invalid.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if !Self::is_valid(&phone) {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(phone))
    }

    /// Validate phone format.
    fn is_valid(phone: &str) -> bool {
        let Some(national) = Self::strip_country_code(phone) else {
            return false;
        };
        let digits = national.as_bytes();

        if digits.len() != 10 || !digits.iter().all(u8::is_ascii_digit) {
            return false;
        }

        // NPA and NXX both start with 2-9; N11 service codes are not exchanges
        matches!(digits[0], b'2'..=b'9')
            && matches!(digits[3], b'2'..=b'9')
            && &digits[4..6] != b"11"
    }

    /// Remove an optional `+1` or `1` prefix, returning the national part.
    ///
    /// A bare `+` without the country code is rejected.
    fn strip_country_code(phone: &str) -> Option<&str> {
        if let Some(rest) = phone.strip_prefix("+1") {
            return Some(rest);
        }
        if phone.starts_with('+') {
            return None;
        }
        // Ten digits never start with 1, so an eleven digit form must carry the prefix
        match phone.strip_prefix('1') {
            Some(rest) if phone.len() == 11 => Some(rest),
            _ => Some(phone),
        }
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Display support
impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_valid() {
        let phone = PhoneNumber::new("2025551234").unwrap();
        assert_eq!(phone.as_str(), "2025551234");
    }

    #[test]
    fn test_phone_country_code_prefixes() {
        assert!(PhoneNumber::new("12025551234").is_ok());
        assert!(PhoneNumber::new("+12025551234").is_ok());
        assert!(PhoneNumber::new("+2025551234").is_err());
        assert!(PhoneNumber::new("+112025551234").is_err());
        assert!(PhoneNumber::new("112025551234").is_err());
    }

    #[test]
    fn test_phone_validates_format() {
        assert!(PhoneNumber::new("").is_err());
        assert!(PhoneNumber::new("123").is_err());
        assert!(PhoneNumber::new("no digits").is_err());
        assert!(PhoneNumber::new("202-555-1234").is_err());
        assert!(PhoneNumber::new("(202) 555-1234").is_err());
        assert!(PhoneNumber::new("20255512345").is_err());
    }

    #[test]
    fn test_phone_area_code_and_exchange_rules() {
        // Area code starting with 0 or 1
        assert!(PhoneNumber::new("0025551234").is_err());
        assert!(PhoneNumber::new("1025551234").is_err());
        // Exchange starting with 0 or 1
        assert!(PhoneNumber::new("2020551234").is_err());
        assert!(PhoneNumber::new("2021551234").is_err());
        // N11 exchange
        assert!(PhoneNumber::new("2025111234").is_err());
        assert!(PhoneNumber::new("2029111234").is_err());
        // 11 elsewhere is fine
        assert!(PhoneNumber::new("2115551234").is_ok());
        assert!(PhoneNumber::new("2025551111").is_ok());
        assert!(PhoneNumber::new("2025121234").is_ok());
    }

    #[test]
    fn test_phone_display_keeps_submitted_form() {
        let phone = PhoneNumber::new("+12025551234").unwrap();
        assert_eq!(phone.to_string(), "+12025551234");
    }
}
