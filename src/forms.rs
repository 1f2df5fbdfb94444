use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

pub const NEWSLETTER_SUCCESS: &str = "Successfully subscribed to newsletter!";
pub const SIGNUP_SUCCESS: &str = "Trial signup successful! Check your email for details.";

/// Rejections shown to the visitor as error notifications.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Please fill in all required fields")]
    MissingFields,
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn validate_newsletter(email: &str) -> Result<(), FormError> {
    if !is_valid_email(email) {
        return Err(FormError::InvalidEmail);
    }
    Ok(())
}

pub fn validate_signup(name: &str, email: &str) -> Result<(), FormError> {
    if name.is_empty() || email.is_empty() {
        return Err(FormError::MissingFields);
    }
    validate_newsletter(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_minimal_address() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("jane.doe+news@example.org"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!is_valid_email("foo@bar"));
        assert!(!is_valid_email("foo bar@baz.com"));
        assert!(!is_valid_email("foo@bar .com"));
        assert!(!is_valid_email("foobar.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn signup_checks_required_fields_before_email() {
        assert_eq!(validate_signup("", "nope"), Err(FormError::MissingFields));
        assert_eq!(validate_signup("Jane", ""), Err(FormError::MissingFields));
        assert_eq!(validate_signup("Jane", "nope"), Err(FormError::InvalidEmail));
        assert_eq!(validate_signup("Jane", "jane@example.com"), Ok(()));
    }

    #[test]
    fn error_text_is_user_facing() {
        assert_eq!(FormError::InvalidEmail.to_string(), "Please enter a valid email address");
        assert_eq!(validate_newsletter("x@y"), Err(FormError::InvalidEmail));
    }
}
