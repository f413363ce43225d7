use once_cell::sync::Lazy;
use regex::Regex;

use super::errors::UserError;

static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

pub const MIN_PASSWORD_LENGTH: usize = 8;

/// A syntactically valid e-mail address, stored trimmed and lower-cased so
/// lookups are case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    pub fn parse(raw: &str) -> Result<Self, UserError> {
        let email = raw.trim().to_lowercase();
        if !EMAIL.is_match(&email) {
            return Err(UserError::InvalidEmail);
        }
        Ok(Self(email))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Checks a plain-text password before it is hashed.
pub fn validate_password(password: &str) -> Result<(), UserError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(UserError::PasswordTooShort);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_normalize_email_case_and_whitespace() {
        let email = Email::parse("  Jane.Doe@Example.COM ").unwrap();
        assert_eq!(email.as_str(), "jane.doe@example.com");
    }

    #[test]
    fn should_reject_malformed_emails() {
        for raw in ["", "plain", "a@b", "a b@c.de", "@example.com"] {
            assert!(
                matches!(Email::parse(raw), Err(UserError::InvalidEmail)),
                "{raw} should be rejected"
            );
        }
    }

    #[test]
    fn should_require_minimum_password_length() {
        assert!(matches!(
            validate_password("short"),
            Err(UserError::PasswordTooShort)
        ));
        assert!(validate_password("longenough").is_ok());
    }
}
