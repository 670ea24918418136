//! Input validation for registration payloads.

use crate::error::CoreError;

/// Validate that an email is structurally plausible.
///
/// This is deliberately shallow: one `@` with a non-empty local part, a
/// dotted domain, and no whitespace. No normalization is applied --
/// comparison elsewhere is exact and case-sensitive.
pub fn validate_email(email: &str) -> Result<(), CoreError> {
    let well_formed = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !email.chars().any(char::is_whitespace)
                && !domain.contains('@')
        }
        None => false,
    };

    if well_formed {
        Ok(())
    } else {
        Err(CoreError::Validation("Invalid email address".into()))
    }
}

/// Validate a registration password.
///
/// Only emptiness is rejected; length policy is a product decision that
/// has not been made yet.
pub fn validate_password(password: &str) -> Result<(), CoreError> {
    if password.is_empty() {
        return Err(CoreError::Validation("Password must not be empty".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_addresses() {
        assert!(validate_email("a@x.com").is_ok());
        assert!(validate_email("first.last@sub.example.org").is_ok());
        // Case is preserved, not judged.
        assert!(validate_email("MixedCase@Example.Com").is_ok());
    }

    #[test]
    fn test_rejects_malformed_addresses() {
        assert!(validate_email("").is_err());
        assert!(validate_email("no-at-sign.com").is_err());
        assert!(validate_email("@x.com").is_err());
        assert!(validate_email("a@nodot").is_err());
        assert!(validate_email("a@.com").is_err());
        assert!(validate_email("a b@x.com").is_err());
        assert!(validate_email("a@@x.com").is_err());
    }

    #[test]
    fn test_password_rules() {
        assert!(validate_password("pw1").is_ok());
        assert!(validate_password("").is_err());
    }
}
