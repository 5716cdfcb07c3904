use crate::{CoreError, Result as CoreErrorResult};

use std::sync::LazyLock;

use regex::Regex;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Validates credential input before it reaches the credential service
pub struct CredentialValidator;

impl CredentialValidator {
    /// Both fields must be present and non-empty.
    ///
    /// Returns the borrowed pair so callers can continue with plain `&str`.
    #[track_caller]
    pub fn require<'a>(
        email: Option<&'a str>,
        password: Option<&'a str>,
    ) -> CoreErrorResult<(&'a str, &'a str)> {
        match (email, password) {
            (Some(email), Some(password)) if !email.is_empty() && !password.is_empty() => {
                Ok((email, password))
            }
            _ => Err(CoreError::missing_credentials(
                "Email and password are required.",
            )),
        }
    }

    /// Simple shape check: something, `@`, something, `.`, something; no whitespace
    #[track_caller]
    pub fn validate_email(email: &str) -> CoreErrorResult<()> {
        if !EMAIL_PATTERN.is_match(email) {
            return Err(CoreError::validation(
                "email",
                "Please enter a valid email address.",
            ));
        }
        Ok(())
    }

    /// Password length is counted in Unicode scalar values, not bytes.
    ///
    /// This is stricter than counting UTF-16 code units: "😀😀😀" is three
    /// characters here, where a UTF-16 count would give six.
    #[track_caller]
    pub fn validate_password(password: &str, min_length: usize) -> CoreErrorResult<()> {
        if password.chars().count() < min_length {
            return Err(CoreError::validation(
                "password",
                format!("Password must be at least {min_length} characters long."),
            ));
        }
        Ok(())
    }

    /// Full registration check: presence, email shape, password length
    #[track_caller]
    pub fn validate_registration<'a>(
        email: Option<&'a str>,
        password: Option<&'a str>,
        min_password_length: usize,
    ) -> CoreErrorResult<(&'a str, &'a str)> {
        let (email, password) = Self::require(email, password)?;
        Self::validate_email(email)?;
        Self::validate_password(password, min_password_length)?;
        Ok((email, password))
    }
}
