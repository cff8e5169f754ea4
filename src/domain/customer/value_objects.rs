use serde::{Deserialize, Serialize};
use std::fmt;

use super::errors::CustomerError;

// ============================================================================
// Customer Value Objects
// ============================================================================

/// Storage-assigned customer identity
pub type CustomerId = i32;

/// Customer email address
///
/// Compared byte-for-byte; no case folding or normalisation is applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct Email(pub String);

impl Email {
    pub fn new(email: impl Into<String>) -> Self {
        Self(email.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Basic shape check: non-empty and contains an `@`
    pub fn validate(&self) -> Result<(), CustomerError> {
        if self.0.trim().is_empty() || !self.0.contains('@') {
            return Err(CustomerError::InvalidEmail(self.0.clone()));
        }
        Ok(())
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Email {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl PartialEq<str> for Email {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

/// Customer names must contain at least one non-whitespace character
pub fn validate_name(name: &str) -> Result<(), CustomerError> {
    if name.trim().is_empty() {
        return Err(CustomerError::InvalidName);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_requires_at_sign() {
        assert!(Email::new("alice@x.com").validate().is_ok());
        assert!(matches!(
            Email::new("alice.x.com").validate(),
            Err(CustomerError::InvalidEmail(_))
        ));
        assert!(matches!(
            Email::new("   ").validate(),
            Err(CustomerError::InvalidEmail(_))
        ));
    }

    #[test]
    fn test_email_comparison_is_case_exact() {
        assert_ne!(Email::new("Alice@x.com"), Email::new("alice@x.com"));
        assert!(Email::new("alice@x.com") == *"alice@x.com");
    }

    #[test]
    fn test_email_serializes_as_plain_string() {
        let json = serde_json::to_string(&Email::new("bob@x.com")).unwrap();
        assert_eq!(json, "\"bob@x.com\"");
    }

    #[test]
    fn test_blank_name_rejected() {
        assert!(validate_name("Bob").is_ok());
        assert!(matches!(validate_name(""), Err(CustomerError::InvalidName)));
        assert!(matches!(validate_name(" \t"), Err(CustomerError::InvalidName)));
    }
}
