//! Email address value object
//!
//! Accepts the common `local@domain.tld` shape: a non-empty local part, a single
//! `@`, and a domain whose final dot has at least one character on each side.
//! No whitespace is allowed anywhere.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error when parsing an email address
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmailParseError {
    #[error("Email address is empty")]
    Empty,
    #[error("Email address contains whitespace")]
    Whitespace,
    #[error("Email address is missing '@'")]
    MissingAt,
    #[error("Email address contains more than one '@'")]
    MultipleAt,
    #[error("Email address has nothing before '@'")]
    EmptyLocalPart,
    #[error("Email domain '{0}' must look like 'domain.tld'")]
    InvalidDomain(String),
}

/// A syntactically valid email address
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Parse an email address.
    ///
    /// The input is taken as-is: surrounding whitespace is rejected rather
    /// than trimmed, matching what the user actually typed.
    pub fn parse(input: &str) -> Result<Self, EmailParseError> {
        if input.is_empty() {
            return Err(EmailParseError::Empty);
        }
        if input.chars().any(char::is_whitespace) {
            return Err(EmailParseError::Whitespace);
        }

        let mut parts = input.split('@');
        let local = parts.next().unwrap_or_default();
        let domain = parts.next().ok_or(EmailParseError::MissingAt)?;
        if parts.next().is_some() {
            return Err(EmailParseError::MultipleAt);
        }
        if local.is_empty() {
            return Err(EmailParseError::EmptyLocalPart);
        }

        let well_formed = domain
            .rsplit_once('.')
            .is_some_and(|(name, tld)| !name.is_empty() && !tld.is_empty());
        if !well_formed {
            return Err(EmailParseError::InvalidDomain(domain.to_string()));
        }

        Ok(Self(input.to_string()))
    }

    /// Returns the address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The part before the `@`.
    pub fn local_part(&self) -> &str {
        self.0.split('@').next().unwrap_or_default()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = EmailParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<EmailAddress> for String {
    fn from(email: EmailAddress) -> String {
        email.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_address() {
        let email = EmailAddress::parse("player@reelhouse.io").expect("valid");
        assert_eq!(email.as_str(), "player@reelhouse.io");
        assert_eq!(email.local_part(), "player");
    }

    #[test]
    fn accepts_subdomains_and_plus_tags() {
        assert!(EmailAddress::parse("a.b+promo@mail.example.co.uk").is_ok());
    }

    #[test]
    fn rejects_missing_at() {
        assert_eq!(
            EmailAddress::parse("not-an-email"),
            Err(EmailParseError::MissingAt)
        );
    }

    #[test]
    fn rejects_multiple_at() {
        assert_eq!(
            EmailAddress::parse("a@b@c.com"),
            Err(EmailParseError::MultipleAt)
        );
    }

    #[test]
    fn rejects_empty_local_part() {
        assert_eq!(
            EmailAddress::parse("@example.com"),
            Err(EmailParseError::EmptyLocalPart)
        );
    }

    #[test]
    fn rejects_domain_without_inner_dot() {
        assert!(matches!(
            EmailAddress::parse("a@localhost"),
            Err(EmailParseError::InvalidDomain(_))
        ));
        assert!(matches!(
            EmailAddress::parse("a@.com"),
            Err(EmailParseError::InvalidDomain(_))
        ));
        assert!(matches!(
            EmailAddress::parse("a@com."),
            Err(EmailParseError::InvalidDomain(_))
        ));
        assert!(matches!(
            EmailAddress::parse("a@b.c."),
            Err(EmailParseError::InvalidDomain(_))
        ));
    }

    #[test]
    fn rejects_whitespace() {
        assert_eq!(
            EmailAddress::parse("a b@example.com"),
            Err(EmailParseError::Whitespace)
        );
        assert_eq!(
            EmailAddress::parse(" a@example.com"),
            Err(EmailParseError::Whitespace)
        );
    }

    #[test]
    fn serde_rejects_invalid_address() {
        let result: Result<EmailAddress, _> = serde_json::from_str("\"nope\"");
        assert!(result.is_err());
    }
}
