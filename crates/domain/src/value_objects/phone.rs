//! International phone number value object
//!
//! Format: optional leading `+`, a first digit 1-9, then 1 to 14 more digits
//! (2 to 15 digits in total). Separators such as spaces or dashes are not accepted.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

const MIN_DIGITS: usize = 2;
const MAX_DIGITS: usize = 15;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhoneParseError {
    #[error("Phone number is empty")]
    Empty,
    #[error("Phone number may only contain digits after an optional '+'")]
    NonDigit,
    #[error("Phone number cannot start with 0")]
    LeadingZero,
    #[error("Phone number must have between 2 and 15 digits, got {0}")]
    Length(usize),
}

/// A phone number in international (E.164-like) format
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn parse(input: &str) -> Result<Self, PhoneParseError> {
        if input.is_empty() {
            return Err(PhoneParseError::Empty);
        }

        let digits = input.strip_prefix('+').unwrap_or(input);
        if !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(PhoneParseError::NonDigit);
        }
        if digits.starts_with('0') {
            return Err(PhoneParseError::LeadingZero);
        }
        if !(MIN_DIGITS..=MAX_DIGITS).contains(&digits.len()) {
            return Err(PhoneParseError::Length(digits.len()));
        }

        Ok(Self(input.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = PhoneParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<PhoneNumber> for String {
    fn from(phone: PhoneNumber) -> String {
        phone.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_international_and_local_forms() {
        assert!(PhoneNumber::parse("+447911123456").is_ok());
        assert!(PhoneNumber::parse("14155552671").is_ok());
        assert!(PhoneNumber::parse("12").is_ok());
    }

    #[test]
    fn enforces_digit_count_bounds() {
        assert_eq!(PhoneNumber::parse("7"), Err(PhoneParseError::Length(1)));
        assert!(PhoneNumber::parse("123456789012345").is_ok());
        assert_eq!(
            PhoneNumber::parse("1234567890123456"),
            Err(PhoneParseError::Length(16))
        );
    }

    #[test]
    fn rejects_leading_zero() {
        assert_eq!(
            PhoneNumber::parse("+0441234"),
            Err(PhoneParseError::LeadingZero)
        );
    }

    #[test]
    fn rejects_separators_and_letters() {
        assert_eq!(
            PhoneNumber::parse("+1 415 555"),
            Err(PhoneParseError::NonDigit)
        );
        assert_eq!(PhoneNumber::parse("555-CALL"), Err(PhoneParseError::NonDigit));
        assert_eq!(PhoneNumber::parse("++1234"), Err(PhoneParseError::NonDigit));
    }

    #[test]
    fn lone_plus_is_too_short() {
        assert_eq!(PhoneNumber::parse("+"), Err(PhoneParseError::Length(0)));
    }
}
