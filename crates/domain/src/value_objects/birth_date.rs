//! Date of birth value object and age calculation

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Minimum age required to hold a player account
pub const MINIMUM_PLAYER_AGE: u32 = 18;

/// Format produced by HTML date inputs
const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BirthDateParseError {
    #[error("Date of birth is empty")]
    Empty,
    #[error("Invalid date of birth '{0}', expected YYYY-MM-DD")]
    InvalidFormat(String),
}

/// A calendar date of birth
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BirthDate(NaiveDate);

impl BirthDate {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Parse a `YYYY-MM-DD` string as emitted by date pickers.
    pub fn parse(input: &str) -> Result<Self, BirthDateParseError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(BirthDateParseError::Empty);
        }
        NaiveDate::parse_from_str(input, DATE_FORMAT)
            .map(Self)
            .map_err(|_| BirthDateParseError::InvalidFormat(input.to_string()))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Age in whole years on `today`.
    ///
    /// A birthday later in the calendar year than `today` has not been
    /// reached yet and does not count. Dates in the future yield 0.
    pub fn age_on(&self, today: NaiveDate) -> u32 {
        let mut years = today.year() - self.0.year();
        if (today.month(), today.day()) < (self.0.month(), self.0.day()) {
            years -= 1;
        }
        u32::try_from(years).unwrap_or(0)
    }

    pub fn is_adult_on(&self, today: NaiveDate) -> bool {
        self.age_on(today) >= MINIMUM_PLAYER_AGE
    }
}

impl fmt::Display for BirthDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
    }

    #[test]
    fn parses_iso_date() {
        let dob = BirthDate::parse("1990-04-12").expect("valid");
        assert_eq!(dob.date(), date(1990, 4, 12));
        assert_eq!(dob.to_string(), "1990-04-12");
    }

    #[test]
    fn rejects_garbage_and_impossible_dates() {
        assert!(matches!(
            BirthDate::parse("12/04/1990"),
            Err(BirthDateParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            BirthDate::parse("2001-02-30"),
            Err(BirthDateParseError::InvalidFormat(_))
        ));
        assert_eq!(BirthDate::parse("   "), Err(BirthDateParseError::Empty));
    }

    #[test]
    fn age_counts_birthday_only_once_reached() {
        let dob = BirthDate::new(date(2008, 10, 18));
        assert_eq!(dob.age_on(date(2026, 10, 17)), 17);
        assert_eq!(dob.age_on(date(2026, 10, 18)), 18);
        assert!(!dob.is_adult_on(date(2026, 10, 17)));
        assert!(dob.is_adult_on(date(2026, 10, 18)));
    }

    #[test]
    fn leap_day_birthday() {
        let dob = BirthDate::new(date(2004, 2, 29));
        assert_eq!(dob.age_on(date(2022, 2, 28)), 17);
        assert_eq!(dob.age_on(date(2022, 3, 1)), 18);
    }

    #[test]
    fn future_date_is_age_zero() {
        let dob = BirthDate::new(date(2030, 1, 1));
        assert_eq!(dob.age_on(date(2026, 10, 17)), 0);
    }
}
