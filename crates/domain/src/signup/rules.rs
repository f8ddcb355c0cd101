//! Submit-time validation of the sign-up form
//!
//! Every field is checked; failures are collected rather than short-circuited.
//! Within one field, rules run in declared order and the first failure wins.

use chrono::NaiveDate;

use super::field::SignupField;
use super::form::SignupForm;
use crate::validation::{require, ErrorMap, ValidationIssue};
use crate::value_objects::{BirthDate, EmailAddress, PhoneNumber, MINIMUM_PLAYER_AGE};

/// Minimum password length, in characters
pub const MIN_PASSWORD_LENGTH: usize = 8;

const EMAIL_FORMAT: ValidationIssue = ValidationIssue::InvalidFormat {
    expected: "email address",
};
const PHONE_FORMAT: ValidationIssue = ValidationIssue::InvalidFormat {
    expected: "phone number",
};
const DATE_FORMAT: ValidationIssue = ValidationIssue::InvalidFormat {
    expected: "date of birth",
};

/// Validate the whole form as of `today`.
///
/// An empty map means the form may be submitted.
pub fn validate(
    form: &SignupForm,
    terms_accepted: bool,
    today: NaiveDate,
) -> ErrorMap<SignupField> {
    let mut errors = ErrorMap::new();

    errors.report_first(SignupField::Username, require(&form.username));
    errors.report_first(SignupField::FirstName, require(&form.first_name));
    errors.report_first(SignupField::LastName, require(&form.last_name));
    errors.report_first(SignupField::Email, check_email(&form.email));
    errors.report_first(SignupField::Phone, check_phone(&form.phone));
    errors.report_first(SignupField::Password, check_password(&form.password));
    errors.report_first(
        SignupField::ConfirmPassword,
        check_confirmation(&form.password, &form.confirm_password),
    );
    errors.report_first(
        SignupField::DateOfBirth,
        check_date_of_birth(&form.date_of_birth, today),
    );
    errors.report_first(
        SignupField::ReferralEmail,
        check_optional_email(&form.referral_email),
    );
    if !terms_accepted {
        errors.report(SignupField::Terms, ValidationIssue::MustAccept);
    }

    errors
}

pub(crate) fn check_email(value: &str) -> Option<ValidationIssue> {
    if value.trim().is_empty() {
        return Some(ValidationIssue::Required);
    }
    EmailAddress::parse(value).err().map(|_| EMAIL_FORMAT)
}

pub(crate) fn check_optional_email(value: &str) -> Option<ValidationIssue> {
    if value.is_empty() {
        return None;
    }
    EmailAddress::parse(value).err().map(|_| EMAIL_FORMAT)
}

fn check_phone(value: &str) -> Option<ValidationIssue> {
    require(value).or_else(|| PhoneNumber::parse(value).err().map(|_| PHONE_FORMAT))
}

fn check_password(value: &str) -> Option<ValidationIssue> {
    if value.is_empty() {
        return Some(ValidationIssue::Required);
    }
    (value.chars().count() < MIN_PASSWORD_LENGTH).then_some(ValidationIssue::TooShort {
        min: MIN_PASSWORD_LENGTH,
    })
}

/// Independent of whether the password itself is acceptable.
fn check_confirmation(password: &str, confirmation: &str) -> Option<ValidationIssue> {
    (password != confirmation).then_some(ValidationIssue::Mismatch)
}

fn check_date_of_birth(value: &str, today: NaiveDate) -> Option<ValidationIssue> {
    if let Some(issue) = require(value) {
        return Some(issue);
    }
    match BirthDate::parse(value) {
        Ok(dob) if dob.is_adult_on(today) => None,
        Ok(_) => Some(ValidationIssue::Underage {
            minimum_age: MINIMUM_PLAYER_AGE,
        }),
        Err(_) => Some(DATE_FORMAT),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Months;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 17).expect("valid date")
    }

    fn valid_form() -> SignupForm {
        let mut form = SignupForm::new();
        form.username = "reel_queen".to_string();
        form.first_name = "Ada".to_string();
        form.last_name = "King".to_string();
        form.email = "ada@reelhouse.io".to_string();
        form.password = "correct-horse".to_string();
        form.confirm_password = "correct-horse".to_string();
        form.date_of_birth = "1990-04-12".to_string();
        form.phone = "+447911123456".to_string();
        form.address = "1 Spin Street".to_string();
        form.toggle_game("Slots");
        form
    }

    #[test]
    fn valid_form_with_terms_has_no_errors() {
        let errors = validate(&valid_form(), true, today());
        assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
    }

    #[test]
    fn terms_not_accepted_is_the_only_error() {
        let errors = validate(&valid_form(), false, today());
        assert_eq!(errors.fields(), vec![SignupField::Terms]);
        assert_eq!(
            errors.get(SignupField::Terms),
            Some(ValidationIssue::MustAccept)
        );
    }

    #[test]
    fn empty_form_reports_every_required_field() {
        let errors = validate(&SignupForm::new(), false, today());

        for field in [
            SignupField::Username,
            SignupField::FirstName,
            SignupField::LastName,
            SignupField::Email,
            SignupField::Phone,
            SignupField::Password,
            SignupField::DateOfBirth,
        ] {
            assert_eq!(errors.get(field), Some(ValidationIssue::Required), "{field}");
        }
        // Both passwords empty, so they match
        assert!(!errors.contains(SignupField::ConfirmPassword));
        assert!(!errors.contains(SignupField::ReferralEmail));
        assert!(!errors.contains(SignupField::Address));
        assert!(!errors.contains(SignupField::Games));
        assert!(errors.contains(SignupField::Terms));
    }

    #[test]
    fn short_matching_passwords_only_flag_length() {
        let mut form = valid_form();
        form.password = "abc".to_string();
        form.confirm_password = "abc".to_string();

        let errors = validate(&form, true, today());
        assert_eq!(
            errors.get(SignupField::Password),
            Some(ValidationIssue::TooShort { min: 8 })
        );
        assert!(!errors.contains(SignupField::ConfirmPassword));
    }

    #[test]
    fn mismatch_is_reported_even_when_password_fails() {
        let mut form = valid_form();
        form.password = String::new();
        form.confirm_password = "something".to_string();

        let errors = validate(&form, true, today());
        assert_eq!(
            errors.get(SignupField::Password),
            Some(ValidationIssue::Required)
        );
        assert_eq!(
            errors.get(SignupField::ConfirmPassword),
            Some(ValidationIssue::Mismatch)
        );
    }

    #[test]
    fn malformed_email_is_invalid_format() {
        let mut form = valid_form();
        form.email = "not-an-email".to_string();

        let errors = validate(&form, true, today());
        assert_eq!(errors.get(SignupField::Email), Some(EMAIL_FORMAT));
    }

    #[test]
    fn trailing_dot_in_domain_is_invalid_format() {
        let mut form = valid_form();
        form.email = "a@b.c.".to_string();
        form.referral_email = "friend@example.com.".to_string();

        let errors = validate(&form, true, today());
        assert_eq!(errors.get(SignupField::Email), Some(EMAIL_FORMAT));
        assert_eq!(errors.get(SignupField::ReferralEmail), Some(EMAIL_FORMAT));
    }

    #[test]
    fn referral_email_is_optional_but_checked() {
        let mut form = valid_form();
        form.referral_email = String::new();
        assert!(validate(&form, true, today()).is_empty());

        form.referral_email = "friend@".to_string();
        let errors = validate(&form, true, today());
        assert_eq!(errors.get(SignupField::ReferralEmail), Some(EMAIL_FORMAT));

        form.referral_email = "friend@example.com".to_string();
        assert!(validate(&form, true, today()).is_empty());
    }

    #[test]
    fn phone_must_be_international_format() {
        let mut form = valid_form();
        form.phone = "0791 112 3456".to_string();
        let errors = validate(&form, true, today());
        assert_eq!(errors.get(SignupField::Phone), Some(PHONE_FORMAT));

        form.phone = "   ".to_string();
        let errors = validate(&form, true, today());
        assert_eq!(
            errors.get(SignupField::Phone),
            Some(ValidationIssue::Required)
        );
    }

    #[test]
    fn ten_year_old_is_underage() {
        let mut form = valid_form();
        let dob = today()
            .checked_sub_months(Months::new(120))
            .expect("date in range");
        form.date_of_birth = dob.format("%Y-%m-%d").to_string();

        let errors = validate(&form, true, today());
        assert_eq!(
            errors.get(SignupField::DateOfBirth),
            Some(ValidationIssue::Underage { minimum_age: 18 })
        );
    }

    #[test]
    fn eighteenth_birthday_tomorrow_is_still_underage() {
        let mut form = valid_form();
        form.date_of_birth = "2008-10-18".to_string();
        let errors = validate(&form, true, today());
        assert!(errors.contains(SignupField::DateOfBirth));

        form.date_of_birth = "2008-10-17".to_string();
        let errors = validate(&form, true, today());
        assert!(!errors.contains(SignupField::DateOfBirth));
    }

    #[test]
    fn unparseable_date_is_invalid_format() {
        let mut form = valid_form();
        form.date_of_birth = "next tuesday".to_string();
        let errors = validate(&form, true, today());
        assert_eq!(errors.get(SignupField::DateOfBirth), Some(DATE_FORMAT));
    }

    #[test]
    fn validation_is_idempotent() {
        let mut form = valid_form();
        form.email = "broken".to_string();
        form.password = "short".to_string();

        let first = validate(&form, false, today());
        let second = validate(&form, false, today());
        assert_eq!(first, second);
    }
}
