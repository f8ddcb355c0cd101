//! Sign-up form field identifiers

use std::fmt;

use super::section::SectionId;

/// Every input on the sign-up screen, plus the terms checkbox.
///
/// Ordering follows the on-screen order, which keeps error listings stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SignupField {
    Username,
    FirstName,
    LastName,
    DateOfBirth,
    Email,
    Phone,
    Address,
    Password,
    ConfirmPassword,
    Games,
    ReferralEmail,
    Terms,
}

impl SignupField {
    pub const ALL: [SignupField; 12] = [
        Self::Username,
        Self::FirstName,
        Self::LastName,
        Self::DateOfBirth,
        Self::Email,
        Self::Phone,
        Self::Address,
        Self::Password,
        Self::ConfirmPassword,
        Self::Games,
        Self::ReferralEmail,
        Self::Terms,
    ];

    /// Stable identifier, used for DOM ids and logging
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::DateOfBirth => "date_of_birth",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Address => "address",
            Self::Password => "password",
            Self::ConfirmPassword => "confirm_password",
            Self::Games => "games",
            Self::ReferralEmail => "referral_email",
            Self::Terms => "terms",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Username => "Username",
            Self::FirstName => "First name",
            Self::LastName => "Last name",
            Self::DateOfBirth => "Date of birth",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::Address => "Address",
            Self::Password => "Password",
            Self::ConfirmPassword => "Confirm password",
            Self::Games => "Favourite games",
            Self::ReferralEmail => "Referral email (optional)",
            Self::Terms => "Terms and conditions",
        }
    }

    /// Whether the field holds free text (everything except the game set and terms)
    pub fn is_text(&self) -> bool {
        !matches!(self, Self::Games | Self::Terms)
    }

    /// The section whose panel renders this field, if any.
    ///
    /// The terms checkbox sits below the sections.
    pub fn section(&self) -> Option<SectionId> {
        match self {
            Self::Username | Self::FirstName | Self::LastName | Self::DateOfBirth => {
                Some(SectionId::Personal)
            }
            Self::Email | Self::Phone | Self::Address | Self::Password | Self::ConfirmPassword => {
                Some(SectionId::Contact)
            }
            Self::Games | Self::ReferralEmail => Some(SectionId::Gaming),
            Self::Terms => None,
        }
    }
}

impl fmt::Display for SignupField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
