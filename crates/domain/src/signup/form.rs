//! Sign-up field store
//!
//! Holds the raw values exactly as typed. Nothing is normalized here; the
//! validator and progress calculator decide how to interpret them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::field::SignupField;
use crate::error::DomainError;

/// Raw values of the sign-up form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub date_of_birth: String,
    pub phone: String,
    pub address: String,
    pub referral_email: String,
    pub games: BTreeSet<String>,
}

impl SignupForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the value of a text field.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` for fields that don't hold text
    /// (`Games` is changed through [`toggle_game`](Self::toggle_game), `Terms`
    /// lives outside the store).
    pub fn set_field(
        &mut self,
        field: SignupField,
        value: impl Into<String>,
    ) -> Result<(), DomainError> {
        let slot = self.text_mut(field).ok_or_else(|| {
            DomainError::validation(format!("{} is not a text field", field.as_str()))
        })?;
        *slot = value.into();
        Ok(())
    }

    /// Add the game if absent, remove it if present.
    pub fn toggle_game(&mut self, name: &str) {
        if !self.games.remove(name) {
            self.games.insert(name.to_string());
        }
    }

    pub fn has_game(&self, name: &str) -> bool {
        self.games.contains(name)
    }

    /// Current value of a text field, `None` for non-text fields.
    pub fn text(&self, field: SignupField) -> Option<&str> {
        let value = match field {
            SignupField::Username => &self.username,
            SignupField::FirstName => &self.first_name,
            SignupField::LastName => &self.last_name,
            SignupField::Email => &self.email,
            SignupField::Password => &self.password,
            SignupField::ConfirmPassword => &self.confirm_password,
            SignupField::DateOfBirth => &self.date_of_birth,
            SignupField::Phone => &self.phone,
            SignupField::Address => &self.address,
            SignupField::ReferralEmail => &self.referral_email,
            SignupField::Games | SignupField::Terms => return None,
        };
        Some(value.as_str())
    }

    fn text_mut(&mut self, field: SignupField) -> Option<&mut String> {
        let value = match field {
            SignupField::Username => &mut self.username,
            SignupField::FirstName => &mut self.first_name,
            SignupField::LastName => &mut self.last_name,
            SignupField::Email => &mut self.email,
            SignupField::Password => &mut self.password,
            SignupField::ConfirmPassword => &mut self.confirm_password,
            SignupField::DateOfBirth => &mut self.date_of_birth,
            SignupField::Phone => &mut self.phone,
            SignupField::Address => &mut self.address,
            SignupField::ReferralEmail => &mut self.referral_email,
            SignupField::Games | SignupField::Terms => return None,
        };
        Some(value)
    }

    /// A field is filled when its trimmed text is non-empty, or, for the game
    /// set, when at least one game is selected.
    pub fn is_filled(&self, field: SignupField) -> bool {
        match field {
            SignupField::Games => !self.games.is_empty(),
            SignupField::Terms => false,
            other => self
                .text(other)
                .is_some_and(|value| !value.trim().is_empty()),
        }
    }

    /// The data handed to the account backend: everything except the
    /// password confirmation.
    pub fn to_submission(&self) -> SignupSubmission {
        SignupSubmission {
            username: self.username.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            date_of_birth: self.date_of_birth.clone(),
            phone: self.phone.clone(),
            address: self.address.clone(),
            referral_email: self.referral_email.clone(),
            games: self.games.iter().cloned().collect(),
        }
    }
}

/// Cleaned sign-up data sent to the account backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupSubmission {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub date_of_birth: String,
    pub phone: String,
    pub address: String,
    pub referral_email: String,
    pub games: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_field_updates_text_fields() {
        let mut form = SignupForm::new();
        form.set_field(SignupField::Username, "lucky_7").expect("text field");
        form.set_field(SignupField::ReferralEmail, "friend@example.com")
            .expect("text field");

        assert_eq!(form.text(SignupField::Username), Some("lucky_7"));
        assert_eq!(form.referral_email, "friend@example.com");
    }

    #[test]
    fn set_field_rejects_non_text_fields() {
        let mut form = SignupForm::new();
        assert!(form.set_field(SignupField::Games, "Slots").is_err());
        assert!(form.set_field(SignupField::Terms, "yes").is_err());
        assert!(form.games.is_empty());
    }

    #[test]
    fn toggling_a_game_twice_restores_membership() {
        let mut form = SignupForm::new();
        form.toggle_game("Roulette");
        let before = form.games.clone();

        form.toggle_game("Slots");
        assert!(form.has_game("Slots"));
        form.toggle_game("Slots");

        assert_eq!(form.games, before);
    }

    #[test]
    fn whitespace_only_is_not_filled() {
        let mut form = SignupForm::new();
        form.first_name = "   ".to_string();
        assert!(!form.is_filled(SignupField::FirstName));

        form.first_name = " Ada ".to_string();
        assert!(form.is_filled(SignupField::FirstName));
    }

    #[test]
    fn games_filled_when_any_selected() {
        let mut form = SignupForm::new();
        assert!(!form.is_filled(SignupField::Games));
        form.toggle_game("Poker");
        assert!(form.is_filled(SignupField::Games));
    }

    #[test]
    fn submission_omits_password_confirmation() {
        let mut form = SignupForm::new();
        form.password = "hunter2hunter2".to_string();
        form.confirm_password = "hunter2hunter2".to_string();
        form.toggle_game("Slots");

        let submission = form.to_submission();
        assert_eq!(submission.password, "hunter2hunter2");
        assert_eq!(submission.games, vec!["Slots".to_string()]);

        let json = serde_json::to_value(&submission).expect("serializes");
        assert!(json.get("confirmPassword").is_none());
        assert!(json.get("firstName").is_some());
    }
}
