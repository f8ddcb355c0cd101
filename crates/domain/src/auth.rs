//! Login and password-reset forms, and the account summary returned after
//! authenticating.

use serde::{Deserialize, Serialize};

use crate::ids::AccountId;
use crate::signup::check_email;
use crate::validation::{require, ErrorMap};

/// Fields of the login screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LoginField {
    Email,
    Password,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
}

impl LoginForm {
    pub fn validate(&self) -> ErrorMap<LoginField> {
        let mut errors = ErrorMap::new();
        errors.report_first(LoginField::Email, check_email(&self.email));
        errors.report_first(LoginField::Password, require(&self.password));
        errors
    }
}

/// Fields of the forgot-password screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ResetField {
    Email,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordResetForm {
    pub email: String,
}

impl PasswordResetForm {
    pub fn validate(&self) -> ErrorMap<ResetField> {
        let mut errors = ErrorMap::new();
        errors.report_first(ResetField::Email, check_email(&self.email));
        errors
    }
}

/// The signed-in player, as shown in the dashboard header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSummary {
    pub id: AccountId,
    pub username: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationIssue;

    #[test]
    fn login_requires_both_fields() {
        let errors = LoginForm::default().validate();
        assert_eq!(errors.get(LoginField::Email), Some(ValidationIssue::Required));
        assert_eq!(
            errors.get(LoginField::Password),
            Some(ValidationIssue::Required)
        );
    }

    #[test]
    fn login_checks_email_format() {
        let form = LoginForm {
            email: "player.example.com".to_string(),
            password: "anything".to_string(),
            remember_me: false,
        };
        let errors = form.validate();
        assert!(matches!(
            errors.get(LoginField::Email),
            Some(ValidationIssue::InvalidFormat { .. })
        ));
        assert!(!errors.contains(LoginField::Password));
    }

    #[test]
    fn valid_login_has_no_errors() {
        let form = LoginForm {
            email: "player@example.com".to_string(),
            password: "x".to_string(),
            remember_me: true,
        };
        assert!(form.validate().is_empty());
    }

    #[test]
    fn reset_requires_valid_email() {
        assert!(PasswordResetForm::default()
            .validate()
            .contains(ResetField::Email));

        let form = PasswordResetForm {
            email: "player@example.com".to_string(),
        };
        assert!(form.validate().is_empty());
    }

    #[test]
    fn account_summary_serializes_camel_case() {
        let summary = AccountSummary {
            id: AccountId::new(),
            username: "reel_queen".to_string(),
            email: "ada@reelhouse.io".to_string(),
        };
        let json = serde_json::to_value(&summary).expect("serializes");
        assert_eq!(json["username"], "reel_queen");
        assert!(json.get("id").is_some());
    }
}
