//! Multi-section sign-up form: field store, sections, progress, validation
//! and the accordion navigator.

mod field;
mod form;
mod navigator;
mod progress;
mod rules;
mod section;

pub use field::SignupField;
pub use form::{SignupForm, SignupSubmission};
pub use navigator::SectionNavigator;
pub use progress::{compute_progress, section_percent, ProgressSnapshot};
pub use rules::{validate, MIN_PASSWORD_LENGTH};
pub use section::{SectionDescriptor, SectionId, SECTIONS};

pub(crate) use rules::check_email;

/// Game types offered in the gaming preferences section
pub const GAME_PREFERENCES: &[&str] = &[
    "Slots",
    "Jackpots",
    "Blackjack",
    "Roulette",
    "Poker",
    "Live Casino",
];

/// Section holding the first invalid field, in on-screen order.
pub fn first_invalid_section(
    errors: &crate::validation::ErrorMap<SignupField>,
) -> Option<SectionId> {
    errors.iter().find_map(|(field, _)| field.section())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{ErrorMap, ValidationIssue};

    #[test]
    fn first_invalid_section_follows_screen_order() {
        let mut errors = ErrorMap::new();
        errors.report(SignupField::Games, ValidationIssue::Required);
        errors.report(SignupField::Email, ValidationIssue::Required);
        assert_eq!(first_invalid_section(&errors), Some(SectionId::Contact));
    }

    #[test]
    fn terms_alone_has_no_section() {
        let mut errors = ErrorMap::new();
        errors.report(SignupField::Terms, ValidationIssue::MustAccept);
        assert_eq!(first_invalid_section(&errors), None);
    }
}
