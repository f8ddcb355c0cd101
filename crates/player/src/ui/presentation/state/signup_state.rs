//! Sign-up screen state
//!
//! Lives only while the sign-up screen is mounted. Progress is derived from
//! the form on every read; errors are replaced wholesale after each submit.

use dioxus::prelude::*;

use reelhouse_domain::{
    compute_progress, first_invalid_section, ErrorMap, ProgressSnapshot, SectionId,
    SectionNavigator, SignupField, SignupForm,
};

use crate::application::services::SignupOutcome;

#[derive(Clone, Copy)]
pub struct SignupState {
    pub form: Signal<SignupForm>,
    pub terms_accepted: Signal<bool>,
    pub errors: Signal<ErrorMap<SignupField>>,
    pub sections: Signal<SectionNavigator>,
    pub submitting: Signal<bool>,
    /// Banner text after a failed submission
    pub failure: Signal<Option<String>>,
}

impl SignupState {
    pub fn new() -> Self {
        Self {
            form: Signal::new(SignupForm::new()),
            terms_accepted: Signal::new(false),
            errors: Signal::new(ErrorMap::new()),
            sections: Signal::new(SectionNavigator::new()),
            submitting: Signal::new(false),
            failure: Signal::new(None),
        }
    }

    pub fn set_field(&mut self, field: SignupField, value: String) {
        if let Err(e) = self.form.write().set_field(field, value) {
            tracing::warn!("Ignored input: {}", e);
        }
    }

    pub fn toggle_game(&mut self, name: &str) {
        self.form.write().toggle_game(name);
    }

    pub fn toggle_section(&mut self, section: SectionId) {
        self.sections.write().toggle(section);
    }

    pub fn progress(&self) -> ProgressSnapshot {
        compute_progress(&self.form.read())
    }

    pub fn error_for(&self, field: SignupField) -> Option<String> {
        self.errors.read().message(field)
    }

    /// Mark a submission as in flight. Returns `false` when one already is.
    pub fn begin_submit(&mut self) -> bool {
        if *self.submitting.read() {
            return false;
        }
        self.submitting.set(true);
        self.failure.set(None);
        true
    }

    /// Apply the result of a submission. The form keeps its values.
    pub fn finish_submit(&mut self, outcome: &SignupOutcome) {
        self.submitting.set(false);
        match outcome {
            SignupOutcome::Invalid(errors) => {
                if let Some(section) = first_invalid_section(errors) {
                    self.sections.write().reveal(section);
                }
                self.errors.set(errors.clone());
            }
            SignupOutcome::Registered(_) => {
                self.errors.set(ErrorMap::new());
            }
            SignupOutcome::Failed(message) => {
                self.errors.set(ErrorMap::new());
                self.failure.set(Some(message.clone()));
            }
        }
    }
}

impl Default for SignupState {
    fn default() -> Self {
        Self::new()
    }
}
