//! Field-level validation results shared by every form
//!
//! Forms report problems as an [`ErrorMap`] keyed by their own field enum.
//! Each field holds at most one [`ValidationIssue`]: the first rule that failed.

use std::collections::BTreeMap;
use thiserror::Error;

/// Why a single field failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationIssue {
    #[error("This field is required")]
    Required,

    #[error("Please enter a valid {expected}")]
    InvalidFormat { expected: &'static str },

    #[error("Must be at least {min} characters")]
    TooShort { min: usize },

    #[error("Passwords do not match")]
    Mismatch,

    #[error("You must be at least {minimum_age} years old to play")]
    Underage { minimum_age: u32 },

    #[error("You must accept the terms and conditions")]
    MustAccept,
}

/// The complete set of current validation failures, keyed by field.
///
/// An empty map means the form may be submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorMap<F: Ord> {
    issues: BTreeMap<F, ValidationIssue>,
}

impl<F: Ord + Copy> ErrorMap<F> {
    pub fn new() -> Self {
        Self {
            issues: BTreeMap::new(),
        }
    }

    /// Record `issue` for `field` unless the field already failed an earlier rule.
    pub fn report(&mut self, field: F, issue: ValidationIssue) {
        self.issues.entry(field).or_insert(issue);
    }

    /// Record the first failing rule, if any.
    pub fn report_first(&mut self, field: F, issue: Option<ValidationIssue>) {
        if let Some(issue) = issue {
            self.report(field, issue);
        }
    }

    pub fn get(&self, field: F) -> Option<ValidationIssue> {
        self.issues.get(&field).copied()
    }

    pub fn contains(&self, field: F) -> bool {
        self.issues.contains_key(&field)
    }

    /// Human-readable message for a field, ready to render inline.
    pub fn message(&self, field: F) -> Option<String> {
        self.get(field).map(|issue| issue.to_string())
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (F, ValidationIssue)> + '_ {
        self.issues.iter().map(|(field, issue)| (*field, *issue))
    }

    pub fn fields(&self) -> Vec<F> {
        self.issues.keys().copied().collect()
    }
}

impl<F: Ord + Copy> Default for ErrorMap<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// `Required` when the trimmed value is empty.
pub fn require(value: &str) -> Option<ValidationIssue> {
    value.trim().is_empty().then_some(ValidationIssue::Required)
}
