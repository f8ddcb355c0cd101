//! Completion progress of the sign-up form
//!
//! Progress is derived, never stored: recompute it whenever the form changes.

use super::form::SignupForm;
use super::section::{SectionDescriptor, SectionId, SECTIONS};

/// Per-section and overall completion, in percent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressSnapshot {
    section_percent: [f64; 3],
    overall: u8,
}

impl ProgressSnapshot {
    /// Completion of one section, in `[0, 100]`
    pub fn section(&self, id: SectionId) -> f64 {
        self.section_percent[id.index()]
    }

    /// Rounded mean of the three section percentages
    pub fn overall(&self) -> u8 {
        self.overall
    }

    pub fn is_section_complete(&self, id: SectionId) -> bool {
        self.section(id) >= 100.0
    }
}

/// Share of the section's required fields that are filled
pub fn section_percent(form: &SignupForm, descriptor: &SectionDescriptor) -> f64 {
    let total = descriptor.required_fields.len();
    if total == 0 {
        return 100.0;
    }
    let filled = descriptor
        .required_fields
        .iter()
        .filter(|field| form.is_filled(**field))
        .count();
    filled as f64 / total as f64 * 100.0
}

/// Derive the progress snapshot for the current form values.
///
/// The overall value rounds half up (`f64::round` on a non-negative mean).
pub fn compute_progress(form: &SignupForm) -> ProgressSnapshot {
    let percents = SECTIONS.map(|descriptor| section_percent(form, &descriptor));
    let mean = percents.iter().sum::<f64>() / percents.len() as f64;
    let overall = mean.round().clamp(0.0, 100.0) as u8;

    ProgressSnapshot {
        section_percent: percents,
        overall,
    }
}
