//! Accordion state of the sign-up sections

use super::section::SectionId;

/// Tracks which single section is expanded.
///
/// At most one section is open. Toggling the open section collapses it;
/// toggling any other section switches to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionNavigator {
    active: Option<SectionId>,
}

impl SectionNavigator {
    pub fn new() -> Self {
        Self {
            active: Some(SectionId::Personal),
        }
    }

    pub fn active(&self) -> Option<SectionId> {
        self.active
    }

    pub fn is_open(&self, section: SectionId) -> bool {
        self.active == Some(section)
    }

    pub fn toggle(&mut self, section: SectionId) {
        self.active = if self.is_open(section) {
            None
        } else {
            Some(section)
        };
    }

    /// Open `section` without toggling, e.g. to reveal the first error.
    pub fn reveal(&mut self, section: SectionId) {
        self.active = Some(section);
    }
}

impl Default for SectionNavigator {
    fn default() -> Self {
        Self::new()
    }
}
