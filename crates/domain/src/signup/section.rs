//! Static description of the sign-up sections

use super::field::SignupField;

/// The three collapsible groups of the sign-up form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SectionId {
    Personal,
    Contact,
    Gaming,
}

impl SectionId {
    pub const ALL: [SectionId; 3] = [Self::Personal, Self::Contact, Self::Gaming];

    /// Position of the section on screen (0-based)
    pub fn index(&self) -> usize {
        match self {
            Self::Personal => 0,
            Self::Contact => 1,
            Self::Gaming => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn descriptor(&self) -> &'static SectionDescriptor {
        &SECTIONS[self.index()]
    }
}

/// Immutable description of a section and the fields that count towards its progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionDescriptor {
    pub id: SectionId,
    pub title: &'static str,
    pub subtitle: &'static str,
    /// Fields that must be filled for the section to reach 100%
    pub required_fields: &'static [SignupField],
}

pub static SECTIONS: [SectionDescriptor; 3] = [
    SectionDescriptor {
        id: SectionId::Personal,
        title: "Personal Information",
        subtitle: "Tell us who you are",
        required_fields: &[
            SignupField::Username,
            SignupField::FirstName,
            SignupField::LastName,
            SignupField::DateOfBirth,
        ],
    },
    SectionDescriptor {
        id: SectionId::Contact,
        title: "Contact & Security",
        subtitle: "How we reach you and keep your account safe",
        required_fields: &[
            SignupField::Email,
            SignupField::Phone,
            SignupField::Address,
            SignupField::Password,
            SignupField::ConfirmPassword,
        ],
    },
    SectionDescriptor {
        id: SectionId::Gaming,
        title: "Gaming Preferences",
        subtitle: "Pick the games you love",
        required_fields: &[SignupField::Games],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn descriptors_are_in_index_order() {
        for (i, descriptor) in SECTIONS.iter().enumerate() {
            assert_eq!(descriptor.id.index(), i);
            assert_eq!(SectionId::from_index(i), Some(descriptor.id));
        }
        assert_eq!(SectionId::from_index(3), None);
    }

    #[test]
    fn each_required_field_belongs_to_exactly_one_section() {
        let mut seen = HashSet::new();
        for descriptor in &SECTIONS {
            for field in descriptor.required_fields {
                assert!(seen.insert(*field), "{field} listed twice");
                assert_eq!(field.section(), Some(descriptor.id));
            }
        }
    }
}
