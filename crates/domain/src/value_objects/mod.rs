//! Value objects - Immutable objects defined by their attributes

mod birth_date;
mod email;
mod phone;

pub use birth_date::{BirthDate, BirthDateParseError, MINIMUM_PLAYER_AGE};
pub use email::{EmailAddress, EmailParseError};
pub use phone::{PhoneNumber, PhoneParseError};
