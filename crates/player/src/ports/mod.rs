//! Port traits for the player client.
//!
//! The UI and application layers depend only on these abstractions; concrete
//! adapters live in `infrastructure`.

pub mod outbound;
