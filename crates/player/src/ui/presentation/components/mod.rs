//! Reusable UI components

pub mod common;
pub mod icon;
pub mod lobby;
pub mod signup;
