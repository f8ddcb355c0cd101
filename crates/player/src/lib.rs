//! Reelhouse player client
//!
//! Casino sign-up, login and password reset screens plus the game lobby, on
//! Dioxus. `runner` wires the adapters in `infrastructure` to the services in
//! `application` and launches the `ui`; `ports` holds the seams between them.

pub mod application;
pub mod infrastructure;
pub mod ports;
pub mod runner;
pub mod state;
pub mod ui;

pub use runner::{run, RunnerDeps};
pub use ui::{app, Route, ShellKind};
