//! Host adapters, chosen at compile time by target architecture

#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
mod desktop;

pub mod mock;

#[cfg(target_arch = "wasm32")]
pub use wasm::{create_platform, BrowserClock, BrowserTab, LocalStoragePreferences};

#[cfg(not(target_arch = "wasm32"))]
pub use desktop::{create_platform, DesktopWindow, FilePreferenceStore, SystemClock};
