//! Host services the player client needs from the device it runs on
//!
//! Each concern is a separate trait so adapters can be mixed freely, e.g. a
//! real preference file with a frozen clock in tests. The UI never sees these
//! directly: it reaches them through `PlatformPort` (see `state::Platform`).

use std::{future::Future, pin::Pin};

use chrono::NaiveDateTime;

/// Future returned by `Clock::sleep_ms`; may be `!Send` in the browser.
pub type SleepFuture = Pin<Box<dyn Future<Output = ()> + 'static>>;

/// Wall clock in the player's own time zone, plus timers.
pub trait Clock: Send + Sync {
    fn local_now(&self) -> NaiveDateTime;

    fn sleep_ms(&self, ms: u64) -> SleepFuture;
}

/// Small string preferences that survive a restart.
///
/// Writes are best effort: a failure is logged by the adapter, never raised.
pub trait PreferenceStore: Send + Sync {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// The window or browser tab hosting the app.
pub trait HostDocument: Send + Sync {
    fn set_page_title(&self, title: &str);
}

/// Everything the UI asks of its host, available as `use_platform()`.
pub trait PlatformPort: Send + Sync {
    fn local_now(&self) -> NaiveDateTime;
    fn sleep_ms(&self, ms: u64) -> SleepFuture;

    fn load_preference(&self, key: &str) -> Option<String>;
    fn save_preference(&self, key: &str, value: &str);
    fn forget_preference(&self, key: &str);

    /// Title suffixed with the brand in a browser tab; ignored on desktop.
    fn set_page_title(&self, title: &str);
}

pub mod storage_keys {
    pub const THEME: &str = "reelhouse_theme";
    pub const REMEMBERED_EMAIL: &str = "reelhouse_remembered_email";
}
