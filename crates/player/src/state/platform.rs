//! `Platform`: one clock, one preference store and one host document,
//! bundled behind `PlatformPort`
//!
//! Built once by `create_platform()` for the current target and handed to the
//! UI by the runner as `Arc<dyn PlatformPort>`.

use std::sync::Arc;

use chrono::NaiveDateTime;

use crate::ports::outbound::{Clock, HostDocument, PlatformPort, PreferenceStore, SleepFuture};

#[derive(Clone)]
pub struct Platform {
    clock: Arc<dyn Clock>,
    preferences: Arc<dyn PreferenceStore>,
    document: Arc<dyn HostDocument>,
}

impl Platform {
    pub fn new(
        clock: impl Clock + 'static,
        preferences: impl PreferenceStore + 'static,
        document: impl HostDocument + 'static,
    ) -> Self {
        Self {
            clock: Arc::new(clock),
            preferences: Arc::new(preferences),
            document: Arc::new(document),
        }
    }
}

impl PlatformPort for Platform {
    fn local_now(&self) -> NaiveDateTime {
        self.clock.local_now()
    }

    fn sleep_ms(&self, ms: u64) -> SleepFuture {
        self.clock.sleep_ms(ms)
    }

    fn load_preference(&self, key: &str) -> Option<String> {
        self.preferences.load(key)
    }

    fn save_preference(&self, key: &str, value: &str) {
        self.preferences.save(key, value)
    }

    fn forget_preference(&self, key: &str) {
        self.preferences.remove(key)
    }

    fn set_page_title(&self, title: &str) {
        self.document.set_page_title(title)
    }
}
