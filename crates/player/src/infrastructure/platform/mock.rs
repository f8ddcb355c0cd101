//! In-memory host adapters for tests

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::NaiveDateTime;

use crate::ports::outbound::{Clock, HostDocument, PreferenceStore, SleepFuture};
use crate::state::Platform;

/// Clock frozen at one local instant; sleeps finish immediately
#[derive(Clone, Default)]
pub struct MockClock {
    now: NaiveDateTime,
}

impl MockClock {
    pub fn at(now: NaiveDateTime) -> Self {
        Self { now }
    }
}

impl Clock for MockClock {
    fn local_now(&self) -> NaiveDateTime {
        self.now
    }

    fn sleep_ms(&self, _ms: u64) -> SleepFuture {
        Box::pin(async {})
    }
}

/// Preferences in a map shared between clones
#[derive(Clone, Default)]
pub struct MockPreferenceStore {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl PreferenceStore for MockPreferenceStore {
    fn load(&self, key: &str) -> Option<String> {
        self.values.lock().ok()?.get(key).cloned()
    }

    fn save(&self, key: &str, value: &str) {
        if let Ok(mut values) = self.values.lock() {
            values.insert(key.to_string(), value.to_string());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut values) = self.values.lock() {
            values.remove(key);
        }
    }
}

/// Remembers the last page title it was given
#[derive(Clone, Default)]
pub struct MockHostDocument {
    title: Arc<Mutex<Option<String>>>,
}

impl MockHostDocument {
    pub fn title(&self) -> Option<String> {
        self.title.lock().ok().and_then(|title| title.clone())
    }
}

impl HostDocument for MockHostDocument {
    fn set_page_title(&self, title: &str) {
        if let Ok(mut current) = self.title.lock() {
            *current = Some(title.to_string());
        }
    }
}

/// Platform wired entirely with mocks, clock frozen at `now`
pub fn create_mock_platform(now: NaiveDateTime) -> Platform {
    Platform::new(
        MockClock::at(now),
        MockPreferenceStore::default(),
        MockHostDocument::default(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::{storage_keys, PlatformPort};

    #[test]
    fn preferences_are_shared_between_clones() {
        let platform = create_mock_platform(NaiveDateTime::default());
        let clone = platform.clone();

        platform.save_preference(storage_keys::THEME, "dark");
        assert_eq!(
            clone.load_preference(storage_keys::THEME).as_deref(),
            Some("dark")
        );

        clone.forget_preference(storage_keys::THEME);
        assert_eq!(platform.load_preference(storage_keys::THEME), None);
    }

    #[tokio::test]
    async fn sleep_returns_immediately() {
        let platform = create_mock_platform(NaiveDateTime::default());
        platform.sleep_ms(60_000).await;
    }
}
