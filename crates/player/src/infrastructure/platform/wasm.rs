//! Browser host adapters
//!
//! Local time from `Date`, gloo timers, `localStorage` preferences and the
//! tab title.

use chrono::{NaiveDate, NaiveDateTime};

use crate::ports::outbound::{Clock, HostDocument, PreferenceStore, SleepFuture};
use crate::state::Platform;

#[derive(Clone, Copy, Default)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn local_now(&self) -> NaiveDateTime {
        // getters on `Date` already apply the browser's time zone
        let now = js_sys::Date::new_0();
        NaiveDate::from_ymd_opt(now.get_full_year() as i32, now.get_month() + 1, now.get_date())
            .and_then(|day| day.and_hms_opt(now.get_hours(), now.get_minutes(), now.get_seconds()))
            .unwrap_or_default()
    }

    fn sleep_ms(&self, ms: u64) -> SleepFuture {
        let ms = u32::try_from(ms).unwrap_or(u32::MAX);
        Box::pin(gloo_timers::future::TimeoutFuture::new(ms))
    }
}

/// `window.localStorage`; private browsing may leave it unavailable
#[derive(Clone, Copy, Default)]
pub struct LocalStoragePreferences;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl PreferenceStore for LocalStoragePreferences {
    fn load(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn save(&self, key: &str, value: &str) {
        let Some(storage) = local_storage() else {
            tracing::warn!(key, "localStorage unavailable, preference not saved");
            return;
        };
        if storage.set_item(key, value).is_err() {
            tracing::error!(key, "Failed to write preference");
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = local_storage() {
            if storage.remove_item(key).is_err() {
                tracing::error!(key, "Failed to remove preference");
            }
        }
    }
}

#[derive(Clone, Copy, Default)]
pub struct BrowserTab;

impl HostDocument for BrowserTab {
    fn set_page_title(&self, title: &str) {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document.set_title(&format!("{} | Reelhouse", title));
        }
    }
}

pub fn create_platform() -> Platform {
    Platform::new(BrowserClock, LocalStoragePreferences, BrowserTab)
}
