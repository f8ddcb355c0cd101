//! Desktop host adapters
//!
//! Local time from the OS, tokio timers, and preferences kept in a small JSON
//! file under the user's data directory.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use anyhow::Context;
use chrono::{Local, NaiveDateTime};
use directories::ProjectDirs;

use crate::ports::outbound::{Clock, HostDocument, PreferenceStore, SleepFuture};
use crate::state::Platform;

const PREFERENCES_FILE: &str = "preferences.json";

#[derive(Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn local_now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }

    fn sleep_ms(&self, ms: u64) -> SleepFuture {
        Box::pin(tokio::time::sleep(Duration::from_millis(ms)))
    }
}

/// Preferences file, read once on open and rewritten on every change
pub struct FilePreferenceStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl FilePreferenceStore {
    /// `<data dir>/preferences.json`, or the working directory when the OS
    /// reports no home
    pub fn in_data_dir() -> Self {
        let path = ProjectDirs::from("io", "reelhouse", "player")
            .map(|dirs| dirs.data_dir().join(PREFERENCES_FILE))
            .unwrap_or_else(|| PathBuf::from(PREFERENCES_FILE));
        Self::open(path)
    }

    /// A missing or unreadable file starts with no preferences.
    pub fn open(path: PathBuf) -> Self {
        let entries = read_entries(&path).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), "Ignoring preferences file: {:#}", e);
            BTreeMap::new()
        });
        tracing::debug!(path = %path.display(), count = entries.len(), "Preferences loaded");

        Self {
            path,
            entries: Mutex::new(entries),
        }
    }

    fn update(&self, change: impl FnOnce(&mut BTreeMap<String, String>)) {
        let snapshot = match self.entries.lock() {
            Ok(mut entries) => {
                change(&mut entries);
                entries.clone()
            }
            Err(e) => {
                tracing::error!("Preferences lock poisoned: {}", e);
                return;
            }
        };

        if let Err(e) = write_entries(&self.path, &snapshot) {
            tracing::error!(path = %self.path.display(), "Failed to save preferences: {:#}", e);
        }
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn save(&self, key: &str, value: &str) {
        self.update(|entries| {
            entries.insert(key.to_string(), value.to_string());
        });
    }

    fn remove(&self, key: &str) {
        self.update(|entries| {
            entries.remove(key);
        });
    }
}

fn read_entries(path: &Path) -> anyhow::Result<BTreeMap<String, String>> {
    if !path.exists() {
        return Ok(BTreeMap::new());
    }
    let raw = fs::read_to_string(path).context("reading preferences file")?;
    serde_json::from_str(&raw).context("parsing preferences file")
}

fn write_entries(path: &Path, entries: &BTreeMap<String, String>) -> anyhow::Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).context("creating preferences directory")?;
    }
    let raw = serde_json::to_string_pretty(entries).context("encoding preferences")?;
    fs::write(path, raw).context("writing preferences file")
}

/// The runner sets a fixed window title
#[derive(Clone, Copy, Default)]
pub struct DesktopWindow;

impl HostDocument for DesktopWindow {
    fn set_page_title(&self, _title: &str) {}
}

pub fn create_platform() -> Platform {
    Platform::new(
        SystemClock,
        FilePreferenceStore::in_data_dir(),
        DesktopWindow,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_file() -> PathBuf {
        std::env::temp_dir()
            .join(format!("reelhouse-test-{}", uuid::Uuid::new_v4()))
            .join(PREFERENCES_FILE)
    }

    #[test]
    fn preferences_survive_reopening() {
        let path = scratch_file();

        let store = FilePreferenceStore::open(path.clone());
        store.save("reelhouse_theme", "light");
        assert_eq!(store.load("reelhouse_theme").as_deref(), Some("light"));

        let reopened = FilePreferenceStore::open(path.clone());
        assert_eq!(reopened.load("reelhouse_theme").as_deref(), Some("light"));

        reopened.remove("reelhouse_theme");
        assert_eq!(FilePreferenceStore::open(path).load("reelhouse_theme"), None);
    }

    #[test]
    fn corrupt_file_starts_empty_and_is_replaced_on_save() {
        let path = scratch_file();
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).expect("create temp dir");
        }
        fs::write(&path, "{not json").expect("write temp file");

        let store = FilePreferenceStore::open(path.clone());
        assert_eq!(store.load("anything"), None);

        store.save("reelhouse_theme", "dark");
        let reopened = FilePreferenceStore::open(path);
        assert_eq!(reopened.load("reelhouse_theme").as_deref(), Some("dark"));
    }

    #[test]
    fn system_clock_reads_local_wall_time() {
        let before = Local::now().naive_local();
        let now = SystemClock.local_now();
        let after = Local::now().naive_local();
        assert!(before <= now && now <= after);
    }
}
