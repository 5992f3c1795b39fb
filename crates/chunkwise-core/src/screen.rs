//! Settings screen controller.
//!
//! Edits the raw newline-delimited texts. Saving writes them verbatim and
//! reports a notice for the user; the form picks the change up on its next
//! refresh.

use serde::Serialize;
use std::fmt;

use crate::storage::{KeyValueStore, SettingsStore, SettingsText};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SaveNotice {
    Saved,
    Failed,
}

impl fmt::Display for SaveNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaveNotice::Saved => f.write_str("Settings Saved!"),
            SaveNotice::Failed => f.write_str("Error saving settings"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SettingsScreen {
    text: SettingsText,
}

impl SettingsScreen {
    pub fn load<S: KeyValueStore>(settings: &SettingsStore<S>) -> Self {
        Self {
            text: settings.load_text(),
        }
    }

    pub fn checks(&self) -> &str {
        &self.text.checks
    }

    pub fn reminders(&self) -> &str {
        &self.text.reminders
    }

    pub fn set_checks(&mut self, checks: impl Into<String>) {
        self.text.checks = checks.into();
    }

    pub fn set_reminders(&mut self, reminders: impl Into<String>) {
        self.text.reminders = reminders.into();
    }

    /// Write both buffers. Failures are already logged by the store.
    pub fn save<S: KeyValueStore>(&self, settings: &mut SettingsStore<S>) -> SaveNotice {
        match settings.save(&self.text.checks, &self.text.reminders) {
            Ok(()) => SaveNotice::Saved,
            Err(_) => SaveNotice::Failed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StorageError;
    use crate::storage::MemoryStore;

    struct ReadOnly(MemoryStore);

    impl KeyValueStore for ReadOnly {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.0.get(key)
        }

        fn set(&mut self, key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::WriteFailed {
                key: key.to_string(),
                message: "read-only".into(),
            })
        }
    }

    #[test]
    fn loads_raw_text_or_empty() {
        let mut settings = SettingsStore::new(MemoryStore::new());
        assert_eq!(SettingsScreen::load(&settings), SettingsScreen::default());

        settings.save("A\nB", "").unwrap();
        let screen = SettingsScreen::load(&settings);
        assert_eq!(screen.checks(), "A\nB");
        assert_eq!(screen.reminders(), "");
    }

    #[test]
    fn save_reports_notice() {
        let mut settings = SettingsStore::new(MemoryStore::new());
        let mut screen = SettingsScreen::default();
        screen.set_checks("One\nTwo");
        screen.set_reminders("Sit up");
        assert_eq!(screen.save(&mut settings), SaveNotice::Saved);
        assert_eq!(settings.load_checklist().len(), 2);
        assert_eq!(SaveNotice::Saved.to_string(), "Settings Saved!");
    }

    #[test]
    fn save_failure_is_a_notice_not_a_panic() {
        let mut settings = SettingsStore::new(ReadOnly(MemoryStore::new()));
        let mut screen = SettingsScreen::load(&settings);
        screen.set_checks("X");
        assert_eq!(screen.save(&mut settings), SaveNotice::Failed);
        assert_eq!(SaveNotice::Failed.to_string(), "Error saving settings");
    }
}
