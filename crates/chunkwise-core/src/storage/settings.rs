//! Settings store adapter.
//!
//! Two user-editable, newline-delimited texts live in the key/value store:
//! the checklist (`checks`) and the reminders (`reminders`). Loads never
//! fail; absent, blank, or unreadable values yield the built-in defaults.

use serde::{Deserialize, Serialize};

use super::KeyValueStore;
use crate::chunk::{ChecklistItem, ReminderList};
use crate::error::StorageError;

pub const CHECKS_KEY: &str = "checks";
pub const REMINDERS_KEY: &str = "reminders";

/// The raw settings texts as the user typed them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsText {
    pub checks: String,
    pub reminders: String,
}

/// Typed access to the settings keys of a [`KeyValueStore`].
pub struct SettingsStore<S> {
    store: S,
}

impl<S: KeyValueStore> SettingsStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Current checklist, every item unchecked.
    pub fn load_checklist(&self) -> Vec<ChecklistItem> {
        self.read(CHECKS_KEY)
            .and_then(|text| ChecklistItem::parse_lines(&text))
            .unwrap_or_else(ChecklistItem::defaults)
    }

    /// Current reminder list.
    pub fn load_reminders(&self) -> ReminderList {
        self.read(REMINDERS_KEY)
            .and_then(|text| ReminderList::parse_lines(&text))
            .unwrap_or_default()
    }

    /// Raw stored texts for editing. Absent keys come back empty.
    pub fn load_text(&self) -> SettingsText {
        SettingsText {
            checks: self.read(CHECKS_KEY).unwrap_or_default(),
            reminders: self.read(REMINDERS_KEY).unwrap_or_default(),
        }
    }

    /// Persist both texts verbatim.
    ///
    /// # Errors
    /// Returns the first write failure. The checklist is written first, so a
    /// failure on `reminders` leaves the new checklist in place.
    pub fn save(&mut self, checks: &str, reminders: &str) -> Result<(), StorageError> {
        self.store.set(CHECKS_KEY, checks).inspect_err(|e| {
            tracing::error!("Error saving settings: {e}");
        })?;
        self.store.set(REMINDERS_KEY, reminders).inspect_err(|e| {
            tracing::error!("Error saving settings: {e}");
        })?;
        tracing::debug!(checks_len = checks.len(), reminders_len = reminders.len(), "settings saved");
        Ok(())
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.store.get(key) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Error loading settings, using defaults: {e}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chunk::DEFAULT_CHECKS;
    use crate::storage::MemoryStore;

    /// Store whose reads and writes always fail.
    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::ReadFailed {
                key: key.to_string(),
                message: "disk on fire".into(),
            })
        }

        fn set(&mut self, key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::WriteFailed {
                key: key.to_string(),
                message: "disk full".into(),
            })
        }
    }

    #[test]
    fn empty_store_gives_defaults() {
        let settings = SettingsStore::new(MemoryStore::new());
        let checks = settings.load_checklist();
        assert_eq!(
            checks.iter().map(|c| c.label.as_str()).collect::<Vec<_>>(),
            DEFAULT_CHECKS.to_vec()
        );
        assert!(checks.iter().all(|c| !c.checked));
        assert_eq!(settings.load_reminders(), ReminderList::default());
    }

    #[test]
    fn save_then_load_checklist() {
        let mut settings = SettingsStore::new(MemoryStore::new());
        settings.save("A\nB\nC", "").unwrap();
        let checks = settings.load_checklist();
        assert_eq!(
            checks,
            vec![ChecklistItem::new("A"), ChecklistItem::new("B"), ChecklistItem::new("C")]
        );
    }

    #[test]
    fn saving_empty_text_restores_defaults() {
        let mut settings = SettingsStore::new(MemoryStore::new());
        settings.save("A", "x").unwrap();
        settings.save("", "   ").unwrap();
        assert_eq!(settings.load_checklist(), ChecklistItem::defaults());
        assert_eq!(settings.load_reminders(), ReminderList::default());
    }

    #[test]
    fn save_is_verbatim() {
        let mut settings = SettingsStore::new(MemoryStore::new());
        settings.save("  A \n", " r1\n r2 ").unwrap();
        assert_eq!(
            settings.load_text(),
            SettingsText {
                checks: "  A \n".into(),
                reminders: " r1\n r2 ".into(),
            }
        );
        assert_eq!(
            settings.load_reminders().iter().collect::<Vec<_>>(),
            vec!["r1", "r2"]
        );
    }

    #[test]
    fn read_failure_falls_back_silently() {
        let settings = SettingsStore::new(BrokenStore);
        assert_eq!(settings.load_checklist(), ChecklistItem::defaults());
        assert_eq!(settings.load_reminders(), ReminderList::default());
        assert_eq!(settings.load_text(), SettingsText::default());
    }

    #[test]
    fn write_failure_is_reported() {
        let mut settings = SettingsStore::new(BrokenStore);
        let err = settings.save("A", "B").unwrap_err();
        assert!(matches!(err, StorageError::WriteFailed { ref key, .. } if key == CHECKS_KEY));
    }
}
