//! Chunk form controller.
//!
//! Holds the task text, the duration text and the checklist while the user
//! edits them, and turns them into a [`ChunkRequest`] once every check
//! passes.
//!
//! ## State Transitions
//!
//! ```text
//! Editing -> Validated -> (refresh) -> Editing
//! ```

use serde::Serialize;

use super::{ChecklistItem, ChunkRequest, ReminderList};
use crate::duration::parse_duration;
use crate::error::ValidationError;
use crate::storage::{KeyValueStore, SettingsStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormState {
    Editing,
    /// A request was produced and handed to the countdown.
    Validated,
}

/// Copy of `items` with the item at `index` flipped.
///
/// An out-of-range index returns an unchanged copy.
pub fn toggled(items: &[ChecklistItem], index: usize) -> Vec<ChecklistItem> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| ChecklistItem {
            label: item.label.clone(),
            checked: if i == index { !item.checked } else { item.checked },
        })
        .collect()
}

/// Validate raw form input.
///
/// Checks run in order and the first failure wins: empty task, then a
/// duration that parses to zero, then any unchecked item.
pub fn validate(
    task: &str,
    time_input: &str,
    checklist: &[ChecklistItem],
) -> Result<ChunkRequest, ValidationError> {
    let task = task.trim();
    if task.is_empty() {
        return Err(ValidationError::EmptyTask);
    }
    let total_secs = parse_duration(time_input);
    if total_secs == 0 {
        return Err(ValidationError::InvalidDuration);
    }
    if !checklist.iter().all(|item| item.checked) {
        return Err(ValidationError::IncompleteChecklist);
    }
    Ok(ChunkRequest::new(task.to_string(), total_secs))
}

#[derive(Debug, Clone, Serialize)]
pub struct ChunkForm {
    task: String,
    time_input: String,
    checklist: Vec<ChecklistItem>,
    reminders: ReminderList,
    state: FormState,
}

impl Default for ChunkForm {
    fn default() -> Self {
        Self {
            task: String::new(),
            time_input: String::new(),
            checklist: ChecklistItem::defaults(),
            reminders: ReminderList::default(),
            state: FormState::Editing,
        }
    }
}

impl ChunkForm {
    /// Form populated from the current settings.
    pub fn load<S: KeyValueStore>(settings: &SettingsStore<S>) -> Self {
        let mut form = Self::default();
        form.refresh(settings);
        form
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn task(&self) -> &str {
        &self.task
    }

    pub fn time_input(&self) -> &str {
        &self.time_input
    }

    pub fn checklist(&self) -> &[ChecklistItem] {
        &self.checklist
    }

    pub fn reminders(&self) -> &ReminderList {
        &self.reminders
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Re-read checklist and reminders. Called whenever the form regains
    /// focus, so edits made on the settings screen apply immediately.
    ///
    /// Task and duration text are left alone; checklist ticks are cleared.
    pub fn refresh<S: KeyValueStore>(&mut self, settings: &SettingsStore<S>) {
        self.checklist = settings.load_checklist();
        self.reminders = settings.load_reminders();
        self.state = FormState::Editing;
        tracing::debug!(
            checks = self.checklist.len(),
            reminders = self.reminders.len(),
            "form settings refreshed"
        );
    }

    pub fn set_task(&mut self, task: impl Into<String>) {
        self.task = task.into();
    }

    pub fn set_time_input(&mut self, time_input: impl Into<String>) {
        self.time_input = time_input.into();
    }

    pub fn toggle_check(&mut self, index: usize) {
        self.checklist = toggled(&self.checklist, index);
    }

    /// Validate and, on success, clear the form and return the request.
    ///
    /// On failure the form is left exactly as it was.
    pub fn attempt_start(&mut self) -> Result<ChunkRequest, ValidationError> {
        let request = validate(&self.task, &self.time_input, &self.checklist)?;

        self.task.clear();
        self.time_input.clear();
        self.checklist = self
            .checklist
            .iter()
            .map(|item| ChecklistItem::new(item.label.clone()))
            .collect();
        self.state = FormState::Validated;

        tracing::info!(task = request.task(), total_secs = request.total_secs(), "chunk validated");
        Ok(request)
    }
}
