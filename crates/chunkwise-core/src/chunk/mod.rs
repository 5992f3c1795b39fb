//! Chunk data model and the form that produces chunk requests.

mod form;

pub use form::{toggled, validate, ChunkForm, FormState};

use serde::{Deserialize, Serialize};

/// Checklist shown when the user has not configured one.
pub const DEFAULT_CHECKS: [&str; 3] = [
    "Task is specific?",
    "Time is realistic?",
    "Music is off if not needed?",
];

/// Reminders cycled when the user has not configured any.
pub const DEFAULT_REMINDERS: [&str; 6] = [
    "Maintain good posture",
    "Focus on a single task",
    "Stay hydrated",
    "Take deep breaths",
    "Keep your workspace organized",
    "Avoid distractions",
];

/// One yes/no precondition that must be ticked before a chunk starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub label: String,
    pub checked: bool,
}

impl ChecklistItem {
    /// New unchecked item.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            checked: false,
        }
    }

    /// The built-in three item checklist.
    pub fn defaults() -> Vec<Self> {
        DEFAULT_CHECKS.iter().map(|label| Self::new(*label)).collect()
    }

    /// Build a checklist from newline-delimited settings text.
    ///
    /// Returns `None` when the text is blank so the caller can fall back to
    /// [`ChecklistItem::defaults`]. Blank lines inside non-blank text are
    /// kept as empty-label items.
    pub fn parse_lines(text: &str) -> Option<Vec<Self>> {
        if text.trim().is_empty() {
            return None;
        }
        Some(text.split('\n').map(|line| Self::new(line.trim())).collect())
    }
}

/// Ordered, non-empty list of reminder strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct ReminderList(Vec<String>);

impl ReminderList {
    /// Wrap a list of reminders. Returns `None` if `items` is empty.
    pub fn new(items: Vec<String>) -> Option<Self> {
        if items.is_empty() {
            None
        } else {
            Some(Self(items))
        }
    }

    /// Build from newline-delimited settings text, trimming each line.
    ///
    /// Returns `None` when the text is blank.
    pub fn parse_lines(text: &str) -> Option<Self> {
        if text.trim().is_empty() {
            return None;
        }
        Self::new(text.split('\n').map(|line| line.trim().to_string()).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Never true for a constructed list.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Reminder at `index`, wrapping around the end of the list.
    pub fn get(&self, index: usize) -> &str {
        &self.0[index % self.0.len()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl Default for ReminderList {
    fn default() -> Self {
        Self(DEFAULT_REMINDERS.iter().map(|s| s.to_string()).collect())
    }
}

impl TryFrom<Vec<String>> for ReminderList {
    type Error = &'static str;

    fn try_from(items: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(items).ok_or("reminder list must not be empty")
    }
}

impl From<ReminderList> for Vec<String> {
    fn from(list: ReminderList) -> Self {
        list.0
    }
}

/// A validated request to run one chunk.
///
/// Only [`ChunkForm::attempt_start`] constructs these, so `task` is always
/// trimmed and non-empty and `total_secs` is positive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChunkRequest {
    task: String,
    total_secs: u64,
}

impl ChunkRequest {
    pub(crate) fn new(task: String, total_secs: u64) -> Self {
        Self { task, total_secs }
    }

    pub fn task(&self) -> &str {
        &self.task
    }

    pub fn total_secs(&self) -> u64 {
        self.total_secs
    }
}
