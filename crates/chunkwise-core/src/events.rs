use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::presentation::Orientation;
use crate::timer::CountdownPhase;

/// Every state change in a chunk's life produces an Event.
/// The shell renders them; `--json` prints them as-is.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    ChunkStarted {
        task: String,
        total_secs: u64,
        at: DateTime<Utc>,
    },
    Ticked {
        remaining_secs: u64,
        progress: f64,
        at: DateTime<Utc>,
    },
    ReminderAdvanced {
        reminder_index: usize,
        reminder: String,
        at: DateTime<Utc>,
    },
    ChunkFinished {
        task: String,
        total_secs: u64,
        at: DateTime<Utc>,
    },
    /// The user left the countdown before it finished.
    ChunkAbandoned {
        task: String,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    OrientationChanged {
        orientation: Orientation,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        phase: CountdownPhase,
        task: String,
        remaining_secs: u64,
        total_secs: u64,
        reminder_index: usize,
        progress: f64,
        orientation: Orientation,
        at: DateTime<Utc>,
    },
}
