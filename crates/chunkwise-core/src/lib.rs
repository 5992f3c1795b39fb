//! # Chunkwise Core Library
//!
//! Business logic for Chunkwise, a focused-work timer. The user names a
//! task, gives it a duration in free-form text ("1h 30m"), ticks off a
//! checklist of preconditions, and then watches a countdown that rotates
//! through motivational reminders. The CLI binary is a thin shell over this
//! crate.
//!
//! ## Architecture
//!
//! - **Duration Parser**: free-form text to seconds
//! - **Storage**: SQLite key/value store for the user's checklist and
//!   reminder texts, TOML configuration for timing and display chrome
//! - **Chunk Form**: validation of task, duration and checklist
//! - **Countdown**: clock-driven state machine; the caller supplies a
//!   [`Clock`] and forwards fired timers back to it
//!
//! ## Key Components
//!
//! - [`ChunkForm`]: Form controller producing [`ChunkRequest`]s
//! - [`CountdownSession`]: A running chunk
//! - [`SettingsStore`]: Checklist and reminder persistence
//! - [`App`]: Navigation between form, countdown and settings

pub mod app;
pub mod chunk;
pub mod duration;
pub mod error;
pub mod events;
pub mod presentation;
pub mod screen;
pub mod storage;
pub mod timer;

pub use app::{App, Route, Screen};
pub use chunk::{ChecklistItem, ChunkForm, ChunkRequest, FormState, ReminderList};
pub use duration::parse_duration;
pub use error::{ConfigError, PresentationError, StorageError, ValidationError};
pub use events::Event;
pub use presentation::{HeadlessPresenter, Orientation, Presenter};
pub use screen::{SaveNotice, SettingsScreen};
pub use storage::{Config, Database, KeyValueStore, MemoryStore, SettingsStore};
pub use timer::{
    format_clock, Clock, CountdownSession, CountdownState, Fired, SimulatedClock, TokioClock,
};
