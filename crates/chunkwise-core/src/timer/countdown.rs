//! Countdown state machine for one running chunk.
//!
//! Pure state: it does not know about clocks. [`CountdownSession`] feeds it
//! ticks and reminder advances.
//!
//! ## State Transitions
//!
//! ```text
//! Running -> Finished
//! ```
//!
//! [`CountdownSession`]: super::CountdownSession

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CountdownPhase {
    Running,
    Finished,
}

/// Observable countdown state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountdownState {
    pub remaining_secs: u64,
    pub reminder_index: usize,
    pub finished: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Countdown {
    total_secs: u64,
    remaining_secs: u64,
    reminder_index: usize,
    phase: CountdownPhase,
}

impl Countdown {
    /// A countdown from `total_secs`. Zero starts out finished.
    pub fn new(total_secs: u64) -> Self {
        Self {
            total_secs,
            remaining_secs: total_secs,
            reminder_index: 0,
            phase: if total_secs == 0 {
                CountdownPhase::Finished
            } else {
                CountdownPhase::Running
            },
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn phase(&self) -> CountdownPhase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.phase == CountdownPhase::Finished
    }

    pub fn total_secs(&self) -> u64 {
        self.total_secs
    }

    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    pub fn reminder_index(&self) -> usize {
        self.reminder_index
    }

    pub fn state(&self) -> CountdownState {
        CountdownState {
            remaining_secs: self.remaining_secs,
            reminder_index: self.reminder_index,
            finished: self.is_finished(),
        }
    }

    /// Elapsed fraction, `0.0 ..= 1.0`.
    pub fn progress(&self) -> f64 {
        if self.total_secs == 0 {
            return 1.0;
        }
        (self.total_secs - self.remaining_secs) as f64 / self.total_secs as f64
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// One second passes. Returns `true` on the tick that finishes the
    /// countdown; ticks after that are ignored.
    pub fn tick(&mut self) -> bool {
        if self.is_finished() {
            return false;
        }
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs == 0 {
            self.phase = CountdownPhase::Finished;
            return true;
        }
        false
    }

    /// Move to the next reminder of a list with `count` entries, wrapping.
    ///
    /// Ignored once finished or when `count` is zero.
    pub fn advance_reminder(&mut self, count: usize) -> Option<usize> {
        if self.is_finished() || count == 0 {
            return None;
        }
        self.reminder_index = (self.reminder_index + 1) % count;
        Some(self.reminder_index)
    }

    /// Keep the reminder index valid for a list of `count` entries.
    pub fn clamp_reminder(&mut self, count: usize) {
        if count > 0 {
            self.reminder_index %= count;
        } else {
            self.reminder_index = 0;
        }
    }
}
