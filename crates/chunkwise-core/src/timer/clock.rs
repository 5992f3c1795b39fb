//! Timer scheduling capability.
//!
//! The countdown never sleeps or spawns on its own. It asks a [`Clock`] to
//! deliver a [`Fired`] notification later and reacts when the host hands
//! that notification back. Production uses [`TokioClock`]; tests use
//! [`SimulatedClock`] and advance virtual time by hand.

use std::collections::HashMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;

/// Identifies one scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimerHandle(u64);

/// What a timer is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trigger {
    /// One-second countdown step.
    Tick,
    /// Reminder rotation.
    ReminderCycle,
}

/// A timer that has come due.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fired {
    pub handle: TimerHandle,
    pub trigger: Trigger,
}

pub trait Clock {
    /// Time elapsed since the clock was created.
    fn now(&self) -> Duration;

    /// Fire `trigger` once, `after` from now.
    fn schedule_once(&mut self, after: Duration, trigger: Trigger) -> TimerHandle;

    /// Fire `trigger` every `period`, first at `now + period`.
    fn schedule_every(&mut self, period: Duration, trigger: Trigger) -> TimerHandle;

    /// Stop a timer. Unknown or already-fired handles are ignored.
    fn cancel(&mut self, handle: TimerHandle);
}

// ── Simulated ────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
struct Pending {
    handle: TimerHandle,
    trigger: Trigger,
    deadline: Duration,
    period: Option<Duration>,
    /// Tie-breaker: earlier scheduling fires first at equal deadlines.
    seq: u64,
}

/// Virtual-time clock. Nothing fires until [`SimulatedClock::advance`].
#[derive(Debug, Clone, Default)]
pub struct SimulatedClock {
    now: Duration,
    next_id: u64,
    next_seq: u64,
    pending: Vec<Pending>,
}

impl SimulatedClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live timers.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Move time forward by `by`, delivering every timer that comes due in
    /// deadline order. `on_fire` may schedule or cancel timers; anything it
    /// schedules inside the window fires in the same call.
    pub fn advance<F>(&mut self, by: Duration, mut on_fire: F)
    where
        F: FnMut(Fired, &mut Self),
    {
        let target = self.now + by;
        while let Some(fired) = self.pop_due(target) {
            on_fire(fired, self);
        }
        self.now = target;
    }

    fn pop_due(&mut self, until: Duration) -> Option<Fired> {
        let idx = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.deadline <= until)
            .min_by_key(|(_, p)| (p.deadline, p.seq))
            .map(|(i, _)| i)?;

        let due = self.pending.swap_remove(idx);
        self.now = due.deadline;
        let fired = Fired {
            handle: due.handle,
            trigger: due.trigger,
        };
        if let Some(period) = due.period {
            let seq = self.bump_seq();
            self.pending.push(Pending {
                deadline: due.deadline + period,
                seq,
                ..due
            });
        }
        Some(fired)
    }

    fn bump_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }

    fn push(&mut self, after: Duration, trigger: Trigger, period: Option<Duration>) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        let seq = self.bump_seq();
        self.pending.push(Pending {
            handle,
            trigger,
            deadline: self.now + after,
            period,
            seq,
        });
        handle
    }
}

impl Clock for SimulatedClock {
    fn now(&self) -> Duration {
        self.now
    }

    fn schedule_once(&mut self, after: Duration, trigger: Trigger) -> TimerHandle {
        self.push(after, trigger, None)
    }

    fn schedule_every(&mut self, period: Duration, trigger: Trigger) -> TimerHandle {
        // A zero period would never let virtual time move.
        let period = period.max(Duration::from_millis(1));
        self.push(period, trigger, Some(period))
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.pending.retain(|p| p.handle != handle);
    }
}

// ── Tokio ────────────────────────────────────────────────────────────

/// Real-time clock on tokio timers.
///
/// Fired timers arrive on the receiver returned by [`TokioClock::new`].
/// A notification can already be queued when its timer is cancelled, so
/// consumers must drop handles they no longer recognise. Must be used
/// inside a tokio runtime.
pub struct TokioClock {
    started: tokio::time::Instant,
    next_id: u64,
    tx: UnboundedSender<Fired>,
    tasks: HashMap<TimerHandle, JoinHandle<()>>,
}

impl TokioClock {
    pub fn new() -> (Self, UnboundedReceiver<Fired>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let clock = Self {
            started: tokio::time::Instant::now(),
            next_id: 0,
            tx,
            tasks: HashMap::new(),
        };
        (clock, rx)
    }

    fn next_handle(&mut self) -> TimerHandle {
        self.tasks.retain(|_, task| !task.is_finished());
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        handle
    }
}

impl Clock for TokioClock {
    fn now(&self) -> Duration {
        self.started.elapsed()
    }

    fn schedule_once(&mut self, after: Duration, trigger: Trigger) -> TimerHandle {
        let handle = self.next_handle();
        let tx = self.tx.clone();
        let task = tokio::spawn(async move {
            tokio::time::sleep(after).await;
            let _ = tx.send(Fired { handle, trigger });
        });
        self.tasks.insert(handle, task);
        handle
    }

    fn schedule_every(&mut self, period: Duration, trigger: Trigger) -> TimerHandle {
        let handle = self.next_handle();
        let tx = self.tx.clone();
        let period = period.max(Duration::from_millis(1));
        let task = tokio::spawn(async move {
            let mut interval =
                tokio::time::interval_at(tokio::time::Instant::now() + period, period);
            loop {
                interval.tick().await;
                if tx.send(Fired { handle, trigger }).is_err() {
                    break;
                }
            }
        });
        self.tasks.insert(handle, task);
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        if let Some(task) = self.tasks.remove(&handle) {
            task.abort();
        }
    }
}

impl Drop for TokioClock {
    fn drop(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.abort();
        }
    }
}
