//! A running chunk: countdown state wired to a clock and a presenter.
//!
//! The session owns two timers. The tick timer is single-shot and
//! re-armed after each tick fires, so scheduler delay accumulates as drift
//! rather than being corrected. The reminder timer is periodic and is
//! cancelled when the countdown finishes.
//!
//! ## Usage
//!
//! ```ignore
//! let mut session = CountdownSession::new(request, reminders, config.timer);
//! session.start(&mut clock, &mut presenter);
//! // For every Fired the clock delivers:
//! if let Some(event) = session.handle(fired, &mut clock) { render(event) }
//! // Leaving the countdown screen:
//! session.teardown(&mut clock, &mut presenter);
//! ```

use chrono::Utc;

use super::clock::{Clock, Fired, TimerHandle, Trigger};
use super::countdown::{Countdown, CountdownPhase, CountdownState};
use super::progress::ProgressAnimation;
use super::view::{Accent, CountdownView, TIME_UP};
use super::format_clock;
use crate::chunk::{ChunkRequest, ReminderList};
use crate::events::Event;
use crate::presentation::{try_lock, Orientation, Presenter};
use crate::storage::TimerConfig;

#[derive(Debug)]
pub struct CountdownSession {
    request: ChunkRequest,
    countdown: Countdown,
    reminders: ReminderList,
    progress: ProgressAnimation,
    orientation: Orientation,
    start_orientation: Orientation,
    timing: TimerConfig,
    tick: Option<TimerHandle>,
    cycle: Option<TimerHandle>,
}

impl CountdownSession {
    pub fn new(request: ChunkRequest, reminders: ReminderList, timing: TimerConfig) -> Self {
        let countdown = Countdown::new(request.total_secs());
        Self {
            request,
            countdown,
            reminders,
            progress: ProgressAnimation::default(),
            orientation: Orientation::Portrait,
            start_orientation: Orientation::Portrait,
            timing,
            tick: None,
            cycle: None,
        }
    }

    /// Orientation to lock when the countdown opens. Portrait by default.
    pub fn with_start_orientation(mut self, orientation: Orientation) -> Self {
        self.start_orientation = orientation;
        self
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn request(&self) -> &ChunkRequest {
        &self.request
    }

    pub fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    pub fn state(&self) -> CountdownState {
        self.countdown.state()
    }

    pub fn phase(&self) -> CountdownPhase {
        self.countdown.phase()
    }

    pub fn reminders(&self) -> &ReminderList {
        &self.reminders
    }

    pub fn current_reminder(&self) -> &str {
        self.reminders.get(self.countdown.reminder_index())
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Fill fraction shown at `now`.
    pub fn fill_at(&self, now: std::time::Duration) -> f64 {
        self.progress.value_at(now)
    }

    /// Whether any timer is still armed.
    pub fn is_scheduled(&self) -> bool {
        self.tick.is_some() || self.cycle.is_some()
    }

    pub fn view(&self, now: std::time::Duration) -> CountdownView {
        let finished = self.countdown.is_finished();
        CountdownView {
            headline: if finished {
                TIME_UP.to_string()
            } else {
                self.request.task().to_string()
            },
            clock: format_clock(self.countdown.remaining_secs()),
            reminder: (!finished).then(|| self.current_reminder().to_string()),
            fill: self.fill_at(now),
            accent: if finished { Accent::Finished } else { Accent::Active },
            orientation: self.orientation,
        }
    }

    pub fn snapshot(&self, now: std::time::Duration) -> Event {
        Event::StateSnapshot {
            phase: self.countdown.phase(),
            task: self.request.task().to_string(),
            remaining_secs: self.countdown.remaining_secs(),
            total_secs: self.countdown.total_secs(),
            reminder_index: self.countdown.reminder_index(),
            progress: self.fill_at(now),
            orientation: self.orientation,
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Lock the start orientation and arm both timers. A refused lock
    /// leaves the countdown in portrait.
    pub fn start(&mut self, clock: &mut dyn Clock, presenter: &mut dyn Presenter) -> Event {
        self.orientation = if try_lock(presenter, self.start_orientation) {
            self.start_orientation
        } else {
            Orientation::Portrait
        };

        if self.countdown.is_finished() {
            self.progress
                .retarget(clock.now(), 1.0, self.timing.progress_animation());
        } else {
            self.tick = Some(clock.schedule_once(self.timing.tick_interval(), Trigger::Tick));
            self.cycle = Some(
                clock.schedule_every(self.timing.reminder_interval(), Trigger::ReminderCycle),
            );
        }

        tracing::info!(
            task = self.request.task(),
            total_secs = self.request.total_secs(),
            "chunk started"
        );
        Event::ChunkStarted {
            task: self.request.task().to_string(),
            total_secs: self.request.total_secs(),
            at: Utc::now(),
        }
    }

    /// React to a fired timer. Timers this session no longer owns are ignored.
    pub fn handle(&mut self, fired: Fired, clock: &mut dyn Clock) -> Option<Event> {
        match fired.trigger {
            Trigger::Tick if self.tick == Some(fired.handle) => Some(self.on_tick(clock)),
            Trigger::ReminderCycle if self.cycle == Some(fired.handle) => self.on_cycle(),
            _ => {
                tracing::debug!(?fired, "ignoring stale timer");
                None
            }
        }
    }

    /// Swap in a new reminder list and restart the rotation timer.
    pub fn set_reminders(&mut self, reminders: ReminderList, clock: &mut dyn Clock) {
        if reminders == self.reminders {
            return;
        }
        self.reminders = reminders;
        self.countdown.clamp_reminder(self.reminders.len());
        if let Some(old) = self.cycle.take() {
            clock.cancel(old);
        }
        if !self.countdown.is_finished() {
            self.cycle = Some(
                clock.schedule_every(self.timing.reminder_interval(), Trigger::ReminderCycle),
            );
            tracing::debug!(reminders = self.reminders.len(), "reminder cycle restarted");
        }
    }

    /// Flip between portrait and landscape. Nothing changes if the
    /// platform refuses the lock.
    pub fn toggle_orientation(&mut self, presenter: &mut dyn Presenter) -> Option<Event> {
        let next = self.orientation.toggled();
        if !try_lock(presenter, next) {
            return None;
        }
        self.orientation = next;
        Some(Event::OrientationChanged {
            orientation: next,
            at: Utc::now(),
        })
    }

    /// Cancel both timers and restore portrait. Returns `ChunkAbandoned`
    /// when the countdown had not finished.
    pub fn teardown(&mut self, clock: &mut dyn Clock, presenter: &mut dyn Presenter) -> Option<Event> {
        if let Some(handle) = self.tick.take() {
            clock.cancel(handle);
        }
        if let Some(handle) = self.cycle.take() {
            clock.cancel(handle);
        }
        try_lock(presenter, Orientation::Portrait);
        self.orientation = Orientation::Portrait;

        if self.countdown.is_finished() {
            return None;
        }
        tracing::info!(
            task = self.request.task(),
            remaining_secs = self.countdown.remaining_secs(),
            "chunk abandoned"
        );
        Some(Event::ChunkAbandoned {
            task: self.request.task().to_string(),
            remaining_secs: self.countdown.remaining_secs(),
            at: Utc::now(),
        })
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn on_tick(&mut self, clock: &mut dyn Clock) -> Event {
        self.tick = None;
        let now = clock.now();
        let animation = self.timing.progress_animation();

        if self.countdown.tick() {
            if let Some(handle) = self.cycle.take() {
                clock.cancel(handle);
            }
            self.progress.retarget(now, 1.0, animation);
            tracing::info!(task = self.request.task(), "chunk finished");
            return Event::ChunkFinished {
                task: self.request.task().to_string(),
                total_secs: self.request.total_secs(),
                at: Utc::now(),
            };
        }

        self.progress
            .retarget(now, self.countdown.progress(), animation);
        self.tick = Some(clock.schedule_once(self.timing.tick_interval(), Trigger::Tick));
        Event::Ticked {
            remaining_secs: self.countdown.remaining_secs(),
            progress: self.countdown.progress(),
            at: Utc::now(),
        }
    }

    fn on_cycle(&mut self) -> Option<Event> {
        let index = self.countdown.advance_reminder(self.reminders.len())?;
        Some(Event::ReminderAdvanced {
            reminder_index: index,
            reminder: self.reminders.get(index).to_string(),
            at: Utc::now(),
        })
    }
}
