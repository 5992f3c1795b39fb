//! Navigation shell tying the three screens together.
//!
//! The host owns the clock and forwards every [`Fired`] timer to
//! [`App::handle`]. Leaving the countdown tears the session down, so no
//! timer outlives the screen that armed it. Returning to the form counts as
//! a focus event and reloads settings.

use crate::chunk::{ChunkForm, ChunkRequest};
use crate::error::ValidationError;
use crate::events::Event;
use crate::presentation::{style_bars, Presenter};
use crate::screen::{SaveNotice, SettingsScreen};
use crate::storage::{Config, KeyValueStore, SettingsStore};
use crate::timer::{Clock, CountdownSession, Fired};

/// Navigation target, with the payload the target needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    NewChunk,
    Timer(ChunkRequest),
    Settings,
}

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    NewChunk,
    Timer,
    Settings,
}

pub struct App<S, P> {
    settings: SettingsStore<S>,
    presenter: P,
    config: Config,
    screen: Screen,
    form: ChunkForm,
    session: Option<CountdownSession>,
    settings_screen: SettingsScreen,
}

impl<S: KeyValueStore, P: Presenter> App<S, P> {
    /// Open on the form with freshly loaded settings.
    pub fn new(store: S, mut presenter: P, config: Config) -> Self {
        style_bars(&mut presenter, &config.ui.bar_color, config.ui.bar_style);
        let settings = SettingsStore::new(store);
        let form = ChunkForm::load(&settings);
        Self {
            settings,
            presenter,
            config,
            screen: Screen::NewChunk,
            form,
            session: None,
            settings_screen: SettingsScreen::default(),
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn form(&self) -> &ChunkForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ChunkForm {
        &mut self.form
    }

    pub fn session(&self) -> Option<&CountdownSession> {
        self.session.as_ref()
    }

    pub fn settings_screen(&self) -> &SettingsScreen {
        &self.settings_screen
    }

    pub fn settings_screen_mut(&mut self) -> &mut SettingsScreen {
        &mut self.settings_screen
    }

    pub fn settings(&self) -> &SettingsStore<S> {
        &self.settings
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Snapshot of the running countdown, if any.
    pub fn status(&self, clock: &dyn Clock) -> Option<Event> {
        self.session.as_ref().map(|s| s.snapshot(clock.now()))
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Switch screens. Returns the events the transition produced.
    pub fn navigate(&mut self, route: Route, clock: &mut dyn Clock) -> Vec<Event> {
        let mut events = Vec::new();

        if let Some(mut session) = self.session.take() {
            events.extend(session.teardown(clock, &mut self.presenter));
        }

        match route {
            Route::NewChunk => {
                self.screen = Screen::NewChunk;
                self.focus();
            }
            Route::Timer(request) => {
                let mut session = CountdownSession::new(
                    request,
                    self.form.reminders().clone(),
                    self.config.timer.clone(),
                )
                .with_start_orientation(self.config.ui.start_orientation);
                events.push(session.start(clock, &mut self.presenter));
                self.session = Some(session);
                self.screen = Screen::Timer;
            }
            Route::Settings => {
                self.settings_screen = SettingsScreen::load(&self.settings);
                self.screen = Screen::Settings;
            }
        }
        events
    }

    /// The form regained focus: reload checklist and reminders.
    pub fn focus(&mut self) {
        if self.screen == Screen::NewChunk {
            self.form.refresh(&self.settings);
        }
    }

    /// Validate the form and, on success, open the countdown.
    ///
    /// # Errors
    /// Returns the first failing validation check; nothing changes then.
    pub fn start_chunk(&mut self, clock: &mut dyn Clock) -> Result<Vec<Event>, ValidationError> {
        let request = self.form.attempt_start()?;
        Ok(self.navigate(Route::Timer(request), clock))
    }

    /// Forward a fired timer to the running session.
    pub fn handle(&mut self, fired: Fired, clock: &mut dyn Clock) -> Option<Event> {
        match self.session.as_mut() {
            Some(session) => session.handle(fired, clock),
            None => {
                tracing::debug!(?fired, "timer fired with no countdown running");
                None
            }
        }
    }

    /// Rotate the countdown display. No-op off the countdown screen.
    pub fn toggle_orientation(&mut self) -> Option<Event> {
        self.session
            .as_mut()?
            .toggle_orientation(&mut self.presenter)
    }

    pub fn save_settings(&mut self) -> SaveNotice {
        self.settings_screen.save(&mut self.settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::{BarStyle, HeadlessPresenter, Orientation};
    use crate::storage::MemoryStore;
    use crate::timer::SimulatedClock;
    use std::time::Duration;

    fn app() -> App<MemoryStore, HeadlessPresenter> {
        App::new(MemoryStore::new(), HeadlessPresenter::default(), Config::default())
    }

    fn fill(app: &mut App<MemoryStore, HeadlessPresenter>, task: &str, time: &str) {
        app.form_mut().set_task(task);
        app.form_mut().set_time_input(time);
        for i in 0..app.form().checklist().len() {
            app.form_mut().toggle_check(i);
        }
    }

    #[test]
    fn new_styles_bars_and_opens_form() {
        let app = app();
        assert_eq!(app.screen(), Screen::NewChunk);
        assert_eq!(app.presenter().bars, Some(("#000000".to_string(), BarStyle::Light)));
        assert_eq!(app.form().checklist().len(), 3);
    }

    #[test]
    fn start_chunk_opens_timer() {
        let mut app = app();
        let mut clock = SimulatedClock::new();
        fill(&mut app, "Write", "2s");
        let events = app.start_chunk(&mut clock).unwrap();
        assert!(matches!(events.as_slice(), [Event::ChunkStarted { .. }]));
        assert_eq!(app.screen(), Screen::Timer);
        assert_eq!(app.form().task(), "");
    }

    #[test]
    fn validation_failure_stays_on_form() {
        let mut app = app();
        let mut clock = SimulatedClock::new();
        fill(&mut app, "Write", "soon");
        assert!(matches!(
            app.start_chunk(&mut clock),
            Err(ValidationError::InvalidDuration)
        ));
        assert_eq!(app.screen(), Screen::NewChunk);
        assert_eq!(clock.pending_count(), 0);
    }

    #[test]
    fn leaving_timer_cancels_session() {
        let mut app = app();
        let mut clock = SimulatedClock::new();
        fill(&mut app, "Write", "1m");
        app.start_chunk(&mut clock).unwrap();
        app.toggle_orientation();
        assert_eq!(app.presenter().orientation, Orientation::Landscape);

        let events = app.navigate(Route::NewChunk, &mut clock);
        assert!(matches!(events.as_slice(), [Event::ChunkAbandoned { .. }]));
        assert!(app.session().is_none());
        assert_eq!(clock.pending_count(), 0);
        assert_eq!(app.presenter().orientation, Orientation::Portrait);
    }

    #[test]
    fn settings_edit_applies_on_return() {
        let mut app = app();
        let mut clock = SimulatedClock::new();
        app.navigate(Route::Settings, &mut clock);
        app.settings_screen_mut().set_checks("Water\nNotes");
        app.settings_screen_mut().set_reminders("Blink");
        assert_eq!(app.save_settings(), SaveNotice::Saved);

        app.navigate(Route::NewChunk, &mut clock);
        assert_eq!(app.form().checklist().len(), 2);
        assert_eq!(app.form().reminders().get(0), "Blink");
    }

    #[test]
    fn configured_start_orientation_applies() {
        let mut config = Config::default();
        config.apply("ui.start_orientation", "landscape").unwrap();
        let mut app = App::new(MemoryStore::new(), HeadlessPresenter::default(), config);
        let mut clock = SimulatedClock::new();
        fill(&mut app, "Write", "1m");
        app.start_chunk(&mut clock).unwrap();
        assert_eq!(app.session().unwrap().orientation(), Orientation::Landscape);
        assert_eq!(app.presenter().orientation, Orientation::Landscape);

        app.navigate(Route::NewChunk, &mut clock);
        assert_eq!(app.presenter().orientation, Orientation::Portrait);
    }

    #[test]
    fn status_only_while_counting_down() {
        let mut app = app();
        let mut clock = SimulatedClock::new();
        assert!(app.status(&clock).is_none());
        fill(&mut app, "Write", "1m");
        app.start_chunk(&mut clock).unwrap();
        assert!(matches!(
            app.status(&clock),
            Some(Event::StateSnapshot { remaining_secs: 60, .. })
        ));
    }

    #[test]
    fn timer_events_flow_through_app() {
        let mut app = app();
        let mut clock = SimulatedClock::new();
        fill(&mut app, "Write", "3s");
        app.start_chunk(&mut clock).unwrap();

        let mut events = Vec::new();
        clock.advance(Duration::from_secs(5), |fired, c| {
            events.extend(app.handle(fired, c));
        });
        assert!(matches!(events.last(), Some(Event::ChunkFinished { .. })));
        assert!(app.session().unwrap().state().finished);
    }
}
