//! Integration tests for the full chunk lifecycle.
//!
//! Settings are saved through the settings screen, picked up by the form on
//! focus, and drive a countdown on a simulated clock from start to
//! "Time's up!".

use std::time::Duration;

use chunkwise_core::timer::TIME_UP;
use chunkwise_core::{
    App, Clock, Config, Database, Event, HeadlessPresenter, Route, SaveNotice, Screen, SimulatedClock,
    ValidationError,
};

fn check_all<S, P>(app: &mut App<S, P>)
where
    S: chunkwise_core::KeyValueStore,
    P: chunkwise_core::Presenter,
{
    for i in 0..app.form().checklist().len() {
        if !app.form().checklist()[i].checked {
            app.form_mut().toggle_check(i);
        }
    }
}

#[test]
fn test_full_chunk_workflow() {
    let db = Database::open_memory().unwrap();
    let mut app = App::new(db, HeadlessPresenter::default(), Config::default());
    let mut clock = SimulatedClock::new();

    // Customize settings
    app.navigate(Route::Settings, &mut clock);
    app.settings_screen_mut().set_checks("Phone away\nWater ready");
    app.settings_screen_mut().set_reminders("Breathe\nSit up\nOne thing");
    assert_eq!(app.save_settings(), SaveNotice::Saved);

    // Back on the form, the new checklist is in place
    app.navigate(Route::NewChunk, &mut clock);
    assert_eq!(
        app.form()
            .checklist()
            .iter()
            .map(|c| c.label.as_str())
            .collect::<Vec<_>>(),
        vec!["Phone away", "Water ready"]
    );

    // Validation order: task first, then duration, then checklist
    app.form_mut().set_time_input("later");
    assert!(matches!(app.start_chunk(&mut clock), Err(ValidationError::EmptyTask)));
    app.form_mut().set_task("Draft intro");
    assert!(matches!(app.start_chunk(&mut clock), Err(ValidationError::InvalidDuration)));
    app.form_mut().set_time_input("1m 5s");
    assert!(matches!(
        app.start_chunk(&mut clock),
        Err(ValidationError::IncompleteChecklist)
    ));

    check_all(&mut app);
    app.start_chunk(&mut clock).unwrap();
    assert_eq!(app.screen(), Screen::Timer);

    // Form was reset for the next chunk
    assert_eq!(app.form().task(), "");
    assert_eq!(app.form().time_input(), "");
    assert!(app.form().checklist().iter().all(|c| !c.checked));

    let view = app.session().unwrap().view(clock.now());
    assert_eq!(view.headline, "Draft intro");
    assert_eq!(view.clock, "1:05");
    assert_eq!(view.reminder.as_deref(), Some("Breathe"));

    let mut reminders = Vec::new();
    let mut finished = 0;
    clock.advance(Duration::from_secs(65), |fired, c| {
        match app.handle(fired, c) {
            Some(Event::ReminderAdvanced { reminder, .. }) => reminders.push(reminder),
            Some(Event::ChunkFinished { .. }) => finished += 1,
            _ => {}
        }
    });
    assert_eq!(finished, 1);
    assert_eq!(&reminders[..4], ["Sit up", "One thing", "Breathe", "Sit up"]);

    let view = app.session().unwrap().view(clock.now() + Duration::from_secs(1));
    assert_eq!(view.headline, TIME_UP);
    assert_eq!(view.clock, "0:00");
    assert_eq!(view.fill, 1.0);
    assert!(view.reminder.is_none());

    // Nothing keeps ticking after the end
    let mut late = 0;
    clock.advance(Duration::from_secs(60), |fired, c| {
        late += app.handle(fired, c).map_or(0, |_| 1);
    });
    assert_eq!(late, 0);

    // New chunk returns to a fresh form
    let events = app.navigate(Route::NewChunk, &mut clock);
    assert!(events.is_empty());
    assert_eq!(app.screen(), Screen::NewChunk);
    assert!(app.session().is_none());
}

#[test]
fn test_abandon_mid_chunk() {
    let mut app = App::new(
        Database::open_memory().unwrap(),
        HeadlessPresenter::default(),
        Config::default(),
    );
    let mut clock = SimulatedClock::new();

    app.form_mut().set_task("Inbox zero");
    app.form_mut().set_time_input("2 minutes");
    check_all(&mut app);
    app.start_chunk(&mut clock).unwrap();

    clock.advance(Duration::from_secs(30), |fired, c| {
        app.handle(fired, c);
    });
    assert_eq!(app.session().unwrap().state().remaining_secs, 90);

    let events = app.navigate(Route::NewChunk, &mut clock);
    match events.as_slice() {
        [Event::ChunkAbandoned {
            task,
            remaining_secs,
            ..
        }] => {
            assert_eq!(task, "Inbox zero");
            assert_eq!(*remaining_secs, 90);
        }
        other => panic!("Expected ChunkAbandoned, got {other:?}"),
    }
    assert_eq!(clock.pending_count(), 0);
}

#[test]
fn test_denied_rotation_does_not_disturb_countdown() {
    let presenter = HeadlessPresenter {
        deny_orientation: true,
        ..Default::default()
    };
    let mut app = App::new(Database::open_memory().unwrap(), presenter, Config::default());
    let mut clock = SimulatedClock::new();

    app.form_mut().set_task("Review");
    app.form_mut().set_time_input("10s");
    check_all(&mut app);
    app.start_chunk(&mut clock).unwrap();

    assert!(app.toggle_orientation().is_none());
    clock.advance(Duration::from_secs(4), |fired, c| {
        app.handle(fired, c);
    });
    assert_eq!(app.session().unwrap().state().remaining_secs, 6);
}

#[test]
fn test_custom_timing_from_config() {
    let mut config = Config::default();
    config.apply("timer.reminder_interval_ms", "1000").unwrap();
    let mut app = App::new(Database::open_memory().unwrap(), HeadlessPresenter::default(), config);
    let mut clock = SimulatedClock::new();

    app.form_mut().set_task("Sprint");
    app.form_mut().set_time_input("1h");
    check_all(&mut app);
    app.start_chunk(&mut clock).unwrap();

    clock.advance(Duration::from_secs(8), |fired, c| {
        app.handle(fired, c);
    });
    let session = app.session().unwrap();
    assert_eq!(session.state().remaining_secs, 3600 - 8);
    // Six default reminders, eight rotations
    assert_eq!(session.state().reminder_index, 2);
    assert_eq!(session.view(clock.now()).clock, "59:52");
}
