use std::io::Write;

use clap::Args;
use chunkwise_core::timer::{Accent, CountdownView};
use chunkwise_core::{
    App, Clock, Config, Database, Event, Orientation, Route, TokioClock, ValidationError,
};
use tokio::io::{AsyncBufReadExt, BufReader};

use super::CliResult;
use crate::presenter::TerminalPresenter;

const BAR_WIDTH: usize = 20;

#[derive(Args)]
pub struct StartArgs {
    /// What this chunk is for
    #[arg(long)]
    task: String,
    /// Time allotted, e.g. "25m" or "1h 30m"
    #[arg(long)]
    time: String,
    /// Tick checklist item INDEX (see `chunkwise checklist`); repeatable
    #[arg(long = "check", value_name = "INDEX")]
    checks: Vec<usize>,
    /// Tick every checklist item
    #[arg(long)]
    all_checked: bool,
    /// Print events as JSON lines instead of a status line
    #[arg(long)]
    json: bool,
}

type ChunkApp = App<Database, TerminalPresenter>;

pub fn run(args: StartArgs) -> CliResult {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run_chunk(args))
}

async fn run_chunk(args: StartArgs) -> CliResult {
    let db = Database::open()?;
    let config = Config::load_or_default();
    let mut app = App::new(db, TerminalPresenter, config);

    fill_form(&mut app, &args)?;

    let (mut clock, mut fired) = TokioClock::new();
    let events = match app.start_chunk(&mut clock) {
        Ok(events) => events,
        Err(ValidationError::IncompleteChecklist) => {
            let unchecked: Vec<String> = app
                .form()
                .checklist()
                .iter()
                .enumerate()
                .filter(|(_, item)| !item.checked)
                .map(|(i, item)| format!("[{i}] {}", item.label))
                .collect();
            return Err(format!(
                "{}\nunchecked: {}",
                ValidationError::IncompleteChecklist,
                unchecked.join(", ")
            )
            .into());
        }
        Err(e) => return Err(e.into()),
    };
    for event in &events {
        render(&app, &clock, event, args.json)?;
    }
    if !args.json {
        eprintln!("(enter r to rotate, s for status, n for a new chunk)");
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            Some(timer) = fired.recv() => {
                if let Some(event) = app.handle(timer, &mut clock) {
                    render(&app, &clock, &event, args.json)?;
                    if matches!(event, Event::ChunkFinished { .. }) {
                        break;
                    }
                }
            }
            line = lines.next_line(), if stdin_open => {
                match line? {
                    Some(input) => match input.trim() {
                        "r" => {
                            if let Some(event) = app.toggle_orientation() {
                                render(&app, &clock, &event, args.json)?;
                            }
                        }
                        "s" => {
                            if let Some(event) = app.status(&clock) {
                                render(&app, &clock, &event, args.json)?;
                            }
                        }
                        "n" => {
                            abandon(&mut app, &mut clock, args.json)?;
                            break;
                        }
                        "" => {}
                        other => eprintln!(
                            "unknown command '{other}' (r = rotate, s = status, n = new chunk)"
                        ),
                    },
                    None => stdin_open = false,
                }
            }
            _ = &mut ctrl_c => {
                abandon(&mut app, &mut clock, args.json)?;
                break;
            }
        }
    }

    Ok(())
}

fn fill_form(app: &mut ChunkApp, args: &StartArgs) -> CliResult {
    let form = app.form_mut();
    form.set_task(args.task.clone());
    form.set_time_input(args.time.clone());

    let count = form.checklist().len();
    let wanted: Vec<usize> = if args.all_checked {
        (0..count).collect()
    } else {
        args.checks.clone()
    };
    for index in wanted {
        if index >= count {
            return Err(format!("no checklist item {index} (there are {count})").into());
        }
        if !form.checklist()[index].checked {
            form.toggle_check(index);
        }
    }
    Ok(())
}

fn abandon(app: &mut ChunkApp, clock: &mut TokioClock, json: bool) -> CliResult {
    let events = app.navigate(Route::NewChunk, clock);
    for event in &events {
        render(app, clock, event, json)?;
    }
    Ok(())
}

fn render(app: &ChunkApp, clock: &TokioClock, event: &Event, json: bool) -> CliResult {
    if json {
        println!("{}", serde_json::to_string(event)?);
        return Ok(());
    }

    match event {
        Event::ChunkStarted { task, total_secs, .. } => {
            println!("Starting \"{task}\" for {}", chunkwise_core::format_clock(*total_secs));
        }
        Event::ChunkAbandoned { task, remaining_secs, .. } => {
            println!(
                "\nLeft \"{task}\" with {} remaining",
                chunkwise_core::format_clock(*remaining_secs)
            );
        }
        Event::StateSnapshot {
            phase,
            remaining_secs,
            total_secs,
            reminder_index,
            orientation,
            ..
        } => {
            println!(
                "\n{phase:?}: {} of {} left, reminder #{reminder_index}, {orientation}",
                chunkwise_core::format_clock(*remaining_secs),
                chunkwise_core::format_clock(*total_secs)
            );
        }
        _ => {
            if let Some(session) = app.session() {
                // No animation in a terminal: show where the fill is heading.
                let settled = clock.now() + app.config().timer.progress_animation();
                let view = session.view(settled);
                let line = status_line(&view);
                if matches!(event, Event::ChunkFinished { .. }) {
                    println!("\r{line}");
                } else {
                    print!("\r{line}");
                    std::io::stdout().flush()?;
                }
            }
        }
    }
    Ok(())
}

fn status_line(view: &CountdownView) -> String {
    let filled = ((view.fill * BAR_WIDTH as f64).round() as usize).min(BAR_WIDTH);
    let fill_char = match view.accent {
        Accent::Active => '#',
        Accent::Finished => '!',
    };
    let bar: String = std::iter::repeat(fill_char)
        .take(filled)
        .chain(std::iter::repeat('.').take(BAR_WIDTH - filled))
        .collect();
    let reminder = view.reminder.as_deref().unwrap_or("");

    // Pad so a shorter line fully overwrites the previous one.
    match view.orientation {
        Orientation::Portrait => {
            format!("{:>8} [{bar}] {} | {reminder:<40}", view.clock, view.headline)
        }
        Orientation::Landscape => {
            format!("{} | {reminder:<40} || {:>8} [{bar}]", view.headline, view.clock)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(fill: f64, accent: Accent, orientation: Orientation) -> CountdownView {
        CountdownView {
            headline: "Write".into(),
            clock: "1:00".into(),
            reminder: Some("Breathe".into()),
            fill,
            accent,
            orientation,
        }
    }

    #[test]
    fn status_line_portrait() {
        let line = status_line(&view(0.5, Accent::Active, Orientation::Portrait));
        assert!(line.starts_with("    1:00 [##########..........] Write | Breathe"));
    }

    #[test]
    fn status_line_landscape_puts_clock_last() {
        let line = status_line(&view(1.0, Accent::Finished, Orientation::Landscape));
        assert!(line.starts_with("Write | Breathe"));
        assert!(line.ends_with("    1:00 [!!!!!!!!!!!!!!!!!!!!]"));
    }
}
