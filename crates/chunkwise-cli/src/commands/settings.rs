use clap::Subcommand;
use chunkwise_core::{SaveNotice, SettingsScreen};

use super::{open_settings, CliResult};

#[derive(Subcommand)]
pub enum SettingsAction {
    /// Print the stored checklist and reminder texts
    Show {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Replace the checklist and/or reminder texts (one entry per line)
    Set {
        /// Checklist items, newline separated
        #[arg(long)]
        checks: Option<String>,
        /// Reminders, newline separated
        #[arg(long)]
        reminders: Option<String>,
    },
    /// Clear both texts so the built-in defaults apply
    Reset,
}

pub fn run(action: SettingsAction) -> CliResult {
    let mut settings = open_settings()?;

    match action {
        SettingsAction::Show { json } => {
            let screen = SettingsScreen::load(&settings);
            if json {
                println!("{}", serde_json::to_string_pretty(&settings.load_text())?);
            } else {
                println!("Checks (Enter separated):");
                for item in settings.load_checklist() {
                    println!("  {}", item.label);
                }
                println!("Reminders (Enter separated):");
                for reminder in settings.load_reminders().iter() {
                    println!("  {reminder}");
                }
                if screen.checks().trim().is_empty() || screen.reminders().trim().is_empty() {
                    println!("(built-in defaults shown where nothing is stored)");
                }
            }
        }
        SettingsAction::Set { checks, reminders } => {
            if checks.is_none() && reminders.is_none() {
                return Err("nothing to set: pass --checks and/or --reminders".into());
            }
            let mut screen = SettingsScreen::load(&settings);
            if let Some(checks) = checks {
                screen.set_checks(checks);
            }
            if let Some(reminders) = reminders {
                screen.set_reminders(reminders);
            }
            report(screen.save(&mut settings))?;
        }
        SettingsAction::Reset => {
            report(SettingsScreen::default().save(&mut settings))?;
        }
    }
    Ok(())
}

fn report(notice: SaveNotice) -> CliResult {
    match notice {
        SaveNotice::Saved => {
            println!("{notice}");
            Ok(())
        }
        SaveNotice::Failed => Err(notice.to_string().into()),
    }
}

/// Print the checklist the next chunk will require.
pub fn print_checklist(json: bool) -> CliResult {
    let settings = open_settings()?;
    let items = settings.load_checklist();
    if json {
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else {
        for (i, item) in items.iter().enumerate() {
            println!("[{i}] {}", item.label);
        }
    }
    Ok(())
}
