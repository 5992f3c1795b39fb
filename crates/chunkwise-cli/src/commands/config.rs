use clap::Subcommand;
use chunkwise_core::Config;
use serde::Serialize;

use super::CliResult;

/// Every settable key, in display order.
const KEYS: &[&str] = &[
    "timer.tick_interval_ms",
    "timer.reminder_interval_ms",
    "timer.progress_animation_ms",
    "ui.start_orientation",
    "ui.bar_color",
    "ui.bar_style",
];

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show one timing or display value
    Get {
        /// Dotted key, e.g. "timer.reminder_interval_ms" or "ui.start_orientation"
        key: String,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Change a timing or display value (intervals must be > 0)
    Set {
        /// Dotted key
        key: String,
        /// New value: milliseconds, "portrait"/"landscape", "light"/"dark" or a color
        value: String,
    },
    /// Show every key and its value
    List {
        /// Print the whole config as JSON
        #[arg(long)]
        json: bool,
    },
    /// Restore the default cadence and display settings
    Reset,
}

#[derive(Serialize)]
struct Entry<'a> {
    key: &'a str,
    value: String,
}

pub fn run(action: ConfigAction) -> CliResult {
    match action {
        ConfigAction::Get { key, json } => {
            let config = Config::load()?;
            let value = config
                .get(&key)
                .ok_or_else(|| format!("unknown config key: {key}"))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&Entry { key: &key, value })?);
            } else {
                println!("{value}");
            }
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load()?;
            config.set(&key, &value)?;
            tracing::info!(key, value, "config updated");
            println!("{key} = {value}");
        }
        ConfigAction::List { json } => {
            let config = Config::load()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&config)?);
            } else {
                for key in KEYS {
                    if let Some(value) = config.get(key) {
                        println!("{key} = {value}");
                    }
                }
            }
        }
        ConfigAction::Reset => {
            Config::default().save()?;
            println!("Timing and display settings restored to defaults");
        }
    }
    Ok(())
}
