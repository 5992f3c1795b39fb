pub mod config;
pub mod parse;
pub mod settings;
pub mod start;

use chunkwise_core::{Database, SettingsStore};

pub type CliResult = Result<(), Box<dyn std::error::Error>>;

/// Settings backed by the on-disk database.
pub fn open_settings() -> Result<SettingsStore<Database>, Box<dyn std::error::Error>> {
    Ok(SettingsStore::new(Database::open()?))
}
