pub mod assistant;
pub mod auth;
pub mod config;
pub mod goal;
mod notifier;
pub mod prefs;
pub mod schedule;
pub mod session;
mod sound;
pub mod stats;
pub mod task;
pub mod timer;

use std::error::Error;

use edumind_core::{AppState, Config, Database};
use serde::Serialize;

/// Configuration plus the state loaded from the default data directory.
pub fn open_state() -> Result<(Config, AppState), Box<dyn Error>> {
    let config = Config::load_or_default();
    let db = Database::open()?;
    let state = AppState::load(db, &config);
    Ok((config, state))
}

/// Single-threaded runtime for the async commands.
pub fn runtime() -> std::io::Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), Box<dyn Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
