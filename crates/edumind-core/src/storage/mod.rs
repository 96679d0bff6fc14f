mod config;
pub mod database;
pub mod keys;

pub use config::{Config, GeminiConfig, GoalConfig, LocaleConfig, LocationConfig, NotificationsConfig};
pub use database::Database;

use std::path::PathBuf;

use crate::error::{ConfigError, Result};

/// Returns the directory holding the database and `config.toml`.
///
/// Resolution order:
/// 1. `EDUMIND_DATA_DIR` when set (used by tests and portable installs)
/// 2. `~/.config/edumind-dev/` when `EDUMIND_ENV=dev`
/// 3. `~/.config/edumind/`
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os("EDUMIND_DATA_DIR") {
        let dir = PathBuf::from(dir);
        std::fs::create_dir_all(&dir)?;
        return Ok(dir);
    }

    let base_dir = dirs::home_dir()
        .ok_or_else(|| ConfigError::DataDir("home directory not found".into()))?
        .join(".config");

    let env = std::env::var("EDUMIND_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("edumind-dev")
    } else {
        base_dir.join("edumind")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
