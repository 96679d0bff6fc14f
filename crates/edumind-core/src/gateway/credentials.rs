//! API key lookup: environment first, then the OS keyring.

use crate::error::GatewayError;

pub const API_KEY_ENTRY: &str = "gemini_api_key";

const ENV_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

/// Thin wrapper around the OS keyring for credential storage.
pub mod keyring_store {
    const SERVICE: &str = "edumind";

    pub fn get(key: &str) -> Result<Option<String>, keyring::Error> {
        let entry = keyring::Entry::new(SERVICE, key)?;
        match entry.get_password() {
            Ok(pw) => Ok(Some(pw)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub fn set(key: &str, value: &str) -> Result<(), keyring::Error> {
        let entry = keyring::Entry::new(SERVICE, key)?;
        entry.set_password(value)
    }

    pub fn delete(key: &str) -> Result<(), keyring::Error> {
        let entry = keyring::Entry::new(SERVICE, key)?;
        match entry.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(e),
        }
    }
}

/// The first non-blank key found, or `None`.
pub fn api_key() -> Option<String> {
    if let Some(key) = env_api_key() {
        return Some(key);
    }
    match keyring_store::get(API_KEY_ENTRY) {
        Ok(key) => key.filter(|k| !k.trim().is_empty()),
        Err(e) => {
            tracing::warn!(error = %e, "could not read API key from keyring");
            None
        }
    }
}

fn env_api_key() -> Option<String> {
    ENV_VARS
        .iter()
        .filter_map(|name| std::env::var(name).ok())
        .map(|v| v.trim().to_string())
        .find(|v| !v.is_empty())
}

pub fn store_api_key(key: &str) -> Result<(), GatewayError> {
    Ok(keyring_store::set(API_KEY_ENTRY, key.trim())?)
}

pub fn clear_api_key() -> Result<(), GatewayError> {
    Ok(keyring_store::delete(API_KEY_ENTRY)?)
}
