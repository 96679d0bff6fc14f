use std::io::BufRead;

use clap::Subcommand;
use edumind_core::gateway::credentials;

#[derive(Subcommand)]
pub enum AuthAction {
    /// Store the assistant API key in the OS keyring
    SetKey {
        /// API key; read from stdin when omitted
        key: Option<String>,
    },
    /// Remove the stored API key
    ClearKey,
    /// Check whether an API key is available
    Status,
}

pub fn run(action: AuthAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        AuthAction::SetKey { key } => {
            let key = match key {
                Some(key) => key,
                None => {
                    let mut line = String::new();
                    std::io::stdin().lock().read_line(&mut line)?;
                    line
                }
            };
            if key.trim().is_empty() {
                return Err("API key is empty".into());
            }
            credentials::store_api_key(&key)?;
            println!("API key stored");
        }
        AuthAction::ClearKey => {
            credentials::clear_api_key()?;
            println!("API key removed");
        }
        AuthAction::Status => {
            if credentials::api_key().is_some() {
                println!("API key: configured");
            } else {
                println!("API key: missing");
            }
        }
    }
    Ok(())
}
