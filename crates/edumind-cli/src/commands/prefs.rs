//! Theme and notification-sound preferences.

use std::path::PathBuf;

use clap::Subcommand;
use edumind_core::preferences::{predefined_sound, PREDEFINED_SOUNDS};
use edumind_core::{NotificationSound, Theme};

use super::{open_state, print_json, sound};

#[derive(Subcommand)]
pub enum PrefsAction {
    /// Show stored preferences
    Show,
    /// Set the theme: light or dark
    Theme {
        theme: Theme,
    },
    /// Switch between light and dark
    ToggleTheme,
    /// List the built-in notification sounds
    Sounds,
    /// Pick a built-in sound by ID and preview it
    Sound {
        /// Sound ID (see `prefs sounds`)
        id: String,
    },
    /// Use an audio file as the notification sound
    CustomSound {
        /// Path to the audio file
        path: PathBuf,
    },
}

pub fn run(action: PrefsAction) -> Result<(), Box<dyn std::error::Error>> {
    let (config, mut state) = open_state()?;
    let preview = config.notifications.enabled;

    match action {
        PrefsAction::Show => {
            let prefs = state.preferences();
            let sound_name = if prefs.sound.is_custom() {
                prefs.sound.name.clone()
            } else {
                PREDEFINED_SOUNDS
                    .iter()
                    .find(|s| s.url == prefs.sound.url)
                    .map(|s| s.name.to_string())
                    .unwrap_or_default()
            };
            print_json(&serde_json::json!({
                "theme": prefs.theme,
                "sound": sound_name,
                "custom_sound": prefs.sound.is_custom(),
            }))?;
        }
        PrefsAction::Theme { theme } => {
            state.set_theme(theme)?;
            println!("Theme: {}", theme_name(theme));
        }
        PrefsAction::ToggleTheme => {
            let theme = state.toggle_theme()?;
            println!("Theme: {}", theme_name(theme));
        }
        PrefsAction::Sounds => print_json(&PREDEFINED_SOUNDS)?,
        PrefsAction::Sound { id } => match predefined_sound(&id) {
            Some(choice) => {
                let selection = NotificationSound {
                    url: choice.url.to_string(),
                    name: String::new(),
                };
                state.set_notification_sound(selection.clone())?;
                if preview {
                    sound::play(&selection);
                }
                println!("Notification sound: {}", choice.name);
            }
            None => println!("Unknown sound: {id}"),
        },
        PrefsAction::CustomSound { path } => {
            let selection = sound::custom_sound(&path)?;
            let name = selection.name.clone();
            state.set_notification_sound(selection.clone())?;
            if preview {
                sound::play(&selection);
            }
            println!("Notification sound: {name}");
        }
    }
    Ok(())
}

fn theme_name(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "light",
        Theme::Dark => "dark",
    }
}
