//! Process-wide user preferences: color theme and the notification sound.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    #[default]
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

impl std::str::FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(format!("unknown theme '{other}' (expected dark or light)")),
        }
    }
}

/// Sound played when a timer cycle ends.
///
/// `url` is either a remote URL or a `data:` URI holding an uploaded file.
/// `name` is empty for predefined sounds and carries the file name for
/// uploaded ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSound {
    pub url: String,
    #[serde(default)]
    pub name: String,
}

impl NotificationSound {
    pub fn is_custom(&self) -> bool {
        !self.name.is_empty()
    }
}

impl Default for NotificationSound {
    fn default() -> Self {
        let chime = &PREDEFINED_SOUNDS[0];
        Self {
            url: chime.url.to_string(),
            name: String::new(),
        }
    }
}

/// A built-in sound choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PredefinedSound {
    pub id: &'static str,
    pub name: &'static str,
    pub url: &'static str,
}

pub const PREDEFINED_SOUNDS: [PredefinedSound; 4] = [
    PredefinedSound {
        id: "chime",
        name: "Sino Suave",
        url: "https://actions.google.com/sounds/v1/notifications/pizzicato.ogg",
    },
    PredefinedSound {
        id: "digital",
        name: "Digital",
        url: "https://actions.google.com/sounds/v1/alarms/beep_short.ogg",
    },
    PredefinedSound {
        id: "nature",
        name: "Pássaros",
        url: "https://actions.google.com/sounds/v1/foley/bird_chirp_short.ogg",
    },
    PredefinedSound {
        id: "success",
        name: "Sucesso",
        url: "https://actions.google.com/sounds/v1/cartoon/clown_horn_accent.ogg",
    },
];

pub fn predefined_sound(id: &str) -> Option<&'static PredefinedSound> {
    PREDEFINED_SOUNDS.iter().find(|s| s.id == id)
}

/// Preferences snapshot as loaded at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    pub theme: Theme,
    pub sound: NotificationSound,
}
