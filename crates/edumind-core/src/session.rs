use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::locale::Locale;

/// Timer cycle kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TimerMode {
    Focus,
    ShortBreak,
    LongBreak,
}

impl TimerMode {
    pub const ALL: [TimerMode; 3] = [TimerMode::Focus, TimerMode::ShortBreak, TimerMode::LongBreak];

    /// Nominal cycle length in seconds.
    pub fn nominal_secs(self) -> u32 {
        match self {
            TimerMode::Focus => 25 * 60,
            TimerMode::ShortBreak => 5 * 60,
            TimerMode::LongBreak => 15 * 60,
        }
    }

    pub fn nominal_minutes(self) -> u32 {
        self.nominal_secs() / 60
    }

    pub fn label(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (TimerMode::Focus, Locale::PtBr) => "Foco",
            (TimerMode::ShortBreak, Locale::PtBr) => "Pausa Curta",
            (TimerMode::LongBreak, Locale::PtBr) => "Pausa Longa",
            (TimerMode::Focus, Locale::En) => "Focus",
            (TimerMode::ShortBreak, Locale::En) => "Short Break",
            (TimerMode::LongBreak, Locale::En) => "Long Break",
        }
    }
}

impl std::str::FromStr for TimerMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "focus" => Ok(TimerMode::Focus),
            "shortBreak" | "short-break" | "short" => Ok(TimerMode::ShortBreak),
            "longBreak" | "long-break" | "long" => Ok(TimerMode::LongBreak),
            other => Err(format!(
                "unknown mode '{other}' (expected focus, short-break or long-break)"
            )),
        }
    }
}

/// One finished (or skipped) timer cycle. The log is append-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudySession {
    pub id: String,
    /// Calendar day (UTC) the cycle finished on.
    pub date: NaiveDate,
    #[serde(rename = "duration")]
    pub duration_min: u32,
    pub mode: TimerMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
}

impl StudySession {
    pub fn new(date: NaiveDate, duration_min: u32, mode: TimerMode) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            date,
            duration_min,
            mode,
            subject: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nominal_durations() {
        assert_eq!(TimerMode::Focus.nominal_secs(), 1500);
        assert_eq!(TimerMode::ShortBreak.nominal_secs(), 300);
        assert_eq!(TimerMode::LongBreak.nominal_secs(), 900);
        assert_eq!(TimerMode::Focus.nominal_minutes(), 25);
    }

    #[test]
    fn mode_wire_names() {
        assert_eq!(serde_json::to_string(&TimerMode::ShortBreak).unwrap(), "\"shortBreak\"");
        assert_eq!("long-break".parse::<TimerMode>().unwrap(), TimerMode::LongBreak);
    }

    #[test]
    fn session_date_serializes_as_iso_day() {
        let s = StudySession::new(NaiveDate::from_ymd_opt(2026, 5, 4).unwrap(), 25, TimerMode::Focus);
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["date"], "2026-05-04");
        assert_eq!(json["duration"], 25);
        assert_eq!(json["mode"], "focus");
        assert!(json.get("subject").is_none());
    }
}
