//! Progress metrics derived from the session log.
//!
//! Everything here is a pure function of the full log and an explicit
//! `today`; nothing is cached between reads. Only `focus` sessions count
//! toward study minutes.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::goal::DailyGoal;
use crate::locale::Locale;
use crate::session::{StudySession, TimerMode};

/// Focus minutes for one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayTotal {
    pub date: NaiveDate,
    /// Localized short weekday name.
    pub label: String,
    pub minutes: u32,
}

/// Where today stands against the goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "minutes", rename_all = "snake_case")]
pub enum GoalStatus {
    Reached,
    Remaining(u32),
}

impl GoalStatus {
    pub fn message(self, locale: Locale) -> String {
        match (self, locale) {
            (GoalStatus::Reached, Locale::PtBr) => "Incrível! Você atingiu sua meta diária!".into(),
            (GoalStatus::Reached, Locale::En) => "Amazing! You reached your daily goal!".into(),
            (GoalStatus::Remaining(m), Locale::PtBr) => {
                format!("Faltam {m} minutos para sua meta de hoje.")
            }
            (GoalStatus::Remaining(m), Locale::En) => {
                format!("{m} minutes left to reach today's goal.")
            }
        }
    }
}

/// Dashboard snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressReport {
    pub today: NaiveDate,
    pub today_focus_minutes: u32,
    pub total_focus_minutes: u32,
    pub weekly: Vec<DayTotal>,
    pub target_minutes: u32,
    pub goal_progress_percent: f64,
    pub status: GoalStatus,
    pub message: String,
}

fn focus_minutes_where(sessions: &[StudySession], keep: impl Fn(&StudySession) -> bool) -> u32 {
    sessions
        .iter()
        .filter(|s| s.mode == TimerMode::Focus && keep(s))
        .fold(0u32, |acc, s| acc.saturating_add(s.duration_min))
}

pub fn focus_minutes_on(sessions: &[StudySession], day: NaiveDate) -> u32 {
    focus_minutes_where(sessions, |s| s.date == day)
}

pub fn today_focus_minutes(sessions: &[StudySession], today: NaiveDate) -> u32 {
    focus_minutes_on(sessions, today)
}

pub fn total_focus_minutes(sessions: &[StudySession]) -> u32 {
    focus_minutes_where(sessions, |_| true)
}

/// The last seven days, oldest first, ending with `today`. Days without
/// sessions are present with 0 minutes.
pub fn weekly_series(sessions: &[StudySession], today: NaiveDate, locale: Locale) -> Vec<DayTotal> {
    (0..7)
        .rev()
        .map(|days_back| {
            let date = today - Duration::days(days_back);
            DayTotal {
                date,
                label: locale
                    .weekday_short(date.weekday().num_days_from_monday())
                    .to_string(),
                minutes: focus_minutes_on(sessions, date),
            }
        })
        .collect()
}

/// `today_minutes / target * 100`, clamped to `[0, 100]`. A zero target is
/// treated as one minute.
pub fn goal_progress_percent(today_minutes: u32, target_minutes: u32) -> f64 {
    let target = f64::from(target_minutes.max(1));
    (f64::from(today_minutes) / target * 100.0).clamp(0.0, 100.0)
}

pub fn goal_status(today_minutes: u32, target_minutes: u32) -> GoalStatus {
    if today_minutes >= target_minutes {
        GoalStatus::Reached
    } else {
        GoalStatus::Remaining(target_minutes - today_minutes)
    }
}

pub fn progress_report(
    sessions: &[StudySession],
    goal: &DailyGoal,
    today: NaiveDate,
    locale: Locale,
) -> ProgressReport {
    let today_minutes = today_focus_minutes(sessions, today);
    let status = goal_status(today_minutes, goal.target_minutes);
    ProgressReport {
        today,
        today_focus_minutes: today_minutes,
        total_focus_minutes: total_focus_minutes(sessions),
        weekly: weekly_series(sessions, today, locale),
        target_minutes: goal.target_minutes,
        goal_progress_percent: goal_progress_percent(today_minutes, goal.target_minutes),
        status,
        message: status.message(locale),
    }
}
