//! Application state and the domain operations over it.
//!
//! [`AppState`] is loaded once at startup and handed to whoever needs it.
//! Every mutating operation re-reads the collection it touches from the
//! store, applies the change and writes that one collection back, so a
//! long-lived state (a foreground countdown) does not clobber writes made by
//! other processes in the meantime. Invalid input (blank titles, zero
//! durations, unknown ids) is a silent no-op reported through the return
//! value, never an error.

use chrono::{NaiveDate, Utc};
use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::events::Event;
use crate::goal::DailyGoal;
use crate::locale::Locale;
use crate::metrics::{self, ProgressReport};
use crate::preferences::{NotificationSound, Preferences, Theme};
use crate::schedule::{self, ClockTime, PlanItem, ScheduleItem};
use crate::session::{StudySession, TimerMode};
use crate::storage::{keys, Config, Database};
use crate::task::{Priority, Task};
use crate::timer::TimerEngine;

/// Current UTC calendar day, the day sessions are filed under.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

pub struct AppState {
    db: Database,
    locale: Locale,
    tasks: Vec<Task>,
    schedule: Vec<ScheduleItem>,
    sessions: Vec<StudySession>,
    goal: DailyGoal,
    preferences: Preferences,
}

impl AppState {
    /// Load every entity group, substituting defaults for missing or
    /// unreadable keys.
    pub fn load(db: Database, config: &Config) -> Self {
        Self::load_with(
            db,
            config.goal.default_target_minutes,
            config.locale.language,
            today(),
        )
    }

    pub fn load_with(db: Database, default_target: u32, locale: Locale, today: NaiveDate) -> Self {
        let tasks = db.load(keys::TASKS).unwrap_or_default();
        let schedule = db.load(keys::SCHEDULE).unwrap_or_default();
        let sessions = db.load(keys::SESSIONS).unwrap_or_default();
        let goal = db
            .load::<DailyGoal>(keys::DAILY_GOAL)
            .map(DailyGoal::normalized)
            .unwrap_or_else(|| DailyGoal::new(today, default_target));
        let preferences = Preferences {
            theme: db.load(keys::THEME).unwrap_or_default(),
            sound: db.load(keys::TIMER_SOUND).unwrap_or_default(),
        };
        Self {
            db,
            locale,
            tasks,
            schedule,
            sessions,
            goal,
            preferences,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn database(&self) -> &Database {
        &self.db
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Newest first.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn schedule(&self) -> &[ScheduleItem] {
        &self.schedule
    }

    /// Oldest first.
    pub fn sessions(&self) -> &[StudySession] {
        &self.sessions
    }

    pub fn goal(&self) -> &DailyGoal {
        &self.goal
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    pub fn progress(&self, today: NaiveDate) -> ProgressReport {
        metrics::progress_report(&self.sessions, &self.goal, today, self.locale)
    }

    /// Subject of a schedule item, for a topic lookup.
    pub fn consult_topic(&self, id: &str) -> Option<&str> {
        self.schedule
            .iter()
            .find(|s| s.id == id)
            .map(|s| s.subject.as_str())
    }

    // ── Tasks ────────────────────────────────────────────────────────

    /// Prepend a new task. Blank titles are ignored.
    pub fn add_task(&mut self, title: &str, priority: Priority) -> Result<Option<Task>> {
        let Some(task) = Task::new(title, priority, Utc::now()) else {
            return Ok(None);
        };
        self.refresh_tasks();
        self.tasks.insert(0, task.clone());
        self.save_tasks()?;
        Ok(Some(task))
    }

    pub fn toggle_task(&mut self, id: &str) -> Result<bool> {
        self.refresh_tasks();
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return Ok(false);
        };
        task.completed = !task.completed;
        self.save_tasks()?;
        Ok(true)
    }

    pub fn increment_task_pomodoros(&mut self, id: &str) -> Result<bool> {
        self.refresh_tasks();
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return Ok(false);
        };
        task.completed_pomodoros = task.completed_pomodoros.saturating_add(1);
        self.save_tasks()?;
        Ok(true)
    }

    pub fn delete_task(&mut self, id: &str) -> Result<bool> {
        self.refresh_tasks();
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() == before {
            return Ok(false);
        }
        self.save_tasks()?;
        Ok(true)
    }

    fn refresh_tasks(&mut self) {
        refresh(&self.db, keys::TASKS, &mut self.tasks);
    }

    fn save_tasks(&self) -> Result<()> {
        self.db.save(keys::TASKS, &self.tasks)
    }

    // ── Schedule ─────────────────────────────────────────────────────

    /// Insert and re-sort the whole schedule by time. Blank subjects and
    /// zero durations are ignored.
    pub fn add_schedule_item(
        &mut self,
        time: ClockTime,
        subject: &str,
        duration_min: u32,
    ) -> Result<Option<ScheduleItem>> {
        let Some(item) = ScheduleItem::new(time, subject, duration_min) else {
            return Ok(None);
        };
        self.refresh_schedule();
        self.schedule.push(item.clone());
        schedule::sort_by_time(&mut self.schedule);
        self.save_schedule()?;
        Ok(Some(item))
    }

    pub fn delete_schedule_item(&mut self, id: &str) -> Result<bool> {
        self.refresh_schedule();
        let before = self.schedule.len();
        self.schedule.retain(|s| s.id != id);
        if self.schedule.len() == before {
            return Ok(false);
        }
        self.save_schedule()?;
        Ok(true)
    }

    pub fn clear_schedule(&mut self) -> Result<()> {
        self.schedule.clear();
        self.save_schedule()
    }

    /// Merge assistant-generated items in front of the existing schedule,
    /// keeping the order they were generated in. No time sort here.
    pub fn ingest_plan(&mut self, items: Vec<PlanItem>) -> Result<usize> {
        if items.is_empty() {
            return Ok(0);
        }
        self.refresh_schedule();
        let count = items.len();
        let mut merged: Vec<ScheduleItem> = items.into_iter().map(ScheduleItem::from_plan).collect();
        merged.append(&mut self.schedule);
        self.schedule = merged;
        self.save_schedule()?;
        Ok(count)
    }

    fn refresh_schedule(&mut self) {
        refresh(&self.db, keys::SCHEDULE, &mut self.schedule);
    }

    fn save_schedule(&self) -> Result<()> {
        self.db.save(keys::SCHEDULE, &self.schedule)
    }

    // ── Sessions and goal ────────────────────────────────────────────

    /// Append a session dated today. Focus sessions also credit the goal.
    pub fn record_session(&mut self, duration_min: u32, mode: TimerMode) -> Result<StudySession> {
        self.record_session_on(today(), duration_min, mode)
    }

    pub fn record_session_on(
        &mut self,
        date: NaiveDate,
        duration_min: u32,
        mode: TimerMode,
    ) -> Result<StudySession> {
        let session = StudySession::new(date, duration_min, mode);
        refresh(&self.db, keys::SESSIONS, &mut self.sessions);
        self.sessions.push(session.clone());
        self.db.save(keys::SESSIONS, &self.sessions)?;

        if mode == TimerMode::Focus {
            self.refresh_goal();
            self.goal.completed_minutes = self.goal.completed_minutes.saturating_add(duration_min);
            self.save_goal()?;
        }
        tracing::debug!(duration_min, ?mode, "session recorded");
        Ok(session)
    }

    /// Goal bookkeeping for timer events. Only `SessionCompleted` matters.
    pub fn handle_event(&mut self, event: &Event) -> Result<Option<StudySession>> {
        match event {
            Event::SessionCompleted {
                duration_min, mode, ..
            } => self.record_session(*duration_min, *mode).map(Some),
            _ => Ok(None),
        }
    }

    /// Replace the daily target. Zero is ignored; completed minutes are kept.
    pub fn update_goal_target(&mut self, target_minutes: u32) -> Result<bool> {
        if target_minutes == 0 {
            return Ok(false);
        }
        self.refresh_goal();
        self.goal.target_minutes = target_minutes;
        self.save_goal()?;
        Ok(true)
    }

    fn refresh_goal(&mut self) {
        if let Some(goal) = self.db.load::<DailyGoal>(keys::DAILY_GOAL) {
            self.goal = goal.normalized();
        }
    }

    fn save_goal(&self) -> Result<()> {
        self.db.save(keys::DAILY_GOAL, &self.goal)
    }

    // ── Preferences ──────────────────────────────────────────────────

    pub fn set_theme(&mut self, theme: Theme) -> Result<()> {
        self.db.save(keys::THEME, &theme)?;
        self.preferences.theme = theme;
        Ok(())
    }

    pub fn toggle_theme(&mut self) -> Result<Theme> {
        refresh(&self.db, keys::THEME, &mut self.preferences.theme);
        let theme = self.preferences.theme.toggled();
        self.set_theme(theme)?;
        Ok(theme)
    }

    pub fn set_notification_sound(&mut self, sound: NotificationSound) -> Result<()> {
        self.db.save(keys::TIMER_SOUND, &sound)?;
        self.preferences.sound = sound;
        Ok(())
    }

    // ── Timer persistence ────────────────────────────────────────────

    pub fn load_timer(&self) -> TimerEngine {
        self.db.load(keys::TIMER).unwrap_or_default()
    }

    pub fn save_timer(&self, engine: &TimerEngine) -> Result<()> {
        self.db.save(keys::TIMER, engine)
    }

    /// Persist `engine` only if the stored timer still equals `expected`.
    /// Returns `false`, leaving the store alone, when another process
    /// changed the timer since `expected` was saved.
    pub fn replace_timer(&self, expected: &TimerEngine, engine: &TimerEngine) -> Result<bool> {
        if self.load_timer() != *expected {
            tracing::info!("timer changed elsewhere; keeping the stored state");
            return Ok(false);
        }
        self.save_timer(engine)?;
        Ok(true)
    }
}

/// Overwrite `slot` with the stored value under `key`. A missing or
/// unreadable value keeps what is in memory.
fn refresh<T: DeserializeOwned>(db: &Database, key: &str, slot: &mut T) {
    if let Some(value) = db.load(key) {
        *slot = value;
    }
}
