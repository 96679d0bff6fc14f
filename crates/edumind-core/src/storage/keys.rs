//! Store keys. Each key holds one independently persisted entity group.

pub const TASKS: &str = "edumind-tasks";
pub const SESSIONS: &str = "edumind-sessions";
pub const SCHEDULE: &str = "edumind-schedule";
pub const DAILY_GOAL: &str = "edumind-daily-goal";
pub const THEME: &str = "edumind-theme";
pub const TIMER_SOUND: &str = "edumind-timer-sound";
/// Serialized `TimerEngine`, so one-shot CLI calls share timer state.
pub const TIMER: &str = "edumind-timer";
