use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::session::TimerMode;

/// Every timer state change produces an Event.
///
/// `SessionCompleted` is the only event with a consumer in the domain layer:
/// [`AppState::handle_event`](crate::state::AppState::handle_event) turns it
/// into a session record and goal credit. The rest are for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    TimerStarted {
        mode: TimerMode,
        remaining_secs: u32,
        at: DateTime<Utc>,
    },
    TimerPaused {
        mode: TimerMode,
        remaining_secs: u32,
        at: DateTime<Utc>,
    },
    TimerReset {
        mode: TimerMode,
        at: DateTime<Utc>,
    },
    ModeSwitched {
        from: TimerMode,
        to: TimerMode,
        at: DateTime<Utc>,
    },
    /// A cycle ran out or was skipped. `duration_min` is always the mode's
    /// nominal length.
    SessionCompleted {
        duration_min: u32,
        mode: TimerMode,
        skipped: bool,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        mode: TimerMode,
        running: bool,
        remaining_secs: u32,
        total_secs: u32,
        /// `mm:ss`
        display: String,
        progress_pct: f64,
        at: DateTime<Utc>,
    },
}
