//! Timer engine implementation.
//!
//! The engine is a second-granular countdown state machine. It does not use
//! internal threads - the caller invokes `tick()` once per elapsed second
//! while the timer runs (see [`TimerRunner`](super::TimerRunner)).
//!
//! ## State Transitions
//!
//! ```text
//! Idle --start--> Running --pause--> Idle
//! Running --tick (remaining hits 0)--> Idle  + SessionCompleted
//! any --skip--> Idle  + SessionCompleted
//! any --reset / switch_mode--> Idle (remaining = nominal)
//! ```
//!
//! There is no auto-advance: after completion the mode stays put until the
//! user switches it.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::events::Event;
use crate::session::TimerMode;

/// Core timer engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerEngine {
    mode: TimerMode,
    remaining_secs: u32,
    running: bool,
}

impl Default for TimerEngine {
    fn default() -> Self {
        Self::new(TimerMode::Focus)
    }
}

impl TimerEngine {
    /// Create an idle engine with a full countdown for `mode`.
    pub fn new(mode: TimerMode) -> Self {
        Self {
            mode,
            remaining_secs: mode.nominal_secs(),
            running: false,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn mode(&self) -> TimerMode {
        self.mode
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn total_secs(&self) -> u32 {
        self.mode.nominal_secs()
    }

    /// 0.0 .. 100.0 elapsed share of the current cycle.
    pub fn progress_pct(&self) -> f64 {
        let total = self.total_secs();
        if total == 0 {
            return 0.0;
        }
        let elapsed = total.saturating_sub(self.remaining_secs);
        f64::from(elapsed) / f64::from(total) * 100.0
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            mode: self.mode,
            running: self.running,
            remaining_secs: self.remaining_secs,
            total_secs: self.total_secs(),
            display: format_clock(self.remaining_secs),
            progress_pct: self.progress_pct(),
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// No-op when already running or when the countdown is spent.
    pub fn start(&mut self) -> Option<Event> {
        if self.running || self.remaining_secs == 0 {
            return None;
        }
        self.running = true;
        Some(Event::TimerStarted {
            mode: self.mode,
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        })
    }

    pub fn pause(&mut self) -> Option<Event> {
        if !self.running {
            return None;
        }
        self.running = false;
        Some(Event::TimerPaused {
            mode: self.mode,
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        })
    }

    /// Start when idle, pause when running.
    pub fn toggle(&mut self) -> Option<Event> {
        if self.running {
            self.pause()
        } else {
            self.start()
        }
    }

    pub fn reset(&mut self) -> Option<Event> {
        self.running = false;
        self.remaining_secs = self.mode.nominal_secs();
        Some(Event::TimerReset {
            mode: self.mode,
            at: Utc::now(),
        })
    }

    pub fn switch_mode(&mut self, mode: TimerMode) -> Option<Event> {
        let from = self.mode;
        self.mode = mode;
        self.remaining_secs = mode.nominal_secs();
        self.running = false;
        Some(Event::ModeSwitched {
            from,
            to: mode,
            at: Utc::now(),
        })
    }

    /// Call once per elapsed second. Returns `Some(Event::SessionCompleted)`
    /// when the countdown reaches zero.
    pub fn tick(&mut self) -> Option<Event> {
        if !self.running {
            return None;
        }
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs == 0 {
            return Some(self.complete(false));
        }
        None
    }

    /// Count the current cycle as done, whatever is left on the clock.
    ///
    /// The full nominal duration is credited and `remaining` is left as is.
    pub fn skip(&mut self) -> Option<Event> {
        Some(self.complete(true))
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn complete(&mut self, skipped: bool) -> Event {
        self.running = false;
        Event::SessionCompleted {
            duration_min: self.mode.nominal_minutes(),
            mode: self.mode,
            skipped,
            at: Utc::now(),
        }
    }
}

/// `mm:ss` with zero padding.
pub fn format_clock(secs: u32) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
