//! # EduMind Core Library
//!
//! This library provides the core logic for EduMind, a study companion with
//! tasks, a daily timetable, a focus timer and an AI study assistant. All
//! operations are available through the standalone CLI binary, which is a
//! thin layer over this crate.
//!
//! ## Architecture
//!
//! - **Storage**: SQLite key/value store holding JSON-encoded entity groups,
//!   plus TOML configuration
//! - **State**: [`AppState`] loads every entity group once and writes each
//!   group back after it changes
//! - **Metrics**: Pure functions over the session log
//! - **Timer**: A second-granular state machine driven by the caller's
//!   `tick()`, with completion routed back into [`AppState`] as an [`Event`]
//! - **Gateway**: The [`StudyAssistant`] contract and its HTTP client
//!
//! ## Key Components
//!
//! - [`AppState`]: Domain operations over tasks, schedule, sessions and goal
//! - [`TimerEngine`]: Core timer state machine
//! - [`Database`]: Persistent key/value store
//! - [`Config`]: Application configuration management

pub mod error;
pub mod events;
pub mod gateway;
pub mod goal;
pub mod locale;
pub mod metrics;
pub mod preferences;
pub mod schedule;
pub mod session;
pub mod state;
pub mod storage;
pub mod task;
pub mod timer;

pub use error::{CoreError, ConfigError, DatabaseError, GatewayError, GenerationError, ValidationError};
pub use events::Event;
pub use gateway::{Assistant, GeminiClient, StudyAssistant, StudySpots, TopicSummary};
pub use goal::DailyGoal;
pub use locale::Locale;
pub use metrics::{GoalStatus, ProgressReport};
pub use preferences::{NotificationSound, Preferences, Theme};
pub use schedule::{ClockTime, PlanItem, ScheduleItem};
pub use session::{StudySession, TimerMode};
pub use state::AppState;
pub use storage::{Config, Database};
pub use task::{Priority, Task};
pub use timer::{Notifier, TimerEngine, TimerRunner};
