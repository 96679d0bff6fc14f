mod engine;
mod notify;
mod runner;

pub use engine::{format_clock, TimerEngine};
pub use notify::{
    completion_notice, notify_completion, NotificationPermission, Notifier, SilentNotifier,
};
pub use runner::{TimerRunner, TICK_PERIOD};
