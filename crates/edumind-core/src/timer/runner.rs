//! Drives a [`TimerEngine`] from a periodic one-second trigger.
//!
//! The runner is the single place where timer events meet the rest of the
//! system: a `SessionCompleted` event is handed to
//! [`AppState::handle_event`] for session and goal bookkeeping, then the
//! notifier fires. The engine itself knows nothing about either.

use std::time::Duration;

use tokio::time::MissedTickBehavior;

use super::engine::TimerEngine;
use super::notify::{notify_completion, Notifier};
use crate::error::Result;
use crate::events::Event;
use crate::session::StudySession;
use crate::state::AppState;

pub const TICK_PERIOD: Duration = Duration::from_secs(1);

pub struct TimerRunner<'a, N: Notifier> {
    engine: TimerEngine,
    state: &'a mut AppState,
    notifier: N,
}

impl<'a, N: Notifier> TimerRunner<'a, N> {
    pub fn new(engine: TimerEngine, state: &'a mut AppState, notifier: N) -> Self {
        Self {
            engine,
            state,
            notifier,
        }
    }

    pub fn engine(&self) -> &TimerEngine {
        &self.engine
    }

    pub fn state(&self) -> &AppState {
        self.state
    }

    pub fn into_engine(self) -> TimerEngine {
        self.engine
    }

    /// Advance one second and handle a resulting completion.
    pub fn on_tick(&mut self) -> Result<Option<StudySession>> {
        match self.engine.tick() {
            Some(event) => self.dispatch(&event),
            None => Ok(None),
        }
    }

    /// Manual completion, credited like a natural one.
    pub fn skip(&mut self) -> Result<Option<StudySession>> {
        match self.engine.skip() {
            Some(event) => self.dispatch(&event),
            None => Ok(None),
        }
    }

    pub fn pause(&mut self) -> Option<Event> {
        self.engine.pause()
    }

    /// Route an engine event: record first, then notify.
    pub fn dispatch(&mut self, event: &Event) -> Result<Option<StudySession>> {
        let recorded = self.state.handle_event(event)?;
        if let Event::SessionCompleted { mode, .. } = event {
            let sound = self.state.preferences().sound.clone();
            notify_completion(&mut self.notifier, &sound, *mode, self.state.locale());
        }
        Ok(recorded)
    }

    /// Tick every `period` until the engine stops running.
    ///
    /// Returns the recorded session when the countdown finished, or `None`
    /// if the engine was not running. `on_second` sees the engine after
    /// every tick that did not complete the cycle.
    pub async fn run(
        &mut self,
        period: Duration,
        mut on_second: impl FnMut(&TimerEngine),
    ) -> Result<Option<StudySession>> {
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick of a tokio interval fires immediately.
        interval.tick().await;

        while self.engine.is_running() {
            interval.tick().await;
            if let Some(session) = self.on_tick()? {
                return Ok(Some(session));
            }
            on_second(&self.engine);
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Locale;
    use crate::session::TimerMode;
    use crate::storage::Database;
    use crate::timer::notify::testing::RecordingNotifier;
    use crate::timer::notify::NotificationPermission;
    use chrono::NaiveDate;

    fn state() -> AppState {
        AppState::load_with(
            Database::open_memory().unwrap(),
            120,
            Locale::PtBr,
            NaiveDate::from_ymd_opt(2026, 4, 10).unwrap(),
        )
    }

    #[test]
    fn skip_records_and_notifies() {
        let mut state = state();
        let notifier = RecordingNotifier::new(NotificationPermission::Granted);
        let mut runner = TimerRunner::new(TimerEngine::default(), &mut state, notifier);
        let session = runner.skip().unwrap().unwrap();
        assert_eq!(session.duration_min, 25);
        assert_eq!(session.mode, TimerMode::Focus);
        assert_eq!(runner.notifier.shown.borrow().len(), 1);
        drop(runner);
        assert_eq!(state.goal().completed_minutes, 25);
    }

    #[test]
    fn completion_at_zero_requests_permission() {
        let mut state = state();
        let mut engine = TimerEngine::default();
        engine.start();
        let notifier = RecordingNotifier::new(NotificationPermission::Default);
        let mut runner = TimerRunner::new(engine, &mut state, notifier);
        let mut recorded = None;
        for _ in 0..1500 {
            recorded = runner.on_tick().unwrap();
            if recorded.is_some() {
                break;
            }
        }
        assert_eq!(recorded.unwrap().duration_min, 25);
        assert!(!runner.engine().is_running());
        assert_eq!(runner.notifier.requests, 1);
        assert_eq!(runner.notifier.sounds.borrow().len(), 1);
    }

    #[test]
    fn break_completion_leaves_goal_alone() {
        let mut state = state();
        let mut runner = TimerRunner::new(
            TimerEngine::new(TimerMode::ShortBreak),
            &mut state,
            RecordingNotifier::new(NotificationPermission::Denied),
        );
        runner.skip().unwrap();
        drop(runner);
        assert_eq!(state.goal().completed_minutes, 0);
        assert_eq!(state.sessions().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn run_loop_ticks_until_completion() {
        let mut state = state();
        let mut engine = TimerEngine::new(TimerMode::ShortBreak);
        engine.start();
        let mut runner = TimerRunner::new(
            engine,
            &mut state,
            RecordingNotifier::new(NotificationPermission::Granted),
        );
        let mut seconds = 0;
        let session = runner
            .run(TICK_PERIOD, |_| seconds += 1)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(session.mode, TimerMode::ShortBreak);
        assert_eq!(seconds, 299);
        assert_eq!(runner.engine().remaining_secs(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn run_returns_immediately_when_idle() {
        let mut state = state();
        let mut runner = TimerRunner::new(
            TimerEngine::default(),
            &mut state,
            RecordingNotifier::new(NotificationPermission::Granted),
        );
        assert!(runner.run(TICK_PERIOD, |_| {}).await.unwrap().is_none());
        assert!(state.sessions().is_empty());
    }
}
