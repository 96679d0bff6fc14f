//! A study day end to end: plan, tasks, timer, goal and reload from disk.

use chrono::NaiveDate;
use edumind_core::metrics::{self, GoalStatus};
use edumind_core::storage::Database;
use edumind_core::timer::{SilentNotifier, TICK_PERIOD};
use edumind_core::{AppState, ClockTime, Locale, PlanItem, Priority, TimerEngine, TimerMode, TimerRunner};

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 4, 10).unwrap()
}

fn open(path: &std::path::Path) -> AppState {
    AppState::load_with(Database::open_at(path).unwrap(), 120, Locale::PtBr, day())
}

#[test]
fn focus_cycle_moves_goal_and_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("edumind.db");

    {
        let mut state = open(&db_path);
        state.add_task("Lista de exercícios", Priority::High).unwrap();
        state
            .add_schedule_item(ClockTime::parse("09:00").unwrap(), "Cálculo", 50)
            .unwrap();
        state
            .ingest_plan(vec![PlanItem {
                time: ClockTime::parse("14:00").unwrap(),
                subject: "Física".into(),
                duration_min: 40,
            }])
            .unwrap();

        let mut engine = TimerEngine::default();
        engine.start();
        let mut runner = TimerRunner::new(engine, &mut state, SilentNotifier);
        let mut finished = None;
        while finished.is_none() {
            finished = runner.on_tick().unwrap();
        }
        let engine = runner.into_engine();
        assert!(!engine.is_running());
        state.save_timer(&engine).unwrap();
    }

    let state = open(&db_path);
    assert_eq!(state.tasks().len(), 1);
    assert_eq!(state.schedule().len(), 2);
    assert_eq!(state.schedule()[0].subject, "Física");
    assert_eq!(state.sessions().len(), 1);
    assert_eq!(state.goal().completed_minutes, 25);
    assert_eq!(state.load_timer().remaining_secs(), 0);
}

#[test]
fn progress_report_matches_goal_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let mut state = open(&dir.path().join("edumind.db"));

    state.record_session_on(day(), 25, TimerMode::Focus).unwrap();
    state.record_session_on(day(), 5, TimerMode::ShortBreak).unwrap();

    let report = state.progress(day());
    assert_eq!(report.today_focus_minutes, 25);
    assert!((report.goal_progress_percent - 20.833).abs() < 0.01);
    assert_eq!(report.status, GoalStatus::Remaining(95));
    assert_eq!(report.message, "Faltam 95 minutos para sua meta de hoje.");
    assert_eq!(report.weekly.len(), 7);
    assert_eq!(report.weekly[6].minutes, 25);
    assert_eq!(metrics::total_focus_minutes(state.sessions()), 25);
}

#[test]
fn corrupt_values_fall_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("edumind.db");
    {
        let db = Database::open_at(&db_path).unwrap();
        db.kv_set("edumind-tasks", "not json").unwrap();
        db.kv_set("edumind-daily-goal", "{\"broken\":").unwrap();
    }
    let state = open(&db_path);
    assert!(state.tasks().is_empty());
    assert_eq!(state.goal().target_minutes, 120);
}

#[tokio::test(start_paused = true)]
async fn countdown_in_one_shell_keeps_writes_from_another() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("edumind.db");
    let mut foreground = open(&db_path);
    let mut other = open(&db_path);

    let mut engine = TimerEngine::default();
    engine.start();
    foreground.save_timer(&engine).unwrap();
    let started = engine.clone();

    other.update_goal_target(90).unwrap();
    other.record_session_on(day(), 5, TimerMode::ShortBreak).unwrap();
    let mut paused = other.load_timer();
    paused.pause();
    other.save_timer(&paused).unwrap();

    let mut runner = TimerRunner::new(engine, &mut foreground, SilentNotifier);
    let session = runner.run(TICK_PERIOD, |_| {}).await.unwrap().unwrap();
    assert_eq!(session.mode, TimerMode::Focus);
    let engine = runner.into_engine();
    assert!(!foreground.replace_timer(&started, &engine).unwrap());

    let state = open(&db_path);
    assert_eq!(state.goal().target_minutes, 90);
    assert_eq!(state.goal().completed_minutes, 25);
    let modes: Vec<_> = state.sessions().iter().map(|s| s.mode).collect();
    assert_eq!(modes, [TimerMode::ShortBreak, TimerMode::Focus]);
    assert_eq!(state.load_timer(), paused);
}
