//! Basic CLI E2E tests.
//!
//! Each test drives the built binary against its own data directory.

mod common;

use common::{assert_contains, Sandbox};

#[test]
fn test_task_add_and_list() {
    let cli = Sandbox::new();
    let out = cli.run_success(&["task", "add", "Resumo de História", "--priority", "high"]);
    assert_contains(&out, "Task created:");
    cli.run_success(&["task", "add", "Ler capítulo 2"]);

    let tasks = cli.run_json(&["task", "list"]);
    let tasks = tasks.as_array().unwrap();
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0]["title"], "Ler capítulo 2");
    assert_eq!(tasks[0]["priority"], "medium");
    assert_eq!(tasks[0]["completed"], false);

    let high = cli.run_json(&["task", "list", "--priority", "high"]);
    assert_eq!(high.as_array().unwrap().len(), 1);
}

#[test]
fn test_blank_task_is_ignored() {
    let cli = Sandbox::new();
    let out = cli.run_success(&["task", "add", "   "]);
    assert_contains(&out, "nothing added");
    let tasks = cli.run_json(&["task", "list"]);
    assert!(tasks.as_array().unwrap().is_empty());
}

#[test]
fn test_task_toggle_and_delete() {
    let cli = Sandbox::new();
    cli.run_success(&["task", "add", "Simulado"]);
    let tasks = cli.run_json(&["task", "list"]);
    let id = tasks[0]["id"].as_str().unwrap().to_string();

    let toggled = cli.run_json(&["task", "toggle", &id]);
    assert_eq!(toggled["completed"], true);

    assert_contains(&cli.run_success(&["task", "pomodoro", &id]), "1/1 pomodoros");
    assert_contains(&cli.run_success(&["task", "delete", &id]), "Task deleted");
    assert_contains(&cli.run_success(&["task", "delete", &id]), "Task not found");
}

#[test]
fn test_schedule_stays_sorted() {
    let cli = Sandbox::new();
    cli.run_success(&["schedule", "add", "14:00", "Química", "--duration", "45"]);
    cli.run_success(&["schedule", "add", "08:30", "Matemática"]);

    let items = cli.run_json(&["schedule", "list"]);
    let times: Vec<_> = items
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["time"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(times, ["08:30", "14:00"]);
    assert_eq!(items[0]["duration"], 60);

    assert_contains(&cli.run_success(&["schedule", "clear"]), "2 items removed");
    assert!(cli.run_json(&["schedule", "list"]).as_array().unwrap().is_empty());
}

#[test]
fn test_schedule_rejects_bad_time() {
    let cli = Sandbox::new();
    cli.run_failure(&["schedule", "add", "8:00", "Física"]);
}

#[test]
fn test_timer_skip_credits_goal() {
    let cli = Sandbox::new();
    let session = cli.run_json(&["timer", "skip"]);
    assert_eq!(session["duration"], 25);
    assert_eq!(session["mode"], "focus");

    let today = cli.run_json(&["stats", "today"]);
    assert_eq!(today["focus_minutes"], 25);
    assert_eq!(today["message"], "Faltam 95 minutos para sua meta de hoje.");

    let goal = cli.run_json(&["goal", "show"]);
    assert_eq!(goal["goal"]["completedMinutes"], 25);

    let week = cli.run_json(&["stats", "week"]);
    assert_eq!(week.as_array().unwrap().len(), 7);
    assert_eq!(week[6]["minutes"], 25);

    let sessions = cli.run_json(&["session", "list"]);
    assert_eq!(sessions.as_array().unwrap().len(), 1);
}

#[test]
fn test_break_skip_leaves_goal() {
    let cli = Sandbox::new();
    cli.run_success(&["timer", "mode", "short-break"]);
    cli.run_success(&["timer", "skip"]);
    let goal = cli.run_json(&["goal", "show"]);
    assert_eq!(goal["goal"]["completedMinutes"], 0);
}

#[test]
fn test_timer_mode_resets_countdown() {
    let cli = Sandbox::new();
    let event = cli.run_json(&["timer", "mode", "long-break"]);
    assert_eq!(event["type"], "ModeSwitched");

    let status = cli.run_json(&["timer", "status"]);
    assert_eq!(status["remaining_secs"], 900);
    assert_eq!(status["running"], false);
    assert_eq!(status["display"], "15:00");
}

#[test]
fn test_goal_set() {
    let cli = Sandbox::new();
    assert_contains(&cli.run_success(&["goal", "set", "0"]), "unchanged");
    cli.run_success(&["goal", "set", "90"]);
    let goal = cli.run_json(&["goal", "show"]);
    assert_eq!(goal["goal"]["targetMinutes"], 90);
}

#[test]
fn test_prefs_theme_toggle() {
    let cli = Sandbox::new();
    assert_contains(&cli.run_success(&["prefs", "toggle-theme"]), "dark");
    let prefs = cli.run_json(&["prefs", "show"]);
    assert_eq!(prefs["theme"], "dark");
}

#[test]
fn test_prefs_custom_sound() {
    let cli = Sandbox::new();
    let file = cli.path().join("alarme.wav");
    std::fs::write(&file, b"RIFF0000WAVE").unwrap();
    let out = cli.run_success(&["prefs", "custom-sound", file.to_str().unwrap()]);
    assert_contains(&out, "alarme.wav");
    let prefs = cli.run_json(&["prefs", "show"]);
    assert_eq!(prefs["custom_sound"], true);
}

#[test]
fn test_config_roundtrip() {
    let cli = Sandbox::new();
    assert_eq!(cli.run_success(&["config", "get", "goal.default_target_minutes"]).trim(), "120");
    cli.run_success(&["config", "set", "locale.language", "en"]);
    assert_eq!(cli.run_success(&["config", "get", "locale.language"]).trim(), "en");
    cli.run_failure(&["config", "get", "no.such.key"]);
}

#[test]
fn test_english_locale_messages() {
    let cli = Sandbox::new();
    cli.run_success(&["config", "set", "locale.language", "en"]);
    let today = cli.run_json(&["stats", "today"]);
    assert_eq!(today["message"], "120 minutes left to reach today's goal.");
}

#[test]
fn test_completions() {
    let cli = Sandbox::new();
    assert_contains(&cli.run_success(&["completions", "bash"]), "edumind-cli");
}
