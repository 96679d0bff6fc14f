//! Focus timer commands.
//!
//! The engine is persisted between invocations. `start` runs the countdown
//! in the foreground; Ctrl-C pauses it and saves the remaining time unless
//! another invocation changed the timer in the meantime.

use std::io::Write;

use clap::Subcommand;
use edumind_core::timer::{format_clock, TimerRunner, TICK_PERIOD};
use edumind_core::{AppState, Event, TimerEngine, TimerMode};

use super::notifier::DesktopNotifier;
use super::{open_state, print_json, runtime};

#[derive(Subcommand)]
pub enum TimerAction {
    /// Print current timer state as JSON
    Status,
    /// Count down in the foreground until the cycle ends or Ctrl-C
    Start,
    /// Pause a running timer
    Pause,
    /// Restore the full duration of the current mode
    Reset,
    /// Switch mode: focus, short-break or long-break
    Mode {
        mode: TimerMode,
    },
    /// Count the current cycle as done, crediting its full duration
    Skip,
}

fn print_event(event: Option<Event>, engine: &TimerEngine) -> Result<(), Box<dyn std::error::Error>> {
    match event {
        Some(event) => print_json(&event),
        None => print_json(&engine.snapshot()),
    }
}

pub fn run(action: TimerAction) -> Result<(), Box<dyn std::error::Error>> {
    let (config, mut state) = open_state()?;
    let mut engine = state.load_timer();

    match action {
        TimerAction::Status => print_json(&engine.snapshot())?,
        TimerAction::Start => {
            engine.start();
            if !engine.is_running() {
                println!("Cycle already finished; run `timer reset` or `timer mode`");
                return Ok(());
            }
            state.save_timer(&engine)?;
            let started = engine.clone();
            let engine = run_foreground(engine, &mut state, DesktopNotifier::from_config(&config))?;
            // A pause, reset or mode switch issued from another shell wins.
            state.replace_timer(&started, &engine)?;
        }
        TimerAction::Pause => {
            let event = engine.pause();
            state.save_timer(&engine)?;
            print_event(event, &engine)?;
        }
        TimerAction::Reset => {
            let event = engine.reset();
            state.save_timer(&engine)?;
            print_event(event, &engine)?;
        }
        TimerAction::Mode { mode } => {
            let event = engine.switch_mode(mode);
            state.save_timer(&engine)?;
            print_event(event, &engine)?;
        }
        TimerAction::Skip => {
            let mut runner =
                TimerRunner::new(engine, &mut state, DesktopNotifier::from_config(&config));
            let session = runner.skip()?;
            let engine = runner.into_engine();
            state.save_timer(&engine)?;
            print_json(&session)?;
        }
    }
    Ok(())
}

fn run_foreground(
    engine: TimerEngine,
    state: &mut AppState,
    notifier: DesktopNotifier,
) -> Result<TimerEngine, Box<dyn std::error::Error>> {
    let locale = state.locale();
    let mut runner = TimerRunner::new(engine, state, notifier);

    let outcome = runtime()?.block_on(async {
        tokio::select! {
            done = runner.run(TICK_PERIOD, |e| {
                eprint!("\r{} {}", e.mode().label(locale), format_clock(e.remaining_secs()));
                let _ = std::io::stderr().flush();
            }) => Some(done),
            _ = tokio::signal::ctrl_c() => None,
        }
    });
    eprintln!();

    match outcome {
        Some(done) => {
            if let Some(session) = done? {
                print_json(&session)?;
            }
        }
        None => {
            runner.pause();
            println!(
                "Paused at {}",
                format_clock(runner.engine().remaining_secs())
            );
        }
    }
    Ok(runner.into_engine())
}
