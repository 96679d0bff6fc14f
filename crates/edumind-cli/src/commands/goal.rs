use clap::Subcommand;
use edumind_core::state::today;
use serde_json::json;

use super::{open_state, print_json};

#[derive(Subcommand)]
pub enum GoalAction {
    /// Show today's goal and progress
    Show,
    /// Set the daily target in minutes
    Set {
        /// Target minutes (at least 1)
        minutes: u32,
    },
}

pub fn run(action: GoalAction) -> Result<(), Box<dyn std::error::Error>> {
    let (_, mut state) = open_state()?;

    match action {
        GoalAction::Show => {
            let report = state.progress(today());
            print_json(&json!({
                "goal": state.goal(),
                "today_focus_minutes": report.today_focus_minutes,
                "progress_percent": report.goal_progress_percent,
                "message": report.message,
            }))?;
        }
        GoalAction::Set { minutes } => {
            if state.update_goal_target(minutes)? {
                println!("Daily goal set to {minutes} minutes");
            } else {
                println!("Target must be at least 1 minute; goal unchanged");
            }
        }
    }
    Ok(())
}
