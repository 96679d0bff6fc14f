use clap::Subcommand;
use edumind_core::state::today;
use serde_json::json;

use super::{open_state, print_json};

#[derive(Subcommand)]
pub enum StatsAction {
    /// Today's focus minutes and goal status
    Today,
    /// Focus minutes for the last 7 days
    Week,
    /// Everything above plus all-time totals
    Summary,
}

pub fn run(action: StatsAction) -> Result<(), Box<dyn std::error::Error>> {
    let (_, state) = open_state()?;
    let report = state.progress(today());

    match action {
        StatsAction::Today => print_json(&json!({
            "date": report.today,
            "focus_minutes": report.today_focus_minutes,
            "target_minutes": report.target_minutes,
            "progress_percent": report.goal_progress_percent,
            "message": report.message,
        }))?,
        StatsAction::Week => print_json(&report.weekly)?,
        StatsAction::Summary => print_json(&report)?,
    }
    Ok(())
}
