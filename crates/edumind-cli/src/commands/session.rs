use clap::Subcommand;

use super::{open_state, print_json};

#[derive(Subcommand)]
pub enum SessionAction {
    /// List recorded sessions, oldest first
    List {
        /// Only the most recent N sessions
        #[arg(long)]
        limit: Option<usize>,
    },
}

pub fn run(action: SessionAction) -> Result<(), Box<dyn std::error::Error>> {
    let (_, state) = open_state()?;

    match action {
        SessionAction::List { limit } => {
            let sessions = state.sessions();
            let start = limit.map_or(0, |n| sessions.len().saturating_sub(n));
            print_json(&sessions[start..])?;
        }
    }
    Ok(())
}
