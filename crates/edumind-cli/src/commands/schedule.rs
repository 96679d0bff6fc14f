//! Daily timetable commands.

use clap::Subcommand;
use edumind_core::ClockTime;

use super::{assistant, open_state, print_json};

#[derive(Subcommand)]
pub enum ScheduleAction {
    /// Add an item; the timetable stays sorted by time
    Add {
        /// Start time, zero-padded HH:MM
        time: ClockTime,
        /// Subject
        subject: String,
        /// Duration in minutes
        #[arg(long, default_value = "60")]
        duration: u32,
    },
    /// List the timetable
    List,
    /// Delete an item
    Delete {
        /// Item ID
        id: String,
    },
    /// Remove every item
    Clear,
    /// Ask the assistant about an item's subject
    Consult {
        /// Item ID
        id: String,
    },
}

pub fn run(action: ScheduleAction) -> Result<(), Box<dyn std::error::Error>> {
    let (config, mut state) = open_state()?;

    match action {
        ScheduleAction::Add {
            time,
            subject,
            duration,
        } => match state.add_schedule_item(time, &subject, duration)? {
            Some(item) => {
                println!("Schedule item created: {}", item.id);
                print_json(&item)?;
            }
            None => println!("Subject is empty or duration is zero; nothing added"),
        },
        ScheduleAction::List => print_json(state.schedule())?,
        ScheduleAction::Delete { id } => {
            if state.delete_schedule_item(&id)? {
                println!("Schedule item deleted: {id}");
            } else {
                println!("Schedule item not found: {id}");
            }
        }
        ScheduleAction::Clear => {
            let removed = state.schedule().len();
            state.clear_schedule()?;
            println!("Schedule cleared ({removed} items removed)");
        }
        ScheduleAction::Consult { id } => match state.consult_topic(&id) {
            Some(subject) => assistant::search(&config, subject)?,
            None => println!("Schedule item not found: {id}"),
        },
    }
    Ok(())
}
