//! AI study assistant commands.

use std::error::Error;
use std::time::Duration;

use clap::Subcommand;
use edumind_core::gateway::FixedLocator;
use edumind_core::{Assistant, Config, GeminiClient};

use super::{open_state, print_json, runtime};

#[derive(Subcommand)]
pub enum AssistantAction {
    /// Generate a timetable and add it to the schedule
    Plan {
        /// Topics to cover, free text
        topics: String,
        /// Hours available today
        #[arg(long, default_value_t = 4.0)]
        hours: f64,
    },
    /// A short motivational quote
    Quote,
    /// Summarize a topic with cited sources
    Search {
        /// Topic
        topic: String,
    },
    /// Find places to study, near the configured location if any
    Places {
        /// What to look for (default: quiet libraries and cafés)
        #[arg(default_value = "")]
        query: String,
    },
}

fn assistant(config: &Config) -> Result<Assistant<GeminiClient>, Box<dyn Error>> {
    let client = GeminiClient::from_config(config)?;
    Ok(Assistant::new(client, config.locale.language)
        .with_location_timeout(Duration::from_secs(config.location.timeout_secs)))
}

/// Topic summary, shared with `schedule consult`.
pub fn search(config: &Config, topic: &str) -> Result<(), Box<dyn Error>> {
    let assistant = assistant(config)?;
    let summary = runtime()?.block_on(assistant.search_topic(topic))?;
    print_json(&summary)
}

pub fn run(action: AssistantAction) -> Result<(), Box<dyn Error>> {
    let (config, mut state) = open_state()?;

    match action {
        AssistantAction::Plan { topics, hours } => {
            let assistant = assistant(&config)?;
            let added = runtime()?.block_on(assistant.plan_into(&mut state, &topics, hours))?;
            if added == 0 {
                println!("No plan could be generated; schedule unchanged");
            } else {
                println!("{added} items added to the schedule");
                print_json(state.schedule())?;
            }
        }
        AssistantAction::Quote => {
            let assistant = assistant(&config)?;
            let quote = runtime()?.block_on(assistant.motivational_quote())?;
            println!("{quote}");
        }
        AssistantAction::Search { topic } => search(&config, &topic)?,
        AssistantAction::Places { query } => {
            let assistant = assistant(&config)?;
            let locator = FixedLocator::from_config(&config);
            let spots = runtime()?.block_on(assistant.find_study_spots(&query, &locator))?;
            print_json(&spots)?;
        }
    }
    Ok(())
}
