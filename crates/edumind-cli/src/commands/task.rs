//! Task management commands for CLI.

use clap::Subcommand;
use edumind_core::task::{arrange_tasks, pending_count, TaskFilter, TaskSort};
use edumind_core::Priority;

use super::{open_state, print_json};

#[derive(Subcommand)]
pub enum TaskAction {
    /// Add a task at the top of the list
    Add {
        /// Task title
        title: String,
        /// low, medium or high
        #[arg(long, default_value = "medium")]
        priority: Priority,
    },
    /// List tasks
    List {
        /// Only tasks with this priority
        #[arg(long)]
        priority: Option<Priority>,
        /// date, priority or status
        #[arg(long, default_value = "date")]
        sort: TaskSort,
    },
    /// Flip a task between done and pending
    Toggle {
        /// Task ID
        id: String,
    },
    /// Count one more pomodoro on a task
    Pomodoro {
        /// Task ID
        id: String,
    },
    /// Delete a task
    Delete {
        /// Task ID
        id: String,
    },
}

pub fn run(action: TaskAction) -> Result<(), Box<dyn std::error::Error>> {
    let (_, mut state) = open_state()?;

    match action {
        TaskAction::Add { title, priority } => match state.add_task(&title, priority)? {
            Some(task) => {
                println!("Task created: {}", task.id);
                print_json(&task)?;
            }
            None => println!("Task title is empty; nothing added"),
        },
        TaskAction::List { priority, sort } => {
            let filter = priority.map_or(TaskFilter::All, TaskFilter::Priority);
            let tasks = arrange_tasks(state.tasks(), filter, sort);
            print_json(&tasks)?;
            eprintln!("{} pending", pending_count(state.tasks()));
        }
        TaskAction::Toggle { id } => {
            if state.toggle_task(&id)? {
                if let Some(task) = state.tasks().iter().find(|t| t.id == id) {
                    print_json(task)?;
                }
            } else {
                println!("Task not found: {id}");
            }
        }
        TaskAction::Pomodoro { id } => {
            if state.increment_task_pomodoros(&id)? {
                if let Some(task) = state.tasks().iter().find(|t| t.id == id) {
                    println!(
                        "{}: {}/{} pomodoros",
                        task.title, task.completed_pomodoros, task.estimated_pomodoros
                    );
                }
            } else {
                println!("Task not found: {id}");
            }
        }
        TaskAction::Delete { id } => {
            if state.delete_task(&id)? {
                println!("Task deleted: {id}");
            } else {
                println!("Task not found: {id}");
            }
        }
    }
    Ok(())
}
