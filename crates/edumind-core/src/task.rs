//! Study tasks and the list views built over them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Task priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// Sort weight: higher comes first in priority order.
    pub fn weight(self) -> u8 {
        match self {
            Priority::Low => 1,
            Priority::Medium => 2,
            Priority::High => 3,
        }
    }
}

impl std::str::FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            other => Err(format!("unknown priority '{other}' (expected low, medium or high)")),
        }
    }
}

/// A to-do item.
///
/// Only `completed` and `completed_pomodoros` change after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    pub completed: bool,
    pub priority: Priority,
    pub estimated_pomodoros: u32,
    pub completed_pomodoros: u32,
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Build a fresh task, or `None` when the title is blank.
    ///
    /// The stored title is trimmed.
    pub fn new(title: &str, priority: Priority, created_at: DateTime<Utc>) -> Option<Self> {
        let title = title.trim();
        if title.is_empty() {
            return None;
        }
        Some(Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.to_string(),
            completed: false,
            priority,
            estimated_pomodoros: 1,
            completed_pomodoros: 0,
            created_at,
        })
    }
}

/// Which tasks a list view shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskFilter {
    #[default]
    All,
    Priority(Priority),
}

/// Ordering of a list view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskSort {
    /// Newest first.
    #[default]
    Date,
    /// High priority first.
    Priority,
    /// Pending before completed.
    Status,
}

impl std::str::FromStr for TaskSort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "date" => Ok(TaskSort::Date),
            "priority" => Ok(TaskSort::Priority),
            "status" => Ok(TaskSort::Status),
            other => Err(format!("unknown sort '{other}' (expected date, priority or status)")),
        }
    }
}

/// Filter then sort a copy of `tasks`. The sort is stable, so ties keep
/// their stored order.
pub fn arrange_tasks(tasks: &[Task], filter: TaskFilter, sort: TaskSort) -> Vec<Task> {
    let mut result: Vec<Task> = tasks
        .iter()
        .filter(|t| match filter {
            TaskFilter::All => true,
            TaskFilter::Priority(p) => t.priority == p,
        })
        .cloned()
        .collect();

    match sort {
        TaskSort::Date => result.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        TaskSort::Priority => result.sort_by(|a, b| b.priority.weight().cmp(&a.priority.weight())),
        TaskSort::Status => result.sort_by_key(|t| t.completed),
    }
    result
}

/// Number of tasks not yet completed.
pub fn pending_count(tasks: &[Task]) -> usize {
    tasks.iter().filter(|t| !t.completed).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn task(title: &str, priority: Priority, minutes: i64, completed: bool) -> Task {
        let base = Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).unwrap();
        let mut t = Task::new(title, priority, base + Duration::minutes(minutes)).unwrap();
        t.completed = completed;
        t
    }

    #[test]
    fn new_task_defaults() {
        let t = Task::new("  Revisar cálculo ", Priority::High, Utc::now()).unwrap();
        assert_eq!(t.title, "Revisar cálculo");
        assert!(!t.completed);
        assert_eq!(t.estimated_pomodoros, 1);
        assert_eq!(t.completed_pomodoros, 0);
        assert!(!t.id.is_empty());
    }

    #[test]
    fn blank_titles_are_rejected() {
        assert!(Task::new("", Priority::Low, Utc::now()).is_none());
        assert!(Task::new("   \t", Priority::Low, Utc::now()).is_none());
    }

    #[test]
    fn sort_by_date_is_newest_first() {
        let tasks = vec![
            task("a", Priority::Low, 0, false),
            task("b", Priority::Low, 10, false),
            task("c", Priority::Low, 5, false),
        ];
        let titles: Vec<_> = arrange_tasks(&tasks, TaskFilter::All, TaskSort::Date)
            .into_iter()
            .map(|t| t.title)
            .collect();
        assert_eq!(titles, ["b", "c", "a"]);
    }

    #[test]
    fn sort_by_priority_and_status() {
        let tasks = vec![
            task("low", Priority::Low, 0, true),
            task("high", Priority::High, 1, true),
            task("mid", Priority::Medium, 2, false),
        ];
        let by_priority: Vec<_> = arrange_tasks(&tasks, TaskFilter::All, TaskSort::Priority)
            .into_iter()
            .map(|t| t.title)
            .collect();
        assert_eq!(by_priority, ["high", "mid", "low"]);

        let by_status = arrange_tasks(&tasks, TaskFilter::All, TaskSort::Status);
        assert_eq!(by_status[0].title, "mid");
        assert_eq!(by_status[1].title, "low");
    }

    #[test]
    fn filter_by_priority_and_count_pending() {
        let tasks = vec![
            task("a", Priority::High, 0, false),
            task("b", Priority::Low, 1, false),
            task("c", Priority::High, 2, true),
        ];
        let high = arrange_tasks(&tasks, TaskFilter::Priority(Priority::High), TaskSort::Date);
        assert_eq!(high.len(), 2);
        assert_eq!(pending_count(&tasks), 2);
    }

    #[test]
    fn stored_task_uses_camel_case_fields() {
        let t = task("Resumo", Priority::Medium, 0, false);
        let json = serde_json::to_value(&t).unwrap();
        assert_eq!(json["estimatedPomodoros"], 1);
        assert_eq!(json["completedPomodoros"], 0);
        assert_eq!(json["createdAt"], "2026-03-02T09:00:00Z");
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn priority_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Priority::High).unwrap(), "\"high\"");
        assert_eq!("Medium".parse::<Priority>().unwrap(), Priority::Medium);
    }
}
