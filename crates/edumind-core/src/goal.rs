use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Singleton daily goal record.
///
/// `completed_minutes` is a running counter bumped once per finished focus
/// cycle. It is never rebuilt from the session log; progress figures are
/// derived from the log instead (see `metrics`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyGoal {
    pub id: String,
    pub date: NaiveDate,
    pub target_minutes: u32,
    pub completed_minutes: u32,
}

pub const GOAL_ID: &str = "goal-1";

impl DailyGoal {
    pub fn new(date: NaiveDate, target_minutes: u32) -> Self {
        Self {
            id: GOAL_ID.to_string(),
            date,
            target_minutes: target_minutes.max(1),
            completed_minutes: 0,
        }
    }

    /// Clamp fields a hand-edited or older record may have left invalid.
    pub fn normalized(mut self) -> Self {
        self.target_minutes = self.target_minutes.max(1);
        self
    }
}
