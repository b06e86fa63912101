//! Habit ("cohesion") tracking.
//!
//! A [`Habit`] carries display metadata plus a per-day log of
//! [`HabitLogEntry`] values. The log is mutated only through
//! [`mark_day`]; streaks and completion rate are derived on demand by the
//! functions in [`streak`].

mod collection;
pub mod streak;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

pub use collection::{HabitCollection, HabitSummary};
pub use streak::{completion_rate, current_streak, longest_streak, mark_day};

/// One calendar day in a habit's log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HabitLogEntry {
    /// Serialized as `YYYY-MM-DD`.
    pub date: NaiveDate,
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// A tracked recurring behavior.
///
/// Field names on the wire match the persisted `cohesion.json` blob,
/// hence `createdAt`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub color: String,
    /// Goal in days. Display only.
    #[serde(default)]
    pub target: u32,
    #[serde(default)]
    pub days: Vec<HabitLogEntry>,
    pub created_at: DateTime<Utc>,
}

impl Habit {
    /// Look up the log entry for `date`, if one was recorded.
    pub fn entry_for(&self, date: NaiveDate) -> Option<&HabitLogEntry> {
        self.days.iter().find(|entry| entry.date == date)
    }

    pub fn current_streak(&self, today: NaiveDate) -> u32 {
        current_streak(&self.days, today)
    }

    pub fn longest_streak(&self) -> u32 {
        longest_streak(&self.days)
    }

    pub fn completion_rate(&self) -> u8 {
        completion_rate(&self.days)
    }
}

/// Input for creating a habit. Id, log and creation time are assigned by
/// the collection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewHabit {
    pub name: String,
    pub description: String,
    pub icon: String,
    pub color: String,
    pub target: u32,
}

/// Partial update of a habit's display fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HabitPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub color: Option<String>,
    pub target: Option<u32>,
}

impl HabitPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.icon.is_none()
            && self.color.is_none()
            && self.target.is_none()
    }
}
