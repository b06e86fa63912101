//! Owned container for the user's habits.
//!
//! All habit mutations go through [`HabitCollection`]; the caller owns
//! the value and persists it with [`crate::storage::HabitStore`] after
//! each change.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use super::{streak, Habit, HabitPatch, NewHabit};
use crate::error::{CoreError, Result, ValidationError};

/// Derived metrics for one habit as of a given day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HabitSummary {
    pub id: String,
    pub name: String,
    pub target: u32,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub completion_rate: u8,
    pub logged_days: usize,
    pub completed_days: usize,
    pub completed_today: bool,
}

impl HabitSummary {
    pub fn for_habit(habit: &Habit, today: NaiveDate) -> Self {
        Self {
            id: habit.id.clone(),
            name: habit.name.clone(),
            target: habit.target,
            current_streak: streak::current_streak(&habit.days, today),
            longest_streak: streak::longest_streak(&habit.days),
            completion_rate: streak::completion_rate(&habit.days),
            logged_days: habit.days.len(),
            completed_days: habit.days.iter().filter(|e| e.completed).count(),
            completed_today: habit.entry_for(today).is_some_and(|e| e.completed),
        }
    }
}

/// The full habit collection, serialized as a plain JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HabitCollection {
    habits: Vec<Habit>,
}

impl HabitCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_habits(habits: Vec<Habit>) -> Self {
        Self { habits }
    }

    /// The two starter habits installed on first run.
    pub fn seeded(now: DateTime<Utc>) -> Self {
        let seed = |id: &str, name: &str, description: &str, icon: &str, color: &str| Habit {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            icon: icon.to_string(),
            color: color.to_string(),
            target: 30,
            days: Vec::new(),
            created_at: now,
        };

        Self::from_habits(vec![
            seed(
                "1",
                "Meditation",
                "Meditate every day, at least 10 minutes",
                "heart",
                "purple",
            ),
            seed(
                "2",
                "Exercise",
                "Exercise every day, at least 30 minutes",
                "activity",
                "blue",
            ),
        ])
    }

    pub fn len(&self) -> usize {
        self.habits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.habits.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Habit> {
        self.habits.iter()
    }

    pub fn get(&self, id: &str) -> Option<&Habit> {
        self.habits.iter().find(|h| h.id == id)
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut Habit> {
        self.habits
            .iter_mut()
            .find(|h| h.id == id)
            .ok_or_else(|| CoreError::HabitNotFound(id.to_string()))
    }

    /// Create a habit with a fresh id and an empty log.
    ///
    /// # Errors
    /// Returns a validation error if the name is blank.
    pub fn add(&mut self, new: NewHabit, now: DateTime<Utc>) -> Result<&Habit> {
        if new.name.trim().is_empty() {
            return Err(ValidationError::blank("name").into());
        }

        let habit = Habit {
            id: format!("cohesion-{}", Uuid::new_v4()),
            name: new.name,
            description: new.description,
            icon: new.icon,
            color: new.color,
            target: new.target,
            days: Vec::new(),
            created_at: now,
        };
        debug!(id = %habit.id, name = %habit.name, "habit added");

        self.habits.push(habit);
        let last = self.habits.len() - 1;
        Ok(&self.habits[last])
    }

    /// Apply a partial update to a habit's display fields.
    ///
    /// # Errors
    /// Returns [`CoreError::HabitNotFound`] for an unknown id, or a
    /// validation error if the patch would blank the name.
    pub fn update(&mut self, id: &str, patch: HabitPatch) -> Result<&Habit> {
        if patch.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
            return Err(ValidationError::blank("name").into());
        }

        let habit = self.get_mut(id)?;
        if let Some(name) = patch.name {
            habit.name = name;
        }
        if let Some(description) = patch.description {
            habit.description = description;
        }
        if let Some(icon) = patch.icon {
            habit.icon = icon;
        }
        if let Some(color) = patch.color {
            habit.color = color;
        }
        if let Some(target) = patch.target {
            habit.target = target;
        }
        debug!(id, "habit updated");
        Ok(&*habit)
    }

    /// Delete a habit together with its log, returning it.
    pub fn remove(&mut self, id: &str) -> Result<Habit> {
        let index = self
            .habits
            .iter()
            .position(|h| h.id == id)
            .ok_or_else(|| CoreError::HabitNotFound(id.to_string()))?;
        debug!(id, "habit removed");
        Ok(self.habits.remove(index))
    }

    /// Record `date` as completed or missed for the habit `id`.
    ///
    /// Replaces any existing entry for that date, note included.
    pub fn mark_day(
        &mut self,
        id: &str,
        date: NaiveDate,
        completed: bool,
        note: Option<String>,
    ) -> Result<&Habit> {
        let habit = self.get_mut(id)?;
        habit.days = streak::mark_day(&habit.days, date, completed, note);
        debug!(id, %date, completed, "day marked");
        Ok(&*habit)
    }

    pub fn summary(&self, id: &str, today: NaiveDate) -> Result<HabitSummary> {
        self.get(id)
            .map(|habit| HabitSummary::for_habit(habit, today))
            .ok_or_else(|| CoreError::HabitNotFound(id.to_string()))
    }

    pub fn into_habits(self) -> Vec<Habit> {
        self.habits
    }
}
