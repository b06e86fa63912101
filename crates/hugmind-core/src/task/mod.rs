//! To-do tasks.
//!
//! A flat list with priorities and an optional due date. Mutations go
//! through [`TaskList`], which is persisted as a whole by
//! [`crate::storage::TaskStore`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;
use uuid::Uuid;

use crate::error::{CoreError, Result, ValidationError};

/// Task priority.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

impl Default for TaskPriority {
    fn default() -> Self {
        TaskPriority::Medium
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TaskPriority::Low => "low",
            TaskPriority::Medium => "medium",
            TaskPriority::High => "high",
        };
        f.write_str(s)
    }
}

impl FromStr for TaskPriority {
    type Err = ValidationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "low" => Ok(TaskPriority::Low),
            "medium" => Ok(TaskPriority::Medium),
            "high" => Ok(TaskPriority::High),
            other => Err(ValidationError::InvalidValue {
                field: "priority".to_string(),
                message: format!("expected low, medium or high, got '{other}'"),
            }),
        }
    }
}

/// A to-do item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub priority: TaskPriority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Input for creating a task.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub priority: TaskPriority,
    pub due_date: Option<DateTime<Utc>>,
}

/// Partial update of a task.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
    pub priority: Option<TaskPriority>,
    pub due_date: Option<DateTime<Utc>>,
}

/// The full task list, serialized as a plain JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    /// Starter tasks installed on first run, both due `now`.
    pub fn seeded(now: DateTime<Utc>) -> Self {
        Self::from_tasks(vec![
            Task {
                id: "1".to_string(),
                title: "Meditate for 10 minutes".to_string(),
                description: Some("Meditate to relax the mind and build focus".to_string()),
                completed: false,
                priority: TaskPriority::High,
                due_date: Some(now),
                created_at: now,
            },
            Task {
                id: "2".to_string(),
                title: "Read a book".to_string(),
                description: Some("Read something interesting for at least 30 minutes".to_string()),
                completed: false,
                priority: TaskPriority::Medium,
                due_date: Some(now),
                created_at: now,
            },
        ])
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut Task> {
        self.tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| CoreError::TaskNotFound(id.to_string()))
    }

    /// Create an open task with a fresh id.
    ///
    /// # Errors
    /// Returns a validation error if the title is blank.
    pub fn add(&mut self, new: NewTask, now: DateTime<Utc>) -> Result<&Task> {
        if new.title.trim().is_empty() {
            return Err(ValidationError::blank("title").into());
        }

        let task = Task {
            id: format!("task-{}", Uuid::new_v4()),
            title: new.title,
            description: new.description,
            completed: false,
            priority: new.priority,
            due_date: new.due_date,
            created_at: now,
        };
        debug!(id = %task.id, "task added");

        self.tasks.push(task);
        let last = self.tasks.len() - 1;
        Ok(&self.tasks[last])
    }

    pub fn update(&mut self, id: &str, patch: TaskPatch) -> Result<&Task> {
        if patch.title.as_deref().is_some_and(|t| t.trim().is_empty()) {
            return Err(ValidationError::blank("title").into());
        }

        let task = self.get_mut(id)?;
        if let Some(title) = patch.title {
            task.title = title;
        }
        if let Some(description) = patch.description {
            task.description = Some(description);
        }
        if let Some(completed) = patch.completed {
            task.completed = completed;
        }
        if let Some(priority) = patch.priority {
            task.priority = priority;
        }
        if let Some(due) = patch.due_date {
            task.due_date = Some(due);
        }
        debug!(id, "task updated");
        Ok(&*task)
    }

    pub fn remove(&mut self, id: &str) -> Result<Task> {
        let index = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| CoreError::TaskNotFound(id.to_string()))?;
        debug!(id, "task removed");
        Ok(self.tasks.remove(index))
    }

    /// Flip the completed flag.
    pub fn toggle_complete(&mut self, id: &str) -> Result<&Task> {
        let task = self.get_mut(id)?;
        task.completed = !task.completed;
        debug!(id, completed = task.completed, "task toggled");
        Ok(&*task)
    }
}
