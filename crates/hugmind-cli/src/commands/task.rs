//! Task management commands for CLI.

use chrono::{DateTime, NaiveDate, Utc};
use clap::Subcommand;
use hugmind_core::{NewTask, TaskPatch, TaskPriority};

use super::{CmdResult, Session};

/// Accepts an RFC 3339 timestamp or a bare `YYYY-MM-DD` (midnight UTC).
fn parse_due(s: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    s.parse::<NaiveDate>()
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .ok_or_else(|| format!("expected YYYY-MM-DD or RFC 3339 timestamp, got '{s}'"))
}

#[derive(Subcommand)]
pub enum TaskAction {
    /// Create a new task
    Add {
        /// Task title
        title: String,
        /// Task description
        #[arg(long)]
        description: Option<String>,
        /// Priority: low, medium or high (default: medium)
        #[arg(long, default_value = "medium")]
        priority: TaskPriority,
        /// Due date
        #[arg(long, value_parser = parse_due)]
        due: Option<DateTime<Utc>>,
    },
    /// List tasks
    List {
        /// Only tasks not yet completed
        #[arg(long)]
        pending: bool,
    },
    /// Update a task
    Update {
        /// Task ID
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        priority: Option<TaskPriority>,
        #[arg(long, value_parser = parse_due)]
        due: Option<DateTime<Utc>>,
        /// Set completed status
        #[arg(long)]
        completed: Option<bool>,
    },
    /// Flip a task between done and not done
    Toggle {
        /// Task ID
        id: String,
    },
    /// Delete a task
    Delete {
        /// Task ID
        id: String,
    },
}

pub fn run(action: TaskAction) -> CmdResult {
    let session = Session::open()?;
    let (store, mut tasks) = session.tasks()?;

    match action {
        TaskAction::Add {
            title,
            description,
            priority,
            due,
        } => {
            let task = tasks
                .add(
                    NewTask {
                        title,
                        description,
                        priority,
                        due_date: due,
                    },
                    Utc::now(),
                )?
                .clone();
            store.save(&tasks)?;
            println!("Task created: {}", task.id);
            println!("{}", serde_json::to_string_pretty(&task)?);
        }
        TaskAction::List { pending } => {
            let listed: Vec<_> = tasks.iter().filter(|t| !pending || !t.completed).collect();
            println!("{}", serde_json::to_string_pretty(&listed)?);
        }
        TaskAction::Update {
            id,
            title,
            description,
            priority,
            due,
            completed,
        } => {
            let task = tasks
                .update(
                    &id,
                    TaskPatch {
                        title,
                        description,
                        completed,
                        priority,
                        due_date: due,
                    },
                )?
                .clone();
            store.save(&tasks)?;
            println!("Task updated:");
            println!("{}", serde_json::to_string_pretty(&task)?);
        }
        TaskAction::Toggle { id } => {
            let task = tasks.toggle_complete(&id)?.clone();
            store.save(&tasks)?;
            println!("{}", serde_json::to_string_pretty(&task)?);
        }
        TaskAction::Delete { id } => {
            tasks.remove(&id)?;
            store.save(&tasks)?;
            println!("Task deleted: {id}");
        }
    }
    Ok(())
}
