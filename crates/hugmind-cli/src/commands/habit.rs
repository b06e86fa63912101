//! Habit tracking commands for CLI.

use chrono::{NaiveDate, Utc};
use clap::Subcommand;
use hugmind_core::{HabitPatch, NewHabit};

use super::{CmdResult, Session};

#[derive(Subcommand)]
pub enum HabitAction {
    /// Create a new habit
    Add {
        /// Habit name
        name: String,
        /// Habit description
        #[arg(long, default_value = "")]
        description: String,
        /// Icon tag
        #[arg(long, default_value = "heart")]
        icon: String,
        /// Color tag
        #[arg(long, default_value = "purple")]
        color: String,
        /// Goal in days
        #[arg(long, default_value = "30")]
        target: u32,
    },
    /// List all habits
    List,
    /// Show a habit with its full log
    Show {
        /// Habit ID
        id: String,
    },
    /// Update a habit's display fields
    Update {
        /// Habit ID
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        icon: Option<String>,
        #[arg(long)]
        color: Option<String>,
        #[arg(long)]
        target: Option<u32>,
    },
    /// Delete a habit and its log
    Delete {
        /// Habit ID
        id: String,
    },
    /// Record a day as done (or missed with --incomplete)
    Mark {
        /// Habit ID
        id: String,
        /// Day as YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Record the day as not completed
        #[arg(long)]
        incomplete: bool,
        /// Note for the day; omitting it clears any previous note
        #[arg(long)]
        note: Option<String>,
    },
    /// Streaks and completion rate for a habit
    Stats {
        /// Habit ID
        id: String,
        /// Evaluate as of this day (default: today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

pub fn run(action: HabitAction) -> CmdResult {
    let session = Session::open()?;
    let (store, mut habits) = session.habits()?;

    match action {
        HabitAction::Add {
            name,
            description,
            icon,
            color,
            target,
        } => {
            let habit = habits
                .add(
                    NewHabit {
                        name,
                        description,
                        icon,
                        color,
                        target,
                    },
                    Utc::now(),
                )?
                .clone();
            store.save(&habits)?;
            println!("Habit created: {}", habit.id);
            println!("{}", serde_json::to_string_pretty(&habit)?);
        }
        HabitAction::List => {
            println!("{}", serde_json::to_string_pretty(&habits)?);
        }
        HabitAction::Show { id } => match habits.get(&id) {
            Some(habit) => println!("{}", serde_json::to_string_pretty(habit)?),
            None => return Err(format!("Habit not found: {id}").into()),
        },
        HabitAction::Update {
            id,
            name,
            description,
            icon,
            color,
            target,
        } => {
            let patch = HabitPatch {
                name,
                description,
                icon,
                color,
                target,
            };
            if patch.is_empty() {
                return Err("nothing to update".into());
            }
            let habit = habits.update(&id, patch)?.clone();
            store.save(&habits)?;
            println!("Habit updated:");
            println!("{}", serde_json::to_string_pretty(&habit)?);
        }
        HabitAction::Delete { id } => {
            habits.remove(&id)?;
            store.save(&habits)?;
            println!("Habit deleted: {id}");
        }
        HabitAction::Mark {
            id,
            date,
            incomplete,
            note,
        } => {
            let date = date.unwrap_or_else(|| session.today());
            let note = note.filter(|n| !n.trim().is_empty());
            let habit = habits.mark_day(&id, date, !incomplete, note)?;
            let entry = habit.entry_for(date).cloned();
            store.save(&habits)?;
            println!("{}", serde_json::to_string_pretty(&entry)?);
        }
        HabitAction::Stats { id, date } => {
            let today = date.unwrap_or_else(|| session.today());
            let summary = habits.summary(&id, today)?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }
    Ok(())
}
