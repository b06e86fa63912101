use chrono::NaiveDate;
use clap::Subcommand;
use hugmind_core::{HabitOverview, TaskProgress};

use super::{CmdResult, Session};

#[derive(Subcommand)]
pub enum StatsAction {
    /// Streak and completion overview across all habits
    Overview {
        /// Evaluate as of this day (default: today)
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Human-readable lines instead of JSON
        #[arg(long)]
        plain: bool,
    },
    /// Completed vs. total tasks
    Tasks,
}

pub fn run(action: StatsAction) -> CmdResult {
    let session = Session::open()?;

    match action {
        StatsAction::Overview { date, plain } => {
            let (_, habits) = session.habits()?;
            let today = date.unwrap_or_else(|| session.today());
            let overview = HabitOverview::compute(&habits, today);

            if plain {
                let unit = &session.config.display.streak_unit;
                println!(
                    "{} habits, {} {unit} of active streaks, best {} {unit}, {:.0}% average completion",
                    overview.total_habits,
                    overview.total_current_streak,
                    overview.highest_streak,
                    overview.average_completion,
                );
                for row in &overview.habits {
                    println!(
                        "{}: {} {unit} (best {} {unit}), {}% complete",
                        row.name, row.current_streak, row.longest_streak, row.completion_rate
                    );
                }
            } else {
                println!("{}", serde_json::to_string_pretty(&overview)?);
            }
        }
        StatsAction::Tasks => {
            let (_, tasks) = session.tasks()?;
            let progress = TaskProgress::compute(&tasks);
            println!("{}", serde_json::to_string_pretty(&progress)?);
        }
    }
    Ok(())
}
