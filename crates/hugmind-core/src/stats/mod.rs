//! Cross-collection statistics for dashboards.
//!
//! Everything here is derived on demand from the habit collection or the
//! task list; nothing is stored.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::habit::{streak, HabitCollection, HabitSummary};
use crate::task::TaskList;

/// Aggregate view over every habit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HabitOverview {
    pub total_habits: usize,
    /// Sum of every habit's current streak.
    pub total_current_streak: u32,
    /// Best longest streak across habits.
    pub highest_streak: u32,
    /// Mean completion rate, unrounded.
    pub average_completion: f64,
    pub habits: Vec<HabitSummary>,
}

impl HabitOverview {
    pub fn compute(habits: &HabitCollection, today: NaiveDate) -> Self {
        let rows: Vec<HabitSummary> = habits
            .iter()
            .map(|habit| HabitSummary::for_habit(habit, today))
            .collect();

        let total_current_streak = rows.iter().map(|r| r.current_streak).sum();
        let highest_streak = rows.iter().map(|r| r.longest_streak).max().unwrap_or(0);
        let average_completion = if rows.is_empty() {
            0.0
        } else {
            rows.iter().map(|r| f64::from(r.completion_rate)).sum::<f64>() / rows.len() as f64
        };

        Self {
            total_habits: rows.len(),
            total_current_streak,
            highest_streak,
            average_completion,
            habits: rows,
        }
    }
}

/// Completed vs. total tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskProgress {
    pub total: usize,
    pub completed: usize,
    pub percent: u8,
}

impl TaskProgress {
    pub fn compute(tasks: &TaskList) -> Self {
        let total = tasks.len();
        let completed = tasks.iter().filter(|t| t.completed).count();
        Self {
            total,
            completed,
            percent: streak::percent(completed, total),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};

    fn now() -> DateTime<Utc> {
        "2024-01-01T08:00:00Z".parse().unwrap()
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn empty_collection_overview() {
        let overview = HabitOverview::compute(&HabitCollection::new(), day(1));
        assert_eq!(overview.total_habits, 0);
        assert_eq!(overview.total_current_streak, 0);
        assert_eq!(overview.highest_streak, 0);
        assert_eq!(overview.average_completion, 0.0);
        assert!(overview.habits.is_empty());
    }

    #[test]
    fn overview_aggregates_per_habit_metrics() {
        let mut habits = HabitCollection::seeded(now());
        for d in 1..=3 {
            habits.mark_day("1", day(d), true, None).unwrap();
        }
        habits.mark_day("2", day(2), true, None).unwrap();
        habits.mark_day("2", day(3), false, None).unwrap();

        let overview = HabitOverview::compute(&habits, day(3));
        assert_eq!(overview.total_habits, 2);
        // 3 for habit 1, 1 for habit 2 (yesterday's completion still counts)
        assert_eq!(overview.total_current_streak, 4);
        assert_eq!(overview.highest_streak, 3);
        assert_eq!(overview.average_completion, 75.0);
    }

    #[test]
    fn task_progress() {
        let mut tasks = TaskList::seeded(now());
        assert_eq!(TaskProgress::compute(&tasks).percent, 0);

        tasks.toggle_complete("1").unwrap();
        let progress = TaskProgress::compute(&tasks);
        assert_eq!(progress.total, 2);
        assert_eq!(progress.completed, 1);
        assert_eq!(progress.percent, 50);

        assert_eq!(TaskProgress::compute(&TaskList::new()).percent, 0);
    }

    #[test]
    fn task_progress_rounds_exact_half_up() {
        let mut tasks = TaskList::new();
        let mut ids = Vec::new();
        for i in 0..40 {
            let task = tasks
                .add(
                    crate::task::NewTask {
                        title: format!("task {i}"),
                        description: None,
                        priority: Default::default(),
                        due_date: None,
                    },
                    now(),
                )
                .unwrap();
            ids.push(task.id.clone());
        }
        for id in &ids[..23] {
            tasks.toggle_complete(id).unwrap();
        }

        assert_eq!(TaskProgress::compute(&tasks).percent, 58);
    }
}
