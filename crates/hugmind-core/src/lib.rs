//! # Hug Mind Self Core Library
//!
//! Core logic for the Hug Mind Self wellness tracker: habit ("cohesion")
//! tracking with streaks and completion rates, a small task list, and the
//! JSON persistence behind them. The `hugmind-cli` binary is a thin layer
//! over this crate.
//!
//! ## Architecture
//!
//! - **Streak calculator**: pure functions over a habit's day log, see
//!   [`habit::streak`]. Callers pass "today" explicitly.
//! - **Collections**: [`HabitCollection`] and [`TaskList`] own all state
//!   and are the only mutation path.
//! - **Storage**: whole-collection JSON files plus TOML configuration in
//!   the data directory.
//!
//! ## Key Components
//!
//! - [`HabitCollection`]: habits and their logs
//! - [`HabitOverview`]: dashboard aggregates
//! - [`HabitStore`] / [`TaskStore`]: persistence
//! - [`Config`]: application configuration

pub mod clock;
pub mod error;
pub mod habit;
pub mod stats;
pub mod storage;
pub mod task;

pub use clock::DayBoundary;
pub use error::{ConfigError, CoreError, StorageError, ValidationError};
pub use habit::{
    completion_rate, current_streak, longest_streak, mark_day, Habit, HabitCollection,
    HabitLogEntry, HabitPatch, HabitSummary, NewHabit,
};
pub use stats::{HabitOverview, TaskProgress};
pub use storage::{Config, HabitStore, TaskStore};
pub use task::{NewTask, Task, TaskList, TaskPatch, TaskPriority};
