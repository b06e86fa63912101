pub mod config;
pub mod habit;
pub mod stats;
pub mod task;

use chrono::NaiveDate;
use hugmind_core::storage::data_dir;
use hugmind_core::{Config, HabitCollection, HabitStore, TaskList, TaskStore};
use std::path::PathBuf;

pub type CmdResult = Result<(), Box<dyn std::error::Error>>;

/// Data directory plus the configuration loaded from it.
pub struct Session {
    pub config: Config,
    dir: PathBuf,
}

impl Session {
    pub fn open() -> Result<Self, Box<dyn std::error::Error>> {
        let dir = data_dir()?;
        let config = Config::load_from(&dir.join("config.toml"))?;
        Ok(Self { config, dir })
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.join("config.toml")
    }

    /// Today under the configured day boundary.
    pub fn today(&self) -> NaiveDate {
        self.config.day_boundary.today()
    }

    pub fn habits(&self) -> Result<(HabitStore, HabitCollection), Box<dyn std::error::Error>> {
        let store = HabitStore::in_dir(&self.dir);
        let habits = store.load(self.config.seed_defaults, chrono::Utc::now())?;
        Ok((store, habits))
    }

    pub fn tasks(&self) -> Result<(TaskStore, TaskList), Box<dyn std::error::Error>> {
        let store = TaskStore::in_dir(&self.dir);
        let tasks = store.load(self.config.seed_defaults, chrono::Utc::now())?;
        Ok((store, tasks))
    }
}
