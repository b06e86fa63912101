//! Whole-collection JSON stores.
//!
//! Each collection lives in one JSON file inside the data directory and
//! is always rewritten in full. There is no incremental patching and no
//! schema versioning.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::data_dir;
use crate::error::{Result, StorageError};
use crate::habit::HabitCollection;
use crate::task::TaskList;

/// A collection that can be persisted by [`CollectionStore`].
pub trait StoredCollection: Serialize + DeserializeOwned + Default {
    /// File name inside the data directory.
    const FILE_NAME: &'static str;

    /// Contents installed the first time the store is loaded.
    fn seeded(now: DateTime<Utc>) -> Self;
}

impl StoredCollection for HabitCollection {
    const FILE_NAME: &'static str = "cohesion.json";

    fn seeded(now: DateTime<Utc>) -> Self {
        HabitCollection::seeded(now)
    }
}

impl StoredCollection for TaskList {
    const FILE_NAME: &'static str = "tasks.json";

    fn seeded(now: DateTime<Utc>) -> Self {
        TaskList::seeded(now)
    }
}

/// JSON file holding one collection.
#[derive(Debug, Clone)]
pub struct CollectionStore<T> {
    path: PathBuf,
    _collection: PhantomData<T>,
}

pub type HabitStore = CollectionStore<HabitCollection>;
pub type TaskStore = CollectionStore<TaskList>;

impl<T: StoredCollection> CollectionStore<T> {
    /// Open the store in the default data directory.
    pub fn open() -> Result<Self> {
        Ok(Self::in_dir(&data_dir()?))
    }

    /// Open the store inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self::with_path(dir.join(T::FILE_NAME))
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self {
            path,
            _collection: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the collection.
    ///
    /// A missing file yields the seeded defaults (written back so later
    /// loads see the same ids) when `seed_defaults` is set, or an empty
    /// collection otherwise.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(&self, seed_defaults: bool, now: DateTime<Utc>) -> Result<T> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                if !seed_defaults {
                    debug!(path = %self.path.display(), "no stored collection");
                    return Ok(T::default());
                }
                warn!(path = %self.path.display(), "no stored collection, seeding defaults");
                let seeded = T::seeded(now);
                self.save(&seeded)?;
                return Ok(seeded);
            }
            Err(source) => {
                return Err(StorageError::ReadFailed {
                    path: self.path.clone(),
                    source,
                }
                .into())
            }
        };

        let collection = serde_json::from_str(&content).map_err(|source| StorageError::Corrupt {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), "collection loaded");
        Ok(collection)
    }

    /// Overwrite the stored collection.
    pub fn save(&self, collection: &T) -> Result<()> {
        let content = serde_json::to_string_pretty(collection)?;
        std::fs::write(&self.path, content).map_err(|source| StorageError::WriteFailed {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), "collection saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use chrono::NaiveDate;

    fn now() -> DateTime<Utc> {
        "2024-01-01T08:00:00Z".parse().unwrap()
    }

    #[test]
    fn missing_file_seeds_and_persists_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = HabitStore::in_dir(dir.path());

        let habits = store.load(true, now()).unwrap();
        assert_eq!(habits.len(), 2);
        assert!(store.path().exists());
        assert_eq!(store.path().file_name().unwrap(), "cohesion.json");
    }

    #[test]
    fn missing_file_without_seeding_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = TaskStore::in_dir(dir.path());

        let tasks = store.load(false, now()).unwrap();
        assert!(tasks.is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = HabitStore::in_dir(dir.path());

        let mut habits = HabitCollection::seeded(now());
        habits
            .mark_day(
                "1",
                NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
                true,
                Some("felt great".to_string()),
            )
            .unwrap();
        store.save(&habits).unwrap();

        assert_eq!(store.load(true, now()).unwrap(), habits);
    }

    #[test]
    fn emptied_collection_stays_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = TaskStore::in_dir(dir.path());

        let mut tasks = store.load(true, now()).unwrap();
        tasks.remove("1").unwrap();
        tasks.remove("2").unwrap();
        store.save(&tasks).unwrap();

        assert!(store.load(true, now()).unwrap().is_empty());
    }

    #[test]
    fn corrupt_file_is_reported_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let store = HabitStore::in_dir(dir.path());
        std::fs::write(store.path(), "{not json").unwrap();

        match store.load(true, now()) {
            Err(CoreError::Storage(StorageError::Corrupt { path, .. })) => {
                assert_eq!(path, store.path());
            }
            other => panic!("expected corrupt error, got {other:?}"),
        }
    }
}
