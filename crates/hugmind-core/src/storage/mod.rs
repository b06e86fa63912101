mod config;
mod store;

pub use config::{Config, DisplayConfig};
pub use store::{CollectionStore, HabitStore, StoredCollection, TaskStore};

use std::path::PathBuf;

use crate::error::StorageError;

/// Returns the data directory, creating it if needed.
///
/// `HUGMIND_DATA_DIR` overrides the location outright. Otherwise this is
/// `~/.config/hugmind[-dev]/`, with `-dev` selected by `HUGMIND_ENV=dev`.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, StorageError> {
    let dir = match std::env::var_os("HUGMIND_DATA_DIR") {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env = std::env::var("HUGMIND_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("hugmind-dev")
            } else {
                base_dir.join("hugmind")
            }
        }
    };

    std::fs::create_dir_all(&dir).map_err(|source| StorageError::DataDir {
        path: dir.clone(),
        source,
    })?;
    Ok(dir)
}
