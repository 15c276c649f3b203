mod config;
mod store;

pub use config::{Config, SettingsConfig};
pub use store::{DayRecord, SnapshotStore};

use std::path::PathBuf;

use crate::error::StorageError;

/// Returns `~/.config/ascend[-dev]/` based on ASCEND_ENV.
///
/// Set ASCEND_ENV=dev to use the development data directory.
pub fn data_dir() -> Result<PathBuf, StorageError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("ASCEND_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("ascend-dev")
    } else {
        base_dir.join("ascend")
    };

    std::fs::create_dir_all(&dir).map_err(|e| StorageError::OpenFailed {
        path: dir.clone(),
        message: e.to_string(),
    })?;
    Ok(dir)
}
