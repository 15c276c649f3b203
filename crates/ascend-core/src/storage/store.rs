//! Plain JSON snapshot stores.
//!
//! One structured record per store -- `profile.json`, `day.json`,
//! `stats.json` -- written whole on every save. No versioning scheme;
//! a missing file simply means the record does not exist yet.
//! Persistence never gates state transitions: the engine mutates in
//! memory and snapshots are serialized afterwards.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::data_dir;
use crate::error::StorageError;
use crate::profile::UserProfile;
use crate::schedule::Task;
use crate::stats::DailyStats;

const PROFILE_FILE: &str = "profile.json";
const DAY_FILE: &str = "day.json";
const STATS_FILE: &str = "stats.json";

/// The day's mutable state: the generated task list plus the penalty
/// slot, keyed by date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayRecord {
    pub date: NaiveDate,
    pub tasks: Vec<Task>,
    pub penalty: Option<Task>,
}

/// File-backed snapshot store rooted at the data directory.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    dir: PathBuf,
}

impl SnapshotStore {
    /// Open the store at the default data directory.
    pub fn open() -> Result<Self, StorageError> {
        Ok(Self { dir: data_dir()? })
    }

    /// Open the store at an explicit directory (tests).
    pub fn open_at(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn load_profile(&self) -> Result<Option<UserProfile>, StorageError> {
        self.load(PROFILE_FILE)
    }

    pub fn save_profile(&self, profile: &UserProfile) -> Result<(), StorageError> {
        self.save(PROFILE_FILE, profile)
    }

    pub fn load_day(&self) -> Result<Option<DayRecord>, StorageError> {
        self.load(DAY_FILE)
    }

    pub fn save_day(&self, day: &DayRecord) -> Result<(), StorageError> {
        self.save(DAY_FILE, day)
    }

    pub fn load_stats(&self) -> Result<DailyStats, StorageError> {
        Ok(self.load(STATS_FILE)?.unwrap_or_default())
    }

    pub fn save_stats(&self, stats: &DailyStats) -> Result<(), StorageError> {
        self.save(STATS_FILE, stats)
    }

    fn load<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>, StorageError> {
        let path = self.dir.join(name);
        if !path.exists() {
            return Ok(None);
        }
        let raw = std::fs::read_to_string(&path).map_err(|e| StorageError::LoadFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| StorageError::LoadFailed {
                path,
                message: e.to_string(),
            })
    }

    fn save<T: Serialize>(&self, name: &str, value: &T) -> Result<(), StorageError> {
        let path = self.dir.join(name);
        let raw = serde_json::to_string_pretty(value).map_err(|e| StorageError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(&path, raw).map_err(|e| StorageError::SaveFailed {
            path,
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archetype::ArchetypeId;
    use crate::schedule::{generate_schedule, CalibrationData};

    #[test]
    fn absent_records_load_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = SnapshotStore::open_at(dir.path());
        assert!(store.load_profile().unwrap().is_none());
        assert!(store.load_day().unwrap().is_none());
        assert_eq!(store.load_stats().unwrap(), DailyStats::default());
    }

    #[test]
    fn profile_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = SnapshotStore::open_at(dir.path());

        let mut profile = UserProfile::new("Hunter");
        profile.set_archetype(ArchetypeId::Ohma);
        profile.award_xp(40);
        store.save_profile(&profile).unwrap();

        let loaded = store.load_profile().unwrap().unwrap();
        assert_eq!(loaded, profile);
    }

    #[test]
    fn day_record_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = SnapshotStore::open_at(dir.path());

        let tasks = generate_schedule(ArchetypeId::Baki, &CalibrationData::default());
        let day = DayRecord {
            date: NaiveDate::from_ymd_opt(2026, 8, 30).unwrap(),
            tasks: tasks.clone(),
            penalty: None,
        };
        store.save_day(&day).unwrap();

        let loaded = store.load_day().unwrap().unwrap();
        assert_eq!(loaded.tasks, tasks);
        assert!(loaded.penalty.is_none());
    }

    #[test]
    fn save_overwrites_whole_record() {
        let dir = tempfile::tempdir().unwrap();
        let store = SnapshotStore::open_at(dir.path());

        let mut stats = DailyStats::default();
        stats.add_xp(50);
        store.save_stats(&stats).unwrap();
        stats.reset_daily();
        store.save_stats(&stats).unwrap();

        let loaded = store.load_stats().unwrap();
        assert_eq!(loaded.daily_xp, 0);
        assert_eq!(loaded.total_xp, 50);
    }
}
