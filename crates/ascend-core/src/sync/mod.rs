//! Best-effort remote mirroring.
//!
//! Mirrors profile, task, and calibration records to a hosted
//! backend-as-a-service, keyed by user id and date string. Strictly
//! advisory: local state transitions never wait on or react to the
//! outcome, and an unconfigured client just means offline mode.

use chrono::NaiveDate;
use reqwest::Client;
use serde::Serialize;

use crate::error::SyncError;
use crate::profile::UserProfile;
use crate::schedule::{CalibrationData, Task};

const URL_ENV: &str = "ASCEND_SYNC_URL";
const KEY_ENV: &str = "ASCEND_SYNC_KEY";

/// Profile row as mirrored remotely.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileRow {
    pub id: String,
    pub username: String,
    pub archetype: Option<String>,
    pub level: u32,
    pub xp: u32,
    pub streak: u32,
    pub vitality: u32,
    pub discipline: u32,
    pub intellect: u32,
    pub spirit: u32,
}

impl ProfileRow {
    pub fn from_profile(profile: &UserProfile) -> Self {
        Self {
            id: profile.id.clone(),
            username: profile.username.clone(),
            archetype: profile.archetype.map(|a| a.to_string()),
            level: profile.level,
            xp: profile.xp,
            streak: profile.streak,
            vitality: profile.stats.vitality,
            discipline: profile.stats.discipline,
            intellect: profile.stats.intellect,
            spirit: profile.stats.spirit,
        }
    }
}

/// Task row as mirrored remotely, keyed by user and date.
#[derive(Debug, Clone, Serialize)]
pub struct TaskRow {
    pub id: String,
    pub user_id: String,
    pub date: String,
    pub title: String,
    pub intent: String,
    pub time: String,
    pub duration: u32,
    pub xp: u32,
    pub completed: bool,
    pub failed: bool,
    pub instructions: Vec<String>,
}

impl TaskRow {
    pub fn from_task(user_id: &str, date: NaiveDate, task: &Task) -> Self {
        Self {
            id: task.id.clone(),
            user_id: user_id.to_string(),
            date: date.to_string(),
            title: task.title.clone(),
            intent: task.intent.to_string(),
            time: task.time.clone(),
            duration: task.duration,
            xp: task.xp,
            completed: task.completed,
            failed: task.failed,
            instructions: task.instructions.clone(),
        }
    }
}

/// Calibration row as mirrored remotely.
#[derive(Debug, Clone, Serialize)]
pub struct CalibrationRow {
    pub user_id: String,
    pub wake_time: String,
    pub sleep_time: String,
    pub work_hours: String,
    pub training_access: Vec<String>,
}

impl CalibrationRow {
    pub fn from_calibration(user_id: &str, calibration: &CalibrationData) -> Self {
        Self {
            user_id: user_id.to_string(),
            wake_time: calibration.wake_time.clone(),
            sleep_time: calibration.sleep_time.clone(),
            work_hours: calibration.work_hours.clone(),
            training_access: calibration
                .training_access
                .iter()
                .map(|a| a.to_string())
                .collect(),
        }
    }
}

/// Thin REST client for the mirroring endpoint.
pub struct SyncClient {
    base_url: String,
    api_key: String,
    http: Client,
}

impl SyncClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            http: Client::new(),
        }
    }

    /// Build a client from ASCEND_SYNC_URL / ASCEND_SYNC_KEY.
    /// None means offline mode; callers carry on locally.
    pub fn from_env() -> Option<Self> {
        let base_url = std::env::var(URL_ENV).ok()?;
        let api_key = std::env::var(KEY_ENV).ok()?;
        if base_url.is_empty() || api_key.is_empty() {
            return None;
        }
        Some(Self::new(base_url, api_key))
    }

    pub async fn push_profile(&self, row: &ProfileRow) -> Result<(), SyncError> {
        self.post("profiles", row).await
    }

    pub async fn push_tasks(&self, rows: &[TaskRow]) -> Result<(), SyncError> {
        self.post("tasks", &rows).await
    }

    pub async fn push_calibration(&self, row: &CalibrationRow) -> Result<(), SyncError> {
        self.post("calibrations", row).await
    }

    async fn post<T: Serialize + ?Sized>(&self, table: &str, body: &T) -> Result<(), SyncError> {
        let url = format!("{}/rest/v1/{table}", self.base_url);
        let response = self
            .http
            .post(&url)
            .header("apikey", &self.api_key)
            .header("Prefer", "resolution=merge-duplicates")
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(SyncError::RejectedStatus {
                table: table.to_string(),
                status: status.as_u16(),
            })
        }
    }
}
