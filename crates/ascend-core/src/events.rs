//! Core event contract.
//!
//! Every state change in the system produces an Event. Voice and
//! notification collaborators consume them fire-and-forget; the core
//! never awaits or depends on their outcome.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    /// The day's task list was replaced wholesale.
    ScheduleSet {
        count: usize,
        at: DateTime<Utc>,
    },
    TaskCompleted {
        task_id: String,
        title: String,
        xp: u32,
        at: DateTime<Utc>,
    },
    TaskFailed {
        task_id: String,
        title: String,
        at: DateTime<Utc>,
    },
    /// The penalty slot was activated (a task failed).
    PenaltyAssigned {
        task_id: String,
        at: DateTime<Utc>,
    },
    /// The outstanding penalty task was completed.
    PenaltyCompleted {
        xp: u32,
        at: DateTime<Utc>,
    },
    /// The penalty slot was deactivated.
    PenaltyCleared {
        at: DateTime<Utc>,
    },
    XpAwarded {
        amount: u32,
        level: u32,
        xp: u32,
        at: DateTime<Utc>,
    },
    LevelUp {
        level: u32,
        at: DateTime<Utc>,
    },
    StreakExtended {
        streak: u32,
        at: DateTime<Utc>,
    },
    StreakBroken {
        streak: u32,
        at: DateTime<Utc>,
    },
    TimerStarted {
        task_id: String,
        duration_secs: u32,
        at: DateTime<Utc>,
    },
    /// The countdown reached zero; the caller completes the task.
    TimerCompleted {
        task_id: String,
        at: DateTime<Utc>,
    },
    /// The active task was abandoned; the caller fails the task.
    TimerAbandoned {
        task_id: String,
        remaining_ms: u64,
        at: DateTime<Utc>,
    },
}
