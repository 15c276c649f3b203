//! Task/progress state machine.
//!
//! [`TaskEngine`] exclusively owns the day's task list, the single
//! optional penalty slot, and the user profile. Per task the machine
//! is:
//!
//! ```text
//! PENDING -> COMPLETED (terminal)
//! PENDING -> FAILED    (terminal, activates the penalty slot)
//! ```
//!
//! The penalty slot is INACTIVE or ACTIVE; any FAILED transition
//! activates it (replacing a prior penalty -- only one can be
//! outstanding) and it deactivates only by explicit clear, normally
//! after the penalty task's own completion.
//!
//! Invalid references -- an unknown id, or a task already terminal --
//! are silent no-ops that return no events. There are no fatal
//! conditions here.

mod timer;

pub use timer::{TaskTimer, TimerState};

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::archetype::Intent;
use crate::events::Event;
use crate::profile::UserProfile;
use crate::schedule::Task;

/// Fixed id of the penalty singleton.
pub const PENALTY_TASK_ID: &str = "penalty-1";

/// The well-known penalty task injected when any regular task fails.
pub fn penalty_task() -> Task {
    Task {
        id: PENALTY_TASK_ID.to_string(),
        time: "NOW".to_string(),
        title: "Penalty Quest".to_string(),
        intent: Intent::Discipline,
        xp: 10,
        duration: 5 * 60,
        instructions: vec![
            "50 Burpees".to_string(),
            "OR 5 min Wall Sit".to_string(),
            "No Excuses".to_string(),
        ],
        completed: false,
        failed: false,
    }
}

/// Single-writer state machine over the day's tasks and the profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskEngine {
    tasks: Vec<Task>,
    penalty: Option<Task>,
    profile: UserProfile,
}

impl TaskEngine {
    pub fn new(profile: UserProfile) -> Self {
        Self {
            tasks: Vec::new(),
            penalty: None,
            profile,
        }
    }

    /// Rebuild an engine from persisted parts.
    pub fn from_parts(profile: UserProfile, tasks: Vec<Task>, penalty: Option<Task>) -> Self {
        Self {
            tasks,
            penalty,
            profile,
        }
    }

    /// Tear down into persistable parts.
    pub fn into_parts(self) -> (UserProfile, Vec<Task>, Option<Task>) {
        (self.profile, self.tasks, self.penalty)
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn penalty_task(&self) -> Option<&Task> {
        self.penalty.as_ref()
    }

    pub fn penalty_active(&self) -> bool {
        self.penalty.is_some()
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn profile_mut(&mut self) -> &mut UserProfile {
        &mut self.profile
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Replace the task list wholesale (after generation or reset).
    /// Clears no other state.
    pub fn set_tasks(&mut self, tasks: Vec<Task>) -> Event {
        let count = tasks.len();
        self.tasks = tasks;
        Event::ScheduleSet {
            count,
            at: Utc::now(),
        }
    }

    /// Mark a pending task completed and award its XP.
    ///
    /// Returns no events when the id is unknown or the task is already
    /// terminal.
    pub fn complete_task(&mut self, id: &str) -> Vec<Event> {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id && t.is_pending()) else {
            return Vec::new();
        };
        task.completed = true;
        let (title, xp) = (task.title.clone(), task.xp);

        let mut events = vec![Event::TaskCompleted {
            task_id: id.to_string(),
            title,
            xp,
            at: Utc::now(),
        }];
        self.award_xp(xp, &mut events);
        events
    }

    /// Mark a pending task failed and activate the penalty slot.
    ///
    /// A prior outstanding penalty is simply replaced; only one can be
    /// pending at a time.
    pub fn fail_task(&mut self, id: &str) -> Vec<Event> {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id && t.is_pending()) else {
            return Vec::new();
        };
        task.failed = true;
        let title = task.title.clone();

        self.penalty = Some(penalty_task());
        vec![
            Event::TaskFailed {
                task_id: id.to_string(),
                title,
                at: Utc::now(),
            },
            Event::PenaltyAssigned {
                task_id: PENALTY_TASK_ID.to_string(),
                at: Utc::now(),
            },
        ]
    }

    /// Complete the outstanding penalty task: awards its XP like any
    /// completion, then clears the slot. No-op when inactive.
    pub fn complete_penalty(&mut self) -> Vec<Event> {
        let Some(penalty) = self.penalty.take() else {
            return Vec::new();
        };
        let mut events = vec![Event::PenaltyCompleted {
            xp: penalty.xp,
            at: Utc::now(),
        }];
        self.award_xp(penalty.xp, &mut events);
        events.push(Event::PenaltyCleared { at: Utc::now() });
        events
    }

    /// Deactivate the penalty slot without awarding anything.
    pub fn clear_penalty(&mut self) -> Option<Event> {
        self.penalty.take()?;
        Some(Event::PenaltyCleared { at: Utc::now() })
    }

    fn award_xp(&mut self, amount: u32, events: &mut Vec<Event>) {
        let leveled = self.profile.award_xp(amount);
        events.push(Event::XpAwarded {
            amount,
            level: self.profile.level,
            xp: self.profile.xp,
            at: Utc::now(),
        });
        if leveled {
            events.push(Event::LevelUp {
                level: self.profile.level,
                at: Utc::now(),
            });
        }
    }
}
