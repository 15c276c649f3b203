//! Countdown timer for the in-progress task.
//!
//! Wall-clock based state machine with no internal thread: the caller
//! ticks it (once per second is plenty). Reaching zero reports the
//! crossing exactly once, after which the caller drives the same
//! completion transition a manual action would. Stopping or abandoning
//! cancels the countdown so a finished-then-acted task can never be
//! completed twice.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::events::Event;
use crate::schedule::Task;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerState {
    Idle,
    Running,
    Completed,
    Abandoned,
}

/// Cancellable countdown bound to at most one task at a time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskTimer {
    state: TimerState,
    task_id: Option<String>,
    /// Remaining time in milliseconds.
    remaining_ms: u64,
    /// Timestamp (ms since epoch) of the last tick while running.
    #[serde(default)]
    last_tick_epoch_ms: Option<u64>,
}

impl Default for TaskTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskTimer {
    pub fn new() -> Self {
        Self {
            state: TimerState::Idle,
            task_id: None,
            remaining_ms: 0,
            last_tick_epoch_ms: None,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn task_id(&self) -> Option<&str> {
        self.task_id.as_deref()
    }

    pub fn remaining_ms(&self) -> u64 {
        self.remaining_ms
    }

    pub fn remaining_secs(&self) -> u64 {
        self.remaining_ms / 1000
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Arm the countdown for a task. Any previous countdown is
    /// replaced (cancelled), whatever state it was in.
    pub fn start(&mut self, task: &Task) -> Event {
        self.state = TimerState::Running;
        self.task_id = Some(task.id.clone());
        self.remaining_ms = u64::from(task.duration) * 1000;
        self.last_tick_epoch_ms = Some(now_ms());
        Event::TimerStarted {
            task_id: task.id.clone(),
            duration_secs: task.duration,
            at: Utc::now(),
        }
    }

    /// Consume elapsed wall time. Returns the completion event exactly
    /// once, on the tick that crosses zero.
    pub fn tick(&mut self) -> Option<Event> {
        if self.state != TimerState::Running {
            return None;
        }
        let now = now_ms();
        let elapsed = now.saturating_sub(self.last_tick_epoch_ms.unwrap_or(now));
        self.last_tick_epoch_ms = Some(now);
        self.remaining_ms = self.remaining_ms.saturating_sub(elapsed);

        if self.remaining_ms == 0 {
            self.state = TimerState::Completed;
            let task_id = self.task_id.clone().unwrap_or_default();
            return Some(Event::TimerCompleted {
                task_id,
                at: Utc::now(),
            });
        }
        None
    }

    /// Cancel the countdown (manual completion path or view switch).
    /// Subsequent ticks are no-ops.
    pub fn stop(&mut self) {
        self.state = TimerState::Idle;
        self.task_id = None;
        self.remaining_ms = 0;
        self.last_tick_epoch_ms = None;
    }

    /// Abandon the active task. Cancels the countdown and reports which
    /// task must be failed. No-op unless running.
    pub fn abandon(&mut self) -> Option<Event> {
        if self.state != TimerState::Running {
            return None;
        }
        self.state = TimerState::Abandoned;
        self.last_tick_epoch_ms = None;
        let task_id = self.task_id.clone().unwrap_or_default();
        Some(Event::TimerAbandoned {
            task_id,
            remaining_ms: self.remaining_ms,
            at: Utc::now(),
        })
    }
}

fn now_ms() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archetype::Intent;

    fn task_with_duration(duration: u32) -> Task {
        Task {
            id: "task-1".to_string(),
            time: "06:00".to_string(),
            title: "Morning Ritual".to_string(),
            intent: Intent::Spirit,
            xp: 20,
            duration,
            instructions: vec![],
            completed: false,
            failed: false,
        }
    }

    #[test]
    fn start_arms_full_duration() {
        let mut timer = TaskTimer::new();
        let event = timer.start(&task_with_duration(900));
        assert!(matches!(event, Event::TimerStarted { duration_secs: 900, .. }));
        assert_eq!(timer.state(), TimerState::Running);
        assert_eq!(timer.remaining_secs(), 900);
    }

    #[test]
    fn zero_duration_completes_on_first_tick_only() {
        let mut timer = TaskTimer::new();
        timer.start(&task_with_duration(0));
        assert!(matches!(timer.tick(), Some(Event::TimerCompleted { .. })));
        // Crossing is reported exactly once.
        assert!(timer.tick().is_none());
        assert_eq!(timer.state(), TimerState::Completed);
    }

    #[test]
    fn stop_cancels_and_silences_ticks() {
        let mut timer = TaskTimer::new();
        timer.start(&task_with_duration(0));
        timer.stop();
        assert_eq!(timer.state(), TimerState::Idle);
        assert!(timer.tick().is_none());
        assert!(timer.task_id().is_none());
    }

    #[test]
    fn abandon_reports_the_task_to_fail() {
        let mut timer = TaskTimer::new();
        timer.start(&task_with_duration(900));
        let event = timer.abandon();
        match event {
            Some(Event::TimerAbandoned { task_id, .. }) => assert_eq!(task_id, "task-1"),
            other => panic!("expected TimerAbandoned, got {other:?}"),
        }
        assert!(timer.tick().is_none());
        assert!(timer.abandon().is_none());
    }

    #[test]
    fn starting_again_replaces_the_countdown() {
        let mut timer = TaskTimer::new();
        timer.start(&task_with_duration(0));
        timer.tick();
        timer.start(&task_with_duration(900));
        assert_eq!(timer.state(), TimerState::Running);
        assert_eq!(timer.task_id(), Some("task-1"));
        assert_eq!(timer.remaining_secs(), 900);
    }
}
