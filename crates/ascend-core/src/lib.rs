//! # Ascend Core Library
//!
//! This library provides the core business logic for Ascend, an
//! archetype-driven daily discipline tracker. It implements a CLI-first
//! philosophy where all operations are available via a standalone CLI
//! binary, with any GUI shell being a thin layer over the same core.
//!
//! ## Architecture
//!
//! - **Schedule Generator**: A pure, deterministic function that turns a
//!   calibration record (wake/sleep/work hours, training access) and an
//!   archetype into a time-ordered daily task list
//! - **Task Engine**: Owns the day's tasks, the penalty slot, and the
//!   user profile; every mutation is a named transition that returns the
//!   events it produced
//! - **Storage**: TOML-based configuration plus plain JSON snapshot
//!   stores (profile, day, stats)
//! - **Sync**: Best-effort remote mirroring that never gates local state
//!
//! ## Key Components
//!
//! - [`generate_schedule`]: Calibration -> ordered task list
//! - [`TaskEngine`]: Task/XP/level/streak state machine
//! - [`TaskTimer`]: Cancellable wall-clock countdown for the active task
//! - [`Config`]: Application configuration management
//! - [`SyncClient`]: Fire-and-forget remote mirroring

pub mod archetype;
pub mod engine;
pub mod error;
pub mod events;
pub mod profile;
pub mod schedule;
pub mod stats;
pub mod storage;
pub mod sync;

pub use archetype::{Archetype, ArchetypeId, Intent, TaskTemplate, TrainingAccess};
pub use engine::{TaskEngine, TaskTimer, TimerState, PENALTY_TASK_ID};
pub use error::{ConfigError, CoreError, StorageError, SyncError, ValidationError};
pub use events::Event;
pub use profile::{IntentCounts, ShadowStats, UserProfile};
pub use schedule::{generate_schedule, CalibrationData, Task};
pub use stats::DailyStats;
pub use storage::{Config, DayRecord, SnapshotStore};
pub use sync::SyncClient;
