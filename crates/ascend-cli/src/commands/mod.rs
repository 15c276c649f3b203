pub mod archetype;
pub mod calibrate;
pub mod config;
pub mod penalty;
pub mod profile;
pub mod schedule;
pub mod stats;
pub mod sync;
pub mod task;

use ascend_core::{DayRecord, Event, SnapshotStore, TaskEngine, UserProfile};

pub type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Load the profile, insisting the user has onboarded.
pub fn require_profile(store: &SnapshotStore) -> Result<UserProfile, Box<dyn std::error::Error>> {
    store
        .load_profile()?
        .ok_or_else(|| "no profile yet; run `ascend-cli archetype select <id>` first".into())
}

/// Load the day record, insisting a schedule has been generated.
pub fn require_day(store: &SnapshotStore) -> Result<DayRecord, Box<dyn std::error::Error>> {
    store
        .load_day()?
        .ok_or_else(|| "no schedule yet; run `ascend-cli schedule generate` first".into())
}

/// Rebuild the engine from the persisted profile and day record.
pub fn load_engine(
    store: &SnapshotStore,
) -> Result<(TaskEngine, chrono::NaiveDate), Box<dyn std::error::Error>> {
    let profile = require_profile(store)?;
    let day = require_day(store)?;
    let date = day.date;
    Ok((TaskEngine::from_parts(profile, day.tasks, day.penalty), date))
}

/// Persist the engine back into its snapshot records.
pub fn save_engine(
    store: &SnapshotStore,
    engine: TaskEngine,
    date: chrono::NaiveDate,
) -> CommandResult {
    let (profile, tasks, penalty) = engine.into_parts();
    store.save_profile(&profile)?;
    store.save_day(&DayRecord {
        date,
        tasks,
        penalty,
    })?;
    Ok(())
}

/// Print events the way the voice collaborator would narrate them.
pub fn print_events(events: &[Event]) {
    for event in events {
        match event {
            Event::ScheduleSet { count, .. } => println!("schedule set: {count} tasks"),
            Event::TaskCompleted { title, xp, .. } => println!("completed '{title}' (+{xp} xp)"),
            Event::TaskFailed { title, .. } => println!("FAILED '{title}'"),
            Event::PenaltyAssigned { .. } => println!("penalty quest assigned"),
            Event::PenaltyCompleted { xp, .. } => println!("penalty quest completed (+{xp} xp)"),
            Event::PenaltyCleared { .. } => println!("penalty cleared"),
            Event::XpAwarded { level, xp, .. } => println!("level {level}, {xp} xp"),
            Event::LevelUp { level, .. } => println!("LEVEL UP -> {level}"),
            Event::StreakExtended { streak, .. } => println!("streak: {streak} days"),
            Event::StreakBroken { streak, .. } => println!("streak broken, back to {streak}"),
            Event::TimerStarted { duration_secs, .. } => {
                println!("timer started ({duration_secs}s)")
            }
            Event::TimerCompleted { task_id, .. } => println!("timer done for {task_id}"),
            Event::TimerAbandoned { task_id, .. } => println!("abandoned {task_id}"),
        }
    }
}
