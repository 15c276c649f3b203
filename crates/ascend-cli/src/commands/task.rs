//! Task lifecycle commands.

use std::io::Write;

use ascend_core::{Event, SnapshotStore, TaskTimer, TimerState};
use chrono::Local;
use clap::Subcommand;

use super::{load_engine, print_events, save_engine, CommandResult};

#[derive(Subcommand)]
pub enum TaskAction {
    /// List today's tasks
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Mark a task completed
    Complete {
        /// Task id, e.g. task-3
        id: String,
    },
    /// Mark a task failed (assigns the penalty quest)
    Fail {
        /// Task id, e.g. task-3
        id: String,
    },
    /// Run the countdown for a task, completing it at zero
    Start {
        /// Task id, e.g. task-3
        id: String,
    },
    /// Give up on a task: cancels its countdown and marks it failed
    Abandon {
        /// Task id, e.g. task-3
        id: String,
    },
}

pub fn run(action: TaskAction) -> CommandResult {
    let store = SnapshotStore::open()?;

    match action {
        TaskAction::List { json } => {
            let (engine, _) = load_engine(&store)?;
            if json {
                println!("{}", serde_json::to_string_pretty(engine.tasks())?);
            } else {
                for task in engine.tasks() {
                    let state = if task.completed {
                        "done"
                    } else if task.failed {
                        "failed"
                    } else {
                        "pending"
                    };
                    println!("[{state:7}] {}  {}  {}", task.id, task.time, task.title);
                }
                if let Some(penalty) = engine.penalty_task() {
                    println!("[PENALTY] {}  {}", penalty.id, penalty.title);
                }
            }
            Ok(())
        }
        TaskAction::Complete { id } => {
            let (mut engine, date) = load_engine(&store)?;
            let events = engine.complete_task(&id);
            if events.is_empty() {
                println!("task '{id}' not found or already resolved");
                return save_engine(&store, engine, date);
            }
            record_completion(&store, &mut engine, &events)?;
            print_events(&events);
            save_engine(&store, engine, date)
        }
        TaskAction::Fail { id } => {
            let (mut engine, date) = load_engine(&store)?;
            let events = engine.fail_task(&id);
            if events.is_empty() {
                println!("task '{id}' not found or already resolved");
                return save_engine(&store, engine, date);
            }
            let mut stats = store.load_stats()?;
            stats.record_fail();
            store.save_stats(&stats)?;
            print_events(&events);
            save_engine(&store, engine, date)
        }
        TaskAction::Start { id } => {
            let (mut engine, date) = load_engine(&store)?;
            let task = engine
                .task(&id)
                .ok_or_else(|| format!("task '{id}' not found"))?;
            if !task.is_pending() {
                println!("task '{id}' is already resolved");
                return Ok(());
            }

            let mut timer = TaskTimer::new();
            print_events(&[timer.start(task)]);

            // One logical writer: the countdown ticks in this process
            // and nothing else mutates the day state meanwhile.
            while timer.state() == TimerState::Running {
                std::thread::sleep(std::time::Duration::from_secs(1));
                if let Some(event) = timer.tick() {
                    println!();
                    print_events(&[event]);
                    break;
                }
                print!("\r{:>6}s remaining ", timer.remaining_secs());
                std::io::stdout().flush().ok();
            }

            let events = engine.complete_task(&id);
            record_completion(&store, &mut engine, &events)?;
            print_events(&events);
            save_engine(&store, engine, date)
        }
        TaskAction::Abandon { id } => {
            let (mut engine, date) = load_engine(&store)?;
            let task = engine
                .task(&id)
                .ok_or_else(|| format!("task '{id}' not found"))?;
            if !task.is_pending() {
                println!("task '{id}' is already resolved");
                return Ok(());
            }

            // Abandonment is the one cancellation path that is not a
            // completion: the countdown stops and the task fails.
            let mut timer = TaskTimer::new();
            timer.start(task);
            if let Some(event) = timer.abandon() {
                print_events(&[event]);
            }

            let events = engine.fail_task(&id);
            let mut stats = store.load_stats()?;
            stats.record_fail();
            store.save_stats(&stats)?;
            print_events(&events);
            save_engine(&store, engine, date)
        }
    }
}

/// Completion bookkeeping shared by manual and timer-driven paths:
/// daily counters, xp tallies, and the streak calendar. The profile's
/// streak mirrors the calendar outcome.
fn record_completion(
    store: &SnapshotStore,
    engine: &mut ascend_core::TaskEngine,
    events: &[Event],
) -> CommandResult {
    let mut stats = store.load_stats()?;
    stats.record_complete();
    for event in events {
        if let Event::TaskCompleted { xp, .. } = event {
            stats.add_xp(*xp);
        }
    }
    if let Some(event) = stats.check_streak(Local::now().date_naive()) {
        if let Event::StreakExtended { streak, .. } | Event::StreakBroken { streak, .. } = &event {
            engine.profile_mut().streak = *streak;
        }
        print_events(&[event]);
    }
    store.save_stats(&stats)?;
    Ok(())
}
