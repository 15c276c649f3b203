//! Schedule generation and inspection commands.

use ascend_core::{generate_schedule, Config, DayRecord, SnapshotStore, TaskEngine};
use chrono::Local;
use clap::Subcommand;

use super::{print_events, require_profile, CommandResult};

#[derive(Subcommand)]
pub enum ScheduleAction {
    /// Generate today's schedule from the saved calibration
    Generate,
    /// Show the current schedule
    Show {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: ScheduleAction) -> CommandResult {
    match action {
        ScheduleAction::Generate => {
            let store = SnapshotStore::open()?;
            let profile = require_profile(&store)?;
            let archetype = profile
                .archetype
                .ok_or("no archetype selected; run `ascend-cli archetype select <id>`")?;
            let config = Config::load()?;
            let calibration = config
                .calibration
                .ok_or("not calibrated; run `ascend-cli calibrate set` first")?;

            let tasks = generate_schedule(archetype, &calibration);

            // Wholesale replacement of the task list only. An
            // outstanding penalty survives regeneration; its sole
            // remedy is completing the penalty quest.
            let prior_penalty = store.load_day()?.and_then(|d| d.penalty);
            let mut engine = TaskEngine::from_parts(profile, Vec::new(), prior_penalty);
            let event = engine.set_tasks(tasks);
            print_events(&[event]);
            if engine.penalty_active() {
                println!("penalty quest still outstanding");
            }

            let (profile, tasks, penalty) = engine.into_parts();
            for task in &tasks {
                println!("  {}  {:24} {:10} +{} xp", task.time, task.title, task.intent, task.xp);
            }
            store.save_profile(&profile)?;
            store.save_day(&DayRecord {
                date: Local::now().date_naive(),
                tasks,
                penalty,
            })?;
            Ok(())
        }
        ScheduleAction::Show { json } => {
            let store = SnapshotStore::open()?;
            match store.load_day()? {
                Some(day) => {
                    if json {
                        println!("{}", serde_json::to_string_pretty(&day.tasks)?);
                    } else {
                        println!("schedule for {}", day.date);
                        for task in &day.tasks {
                            let state = if task.completed {
                                "done"
                            } else if task.failed {
                                "failed"
                            } else {
                                "pending"
                            };
                            println!(
                                "  [{state:7}] {}  {}  {:24} +{} xp",
                                task.id, task.time, task.title, task.xp
                            );
                        }
                    }
                }
                None => println!("no schedule generated"),
            }
            Ok(())
        }
    }
}
