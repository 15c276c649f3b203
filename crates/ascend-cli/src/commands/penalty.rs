//! Penalty slot commands.

use ascend_core::SnapshotStore;
use chrono::Local;
use clap::Subcommand;

use super::{load_engine, print_events, save_engine, CommandResult};

#[derive(Subcommand)]
pub enum PenaltyAction {
    /// Show the outstanding penalty, if any
    Show,
    /// Complete the penalty quest (awards its xp, clears the slot)
    Complete,
    /// Clear the penalty slot without completing it
    Clear,
}

pub fn run(action: PenaltyAction) -> CommandResult {
    let store = SnapshotStore::open()?;

    match action {
        PenaltyAction::Show => {
            let (engine, _) = load_engine(&store)?;
            match engine.penalty_task() {
                Some(penalty) => {
                    println!("{}: {} (+{} xp)", penalty.id, penalty.title, penalty.xp);
                    for step in &penalty.instructions {
                        println!("  - {step}");
                    }
                }
                None => println!("no penalty outstanding"),
            }
            Ok(())
        }
        PenaltyAction::Complete => {
            let (mut engine, date) = load_engine(&store)?;
            let events = engine.complete_penalty();
            if events.is_empty() {
                println!("no penalty outstanding");
                return Ok(());
            }
            // Penalty completion counts toward the day like any other.
            let mut stats = store.load_stats()?;
            stats.record_complete();
            for event in &events {
                if let ascend_core::Event::PenaltyCompleted { xp, .. } = event {
                    stats.add_xp(*xp);
                }
            }
            if let Some(event) = stats.check_streak(Local::now().date_naive()) {
                if let ascend_core::Event::StreakExtended { streak, .. }
                | ascend_core::Event::StreakBroken { streak, .. } = &event
                {
                    engine.profile_mut().streak = *streak;
                }
                print_events(&[event]);
            }
            store.save_stats(&stats)?;
            print_events(&events);
            save_engine(&store, engine, date)
        }
        PenaltyAction::Clear => {
            let (mut engine, date) = load_engine(&store)?;
            match engine.clear_penalty() {
                Some(event) => print_events(&[event]),
                None => println!("no penalty outstanding"),
            }
            save_engine(&store, engine, date)
        }
    }
}
