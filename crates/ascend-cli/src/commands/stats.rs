//! Daily statistics commands.

use ascend_core::SnapshotStore;
use clap::Subcommand;

use super::CommandResult;

#[derive(Subcommand)]
pub enum StatsAction {
    /// Show daily/weekly counters and the streak
    Show {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Reset the daily xp counter (new day)
    ResetDaily,
}

pub fn run(action: StatsAction) -> CommandResult {
    let store = SnapshotStore::open()?;

    match action {
        StatsAction::Show { json } => {
            let stats = store.load_stats()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!("today:  {} xp", stats.daily_xp);
                println!("week:   {} xp", stats.weekly_xp);
                println!("total:  {} xp", stats.total_xp);
                println!(
                    "tasks:  {} completed, {} failed",
                    stats.completed_tasks, stats.failed_tasks
                );
                println!(
                    "streak: {} days (longest {})",
                    stats.current_streak, stats.longest_streak
                );
            }
            Ok(())
        }
        StatsAction::ResetDaily => {
            let mut stats = store.load_stats()?;
            stats.reset_daily();
            store.save_stats(&stats)?;
            println!("daily xp reset");
            Ok(())
        }
    }
}
