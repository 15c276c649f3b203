//! Profile inspection commands.

use ascend_core::profile::{shadow_stats_with_progress, IntentCounts};
use ascend_core::SnapshotStore;
use clap::Subcommand;

use super::{require_profile, CommandResult};

#[derive(Subcommand)]
pub enum ProfileAction {
    /// Show level, xp, streak, and shadow stats
    Show {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: ProfileAction) -> CommandResult {
    match action {
        ProfileAction::Show { json } => {
            let store = SnapshotStore::open()?;
            let profile = require_profile(&store)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&profile)?);
                return Ok(());
            }

            // Shadow stats include progress earned from today's
            // completed tasks.
            let mut counts = IntentCounts::default();
            if let Some(day) = store.load_day()? {
                for task in day.tasks.iter().filter(|t| t.completed) {
                    counts.record(task.intent);
                }
            }
            let stats = shadow_stats_with_progress(&profile.stats, &counts);

            println!("{} (level {})", profile.username, profile.level);
            match profile.archetype {
                Some(id) => println!("archetype: {id}"),
                None => println!("archetype: none"),
            }
            println!("xp: {}/{}", profile.xp, profile.xp_to_level());
            println!("streak: {} days", profile.streak);
            println!(
                "vitality {}  discipline {}  intellect {}  spirit {}",
                stats.vitality, stats.discipline, stats.intellect, stats.spirit
            );
            Ok(())
        }
    }
}
