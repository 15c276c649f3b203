//! Archetype selection commands.

use ascend_core::archetype::{self, ArchetypeId};
use ascend_core::{SnapshotStore, UserProfile};
use clap::Subcommand;

use super::CommandResult;

#[derive(Subcommand)]
pub enum ArchetypeAction {
    /// List all selectable archetypes
    List,
    /// Choose an archetype (creates the profile on first selection)
    Select {
        /// Archetype id: yujiro, baki, ohma, or jack
        id: String,
    },
    /// Show the currently selected archetype
    Show,
}

pub fn run(action: ArchetypeAction) -> CommandResult {
    match action {
        ArchetypeAction::List => {
            for a in archetype::all() {
                println!("{:8} {} \"{}\"", a.id, a.name, a.epithet);
                println!("         doctrine: {}", a.doctrine);
            }
            Ok(())
        }
        ArchetypeAction::Select { id } => {
            let archetype_id: ArchetypeId = id.parse()?;
            let store = SnapshotStore::open()?;
            let mut profile = store
                .load_profile()?
                .unwrap_or_else(|| UserProfile::new("Hunter"));
            profile.set_archetype(archetype_id);
            store.save_profile(&profile)?;

            let a = archetype::get(archetype_id);
            println!("archetype selected: {} ({})", a.name, a.epithet);
            println!("\"{}\"", a.quote);
            Ok(())
        }
        ArchetypeAction::Show => {
            let store = SnapshotStore::open()?;
            match store.load_profile()?.and_then(|p| p.archetype) {
                Some(id) => {
                    let a = archetype::get(id);
                    println!("{} -- {} \"{}\"", a.id, a.name, a.epithet);
                    println!("doctrine: {}", a.doctrine);
                    for req in a.requirements {
                        println!("  - {req}");
                    }
                }
                None => println!("no archetype selected"),
            }
            Ok(())
        }
    }
}
