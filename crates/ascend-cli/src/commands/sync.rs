//! Best-effort remote mirroring commands.
//!
//! Mirroring never gates local state: an unconfigured or failing
//! endpoint prints a warning and the command still succeeds.

use ascend_core::sync::{CalibrationRow, ProfileRow, SyncClient, TaskRow};
use ascend_core::{Config, SnapshotStore};
use clap::Subcommand;

use super::{require_profile, CommandResult};

#[derive(Subcommand)]
pub enum SyncAction {
    /// Mirror profile, tasks, and calibration to the remote endpoint
    Push,
}

pub fn run(action: SyncAction) -> CommandResult {
    match action {
        SyncAction::Push => {
            let Some(client) = SyncClient::from_env() else {
                println!("sync not configured (ASCEND_SYNC_URL / ASCEND_SYNC_KEY unset); skipping");
                return Ok(());
            };

            let store = SnapshotStore::open()?;
            let profile = require_profile(&store)?;
            let day = store.load_day()?;
            let calibration = Config::load()?.calibration;

            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(async {
                if let Err(e) = client.push_profile(&ProfileRow::from_profile(&profile)).await {
                    eprintln!("warning: profile mirror failed: {e}");
                }
                if let Some(day) = day {
                    let rows: Vec<TaskRow> = day
                        .tasks
                        .iter()
                        .map(|t| TaskRow::from_task(&profile.id, day.date, t))
                        .collect();
                    if let Err(e) = client.push_tasks(&rows).await {
                        eprintln!("warning: task mirror failed: {e}");
                    }
                }
                if let Some(calibration) = calibration {
                    let row = CalibrationRow::from_calibration(&profile.id, &calibration);
                    if let Err(e) = client.push_calibration(&row).await {
                        eprintln!("warning: calibration mirror failed: {e}");
                    }
                }
            });

            println!("sync push done");
            Ok(())
        }
    }
}
