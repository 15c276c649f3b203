//! Calibration commands: the daily constraints fed to the generator.

use ascend_core::archetype::TrainingAccess;
use ascend_core::{CalibrationData, Config};
use clap::Subcommand;

use super::CommandResult;

#[derive(Subcommand)]
pub enum CalibrateAction {
    /// Record wake/sleep times, work hours, and training access
    Set {
        /// Wake time as HH:MM
        #[arg(long, default_value = "06:00")]
        wake: String,
        /// Sleep time as HH:MM
        #[arg(long, default_value = "22:00")]
        sleep: String,
        /// Work hours as start-end whole hours, e.g. 9-17
        #[arg(long, default_value = "9-17")]
        work: String,
        /// Comma-separated training access: gym, home, dojo
        #[arg(long, default_value = "home")]
        access: String,
    },
    /// Show the current calibration
    Show,
}

pub fn run(action: CalibrateAction) -> CommandResult {
    match action {
        CalibrateAction::Set {
            wake,
            sleep,
            work,
            access,
        } => {
            let training_access: Vec<TrainingAccess> = access
                .split(',')
                .map(|s| s.trim().parse())
                .collect::<Result<_, _>>()?;
            if training_access.is_empty() {
                return Err("training access must name at least one location".into());
            }

            let mut config = Config::load()?;
            config.calibration = Some(CalibrationData {
                wake_time: wake,
                sleep_time: sleep,
                work_hours: work,
                training_access,
            });
            config.save()?;
            println!("calibration saved");
            Ok(())
        }
        CalibrateAction::Show => {
            let config = Config::load()?;
            match config.calibration {
                Some(c) => {
                    println!("wake:   {}", c.wake_time);
                    println!("sleep:  {}", c.sleep_time);
                    println!("work:   {}", c.work_hours);
                    let access: Vec<&str> =
                        c.training_access.iter().map(|a| a.as_str()).collect();
                    println!("access: {}", access.join(", "));
                }
                None => println!("not calibrated"),
            }
            Ok(())
        }
    }
}
