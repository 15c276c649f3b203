//! Configuration management commands.

use ascend_core::Config;
use clap::Subcommand;

use super::CommandResult;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a configuration value by dotted key
    Get {
        /// Key, e.g. settings.voice_enabled
        key: String,
    },
    /// Set a configuration value by dotted key
    Set {
        /// Key, e.g. settings.voice_enabled
        key: String,
        /// New value (true/false)
        value: String,
    },
    /// List all configuration values
    List,
    /// Print the config file path
    Path,
}

pub fn run(action: ConfigAction) -> CommandResult {
    match action {
        ConfigAction::Get { key } => {
            let config = Config::load()?;
            println!("{}", config.get(&key)?);
            Ok(())
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load()?;
            config.set(&key, &value)?;
            config.save()?;
            println!("{key} = {value}");
            Ok(())
        }
        ConfigAction::List => {
            let config = Config::load()?;
            for (key, value) in config.entries() {
                println!("{key} = {value}");
            }
            Ok(())
        }
        ConfigAction::Path => {
            println!("{}", Config::path()?.display());
            Ok(())
        }
    }
}
