use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "ascend-cli", version, about = "Ascend CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Archetype selection
    Archetype {
        #[command(subcommand)]
        action: commands::archetype::ArchetypeAction,
    },
    /// Daily calibration (wake/sleep/work hours, training access)
    Calibrate {
        #[command(subcommand)]
        action: commands::calibrate::CalibrateAction,
    },
    /// Schedule generation and inspection
    Schedule {
        #[command(subcommand)]
        action: commands::schedule::ScheduleAction,
    },
    /// Task lifecycle (list, start, complete, fail, abandon)
    Task {
        #[command(subcommand)]
        action: commands::task::TaskAction,
    },
    /// Penalty slot management
    Penalty {
        #[command(subcommand)]
        action: commands::penalty::PenaltyAction,
    },
    /// Profile inspection
    Profile {
        #[command(subcommand)]
        action: commands::profile::ProfileAction,
    },
    /// Daily statistics
    Stats {
        #[command(subcommand)]
        action: commands::stats::StatsAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Best-effort remote mirroring
    Sync {
        #[command(subcommand)]
        action: commands::sync::SyncAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Archetype { action } => commands::archetype::run(action),
        Commands::Calibrate { action } => commands::calibrate::run(action),
        Commands::Schedule { action } => commands::schedule::run(action),
        Commands::Task { action } => commands::task::run(action),
        Commands::Penalty { action } => commands::penalty::run(action),
        Commands::Profile { action } => commands::profile::run(action),
        Commands::Stats { action } => commands::stats::run(action),
        Commands::Config { action } => commands::config::run(action),
        Commands::Sync { action } => commands::sync::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
