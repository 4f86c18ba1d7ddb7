use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "oneonone", version, about = "1on1 meeting planner CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend the best meeting time for a calendar
    Recommend(commands::recommend::RecommendArgs),
    /// Show who has submitted availability on each day
    Density(commands::density::DensityArgs),
    /// Show coverage of each boundary segment on a day
    Coverage(commands::recommend::CoverageArgs),
    /// Validate a calendar draft before creation
    Validate(commands::validate::ValidateArgs),
    /// Build a finalize request from the recommendation and overrides
    Finalize(commands::finalize::FinalizeArgs),
    /// Backend access
    Api {
        #[command(subcommand)]
        action: commands::api::ApiAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Recommend(args) => commands::recommend::run(args),
        Commands::Density(args) => commands::density::run(args),
        Commands::Coverage(args) => commands::recommend::run_coverage(args),
        Commands::Validate(args) => commands::validate::run(args),
        Commands::Finalize(args) => commands::finalize::run(args),
        Commands::Api { action } => commands::api::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
