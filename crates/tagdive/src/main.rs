mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { dir, config } => commands::run::run(dir.as_deref(), config.as_deref()),
        Commands::Summary { dir, config } => {
            commands::summary::run(dir.as_deref(), config.as_deref())
        }
        Commands::Deepdive { dir, config, tag } => {
            commands::deepdive::run(dir.as_deref(), config.as_deref(), tag.as_deref())
        }
        Commands::Report { dir } => commands::report::run(dir.as_deref()),
        Commands::Status { dir, config, json } => {
            commands::status::run(dir.as_deref(), config.as_deref(), json)
        }
        Commands::Version => commands::version::run(),
    }
}
