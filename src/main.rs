use anyhow::Result;
use clap::Parser;
use log::{debug, info};

use org_migrate_cli::cli::app::{Cli, Commands};
use org_migrate_cli::{cli, config, init_config};

#[tokio::main]
async fn main() -> Result<()> {
    // Pick up ORG_MIGRATE_TOKEN / GITHUB_TOKEN from a local .env if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let mut builder = env_logger::Builder::from_default_env();
    if cli.debug {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();

    info!("Starting org-migrate");

    // Initialize global Config once
    let config = config::Config::load()?;
    init_config(config)?;
    debug!("Loaded configuration");

    match cli.command {
        Commands::Export(args) => {
            cli::commands::export_command(args).await?;
        }
        Commands::Status(args) => {
            cli::commands::status_command(args).await?;
        }
        Commands::Download(args) => {
            cli::commands::download_command(args).await?;
        }
        Commands::List(args) => {
            cli::commands::list_command(args).await?;
        }
        Commands::Unlock(args) => {
            cli::commands::unlock_command(args).await?;
        }
    }

    Ok(())
}
