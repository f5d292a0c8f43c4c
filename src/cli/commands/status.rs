//! One-shot status fetch for a migration

use anyhow::Result;
use clap::Args;
use colored::*;

use crate::api::MigrationState;
use crate::cli::app::ConnectionArgs;

#[derive(Args)]
pub struct StatusArgs {
    /// Organization that owns the migration
    #[arg(help = "Organization name")]
    pub org: String,

    /// Migration id
    #[arg(help = "Migration id")]
    pub id: u64,

    #[command(flatten)]
    pub connection: ConnectionArgs,
}

/// Handle the status command
pub async fn status_command(args: StatusArgs) -> Result<()> {
    let client = super::build_client(&args.connection)?;
    let migration = client.get_migration(&args.org, args.id).await?;

    let state = match migration.state {
        MigrationState::Exported => migration.state.to_string().bright_green(),
        MigrationState::Failed => migration.state.to_string().bright_red(),
        _ => migration.state.to_string().bright_yellow(),
    };

    println!("Migration:  {}", migration.id.to_string().bold());
    println!("State:      {}", state);
    if let Some(guid) = &migration.guid {
        println!("Guid:       {}", guid);
    }
    if let Some(created_at) = migration.created_at {
        println!("Created:    {}", created_at.format("%Y-%m-%d %H:%M:%S UTC"));
    }
    if let Some(url) = &migration.url {
        println!("Url:        {}", url.dimmed());
    }
    if !migration.repositories.is_empty() {
        let names: Vec<&str> = migration
            .repositories
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        println!("Repos:      {}", names.join(", "));
    }

    Ok(())
}
