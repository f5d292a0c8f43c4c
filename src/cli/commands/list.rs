//! Recent migrations for an organization

use anyhow::Result;
use clap::Args;
use colored::*;

use crate::api::MigrationState;
use crate::cli::app::ConnectionArgs;

#[derive(Args)]
pub struct ListArgs {
    /// Organization to list migrations for
    #[arg(help = "Organization name")]
    pub org: String,

    #[command(flatten)]
    pub connection: ConnectionArgs,
}

/// Handle the list command
pub async fn list_command(args: ListArgs) -> Result<()> {
    let client = super::build_client(&args.connection)?;
    let migrations = client.list_migrations(&args.org).await?;

    if migrations.is_empty() {
        println!("No migrations found for {}", args.org.bright_green());
        return Ok(());
    }

    for migration in &migrations {
        let state = match migration.state {
            MigrationState::Exported => migration.state.to_string().bright_green(),
            MigrationState::Failed => migration.state.to_string().bright_red(),
            _ => migration.state.to_string().bright_yellow(),
        };
        let created = migration
            .created_at
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_default();
        println!(
            "{:>10}  {:<10}  {:<16}  {} repos",
            migration.id.to_string().bold(),
            state,
            created,
            migration.repositories.len()
        );
    }

    Ok(())
}
