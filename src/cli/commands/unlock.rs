//! Remove the migration lock from a repository

use anyhow::Result;
use clap::Args;
use colored::*;

use crate::cli::app::ConnectionArgs;

#[derive(Args)]
pub struct UnlockArgs {
    /// Organization that owns the migration
    #[arg(help = "Organization name")]
    pub org: String,

    /// Migration id that holds the lock
    #[arg(help = "Migration id")]
    pub id: u64,

    /// Repository to unlock
    #[arg(help = "Repository name")]
    pub repo: String,

    #[command(flatten)]
    pub connection: ConnectionArgs,
}

/// Handle the unlock command
pub async fn unlock_command(args: UnlockArgs) -> Result<()> {
    let client = super::build_client(&args.connection)?;
    client
        .unlock_repository(&args.org, args.id, &args.repo)
        .await?;
    println!(
        "Unlocked {}/{}",
        args.org.bright_green(),
        args.repo.bright_green()
    );
    Ok(())
}
