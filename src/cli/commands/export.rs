//! Full export flow: submit, poll until exported, download the archive

use anyhow::Result;
use clap::Args;
use colored::*;
use std::path::PathBuf;
use std::time::Duration;

use super::download::resolve_archive_target;
use crate::api::{self, MigrationRequest, PollOptions};
use crate::cli::app::ConnectionArgs;
use crate::cli::ui::with_progress;

#[derive(Args)]
pub struct ExportArgs {
    /// Organization that owns the repositories
    #[arg(help = "Organization name")]
    pub org: String,

    /// Repositories to include in the export
    #[arg(required = true, help = "One or more repository names")]
    pub repos: Vec<String>,

    /// Lock the repositories while the migration runs
    #[arg(long, help = "Lock the repositories while the migration runs")]
    pub lock: bool,

    #[arg(long, help = "Exclude attachments from the archive")]
    pub exclude_attachments: bool,

    #[arg(long, help = "Exclude git data from the archive")]
    pub exclude_git_data: bool,

    #[arg(long, help = "Exclude metadata from the archive")]
    pub exclude_metadata: bool,

    #[arg(long, help = "Exclude owner projects from the archive")]
    pub exclude_owner_projects: bool,

    #[arg(long, help = "Exclude releases from the archive")]
    pub exclude_releases: bool,

    /// Archive output path (default: migration_archive_<id>.tar.gz)
    #[arg(short, long, help = "Archive output path")]
    pub output: Option<PathBuf>,

    /// Seconds between status polls
    #[arg(long, help = "Seconds between status polls")]
    pub poll_interval: Option<u64>,

    /// Stop polling after this many seconds
    #[arg(long, help = "Stop polling after this many seconds")]
    pub timeout: Option<u64>,

    /// Submit and wait, but skip the archive download
    #[arg(long, help = "Skip the archive download")]
    pub no_download: bool,

    /// Overwrite an existing archive file without asking
    #[arg(long, help = "Overwrite an existing archive file without asking")]
    pub force: bool,

    #[command(flatten)]
    pub connection: ConnectionArgs,
}

impl ExportArgs {
    /// Turn the parsed flags into the migration-start request body
    pub fn to_request(&self) -> MigrationRequest {
        let mut request = MigrationRequest::new(self.repos.clone());
        request.lock_repositories = self.lock;
        request.exclude_attachments = self.exclude_attachments;
        request.exclude_git_data = self.exclude_git_data;
        request.exclude_metadata = self.exclude_metadata;
        request.exclude_owner_projects = self.exclude_owner_projects;
        request.exclude_releases = self.exclude_releases;
        request
    }
}

/// Handle the export command
pub async fn export_command(args: ExportArgs) -> Result<()> {
    let config = crate::global_config();
    let client = super::build_client(&args.connection)?;
    let request = args.to_request();

    println!(
        "Starting migration for {} ({} repositories)",
        args.org.bright_green().bold(),
        request.repositories.len()
    );

    let migration = client.start_migration(&args.org, &request).await?;
    println!(
        "Migration {} submitted (state: {})",
        migration.id.to_string().bright_yellow(),
        migration.state
    );

    let options = PollOptions {
        interval: Duration::from_secs(config.resolve_poll_interval(args.poll_interval)),
        timeout: args.timeout.map(Duration::from_secs),
    };
    let migration = with_progress(
        format!("Waiting for migration {} to export...", migration.id),
        api::wait_for_export(&client, &args.org, migration.id, &options),
    )
    .await?;
    println!("Migration {} exported", migration.id.to_string().bright_yellow());

    if args.no_download {
        println!("Skipping archive download (--no-download)");
        return Ok(());
    }

    let target = resolve_archive_target(args.output, migration.id, args.force)?;
    let bytes = with_progress(
        format!("Downloading archive to {}...", target.display()),
        client.download_archive(&args.org, migration.id, &target),
    )
    .await?;

    println!(
        "Archive saved to {} ({} bytes)",
        target.display().to_string().bright_green(),
        bytes
    );
    Ok(())
}
