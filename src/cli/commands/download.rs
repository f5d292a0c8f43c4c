//! Archive download for an already-exported migration

use anyhow::Result;
use clap::Args;
use colored::*;
use is_terminal::IsTerminal;
use std::path::PathBuf;

use crate::api::default_archive_name;
use crate::cli::app::ConnectionArgs;
use crate::cli::ui::with_progress;

#[derive(Args)]
pub struct DownloadArgs {
    /// Organization that owns the migration
    #[arg(help = "Organization name")]
    pub org: String,

    /// Migration id
    #[arg(help = "Migration id")]
    pub id: u64,

    /// Archive output path (default: migration_archive_<id>.tar.gz)
    #[arg(short, long, help = "Archive output path")]
    pub output: Option<PathBuf>,

    /// Overwrite an existing archive file without asking
    #[arg(long, help = "Overwrite an existing archive file without asking")]
    pub force: bool,

    #[command(flatten)]
    pub connection: ConnectionArgs,
}

/// Handle the download command
pub async fn download_command(args: DownloadArgs) -> Result<()> {
    let client = super::build_client(&args.connection)?;

    // The archive endpoint answers 404 for anything not exported; checking
    // the state first gives a readable message instead
    let migration = client.get_migration(&args.org, args.id).await?;
    if !migration.state.is_success() {
        anyhow::bail!(
            "Migration {} is not exported yet (state: {})",
            args.id,
            migration.state
        );
    }

    let target = resolve_archive_target(args.output, args.id, args.force)?;
    let bytes = with_progress(
        format!("Downloading archive to {}...", target.display()),
        client.download_archive(&args.org, args.id, &target),
    )
    .await?;

    println!(
        "Archive saved to {} ({} bytes)",
        target.display().to_string().bright_green(),
        bytes
    );
    Ok(())
}

/// Pick the archive path and guard against clobbering an existing file.
///
/// Interactive runs get a confirmation prompt; non-interactive ones need
/// `--force`.
pub(crate) fn resolve_archive_target(
    output: Option<PathBuf>,
    id: u64,
    force: bool,
) -> Result<PathBuf> {
    let target = output.unwrap_or_else(|| PathBuf::from(default_archive_name(id)));

    if target.exists() && !force {
        if std::io::stdin().is_terminal() {
            let overwrite = dialoguer::Confirm::new()
                .with_prompt(format!("{} already exists, overwrite?", target.display()))
                .default(false)
                .interact()?;
            if !overwrite {
                anyhow::bail!("Refusing to overwrite {}", target.display());
            }
        } else {
            anyhow::bail!(
                "{} already exists (pass --force to overwrite)",
                target.display()
            );
        }
    }

    Ok(target)
}
