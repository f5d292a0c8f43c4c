use super::commands::download::DownloadArgs;
use super::commands::export::ExportArgs;
use super::commands::list::ListArgs;
use super::commands::status::StatusArgs;
use super::commands::unlock::UnlockArgs;
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "org-migrate")]
#[command(about = "A CLI tool for exporting GitHub organization repositories via the migrations API")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start a migration, wait for it to export, and download the archive
    Export(ExportArgs),
    /// Show the current status of a migration
    Status(StatusArgs),
    /// Download the archive of an already-exported migration
    Download(DownloadArgs),
    /// List recent migrations for an organization
    List(ListArgs),
    /// Remove the migration lock from a repository
    Unlock(UnlockArgs),
}

/// Connection options shared by every subcommand
#[derive(Args)]
pub struct ConnectionArgs {
    /// Hostname of a self-hosted platform instance (default: github.com)
    #[arg(long, help = "Self-hosted instance hostname")]
    pub hostname: Option<String>,

    /// API token (overrides environment and config file)
    #[arg(long, help = "API token")]
    pub token: Option<String>,
}
