use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request body for starting an organization migration.
///
/// The serialized form always carries all six flags and the full repository
/// list, whatever combination of CLI options produced it.
#[derive(Debug, Clone, Serialize)]
pub struct MigrationRequest {
    pub repositories: Vec<String>,
    pub lock_repositories: bool,
    pub exclude_attachments: bool,
    pub exclude_git_data: bool,
    pub exclude_metadata: bool,
    pub exclude_owner_projects: bool,
    pub exclude_releases: bool,
}

impl MigrationRequest {
    /// A request for the given repositories with every flag off
    pub fn new(repositories: Vec<String>) -> Self {
        Self {
            repositories,
            lock_repositories: false,
            exclude_attachments: false,
            exclude_git_data: false,
            exclude_metadata: false,
            exclude_owner_projects: false,
            exclude_releases: false,
        }
    }
}

/// Lifecycle state of a migration as reported by the status endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MigrationState {
    Pending,
    Exporting,
    Exported,
    Failed,
    /// Any state string this client does not recognize; the poller keeps
    /// waiting on these
    #[serde(other)]
    Unknown,
}

impl MigrationState {
    /// Whether this state ends the poll loop
    pub fn is_terminal(&self) -> bool {
        matches!(self, MigrationState::Exported | MigrationState::Failed)
    }

    /// Whether the export completed and the archive is ready to download
    pub fn is_success(&self) -> bool {
        matches!(self, MigrationState::Exported)
    }
}

impl std::fmt::Display for MigrationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            MigrationState::Pending => "pending",
            MigrationState::Exporting => "exporting",
            MigrationState::Exported => "exported",
            MigrationState::Failed => "failed",
            MigrationState::Unknown => "unknown",
        };
        write!(f, "{}", s)
    }
}

/// A migration as returned by the start, status and list endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct Migration {
    /// Server-assigned identifier, immutable once assigned
    pub id: u64,
    pub state: MigrationState,
    #[serde(default)]
    pub guid: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub lock_repositories: Option<bool>,
    #[serde(default)]
    pub repositories: Vec<MigrationRepository>,
}

/// Repository entry echoed back inside a migration
#[derive(Debug, Clone, Deserialize)]
pub struct MigrationRepository {
    pub name: String,
    #[serde(default)]
    pub full_name: Option<String>,
}

/// Default archive filename for a migration when the user gives none
pub fn default_archive_name(id: u64) -> String {
    format!("migration_archive_{}.tar.gz", id)
}
