//! Fixed-interval polling of a migration until it reaches a terminal state

use super::client::MigrationClient;
use super::models::{Migration, MigrationState};
use std::time::Duration;
use tokio::time::Instant;

/// Default wait between status fetches
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 15;

/// Polling behavior for [`wait_for_export`]
#[derive(Debug, Clone)]
pub struct PollOptions {
    /// Wait between status fetches
    pub interval: Duration,
    /// Give up after this long; `None` polls until a terminal state arrives
    pub timeout: Option<Duration>,
}

impl Default for PollOptions {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(DEFAULT_POLL_INTERVAL_SECS),
            timeout: None,
        }
    }
}

/// Poll the status endpoint until the migration is `exported` or `failed`.
///
/// Non-terminal states (including ones this client does not recognize) just
/// wait out the interval and retry, with no backoff. A `failed` state or an
/// exceeded timeout becomes an error.
pub async fn wait_for_export(
    client: &MigrationClient,
    org: &str,
    id: u64,
    options: &PollOptions,
) -> anyhow::Result<Migration> {
    let started = Instant::now();

    loop {
        let migration = client.get_migration(org, id).await?;
        log::info!("Migration {} state: {}", id, migration.state);

        match migration.state {
            MigrationState::Exported => return Ok(migration),
            MigrationState::Failed => {
                anyhow::bail!("Migration {} reached the failed state", id)
            }
            state => {
                if let Some(timeout) = options.timeout {
                    if started.elapsed() >= timeout {
                        anyhow::bail!(
                            "Timed out after {:?} waiting for migration {} (last state: {})",
                            timeout,
                            id,
                            state
                        );
                    }
                }
                tokio::time::sleep(options.interval).await;
            }
        }
    }
}
