use super::constants::{self, headers};
use super::models::{Migration, MigrationRequest};
use anyhow::Context;
use futures::StreamExt;
use std::path::Path;
use std::time::Duration;
use tokio::io::AsyncWriteExt;

/// Client for the GitHub organization migrations API
#[derive(Clone)]
pub struct MigrationClient {
    base_url: String,
    http_client: reqwest::Client,
    token: String,
}

impl MigrationClient {
    pub fn new(base_url: String, token: String) -> Self {
        // No overall request timeout: archive downloads can run long
        let http_client = reqwest::Client::builder()
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(concat!("org-migrate-cli/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            base_url,
            http_client,
            token,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Start a migration for an organization, returning the server's view of it
    pub async fn start_migration(
        &self,
        org: &str,
        request: &MigrationRequest,
    ) -> anyhow::Result<Migration> {
        let url = constants::migrations_endpoint(&self.base_url, org);
        log::debug!(
            "Starting migration for {} ({} repositories)",
            org,
            request.repositories.len()
        );

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&self.token)
            .header("Accept", headers::ACCEPT_JSON)
            .header(headers::API_VERSION_HEADER, constants::API_VERSION)
            .json(request)
            .send()
            .await
            .context("Failed to reach the migrations endpoint")?;

        let status = response.status();
        if status.is_success() {
            let migration: Migration = response
                .json()
                .await
                .context("Failed to parse migration start response")?;
            log::info!("Migration {} started (state: {})", migration.id, migration.state);
            Ok(migration)
        } else {
            let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            anyhow::bail!("Migration start failed with status {}: {}", status, error_text)
        }
    }

    /// Fetch the current status of a migration
    pub async fn get_migration(&self, org: &str, id: u64) -> anyhow::Result<Migration> {
        let url = constants::migration_endpoint(&self.base_url, org, id);

        let response = self
            .http_client
            .get(&url)
            .bearer_auth(&self.token)
            .header("Accept", headers::ACCEPT_JSON)
            .header(headers::API_VERSION_HEADER, constants::API_VERSION)
            .send()
            .await
            .context("Failed to reach the migration status endpoint")?;

        let status = response.status();
        if status.is_success() {
            response
                .json()
                .await
                .context("Failed to parse migration status response")
        } else {
            let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            anyhow::bail!("Status fetch for migration {} failed with status {}: {}", id, status, error_text)
        }
    }

    /// List the most recent migrations for an organization
    pub async fn list_migrations(&self, org: &str) -> anyhow::Result<Vec<Migration>> {
        let url = constants::migrations_endpoint(&self.base_url, org);

        let response = self
            .http_client
            .get(&url)
            .bearer_auth(&self.token)
            .header("Accept", headers::ACCEPT_JSON)
            .header(headers::API_VERSION_HEADER, constants::API_VERSION)
            .send()
            .await
            .context("Failed to reach the migrations endpoint")?;

        let status = response.status();
        if status.is_success() {
            response
                .json()
                .await
                .context("Failed to parse migration list response")
        } else {
            let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            anyhow::bail!("Migration list failed with status {}: {}", status, error_text)
        }
    }

    /// Download the migration archive to `path`, streaming chunk by chunk.
    ///
    /// Returns the number of bytes written. The platform answers with a
    /// redirect to short-lived blob storage, which reqwest follows.
    pub async fn download_archive(
        &self,
        org: &str,
        id: u64,
        path: &Path,
    ) -> anyhow::Result<u64> {
        let url = constants::archive_endpoint(&self.base_url, org, id);
        log::debug!("Downloading archive for migration {} to {:?}", id, path);

        let response = self
            .http_client
            .get(&url)
            .bearer_auth(&self.token)
            .header("Accept", headers::ACCEPT_JSON)
            .header(headers::API_VERSION_HEADER, constants::API_VERSION)
            .send()
            .await
            .context("Failed to reach the archive endpoint")?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            anyhow::bail!("Archive download for migration {} failed with status {}: {}", id, status, error_text)
        }

        let mut file = tokio::fs::File::create(path)
            .await
            .with_context(|| format!("Failed to create archive file: {:?}", path))?;

        let mut bytes_written: u64 = 0;
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.context("Archive download interrupted")?;
            file.write_all(&chunk)
                .await
                .with_context(|| format!("Failed to write archive file: {:?}", path))?;
            bytes_written += chunk.len() as u64;
        }
        file.flush()
            .await
            .with_context(|| format!("Failed to flush archive file: {:?}", path))?;

        log::info!("Wrote {} bytes to {:?}", bytes_written, path);
        Ok(bytes_written)
    }

    /// Remove the migration lock from a repository
    pub async fn unlock_repository(&self, org: &str, id: u64, repo: &str) -> anyhow::Result<()> {
        let url = constants::unlock_endpoint(&self.base_url, org, id, repo);

        let response = self
            .http_client
            .delete(&url)
            .bearer_auth(&self.token)
            .header("Accept", headers::ACCEPT_JSON)
            .header(headers::API_VERSION_HEADER, constants::API_VERSION)
            .send()
            .await
            .context("Failed to reach the unlock endpoint")?;

        let status = response.status();
        if status.is_success() {
            log::info!("Unlocked {}/{} (migration {})", org, repo, id);
            Ok(())
        } else {
            let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            anyhow::bail!("Unlock of {} failed with status {}: {}", repo, status, error_text)
        }
    }
}
