//! API constants and endpoint builders for the GitHub migrations API

/// Default API base for github.com
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// REST API version sent with every request
pub const API_VERSION: &str = "2022-11-28";

/// API path prefix on self-hosted (GitHub Enterprise Server) instances
pub const ENTERPRISE_API_PATH: &str = "/api/v3";

/// Standard headers for GitHub REST requests
pub mod headers {
    /// Accept header for the JSON media type
    pub const ACCEPT_JSON: &str = "application/vnd.github+json";

    /// Header carrying the REST API version
    pub const API_VERSION_HEADER: &str = "X-GitHub-Api-Version";
}

/// Resolve the API base URL for an optional hostname override.
///
/// Without a hostname this is api.github.com; with one it is the
/// enterprise-server layout `https://<host>/api/v3`.
pub fn api_base(hostname: Option<&str>) -> String {
    match hostname {
        Some(host) => format!("https://{}{}", host.trim_end_matches('/'), ENTERPRISE_API_PATH),
        None => DEFAULT_API_BASE.to_string(),
    }
}

/// Build the org migrations collection endpoint (start + list)
pub fn migrations_endpoint(base_url: &str, org: &str) -> String {
    format!("{}/orgs/{}/migrations", base_url, org)
}

/// Build the status endpoint for a single migration
pub fn migration_endpoint(base_url: &str, org: &str, id: u64) -> String {
    format!("{}/orgs/{}/migrations/{}", base_url, org, id)
}

/// Build the archive download endpoint for a migration
pub fn archive_endpoint(base_url: &str, org: &str, id: u64) -> String {
    format!("{}/orgs/{}/migrations/{}/archive", base_url, org, id)
}

/// Build the repository unlock endpoint for a migration
pub fn unlock_endpoint(base_url: &str, org: &str, id: u64, repo: &str) -> String {
    format!("{}/orgs/{}/migrations/{}/repos/{}/lock", base_url, org, id, repo)
}
