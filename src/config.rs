use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Persistent settings, read from `config.toml` in the tool's config directory
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    /// API token used when neither `--token` nor the environment provides one
    pub token: Option<String>,
    /// Default hostname for a self-hosted platform instance
    pub hostname: Option<String>,
    /// Default wait between status polls, in seconds
    pub poll_interval_secs: Option<u64>,
}

impl Config {
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = if cfg!(target_os = "linux") {
            // Use XDG config directory on Linux
            dirs::config_dir()
                .context("Failed to get XDG config directory")?
                .join("org-migrate")
        } else {
            // Use home directory with dot prefix on Windows/Mac
            dirs::home_dir()
                .context("Failed to get home directory")?
                .join(".org-migrate")
        };

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)
                .with_context(|| format!("Failed to create config directory: {:?}", config_dir))?;
            info!("Created config directory: {:?}", config_dir);
        }

        Ok(config_dir.join("config.toml"))
    }

    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        debug!("Loading config from: {:?}", config_path);

        if !config_path.exists() {
            debug!("Config file doesn't exist, using defaults");
            return Ok(Self::default());
        }

        let config_content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;

        let config: Config = toml::from_str(&config_content)
            .with_context(|| format!("Failed to parse config file: {:?}", config_path))?;

        Ok(config)
    }

    /// Resolve the API token: `--token` flag, then environment, then config
    /// file, then an interactive prompt when running on a terminal.
    pub fn resolve_token(&self, flag: Option<&str>) -> Result<String> {
        if let Some(token) = flag {
            return Ok(token.to_string());
        }
        for var in ["ORG_MIGRATE_TOKEN", "GITHUB_TOKEN"] {
            if let Ok(token) = std::env::var(var) {
                if !token.is_empty() {
                    debug!("Using token from {}", var);
                    return Ok(token);
                }
            }
        }
        if let Some(token) = &self.token {
            return Ok(token.clone());
        }
        if std::io::stdin().is_terminal() {
            let token = rpassword::prompt_password("API token: ")
                .context("Failed to read token from terminal")?;
            if !token.trim().is_empty() {
                return Ok(token.trim().to_string());
            }
        }
        anyhow::bail!(
            "No API token configured. Pass --token, set ORG_MIGRATE_TOKEN or GITHUB_TOKEN, \
             or add `token = \"...\"` to {:?}",
            Self::get_config_path()?
        )
    }

    /// Resolve the hostname override: flag first, then config file
    pub fn resolve_hostname(&self, flag: Option<&str>) -> Option<String> {
        flag.map(|h| h.to_string()).or_else(|| self.hostname.clone())
    }

    /// Resolve the poll interval in seconds: flag first, then config file,
    /// then the built-in default
    pub fn resolve_poll_interval(&self, flag: Option<u64>) -> u64 {
        flag.or(self.poll_interval_secs)
            .unwrap_or(crate::api::DEFAULT_POLL_INTERVAL_SECS)
    }
}
