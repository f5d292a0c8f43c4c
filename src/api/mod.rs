//! Client for the GitHub organization migrations REST API

pub mod client;
pub mod constants;
pub mod models;
pub mod poll;

pub use client::MigrationClient;
pub use models::{Migration, MigrationRepository, MigrationRequest, MigrationState, default_archive_name};
pub use poll::{DEFAULT_POLL_INTERVAL_SECS, PollOptions, wait_for_export};
