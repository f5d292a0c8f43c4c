pub mod download;
pub mod export;
pub mod list;
pub mod status;
pub mod unlock;

pub use download::download_command;
pub use export::export_command;
pub use list::list_command;
pub use status::status_command;
pub use unlock::unlock_command;

use crate::api::{MigrationClient, constants};
use crate::cli::app::ConnectionArgs;

/// Build an API client from the shared connection flags and the global config
pub(crate) fn build_client(connection: &ConnectionArgs) -> anyhow::Result<MigrationClient> {
    let config = crate::global_config();
    let token = config.resolve_token(connection.token.as_deref())?;
    let hostname = config.resolve_hostname(connection.hostname.as_deref());
    let base_url = constants::api_base(hostname.as_deref());
    log::debug!("Using API base {}", base_url);
    Ok(MigrationClient::new(base_url, token))
}
