//! Ask API client factory.
//!
//! Builds the transport the rest of the application uses from the final
//! [`AppConfig`].

use crate::client::AskApi;
use crate::http::HttpAskClient;
use lexask_core::{AppConfig, AppResult};
use std::sync::Arc;
use std::time::Duration;

/// Create an Ask API client from configuration.
///
/// # Errors
/// Returns `AppError::Config` if:
/// - The configuration does not validate
/// - The server URL cannot be parsed
/// - The HTTP client cannot be built
pub fn create_client(config: &AppConfig) -> AppResult<Arc<dyn AskApi>> {
    config.validate()?;

    let timeout = config.timeout_secs.map(Duration::from_secs);
    let client = HttpAskClient::new(&config.server_url, timeout)?;

    tracing::debug!(
        "Created Ask API client for {} (timeout: {:?})",
        client.base_url(),
        timeout
    );

    Ok(Arc::new(client))
}
