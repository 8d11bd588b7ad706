//! Status command handler.
//!
//! Checks that the service is reachable.

use clap::Args;
use lexask_api::{create_client, AskApi};
use lexask_core::{config::AppConfig, AppResult};

/// Check that the service is reachable
#[derive(Args, Debug)]
pub struct StatusCommand {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl StatusCommand {
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing status command");

        let api = create_client(config)?;
        let info = api.info().await?;

        if self.json {
            let output = serde_json::json!({
                "server": api.base_url(),
                "message": info.message,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            println!("{}: {}", api.base_url(), info.message);
        }

        Ok(())
    }
}
