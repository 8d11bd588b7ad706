//! Ask command handler.
//!
//! Submits one question through the page controller, or prints the raw
//! service response with `--json`.

use crate::page::TerminalPage;
use clap::Args;
use lexask_api::{create_client, AskApi, AskRequest};
use lexask_controller::{AskController, ControllerOptions};
use lexask_core::{config::AppConfig, AppError, AppResult};
use std::sync::Arc;

/// Ask a question
#[derive(Args, Debug)]
pub struct AskCommand {
    /// The question to ask
    pub question: String,

    /// Also request the direct (no retrieval) answer
    #[arg(short, long)]
    pub compare: bool,

    /// Print the raw service response as JSON
    #[arg(long)]
    pub json: bool,
}

impl AskCommand {
    /// Execute the ask command.
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing ask command");
        tracing::debug!("Ask command options: {:?}", self);

        let api = create_client(config)?;
        let compare = self.compare || config.compare;

        if self.json {
            return self.print_json(api.as_ref(), compare).await;
        }

        let page = Arc::new(TerminalPage::new(compare));
        let controller =
            AskController::attach(page.clone(), api, ControllerOptions::from_config(config))?;

        page.set_question(&self.question);
        controller.submit().await.into_result()
    }

    async fn print_json(&self, api: &dyn AskApi, compare: bool) -> AppResult<()> {
        let question = self.question.trim();
        if question.is_empty() {
            return Err(AppError::Validation("Question is empty".to_string()));
        }

        let response = api.ask(&AskRequest::new(question, compare)).await?;
        let json = serde_json::to_string_pretty(&response)?;
        println!("{}", json);

        Ok(())
    }
}
