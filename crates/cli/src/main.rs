//! lexask CLI
//!
//! Main entry point for the lexask command-line tool.
//! Asks the legal question-answering service and renders its answers.

mod commands;
mod page;

use clap::{Parser, Subcommand};
use commands::{AskCommand, BatchSearchCommand, SearchCommand, ShellCommand, StatusCommand};
use lexask_core::{config::AppConfig, logging, AppResult, StaleResponses};
use std::path::PathBuf;

/// lexask - ask the legal question-answering service from a terminal
#[derive(Parser, Debug)]
#[command(name = "lexask")]
#[command(about = "Ask the legal question-answering service", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to workspace directory (default: current directory)
    #[arg(short, long, global = true, env = "LEXASK_WORKSPACE")]
    workspace: Option<PathBuf>,

    /// Path to config file
    #[arg(long, global = true, env = "LEXASK_CONFIG")]
    config: Option<PathBuf>,

    /// Base URL of the service
    #[arg(short, long, global = true, env = "LEXASK_SERVER")]
    server: Option<String>,

    /// Request timeout in seconds (default: wait indefinitely)
    #[arg(long, global = true)]
    timeout: Option<u64>,

    /// Responses to superseded questions: discard or render
    #[arg(long, global = true, value_parser = parse_stale)]
    stale: Option<StaleResponses>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Enable verbose output (sets log level to debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Ask a question
    Ask(AskCommand),

    /// Ask questions interactively
    Shell(ShellCommand),

    /// Retrieve reference passages for a query
    Search(SearchCommand),

    /// Retrieve reference passages for several queries
    BatchSearch(BatchSearchCommand),

    /// Check that the service is reachable
    Status(StatusCommand),
}

fn parse_stale(s: &str) -> Result<StaleResponses, String> {
    StaleResponses::parse(s).ok_or_else(|| format!("expected 'discard' or 'render', got '{}'", s))
}

#[tokio::main]
async fn main() -> AppResult<()> {
    // Parse command-line arguments first (needed for logging config)
    let cli = Cli::parse();

    let config = AppConfig::load_with(cli.workspace, cli.config)?;

    // Apply CLI overrides; compare is set per command
    let config = config.with_overrides(
        cli.server,
        cli.timeout,
        false,
        cli.stale,
        cli.log_level,
        cli.verbose,
        cli.no_color,
    );
    config.validate()?;

    logging::init_logging(config.log_level.as_deref(), config.no_color)?;

    tracing::info!("lexask starting");
    tracing::debug!("Workspace: {:?}", config.workspace);
    tracing::debug!("Server: {}", config.server_url);

    let command_name = match &cli.command {
        Commands::Ask(_) => "ask",
        Commands::Shell(_) => "shell",
        Commands::Search(_) => "search",
        Commands::BatchSearch(_) => "batch-search",
        Commands::Status(_) => "status",
    };
    let _span = tracing::info_span!("command", name = command_name).entered();

    let result = match cli.command {
        Commands::Ask(cmd) => cmd.execute(&config).await,
        Commands::Shell(cmd) => cmd.execute(&config).await,
        Commands::Search(cmd) => cmd.execute(&config).await,
        Commands::BatchSearch(cmd) => cmd.execute(&config).await,
        Commands::Status(cmd) => cmd.execute(&config).await,
    };

    match &result {
        Ok(_) => tracing::info!("Command completed successfully"),
        Err(e) => tracing::error!("Command failed: {}", e),
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_ask_with_globals() {
        let cli = Cli::try_parse_from([
            "lexask",
            "--server",
            "http://law.internal:9000",
            "--stale",
            "render",
            "ask",
            "--compare",
            "什么是民事诉讼？",
        ])
        .unwrap();

        assert_eq!(cli.server.as_deref(), Some("http://law.internal:9000"));
        assert_eq!(cli.stale, Some(StaleResponses::Render));
        match cli.command {
            Commands::Ask(cmd) => {
                assert_eq!(cmd.question, "什么是民事诉讼？");
                assert!(cmd.compare);
                assert!(!cmd.json);
            }
            other => panic!("Expected ask, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_stale_rejects_unknown() {
        assert!(parse_stale("sometimes").is_err());
        assert!(Cli::try_parse_from(["lexask", "--stale", "maybe", "status"]).is_err());
    }

    #[test]
    fn test_batch_search_requires_queries() {
        assert!(Cli::try_parse_from(["lexask", "batch-search"]).is_err());
        let cli = Cli::try_parse_from(["lexask", "batch-search", "a", "b", "-k", "3"]).unwrap();
        match cli.command {
            Commands::BatchSearch(cmd) => {
                assert_eq!(cmd.queries, vec!["a", "b"]);
                assert_eq!(cmd.top_k, Some(3));
            }
            other => panic!("Expected batch-search, got {:?}", other),
        }
    }
}
