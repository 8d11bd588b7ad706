//! Configuration management for lexask.
//!
//! This module handles loading and merging configuration from multiple sources:
//! - Defaults
//! - Config file (.lexask/config.yaml)
//! - Environment variables
//! - Command-line flags
//!
//! Later sources override earlier ones.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

/// Default address of the question-answering service.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:8000";

/// What to do with a response whose request is no longer the latest one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StaleResponses {
    /// Only the most recently issued submission may render.
    #[default]
    Discard,
    /// Every response renders when it arrives, in arrival order.
    Render,
}

impl StaleResponses {
    /// Parse a policy name as used in config files and flags.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "discard" | "latest" => Some(Self::Discard),
            "render" | "all" => Some(Self::Render),
            _ => None,
        }
    }
}

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory holding .lexask/
    pub workspace: PathBuf,

    /// Optional config file path
    pub config_file: Option<PathBuf>,

    /// Base URL of the question-answering service
    pub server_url: String,

    /// Request timeout in seconds; `None` waits indefinitely
    pub timeout_secs: Option<u64>,

    /// Initial state of the compare toggle
    pub compare: bool,

    /// Handling of out-of-order responses
    pub stale_responses: StaleResponses,

    /// Log level override
    pub log_level: Option<String>,

    /// Verbose mode (enables debug logging)
    pub verbose: bool,

    /// Disable colored output
    pub no_color: bool,
}

/// Full configuration file structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ConfigFile {
    server: Option<ServerSection>,
    ui: Option<UiSection>,
    logging: Option<LoggingSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ServerSection {
    url: Option<String>,
    #[serde(rename = "timeoutSecs")]
    timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct UiSection {
    compare: Option<bool>,
    #[serde(rename = "staleResponses")]
    stale_responses: Option<StaleResponses>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct LoggingSection {
    level: Option<String>,
    color: Option<bool>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            workspace: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            config_file: None,
            server_url: DEFAULT_SERVER_URL.to_string(),
            timeout_secs: None,
            compare: false,
            stale_responses: StaleResponses::default(),
            log_level: None,
            verbose: false,
            no_color: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from the config file, environment variables and defaults.
    ///
    /// Environment variables:
    /// - `LEXASK_WORKSPACE`: Override workspace path
    /// - `LEXASK_CONFIG`: Path to config file
    /// - `LEXASK_SERVER`: Service base URL
    /// - `LEXASK_TIMEOUT`: Request timeout in seconds
    /// - `RUST_LOG`: Log level
    /// - `NO_COLOR`: Disable colored output
    ///
    /// # Example
    /// ```no_run
    /// use lexask_core::config::AppConfig;
    ///
    /// let config = AppConfig::load().expect("Failed to load config");
    /// println!("Server: {}", config.server_url);
    /// ```
    pub fn load() -> AppResult<Self> {
        Self::load_with(None, None)
    }

    /// Like [`AppConfig::load`], with an explicit workspace and config file
    /// taking precedence over `LEXASK_WORKSPACE` and `LEXASK_CONFIG`.
    pub fn load_with(workspace: Option<PathBuf>, config_file: Option<PathBuf>) -> AppResult<Self> {
        let mut config = Self::default();

        let workspace =
            workspace.or_else(|| std::env::var("LEXASK_WORKSPACE").ok().map(PathBuf::from));
        if let Some(workspace) = workspace {
            config.workspace = workspace;
        }

        config.config_file =
            config_file.or_else(|| std::env::var("LEXASK_CONFIG").ok().map(PathBuf::from));

        if !config.workspace.exists() {
            return Err(AppError::Config(format!(
                "Workspace directory does not exist: {:?}",
                config.workspace
            )));
        }

        let config_path = config
            .config_file
            .clone()
            .unwrap_or_else(|| config.default_config_path());

        if config_path.exists() {
            config = config.merge_yaml(&config_path)?;
        } else if config.config_file.is_some() {
            return Err(AppError::Config(format!(
                "Config file does not exist: {:?}",
                config_path
            )));
        }

        // Environment variables override YAML config
        if let Ok(server) = std::env::var("LEXASK_SERVER") {
            config.server_url = server;
        }

        if let Ok(timeout) = std::env::var("LEXASK_TIMEOUT") {
            config.timeout_secs = Some(timeout.trim().parse().map_err(|e| {
                AppError::Config(format!("Invalid LEXASK_TIMEOUT '{}': {}", timeout, e))
            })?);
        }

        if let Ok(level) = std::env::var("RUST_LOG") {
            config.log_level = Some(level);
        }

        if std::env::var("NO_COLOR").is_ok() {
            config.no_color = true;
        }

        Ok(config)
    }

    /// Path of the workspace-local config file.
    pub fn default_config_path(&self) -> PathBuf {
        self.workspace.join(".lexask").join("config.yaml")
    }

    /// Merge a YAML configuration file into this config.
    fn merge_yaml(&self, path: &Path) -> AppResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;

        let config_file: ConfigFile = serde_yaml::from_str(&contents).map_err(|e| {
            AppError::Config(format!("Failed to parse config file {:?}: {}", path, e))
        })?;

        let mut result = self.clone();

        if let Some(server) = config_file.server {
            if let Some(url) = server.url {
                result.server_url = url;
            }
            if server.timeout_secs.is_some() {
                result.timeout_secs = server.timeout_secs;
            }
        }

        if let Some(ui) = config_file.ui {
            if let Some(compare) = ui.compare {
                result.compare = compare;
            }
            if let Some(policy) = ui.stale_responses {
                result.stale_responses = policy;
            }
        }

        if let Some(logging) = config_file.logging {
            if let Some(level) = logging.level {
                result.log_level = Some(level);
            }
            if let Some(color) = logging.color {
                result.no_color = !color;
            }
        }

        tracing::debug!("Merged config file {:?}", path);
        Ok(result)
    }

    /// Apply CLI overrides to the configuration.
    ///
    /// Flags take precedence over environment variables and the config file.
    #[allow(clippy::too_many_arguments)]
    pub fn with_overrides(
        mut self,
        server_url: Option<String>,
        timeout_secs: Option<u64>,
        compare: bool,
        stale_responses: Option<StaleResponses>,
        log_level: Option<String>,
        verbose: bool,
        no_color: bool,
    ) -> Self {
        if let Some(server_url) = server_url {
            self.server_url = server_url;
        }

        if timeout_secs.is_some() {
            self.timeout_secs = timeout_secs;
        }

        if compare {
            self.compare = true;
        }

        if let Some(policy) = stale_responses {
            self.stale_responses = policy;
        }

        if let Some(log_level) = log_level {
            self.log_level = Some(log_level);
        }

        if verbose {
            self.verbose = true;
            // Verbose mode implies debug logging
            if self.log_level.is_none() {
                self.log_level = Some("debug".to_string());
            }
        }

        if no_color {
            self.no_color = true;
        }

        self
    }

    /// Validate the final configuration.
    pub fn validate(&self) -> AppResult<()> {
        let url = self.server_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(AppError::Config(format!(
                "Server URL must start with http:// or https://: {}",
                self.server_url
            )));
        }

        if self.timeout_secs == Some(0) {
            return Err(AppError::Config(
                "Timeout must be at least one second".to_string(),
            ));
        }

        Ok(())
    }
}
