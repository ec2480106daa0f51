//! Configuration management for the CLI.

use crate::cli::Cli;
use crate::error::{CliError, Result};
use configgen_extractor::GenerationConfig;
use configgen_llm::aiyou::{DEFAULT_BASE_URL, DEFAULT_CONNECT_TIMEOUT_SECS};
use configgen_llm::AiYouConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// Configuration file contents.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Account credentials
    #[serde(default)]
    pub credentials: Credentials,

    /// Completion service endpoint
    #[serde(default)]
    pub service: ServiceSettings,

    /// Sampling parameters
    #[serde(default)]
    pub generation: GenerationConfig,

    /// Display settings
    #[serde(default)]
    pub settings: DisplaySettings,
}

/// Account credentials.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Credentials {
    /// AI.YOU email
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// AI.YOU password
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    /// Assistant to route requests to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assistant_id: Option<String>,
}

/// Completion service endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceSettings {
    /// API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Connect timeout in seconds
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

/// Display settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,
}

impl Config {
    /// Get the default configuration file path.
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".configgen").join("config.toml"))
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, the default path is used if
    /// present and built-in defaults otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => {
                    debug!("No configuration file found, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            CliError::Config(format!("Failed to read config file {}: {}", path.display(), e))
        })?;
        let config: Config = toml::from_str(&contents)?;

        config
            .generation
            .validate()
            .map_err(|e| CliError::Config(format!("Invalid [generation] section: {}", e)))?;

        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self { color: true }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_connect_timeout_secs() -> u64 {
    DEFAULT_CONNECT_TIMEOUT_SECS
}

fn default_true() -> bool {
    true
}

/// Effective settings for one invocation.
///
/// Built once at startup from the config file and the command line; flags
/// and environment variables take precedence over the file.
#[derive(Debug, Clone)]
pub struct Settings {
    /// AI.YOU email
    pub email: Option<String>,

    /// AI.YOU password
    pub password: Option<String>,

    /// Assistant to route requests to
    pub assistant_id: Option<String>,

    /// Completion service endpoint
    pub service: ServiceSettings,

    /// Sampling parameters
    pub generation: GenerationConfig,

    /// Suppress status messages
    pub quiet: bool,

    /// Colored status messages
    pub color: bool,
}

impl Settings {
    /// Merge command-line values over the configuration file.
    pub fn resolve(cli: &Cli, config: Config) -> Self {
        Self {
            email: non_empty(cli.email.clone()).or(config.credentials.email),
            password: non_empty(cli.password.clone()).or(config.credentials.password),
            assistant_id: non_empty(cli.assistant.clone()).or(non_empty(config.credentials.assistant_id)),
            service: config.service,
            generation: config.generation,
            quiet: cli.quiet,
            color: !cli.no_color && config.settings.color,
        }
    }

    /// Client configuration for the completion service.
    ///
    /// Missing credentials are passed through as empty strings and rejected
    /// when the client is created.
    pub fn client_config(&self) -> AiYouConfig {
        AiYouConfig::new(
            self.email.clone().unwrap_or_default(),
            self.password.clone().unwrap_or_default(),
        )
        .with_base_url(self.service.base_url.clone())
        .with_connect_timeout(Duration::from_secs(self.service.connect_timeout_secs))
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
