//! Server configuration
//!
//! Loaded from TOML with environment variable overrides. Every field has a
//! default, so running without a config file is fine.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const CONFIG_FILE_NAME: &str = "focusfox.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server bind address (e.g., "127.0.0.1:8000")
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// CORS configuration
    #[serde(default)]
    pub cors: CorsConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Allowed origins; `"*"` allows any
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,

    /// Whether browsers may send credentials cross-origin
    #[serde(default = "default_allow_credentials")]
    pub allow_credentials: bool,

    /// Preflight cache lifetime in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_age: Option<u64>,
}

impl CorsConfig {
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|origin| origin == "*")
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            cors: CorsConfig::default(),
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: default_allowed_origins(),
            allow_credentials: default_allow_credentials(),
            max_age: None,
        }
    }
}

// Configuration error types
#[derive(Error, Diagnostic, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {}", .path.display())]
    #[diagnostic(
        code(focusfox::config::file_not_found),
        help("Check the --config path, or omit it to use the defaults")
    )]
    FileNotFound { path: PathBuf },

    #[error("Failed to read configuration file")]
    #[diagnostic(code(focusfox::config::read_failed))]
    ReadFailed {
        path: PathBuf,
        #[source]
        cause: std::io::Error,
    },

    #[error("Failed to parse configuration")]
    #[diagnostic(code(focusfox::config::parse_failed))]
    ParseFailed {
        path: PathBuf,
        #[source]
        cause: toml::de::Error,
    },

    #[error("Configuration validation failed: {}", summarize(.errors))]
    #[diagnostic(code(focusfox::config::validation_failed))]
    ValidationFailed { errors: Vec<ValidationError> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ")
}

impl ServerConfig {
    /// Load configuration from file with environment variable overrides
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let content =
            tokio::fs::read_to_string(path)
                .await
                .map_err(|e| ConfigError::ReadFailed {
                    path: path.to_path_buf(),
                    cause: e,
                })?;

        let mut config = Self::from_toml(&content).map_err(|e| ConfigError::ParseFailed {
            path: path.to_path_buf(),
            cause: e,
        })?;

        config.apply_env_overrides();
        config.validate()?;

        tracing::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load from the first default location that exists, falling back to
    /// built-in defaults when there is none
    pub async fn load_default() -> Result<Self, ConfigError> {
        for path in Self::search_paths() {
            if path.exists() {
                return Self::load(&path).await;
            }
        }

        tracing::debug!("No configuration file found, using defaults");
        let mut config = Self::default();
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![
            PathBuf::from(CONFIG_FILE_NAME),
            PathBuf::from("config").join(CONFIG_FILE_NAME),
        ];
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("focusfox").join(CONFIG_FILE_NAME));
        }
        paths
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&mut self) {
        if let Ok(addr) = std::env::var("FOCUSFOX_BIND_ADDRESS") {
            self.bind_address = addr;
        }

        if let Ok(origins) = std::env::var("FOCUSFOX_CORS_ORIGINS") {
            self.cors.allowed_origins = parse_origin_list(&origins);
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if self.bind_address.parse::<SocketAddr>().is_err() {
            errors.push(ValidationError {
                field: "bind_address".to_string(),
                message: format!("'{}' is not a valid socket address", self.bind_address),
            });
        }

        if self.cors.allowed_origins.is_empty() {
            errors.push(ValidationError {
                field: "cors.allowed_origins".to_string(),
                message: "At least one origin (or \"*\") must be allowed".to_string(),
            });
        }

        if !errors.is_empty() {
            return Err(ConfigError::ValidationFailed { errors });
        }

        Ok(())
    }
}

fn parse_origin_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(String::from)
        .collect()
}

// Default value functions
fn default_bind_address() -> String {
    "127.0.0.1:8000".to_string()
}

fn default_allowed_origins() -> Vec<String> {
    vec!["*".to_string()]
}

fn default_allow_credentials() -> bool {
    true
}
