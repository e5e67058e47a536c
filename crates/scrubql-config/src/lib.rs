use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Simple configuration for scrubql
///
/// Constructed once at process start and passed by reference; nothing here
/// is reconfigurable at runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_placeholder")]
    pub placeholder: String,

    #[serde(default)]
    pub graphql: GraphqlConfig,

    #[serde(default)]
    pub params: ParamsConfig,

    #[serde(default)]
    pub filter: FilterConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphqlConfig {
    #[serde(default = "default_filtered_args")]
    pub filtered_args: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParamsConfig {
    #[serde(default = "default_filtered_params")]
    pub filtered: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterConfig {
    #[serde(default = "default_query_params")]
    pub query_params: Vec<String>,

    #[serde(default = "default_scan_values")]
    pub scan_values: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            placeholder: default_placeholder(),
            graphql: GraphqlConfig::default(),
            params: ParamsConfig::default(),
            filter: FilterConfig::default(),
        }
    }
}

impl Default for GraphqlConfig {
    fn default() -> Self {
        Self {
            filtered_args: default_filtered_args(),
        }
    }
}

impl Default for ParamsConfig {
    fn default() -> Self {
        Self {
            filtered: default_filtered_params(),
        }
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            query_params: default_query_params(),
            scan_values: default_scan_values(),
        }
    }
}

fn default_placeholder() -> String {
    "[FILTERED]".to_string()
}

fn default_filtered_args() -> Vec<String> {
    vec![
        "password".to_string(),
        "passwordConfirmation".to_string(),
        "currentPassword".to_string(),
        "newPassword".to_string(),
        "token".to_string(),
        "secret".to_string(),
        "apiKey".to_string(),
        "creditCard".to_string(),
        "ssn".to_string(),
    ]
}

fn default_filtered_params() -> Vec<String> {
    vec![
        "password".to_string(),
        "password_confirmation".to_string(),
        "token".to_string(),
        "secret".to_string(),
        "api_key".to_string(),
        "credit_card".to_string(),
        "ssn".to_string(),
    ]
}

fn default_query_params() -> Vec<String> {
    vec!["query".to_string()]
}

fn default_scan_values() -> bool {
    true
}

impl Config {
    /// Load config from default location or create default if not found
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::config_path();

        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            // Create default config file
            let config = Config::default();
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let content = toml::to_string_pretty(&config)?;
            std::fs::write(&path, content)?;
            Ok(config)
        }
    }

    /// Get config file path
    pub fn config_path() -> PathBuf {
        if let Some(dirs) = directories::ProjectDirs::from("com", "scrubql", "scrubql") {
            dirs.config_dir().join("config.toml")
        } else {
            PathBuf::from("~/.scrubql/config.toml")
        }
    }
}
