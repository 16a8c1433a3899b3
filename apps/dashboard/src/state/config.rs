//! # Dashboard Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     SHELF_API_URL=http://catalog.local:3000/                           │
//! │     SHELF_API_TIMEOUT_SECS=5                                           │
//! │     SHELF_DEFAULT_FILTER=all                                           │
//! │     SHELF_LOG=debug                                                    │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/shelf/shelf.toml (Linux)                                 │
//! │     ~/Library/Application Support/com.shelf.shelf/shelf.toml (macOS)   │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     http://localhost:3000/, 10 s, filter "active"                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # shelf.toml
//! [api]
//! base_url = "http://localhost:3000/"
//! timeout_secs = 10
//!
//! [dashboard]
//! default_filter = "active"   # all | active | deactivated
//! log_filter = "info,shelf=debug"
//! ```

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use shelf_client::HttpApiConfig;
use shelf_core::BookFilter;
use tracing::{debug, info, warn};

use crate::error::{AppError, AppResult};

// =============================================================================
// API Settings
// =============================================================================

/// Where the catalog backend lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiSettings {
    /// Root of the REST API; `books` is joined beneath it.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout (seconds).
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:3000/".to_string()
}

fn default_timeout() -> u64 {
    10
}

impl Default for ApiSettings {
    fn default() -> Self {
        ApiSettings {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

// =============================================================================
// Dashboard Settings
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSettings {
    /// Filter selected when the dashboard first renders.
    #[serde(default)]
    pub default_filter: BookFilter,

    /// `EnvFilter` directives used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_log_filter() -> String {
    "info,shelf=debug".to_string()
}

impl Default for DashboardSettings {
    fn default() -> Self {
        DashboardSettings {
            default_filter: BookFilter::default(),
            log_filter: default_log_filter(),
        }
    }
}

// =============================================================================
// Dashboard Config
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub dashboard: DashboardSettings,
}

impl DashboardConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (shelf.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> AppResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading dashboard config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = Self::from_toml(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    pub fn from_toml(contents: &str) -> AppResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> AppResult<()> {
        if self.api.timeout_secs == 0 {
            return Err(AppError::InvalidConfig(
                "timeout_secs must be greater than 0".into(),
            ));
        }

        // Reuse the client's URL rules (http/https, parseable).
        self.http_config()?;

        Ok(())
    }

    /// Client settings derived from `[api]`.
    pub fn http_config(&self) -> AppResult<HttpApiConfig> {
        Ok(HttpApiConfig::new(
            &self.api.base_url,
            Duration::from_secs(self.api.timeout_secs),
        )?)
    }

    /// Applies `SHELF_*` overrides read through `lookup`.
    ///
    /// Unparseable numeric or filter values are logged and ignored.
    fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("SHELF_API_URL") {
            debug!(url = %url, "Overriding API URL from environment");
            self.api.base_url = url;
        }

        if let Some(timeout) = lookup("SHELF_API_TIMEOUT_SECS") {
            match timeout.parse::<u64>() {
                Ok(secs) => self.api.timeout_secs = secs,
                Err(_) => warn!(value = %timeout, "Ignoring invalid SHELF_API_TIMEOUT_SECS"),
            }
        }

        if let Some(filter) = lookup("SHELF_DEFAULT_FILTER") {
            match filter.parse::<BookFilter>() {
                Ok(parsed) => self.dashboard.default_filter = parsed,
                Err(e) => warn!(error = %e, "Ignoring invalid SHELF_DEFAULT_FILTER"),
            }
        }

        if let Some(log) = lookup("SHELF_LOG") {
            self.dashboard.log_filter = log;
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "shelf", "shelf")
            .map(|dirs| dirs.config_dir().join("shelf.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = DashboardConfig::default();
        assert_eq!(config.api.base_url, "http://localhost:3000/");
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.dashboard.default_filter, BookFilter::Active);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = DashboardConfig::from_toml(
            r#"
            [dashboard]
            default_filter = "deactivated"
            "#,
        )
        .unwrap();

        assert_eq!(config.dashboard.default_filter, BookFilter::Deactivated);
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.dashboard.log_filter, "info,shelf=debug");
    }

    #[test]
    fn test_bad_toml_is_parse_error() {
        let err = DashboardConfig::from_toml("[api]\ntimeout_secs = \"soon\"").unwrap_err();
        assert!(matches!(err, AppError::ConfigParse(_)));
    }

    #[test]
    fn test_config_validation() {
        let mut config = DashboardConfig::default();

        config.api.timeout_secs = 0;
        assert!(matches!(config.validate(), Err(AppError::InvalidConfig(_))));

        config.api.timeout_secs = 5;
        config.api.base_url = "ws://localhost:3000".to_string();
        assert!(matches!(config.validate(), Err(AppError::Client(_))));

        config.api.base_url = "https://catalog.example.com/api".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_overrides() {
        let mut config = DashboardConfig::default();
        config.apply_env_overrides(env(&[
            ("SHELF_API_URL", "http://10.0.0.2:8080/"),
            ("SHELF_API_TIMEOUT_SECS", "3"),
            ("SHELF_DEFAULT_FILTER", "All"),
            ("SHELF_LOG", "warn"),
        ]));

        assert_eq!(config.api.base_url, "http://10.0.0.2:8080/");
        assert_eq!(config.api.timeout_secs, 3);
        assert_eq!(config.dashboard.default_filter, BookFilter::All);
        assert_eq!(config.dashboard.log_filter, "warn");
    }

    #[test]
    fn test_invalid_env_values_are_ignored() {
        let mut config = DashboardConfig::default();
        config.apply_env_overrides(env(&[
            ("SHELF_API_TIMEOUT_SECS", "ten"),
            ("SHELF_DEFAULT_FILTER", "archived"),
        ]));

        assert_eq!(config, DashboardConfig::default());
    }

    #[test]
    fn test_toml_serialization() {
        let toml_str = toml::to_string_pretty(&DashboardConfig::default()).unwrap();
        assert!(toml_str.contains("[api]"));
        assert!(toml_str.contains("[dashboard]"));
        assert!(toml_str.contains("default_filter = \"active\""));
    }
}
