//! Service settings: bind address and cost-book location.

use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{ConfigError, ConfigResult};

/// Environment variable naming the service configuration file.
pub const CONFIG_PATH_ENV: &str = "LCCA_CONFIG";
/// Environment variable overriding the cost-book path.
pub const COST_BOOK_ENV: &str = "LCCA_COST_BOOK";
/// Environment variable overriding the listen port.
pub const PORT_ENV: &str = "LCCA_PORT";

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_cost_book_path() -> PathBuf {
    PathBuf::from("config/cost_book.yaml")
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Bind host.
    #[serde(default = "default_host")]
    pub host: String,
    /// Bind port.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Top-level service configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// HTTP listener settings.
    #[serde(default)]
    pub server: ServerSettings,
    /// Path to the cost-book YAML document.
    #[serde(default = "default_cost_book_path")]
    pub cost_book_path: PathBuf,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            server: ServerSettings::default(),
            cost_book_path: default_cost_book_path(),
        }
    }
}

impl ServiceConfig {
    /// Parse a service configuration from YAML text.
    pub fn from_yaml_str(yaml: &str) -> ConfigResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Apply environment variable overrides on top of the loaded values.
    #[must_use]
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(path) = env::var(COST_BOOK_ENV) {
            debug!(path = %path, "Cost book path overridden from environment");
            self.cost_book_path = PathBuf::from(path);
        }
        if let Some(port) = env::var(PORT_ENV).ok().and_then(|p| p.parse().ok()) {
            debug!(port, "Port overridden from environment");
            self.server.port = port;
        }
        self
    }
}

/// Load the service configuration.
///
/// Resolution order: the explicit `path` argument, then the `LCCA_CONFIG`
/// environment variable, then built-in defaults when neither names a file.
/// An explicitly named file that cannot be read is an error; the built-in
/// default is only used when no file was requested.
pub async fn load_settings(path: Option<&Path>) -> ConfigResult<ServiceConfig> {
    let env_path = env::var(CONFIG_PATH_ENV).ok().map(PathBuf::from);
    let resolved = path.map(Path::to_path_buf).or(env_path);

    let config = match resolved {
        Some(p) => {
            let yaml = tokio::fs::read_to_string(&p)
                .await
                .map_err(|source| ConfigError::Io {
                    path: p.display().to_string(),
                    source,
                })?;
            info!(path = %p.display(), "Service configuration loaded");
            ServiceConfig::from_yaml_str(&yaml)?
        }
        None => {
            info!("No configuration file given, using defaults");
            ServiceConfig::default()
        }
    };

    Ok(config.with_env_overrides())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ServiceConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.cost_book_path, PathBuf::from("config/cost_book.yaml"));
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config = ServiceConfig::from_yaml_str("server:\n  port: 9000\n").unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
    }

    #[tokio::test]
    async fn test_load_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"server:\n  host: 127.0.0.1\n  port: 9100\ncost_book_path: /etc/lcca/book.yaml\n")
            .unwrap();

        let config = load_settings(Some(file.path())).await.unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9100);
        assert_eq!(config.cost_book_path, PathBuf::from("/etc/lcca/book.yaml"));
    }

    #[tokio::test]
    async fn test_load_missing_explicit_file_fails() {
        let err = load_settings(Some(Path::new("/nonexistent/lcca.yaml")))
            .await
            .unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
