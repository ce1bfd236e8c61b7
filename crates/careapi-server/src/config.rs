//! Server configuration.
//!
//! Configuration lives in `careapi.toml` (overridable via `--config` or the
//! `CAREAPI_CONFIG` environment variable) and deserializes into [`AppConfig`]
//! with per-field defaults, so an absent file yields a fully usable default
//! configuration.

use std::net::SocketAddr;

use careapi_graphql::GraphQLConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub graphql: GraphQLConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("server.port must be > 0".into());
        }
        if self.server.body_limit_bytes == 0 {
            return Err("server.body_limit_bytes must be > 0".into());
        }
        let lvl = self.logging.level.to_ascii_lowercase();
        let valid_levels = ["trace", "debug", "info", "warn", "error", "off"];
        if !valid_levels.contains(&lvl.as_str()) {
            return Err(format!("logging.level must be one of {valid_levels:?}"));
        }
        if self.storage.backend != "memory" {
            return Err(format!(
                "storage.backend '{}' is not supported (only 'memory')",
                self.storage.backend
            ));
        }
        self.graphql
            .validate()
            .map_err(|e| format!("graphql config error: {e}"))?;
        Ok(())
    }

    pub fn addr(&self) -> SocketAddr {
        use std::net::{IpAddr, Ipv4Addr};
        let host: IpAddr = self
            .server
            .host
            .parse()
            .unwrap_or(IpAddr::V4(Ipv4Addr::new(0, 0, 0, 0)));
        SocketAddr::from((host, self.server.port))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Maximum accepted request body size in bytes.
    #[serde(default = "default_body_limit_bytes")]
    pub body_limit_bytes: usize,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_body_limit_bytes() -> usize {
    1_048_576
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            body_limit_bytes: default_body_limit_bytes(),
        }
    }
}

/// Storage backend selection. Only the in-memory backend ships today; the
/// field exists so a database backend can be wired in without a config
/// format change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_backend")]
    pub backend: String,
}

fn default_backend() -> String {
    "memory".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

pub mod loader {
    use super::AppConfig;
    use std::path::Path;

    /// Loads configuration from the given path.
    ///
    /// A missing file at the default path yields defaults; an explicitly
    /// requested file that cannot be read is an error. The parsed
    /// configuration is always validated.
    pub fn load_config(path: Option<&str>) -> Result<AppConfig, String> {
        let path = path.unwrap_or("careapi.toml");

        let cfg = if Path::new(path).exists() {
            let raw = std::fs::read_to_string(path)
                .map_err(|e| format!("failed to read {path}: {e}"))?;
            toml::from_str::<AppConfig>(&raw).map_err(|e| format!("failed to parse {path}: {e}"))?
        } else {
            AppConfig::default()
        };

        cfg.validate()?;
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let cfg = AppConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.storage.backend, "memory");
        assert_eq!(cfg.logging.level, "info");
    }

    #[test]
    fn test_addr_parses_host() {
        let mut cfg = AppConfig::default();
        cfg.server.host = "127.0.0.1".to_string();
        cfg.server.port = 4321;
        assert_eq!(cfg.addr().to_string(), "127.0.0.1:4321");
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut cfg = AppConfig::default();
        cfg.server.port = 0;
        assert!(cfg.validate().is_err());

        let mut cfg = AppConfig::default();
        cfg.logging.level = "loud".to_string();
        assert!(cfg.validate().is_err());

        let mut cfg = AppConfig::default();
        cfg.storage.backend = "postgres".to_string();
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_load_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[server]
host = "127.0.0.1"
port = 9090

[logging]
level = "debug"

[graphql]
max_depth = 5
"#
        )
        .unwrap();

        let cfg = loader::load_config(Some(file.path().to_str().unwrap())).unwrap();
        assert_eq!(cfg.server.port, 9090);
        assert_eq!(cfg.logging.level, "debug");
        assert_eq!(cfg.graphql.max_depth, 5);
        // Unspecified sections keep their defaults
        assert_eq!(cfg.storage.backend, "memory");
    }

    #[test]
    fn test_load_config_missing_default_path_yields_defaults() {
        let cfg = loader::load_config(Some("does-not-exist.toml"));
        // A nonexistent path falls back to defaults rather than failing
        assert!(cfg.is_ok());
    }

    #[test]
    fn test_load_config_rejects_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nport = 0").unwrap();

        let result = loader::load_config(Some(file.path().to_str().unwrap()));
        assert!(result.is_err());
    }
}
