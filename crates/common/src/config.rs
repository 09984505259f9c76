//! Application configuration.

use serde::Deserialize;
use std::path::Path;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Server configuration.
    pub server: ServerConfig,
    /// Database configuration.
    pub database: DatabaseConfig,
    /// Photo storage configuration.
    #[serde(default)]
    pub storage: StorageConfig,
    /// Administrator authentication configuration.
    pub auth: AuthConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to bind to.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Public URL of this instance, used to build photo URLs.
    pub url: String,
}

/// Database connection configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// `PostgreSQL` connection URL.
    pub url: String,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Minimum number of connections in the pool.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

/// Photo storage backend selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StorageKind {
    /// Files written under `base_path`, served under `/uploads`.
    #[default]
    Local,
    /// Photos kept as base64 `data:` URLs in the photo row itself.
    Inline,
}

/// Photo storage configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Which backend stores uploaded photos.
    #[serde(default)]
    pub kind: StorageKind,
    /// Base directory for locally stored photos.
    #[serde(default = "default_storage_path")]
    pub base_path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            kind: StorageKind::Local,
            base_path: default_storage_path(),
        }
    }
}

/// Administrator authentication configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// HMAC secret for signing admin tokens.
    pub jwt_secret: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

const fn default_port() -> u16 {
    5000
}

const fn default_max_connections() -> u32 {
    100
}

const fn default_min_connections() -> u32 {
    5
}

fn default_storage_path() -> String {
    "./uploads".to_string()
}

impl Config {
    /// Load configuration from files and environment variables.
    ///
    /// Configuration is loaded in the following order:
    /// 1. `config/default.toml`
    /// 2. `config/{environment}.toml` (based on `LAPOR_ENV`)
    /// 3. Environment variables with `LAPOR` prefix
    pub fn load() -> Result<Self, config::ConfigError> {
        let env = std::env::var("LAPOR_ENV").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("LAPOR")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Load configuration from a specific file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .add_source(
                config::Environment::with_prefix("LAPOR")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_config_defaults() {
        let storage = StorageConfig::default();
        assert_eq!(storage.kind, StorageKind::Local);
        assert_eq!(storage.base_path, "./uploads");
    }

    #[test]
    fn test_deserialize_minimal_config() {
        let toml = r#"
            [server]
            url = "http://localhost:5000"

            [database]
            url = "postgres://localhost/lapor"

            [auth]
            jwt_secret = "test-secret"
        "#;

        let config: Config = config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.server.port, 5000);
        assert_eq!(config.database.max_connections, 100);
        assert_eq!(config.storage.kind, StorageKind::Local);
    }

    #[test]
    fn test_deserialize_inline_storage() {
        let toml = r#"
            [server]
            url = "http://localhost:5000"

            [database]
            url = "postgres://localhost/lapor"

            [storage]
            kind = "inline"

            [auth]
            jwt_secret = "test-secret"
        "#;

        let config: Config = config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.storage.kind, StorageKind::Inline);
    }
}
