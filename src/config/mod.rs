//! Configuration loading and management
//!
//! Configuration comes from an optional YAML file, then environment
//! variables override individual values:
//!
//! | variable           | overrides          |
//! |--------------------|--------------------|
//! | `CINEMA_CONFIG`    | path of the file   |
//! | `CINEMA_HOST`      | `server.host`      |
//! | `CINEMA_PORT`      | `server.port`      |
//! | `MONGODB_URI`      | `storage.uri` (and selects the `mongodb` backend) |
//! | `MONGODB_DATABASE` | `storage.database` |

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default location of the configuration file
pub const DEFAULT_CONFIG_PATH: &str = "config/cinema.yaml";

/// HTTP listener configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,

    /// Port to bind
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 4000,
        }
    }
}

/// Which store backs the movie and director collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageBackend {
    /// Process-local store, lost on restart
    #[default]
    InMemory,
    /// MongoDB, one collection per entity type
    Mongodb,
}

/// Store configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub backend: StorageBackend,

    /// MongoDB connection string
    pub uri: String,

    /// MongoDB database name
    pub database: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::InMemory,
            uri: "mongodb://localhost:27017".to_string(),
            database: "cinema".to_string(),
        }
    }
}

/// GraphQL endpoint options
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphQLConfig {
    /// Serve the Playground UI on `GET /graphql`
    pub playground: bool,
}

/// Complete application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub graphql: GraphQLConfig,
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Load configuration from the file named by `CINEMA_CONFIG` (or the
    /// default path), then apply environment overrides.
    ///
    /// A missing default file is not an error; defaults are used instead.
    pub fn load() -> Result<Self> {
        Self::load_with(|key| std::env::var(key).ok())
    }

    /// Same as [`load`](Self::load) with an explicit variable lookup
    pub fn load_with(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = match lookup("CINEMA_CONFIG") {
            Some(path) => Self::from_yaml_file(path)?,
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                Self::from_yaml_file(DEFAULT_CONFIG_PATH)?
            }
            None => Self::default(),
        };

        config.apply_env_overrides(lookup)?;
        Ok(config)
    }

    /// Override individual values from environment variables
    pub fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(host) = lookup("CINEMA_HOST") {
            self.server.host = host;
        }

        if let Some(port) = lookup("CINEMA_PORT") {
            self.server.port = port
                .parse()
                .with_context(|| format!("CINEMA_PORT is not a valid port: {}", port))?;
        }

        if let Some(uri) = lookup("MONGODB_URI") {
            self.storage.uri = uri;
            self.storage.backend = StorageBackend::Mongodb;
        }

        if let Some(database) = lookup("MONGODB_DATABASE") {
            self.storage.database = database;
        }

        Ok(())
    }

    /// Address the HTTP listener binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
