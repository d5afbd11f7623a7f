//! Server configuration
//!
//! Sources, lowest precedence first: built-in defaults, a TOML file
//! (`--config` or `./config.toml`), then `LANGO_`-prefixed environment
//! variables with `__` between section and key, e.g.
//! `LANGO_STORAGE__SUMMARY_BACKEND=database`.

use crate::error::{Result, ServerError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    pub server: ServerSettings,
    pub storage: StorageSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StorageSettings {
    /// SQLite URL; profiles always live here
    pub database_url: String,

    pub summary_backend: SummaryBackend,

    /// Upper bound for the memory backend
    pub summary_capacity: usize,

    /// Expiry applied to summaries imported through the CLI
    pub summary_ttl_hours: Option<u64>,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            database_url: "sqlite://./data/lango.db".to_string(),
            summary_backend: SummaryBackend::default(),
            summary_capacity: lango_storage::memory::DEFAULT_CAPACITY,
            summary_ttl_hours: None,
        }
    }
}

/// Where summaries live
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryBackend {
    /// The `summaries` table in the SQLite database, shared with the CLI
    #[default]
    Database,
    /// Bounded, process-local, empty at startup and lost on restart
    Memory,
}

impl ServerConfig {
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load from `path`, or from `./config.toml` when it exists, then apply
    /// environment overrides
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder();

        let file = match path {
            Some(path) => Some(path.to_path_buf()),
            None => Some(PathBuf::from(DEFAULT_CONFIG_FILE)).filter(|p| p.exists()),
        };
        if let Some(file) = file {
            builder = builder.add_source(config::File::from(file));
        }

        builder
            .add_source(
                config::Environment::with_prefix("LANGO")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .and_then(|settings| settings.try_deserialize())
            .map_err(|e| ServerError::Config(e.to_string()))
    }

    pub fn validate(&self) -> Result<()> {
        let storage = &self.storage;

        if storage.database_url.trim().is_empty() {
            return Err(ServerError::Config(
                "storage.database_url must not be empty".to_string(),
            ));
        }
        if storage.summary_capacity == 0 {
            return Err(ServerError::Config(
                "storage.summary_capacity must be at least 1".to_string(),
            ));
        }
        if storage.summary_ttl_hours == Some(0) {
            return Err(ServerError::Config(
                "storage.summary_ttl_hours must be at least 1 when set".to_string(),
            ));
        }

        Ok(())
    }

    /// Whether summaries written to the database are visible to the server
    pub fn serves_database_summaries(&self) -> bool {
        self.storage.summary_backend == SummaryBackend::Database
    }

    /// Expiry for newly imported summaries
    pub fn summary_ttl(&self) -> Option<chrono::Duration> {
        self.storage
            .summary_ttl_hours
            .and_then(|hours| i64::try_from(hours).ok())
            .map(chrono::Duration::hours)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_are_valid() {
        let config = ServerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.storage.summary_backend, SummaryBackend::Database);
        assert_eq!(config.storage.summary_capacity, 50);
        assert!(config.summary_ttl().is_none());
    }

    #[test]
    fn test_only_database_backend_serves_imported_summaries() {
        let mut config = ServerConfig::default();
        assert!(config.serves_database_summaries());

        config.storage.summary_backend = SummaryBackend::Memory;
        assert!(!config.serves_database_summaries());
    }

    #[test]
    fn test_zero_capacity_is_rejected() {
        let mut config = ServerConfig::default();
        config.storage.summary_capacity = 0;
        assert!(matches!(config.validate(), Err(ServerError::Config(_))));
    }

    #[test]
    fn test_empty_database_url_is_rejected() {
        let mut config = ServerConfig::default();
        config.storage.database_url = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_ttl_is_rejected() {
        let mut config = ServerConfig::default();
        config.storage.summary_ttl_hours = Some(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[server]\nport = 9000\n\n[storage]\nsummary_backend = \"memory\"\nsummary_ttl_hours = 24"
        )
        .unwrap();

        let config = ServerConfig::load_from(Some(file.path())).unwrap();

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.storage.summary_backend, SummaryBackend::Memory);
        assert_eq!(config.storage.summary_capacity, 50);
        assert_eq!(config.summary_ttl(), Some(chrono::Duration::hours(24)));
    }
}
