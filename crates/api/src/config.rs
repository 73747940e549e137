//! Application configuration loaded from environment variables.

use std::time::Duration;

use document_store::{Filter, MongoConfig};
use thiserror::Error;

use crate::gate::GateKey;
use crate::state::FixedQuery;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set to a non-empty value")]
    Missing(&'static str),
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Server configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `HOST` — bind address (default: `"0.0.0.0"`)
/// - `PORT` — listen port (default: `8080`)
/// - `RUST_LOG` — tracing filter directive (default: `"info"`)
/// - `LOG_FORMAT` — `text` or `json` (default: `text`)
/// - `MONGODB_URI` — connection string (default: `"mongodb://localhost:27017"`)
/// - `MONGODB_DATABASE` — database name (default: `"magics"`)
/// - `MONGODB_COLLECTION` — collection queried by `/query` (default: `"volunteers"`)
/// - `MONGODB_SERVER_SELECTION_TIMEOUT_MS` — driver server-selection timeout (default: `5000`)
/// - `QUERY_FIELD` / `QUERY_VALUE` — equality filter for `/query`
///   (default: `email` = `"mye13@ivc.edu"`)
/// - `WORKER_GATE_KEY` — the gate secret (required)
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub log_format: LogFormat,
    pub mongo: MongoConfig,
    pub collection: String,
    pub query_field: String,
    pub query_value: String,
    pub gate_key: GateKey,
}

impl Config {
    /// Loads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads configuration through `lookup`, falling back to defaults for
    /// everything except the gate key.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str, default: &str| lookup(name).unwrap_or_else(|| default.to_string());

        let gate_key = lookup("WORKER_GATE_KEY")
            .and_then(GateKey::new)
            .ok_or(ConfigError::Missing("WORKER_GATE_KEY"))?;

        let server_selection_timeout = lookup("MONGODB_SERVER_SELECTION_TIMEOUT_MS")
            .and_then(|ms| ms.parse().ok())
            .map(Duration::from_millis)
            .unwrap_or(Duration::from_secs(5));

        let mongo = MongoConfig::new(
            var("MONGODB_URI", "mongodb://localhost:27017"),
            var("MONGODB_DATABASE", "magics"),
        )
        .with_server_selection_timeout(server_selection_timeout)
        .with_app_name("magics-api");

        Ok(Self {
            host: var("HOST", "0.0.0.0"),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            log_level: var("RUST_LOG", "info"),
            log_format: match lookup("LOG_FORMAT").as_deref() {
                Some("json") => LogFormat::Json,
                _ => LogFormat::Text,
            },
            mongo,
            collection: var("MONGODB_COLLECTION", "volunteers"),
            query_field: var("QUERY_FIELD", "email"),
            query_value: var("QUERY_VALUE", "mye13@ivc.edu"),
            gate_key,
        })
    }

    /// Returns the `"host:port"` bind address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// The single-document lookup served by the query routes.
    pub fn fixed_query(&self) -> FixedQuery {
        FixedQuery {
            collection: self.collection.clone(),
            filter: Filter::eq(self.query_field.clone(), self.query_value.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_default_values() {
        let config = load(&[("WORKER_GATE_KEY", "k")]).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_format, LogFormat::Text);
        assert_eq!(config.mongo.uri, "mongodb://localhost:27017");
        assert_eq!(config.mongo.database, "magics");
        assert_eq!(config.mongo.server_selection_timeout, Duration::from_secs(5));
        assert_eq!(config.collection, "volunteers");
        assert!(config.gate_key.matches(b"k"));
    }

    #[test]
    fn test_gate_key_is_required() {
        assert!(matches!(
            load(&[]),
            Err(ConfigError::Missing("WORKER_GATE_KEY"))
        ));
        assert!(matches!(
            load(&[("WORKER_GATE_KEY", "")]),
            Err(ConfigError::Missing("WORKER_GATE_KEY"))
        ));
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("WORKER_GATE_KEY", "k"),
            ("HOST", "127.0.0.1"),
            ("PORT", "9000"),
            ("LOG_FORMAT", "json"),
            ("MONGODB_URI", "mongodb://db:27017"),
            ("MONGODB_DATABASE", "staging"),
            ("MONGODB_COLLECTION", "staff"),
            ("MONGODB_SERVER_SELECTION_TIMEOUT_MS", "250"),
        ])
        .unwrap();
        assert_eq!(config.addr(), "127.0.0.1:9000");
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.mongo.uri, "mongodb://db:27017");
        assert_eq!(config.mongo.database, "staging");
        assert_eq!(config.collection, "staff");
        assert_eq!(
            config.mongo.server_selection_timeout,
            Duration::from_millis(250)
        );
    }

    #[test]
    fn test_unparsable_port_falls_back() {
        let config = load(&[("WORKER_GATE_KEY", "k"), ("PORT", "http")]).unwrap();
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_fixed_query() {
        let config = load(&[
            ("WORKER_GATE_KEY", "k"),
            ("QUERY_FIELD", "name"),
            ("QUERY_VALUE", "Mia"),
        ])
        .unwrap();
        let query = config.fixed_query();
        assert_eq!(query.collection, "volunteers");
        assert_eq!(query.filter, Filter::eq("name", "Mia"));
    }
}
