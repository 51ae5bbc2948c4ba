//! Environment configuration loader
//!
//! Reads the fixed set of settings the announcer needs. Required
//! values fail loudly before any network call is made; the two
//! Asterisk connection settings have documented defaults.

use domain::NodeId;
use std::env;
use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is unset
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    /// An environment variable is set but unusable
    #[error("Invalid value for {name}: {value:?} ({reason})")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

/// Runtime configuration, resolved once at startup
#[derive(Debug, Clone)]
pub struct Config {
    /// Weather Underground API key (`WU_API_KEY`)
    pub wu_api_key: String,

    /// Station to read (`WU_STATION_ID`)
    pub wu_station_id: String,

    /// Asterisk manager host (`ASTERISK_HOST`, default `localhost`)
    pub asterisk_host: String,

    /// Asterisk manager port (`ASTERISK_PORT`, default `5038`)
    pub asterisk_port: u16,

    /// Manager username (`ASTERISK_USER`)
    pub asterisk_user: String,

    /// Manager secret (`ASTERISK_SECRET`)
    pub asterisk_secret: String,

    /// Node to announce on (`ALLSTAR_NODE`)
    pub allstar_node: NodeId,
}

impl Config {
    /// Load configuration from the process environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a required variable is missing or a
    /// value cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary lookup function
    ///
    /// `from_env` delegates here; tests supply a map instead of
    /// touching the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| lookup(name).ok_or(ConfigError::Missing(name));

        let asterisk_host = lookup("ASTERISK_HOST").unwrap_or_else(|| "localhost".to_string());

        let asterisk_port = match lookup("ASTERISK_PORT") {
            None => 5038,
            Some(value) => value.parse().map_err(|e| ConfigError::Invalid {
                name: "ASTERISK_PORT",
                value,
                reason: format!("not a port number: {e}"),
            })?,
        };

        let node_value = required("ALLSTAR_NODE")?;
        let allstar_node = NodeId::new(node_value.clone()).map_err(|e| ConfigError::Invalid {
            name: "ALLSTAR_NODE",
            value: node_value,
            reason: e.to_string(),
        })?;

        Ok(Self {
            wu_api_key: required("WU_API_KEY")?,
            wu_station_id: required("WU_STATION_ID")?,
            asterisk_host,
            asterisk_port,
            asterisk_user: required("ASTERISK_USER")?,
            asterisk_secret: required("ASTERISK_SECRET")?,
            allstar_node,
        })
    }
}
