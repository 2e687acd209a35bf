//! Configuration loading and representation.
//!
//! Read once at startup from the process environment.

use std::net::SocketAddr;

use thiserror::Error;

use crate::repository::SpecsDecodePolicy;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{var} has an invalid value: {value:?}")]
    Invalid { var: &'static str, value: String },
}

/// Process configuration.
#[derive(Clone)]
pub struct AppConfig {
    /// Postgres connection string (`DATABASE_URL`).
    pub database_url: String,
    /// Listen port (`PORT`).
    pub port: u16,
    /// Pool size (`DATABASE_MAX_CONNECTIONS`).
    pub max_connections: u32,
    /// Handling of undecodable `specs` documents (`SPECS_DECODE`).
    pub specs_decode: SpecsDecodePolicy,
    /// Whether 500 responses carry the raw storage error (`EXPOSE_STORAGE_ERRORS`).
    pub expose_storage_errors: bool,
}

impl AppConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration from an arbitrary variable source.
    ///
    /// Unset and empty variables are treated the same way.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let database_url = get("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let port = match get("PORT") {
            Some(v) => parse_var("PORT", v)?,
            None => DEFAULT_PORT,
        };

        let max_connections = match get("DATABASE_MAX_CONNECTIONS") {
            Some(v) => match parse_var("DATABASE_MAX_CONNECTIONS", v.clone())? {
                0 => {
                    return Err(ConfigError::Invalid {
                        var: "DATABASE_MAX_CONNECTIONS",
                        value: v,
                    });
                }
                n => n,
            },
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let specs_decode = match get("SPECS_DECODE") {
            Some(v) => SpecsDecodePolicy::parse(&v).ok_or(ConfigError::Invalid {
                var: "SPECS_DECODE",
                value: v,
            })?,
            None => SpecsDecodePolicy::default(),
        };

        let expose_storage_errors = match get("EXPOSE_STORAGE_ERRORS") {
            Some(v) => parse_bool("EXPOSE_STORAGE_ERRORS", v)?,
            None => true,
        };

        Ok(Self {
            database_url,
            port,
            max_connections,
            specs_decode,
            expose_storage_errors,
        })
    }

    /// Address the HTTP listener binds to (all interfaces).
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

// The connection string usually embeds credentials.
impl core::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AppConfig")
            .field("database_url", &"<redacted>")
            .field("port", &self.port)
            .field("max_connections", &self.max_connections)
            .field("specs_decode", &self.specs_decode)
            .field("expose_storage_errors", &self.expose_storage_errors)
            .finish()
    }
}

fn parse_var<T: core::str::FromStr>(var: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid { var, value })
}

fn parse_bool(var: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::Invalid { var, value }),
    }
}
