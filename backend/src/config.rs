//! Service configuration sourced from the environment.
//!
//! The person id set stands in for a persistence layer. It is parsed once at
//! startup and injected into handlers as read-only state, never mutated.

use std::collections::BTreeSet;
use std::net::SocketAddr;

use thiserror::Error;

/// Environment variable holding the socket address to bind.
pub const BIND_ADDR_VAR: &str = "PERSON_API_ADDR";
/// Environment variable holding the comma-separated known person ids.
pub const PERSON_IDS_VAR: &str = "PERSON_API_PERSON_IDS";

const DEFAULT_PERSON_IDS: [i64; 5] = [1, 2, 3, 4, 5];

/// Failures while reading configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid socket address {value:?} in {var}: {source}")]
    InvalidBindAddr {
        var: &'static str,
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
    #[error("invalid person id {value:?} in {var}")]
    InvalidPersonId { var: &'static str, value: String },
}

/// Immutable set of person ids known at startup.
///
/// Injected via `web::Data` so membership checks stay free of globals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonRegistry(BTreeSet<i64>);

impl PersonRegistry {
    #[must_use]
    pub fn new(ids: impl IntoIterator<Item = i64>) -> Self {
        Self(ids.into_iter().collect())
    }

    #[must_use]
    pub fn contains(&self, id: i64) -> bool {
        self.0.contains(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for PersonRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_PERSON_IDS)
    }
}

/// Startup configuration for the HTTP server.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub registry: PersonRegistry,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            registry: PersonRegistry::default(),
        }
    }
}

impl AppConfig {
    /// Read configuration from the environment, falling back to defaults for
    /// unset variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let bind_addr = match std::env::var(BIND_ADDR_VAR) {
            Ok(raw) => parse_bind_addr(&raw)?,
            Err(_) => defaults.bind_addr,
        };
        let registry = match std::env::var(PERSON_IDS_VAR) {
            Ok(raw) => parse_person_ids(&raw)?,
            Err(_) => defaults.registry,
        };
        Ok(Self {
            bind_addr,
            registry,
        })
    }
}

fn parse_bind_addr(raw: &str) -> Result<SocketAddr, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|source| ConfigError::InvalidBindAddr {
            var: BIND_ADDR_VAR,
            value: raw.to_owned(),
            source,
        })
}

fn parse_person_ids(raw: &str) -> Result<PersonRegistry, ConfigError> {
    let mut ids = Vec::new();
    for part in raw.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        let id = part
            .parse::<i64>()
            .map_err(|_| ConfigError::InvalidPersonId {
                var: PERSON_IDS_VAR,
                value: part.to_owned(),
            })?;
        ids.push(id);
    }
    Ok(PersonRegistry::new(ids))
}
