//! Server configuration read from the environment.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `DATABASE_URL` | `postgres://localhost/cinelog` |
//! | `HOST` | `0.0.0.0` |
//! | `PORT` | `3000` |
//! | `DB_MAX_CONNECTIONS` | `10` |
//! | `DB_ACQUIRE_TIMEOUT_SECS` | `30` |
//! | `DB_IDLE_TIMEOUT_SECS` | `600` |
//! | `MAX_BODY_BYTES` | `1048576` |
//! | `ALLOWED_ORIGINS` | `http://localhost:3000` (comma-separated) |
//! | `LOG_FORMAT` | `text` (`json` for structured output) |
//! | `LOG_FILE` | unset (stdout only) |
//! | `LOG_ANSI` | auto-detected |

use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use cinelog_core::{defaults, Error, Result};
use cinelog_db::PoolConfig;

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq)]
pub struct LogConfig {
    pub format: LogFormat,
    /// Write logs to this file (daily rotation) instead of stdout.
    pub file: Option<String>,
    /// Force ANSI colors on or off.
    pub ansi: Option<bool>,
}

/// Complete API server configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
    pub idle_timeout_secs: u64,
    pub max_body_bytes: usize,
    pub allowed_origins: Vec<String>,
    pub log: LogConfig,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            database_url: defaults::DATABASE_URL.to_string(),
            host: defaults::SERVER_HOST.to_string(),
            port: defaults::SERVER_PORT,
            max_connections: defaults::DB_MAX_CONNECTIONS,
            acquire_timeout_secs: defaults::DB_ACQUIRE_TIMEOUT_SECS,
            idle_timeout_secs: defaults::DB_IDLE_TIMEOUT_SECS,
            max_body_bytes: defaults::MAX_BODY_BYTES,
            allowed_origins: vec!["http://localhost:3000".to_string()],
            log: LogConfig {
                format: LogFormat::Text,
                file: None,
                ansi: None,
            },
        }
    }
}

fn parse_var<T: FromStr>(name: &str, value: Option<String>, default: T) -> Result<T> {
    match value {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| Error::Config(format!("{} must be a valid number, got '{}'", name, raw))),
    }
}

fn parse_bool(value: &str) -> bool {
    value == "true" || value == "1"
}

impl ApiConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base = Self::default();

        let allowed_origins = match lookup("ALLOWED_ORIGINS") {
            Some(raw) if !raw.trim().is_empty() => raw
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect(),
            _ => base.allowed_origins,
        };

        let format = match lookup("LOG_FORMAT").as_deref() {
            Some("json") => LogFormat::Json,
            _ => LogFormat::Text,
        };

        Ok(Self {
            database_url: lookup("DATABASE_URL").unwrap_or(base.database_url),
            host: lookup("HOST").unwrap_or(base.host),
            port: parse_var("PORT", lookup("PORT"), base.port)?,
            max_connections: parse_var(
                "DB_MAX_CONNECTIONS",
                lookup("DB_MAX_CONNECTIONS"),
                base.max_connections,
            )?,
            acquire_timeout_secs: parse_var(
                "DB_ACQUIRE_TIMEOUT_SECS",
                lookup("DB_ACQUIRE_TIMEOUT_SECS"),
                base.acquire_timeout_secs,
            )?,
            idle_timeout_secs: parse_var(
                "DB_IDLE_TIMEOUT_SECS",
                lookup("DB_IDLE_TIMEOUT_SECS"),
                base.idle_timeout_secs,
            )?,
            max_body_bytes: parse_var(
                "MAX_BODY_BYTES",
                lookup("MAX_BODY_BYTES"),
                base.max_body_bytes,
            )?,
            allowed_origins,
            log: LogConfig {
                format,
                file: lookup("LOG_FILE").filter(|f| !f.trim().is_empty()),
                ansi: lookup("LOG_ANSI").map(|v| parse_bool(&v)),
            },
        })
    }

    /// Pool settings derived from the `DB_*` variables.
    pub fn pool_config(&self) -> PoolConfig {
        PoolConfig::new()
            .max_connections(self.max_connections)
            .acquire_timeout(Duration::from_secs(self.acquire_timeout_secs))
            .idle_timeout(Duration::from_secs(self.idle_timeout_secs))
    }

    /// Socket address to bind.
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| Error::Config(format!("invalid bind address: {}", e)))
    }
}
