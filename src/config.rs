//! Service configuration loaded from environment variables and CLI flags.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts. Command-line flags take precedence over environment variables, with
//! one exception: `PORT` overrides `--port`, so hosting platforms that inject
//! `PORT` always win.
//!
//! ## Variables
//!
//! - `DATABASE_PATH` - SQLite database file (default: `/tmp/golink.db`)
//! - `PORT` - Listen port (default: `10123`)
//! - `HOST_NAME` - Canonical host for `https://` redirects (optional)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `DB_MAX_CONNECTIONS` - Connection pool size (default: 5)

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

pub const DEFAULT_DATABASE_PATH: &str = "/tmp/golink.db";
pub const DEFAULT_PORT: u16 = 10123;

/// Service configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_path: PathBuf,
    pub port: u16,
    /// When set, requests for the bare `go` host or arriving over plain HTTP
    /// behind a proxy are redirected to `https://<host_name>`.
    pub host_name: Option<String>,
    pub log_level: String,
    pub log_format: String,
    pub db_max_connections: u32,
}

/// Values supplied on the command line.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub database_path: Option<PathBuf>,
    pub port: Option<u16>,
    pub host_name: Option<String>,
}

impl Config {
    /// Loads configuration from environment variables and applies `overrides`.
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` or `DB_MAX_CONNECTIONS` is set but not a number.
    pub fn load(overrides: ConfigOverrides) -> Result<Self> {
        let database_path = overrides
            .database_path
            .or_else(|| env::var_os("DATABASE_PATH").map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE_PATH));

        let port = match env::var("PORT") {
            Ok(p) => p
                .parse()
                .with_context(|| format!("PORT must be a port number, got '{p}'"))?,
            Err(_) => overrides.port.unwrap_or(DEFAULT_PORT),
        };

        let host_name = overrides
            .host_name
            .or_else(|| env::var("HOST_NAME").ok())
            .filter(|h| !h.is_empty());

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let db_max_connections = match env::var("DB_MAX_CONNECTIONS") {
            Ok(v) => v
                .parse()
                .with_context(|| format!("DB_MAX_CONNECTIONS must be a number, got '{v}'"))?,
            Err(_) => 5,
        };

        Ok(Self {
            database_path,
            port,
            host_name,
            log_level,
            log_format,
            db_max_connections,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `port` is 0
    /// - `log_format` is not `text` or `json`
    /// - `database_path` is empty
    /// - `host_name` contains `/` or whitespace
    /// - `db_max_connections` is 0
    pub fn validate(&self) -> Result<()> {
        if self.port == 0 {
            anyhow::bail!("PORT must be greater than 0");
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.database_path.as_os_str().is_empty() {
            anyhow::bail!("DATABASE_PATH must not be empty");
        }

        if let Some(ref host) = self.host_name
            && host.chars().any(|c| c == '/' || c.is_whitespace())
        {
            anyhow::bail!(
                "HOST_NAME must be a bare host name without scheme or path, got '{}'",
                host
            );
        }

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }

        Ok(())
    }

    /// Address the HTTP server binds to (all interfaces).
    pub fn listen_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr());
        tracing::info!("  Database: {}", self.database_path.display());
        match self.host_name {
            Some(ref host) => tracing::info!("  Host name: {} (https redirects enabled)", host),
            None => tracing::info!("  Host name: unset (https redirects disabled)"),
        }
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  DB max connections: {}", self.db_max_connections);
    }
}

/// Loads and validates configuration.
///
/// Expects `.env` to be loaded already (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load(overrides: ConfigOverrides) -> Result<Config> {
    let config = Config::load(overrides)?;
    config.validate()?;
    Ok(config)
}
