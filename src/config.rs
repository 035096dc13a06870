//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export DATABASE_URL="sqlite://urls.db?mode=rwc"
//! export LISTEN="0.0.0.0:8080"
//! ```
//!
//! ## Optional Variables
//!
//! - `DATABASE_URL` - SQLite connection string (default: `sqlite://urls.db?mode=rwc`)
//! - `LISTEN` - Bind address (default: `0.0.0.0:8080`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `SHORT_CODE_LENGTH` - Characters per generated code (default: 6, range 4-32)
//! - `MAX_GENERATION_ATTEMPTS` - Collision retries per create (default: 10, range 1-100)
//! - `DB_MAX_CONNECTIONS` - Pool size (default: 5)
//! - `DB_CONNECT_TIMEOUT` - Pool acquire timeout in seconds (default: 30)

use anyhow::Result;
use std::env;
use std::str::FromStr;

use crate::application::services::{CodePolicy, DEFAULT_MAX_ATTEMPTS};
use crate::utils::code_generator::DEFAULT_CODE_LENGTH;

const DEFAULT_DATABASE_URL: &str = "sqlite://urls.db?mode=rwc";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    pub short_code_length: usize,
    pub max_generation_attempts: usize,

    // ── Pool settings ───────────────────────────────────────────────────────
    /// Maximum number of connections in the pool (`DB_MAX_CONNECTIONS`, default: 5).
    pub db_max_connections: u32,
    /// Timeout for acquiring a connection from the pool in seconds
    /// (`DB_CONNECT_TIMEOUT`, default: 30).
    pub db_connect_timeout: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            listen_addr: "0.0.0.0:8080".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            short_code_length: DEFAULT_CODE_LENGTH,
            max_generation_attempts: DEFAULT_MAX_ATTEMPTS,
            db_max_connections: 5,
            db_connect_timeout: 30,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    ///
    /// Unparseable numeric values fall back to their defaults as well;
    /// range checks happen in [`Config::validate`].
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            database_url: env::var("DATABASE_URL").unwrap_or(defaults.database_url),
            listen_addr: env::var("LISTEN").unwrap_or(defaults.listen_addr),
            log_level: env::var("RUST_LOG").unwrap_or(defaults.log_level),
            log_format: env::var("LOG_FORMAT").unwrap_or(defaults.log_format),
            short_code_length: parse_var("SHORT_CODE_LENGTH", defaults.short_code_length),
            max_generation_attempts: parse_var(
                "MAX_GENERATION_ATTEMPTS",
                defaults.max_generation_attempts,
            ),
            db_max_connections: parse_var("DB_MAX_CONNECTIONS", defaults.db_max_connections),
            db_connect_timeout: parse_var("DB_CONNECT_TIMEOUT", defaults.db_connect_timeout),
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `database_url` is not a SQLite URL
    /// - code length or attempt limits are out of range
    /// - pool settings are zero
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !self.database_url.starts_with("sqlite:") {
            anyhow::bail!(
                "DATABASE_URL must start with 'sqlite:', got '{}'",
                self.database_url
            );
        }

        if !(4..=32).contains(&self.short_code_length) {
            anyhow::bail!(
                "SHORT_CODE_LENGTH must be between 4 and 32, got {}",
                self.short_code_length
            );
        }

        if !(1..=100).contains(&self.max_generation_attempts) {
            anyhow::bail!(
                "MAX_GENERATION_ATTEMPTS must be between 1 and 100, got {}",
                self.max_generation_attempts
            );
        }

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }
        if self.db_connect_timeout == 0 {
            anyhow::bail!("DB_CONNECT_TIMEOUT must be greater than 0");
        }

        Ok(())
    }

    /// Code generation settings for the store.
    pub fn code_policy(&self) -> CodePolicy {
        CodePolicy {
            code_length: self.short_code_length,
            max_attempts: self.max_generation_attempts,
        }
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Database: {}", self.database_url);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!(
            "  Short codes: {} chars, {} attempts",
            self.short_code_length,
            self.max_generation_attempts
        );
        tracing::info!("  Pool: {} connections", self.db_max_connections);
    }
}

fn parse_var<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: &[&str] = &[
        "DATABASE_URL",
        "LISTEN",
        "LOG_FORMAT",
        "SHORT_CODE_LENGTH",
        "MAX_GENERATION_ATTEMPTS",
        "DB_MAX_CONNECTIONS",
        "DB_CONNECT_TIMEOUT",
    ];

    fn clear_env() {
        // SAFETY: Tests are run serially
        unsafe {
            for var in VARS {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();

        config.log_format = "xml".to_string();
        assert!(config.validate().is_err());
        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "8080".to_string();
        assert!(config.validate().is_err());
        config.listen_addr = "127.0.0.1:8080".to_string();

        config.database_url = "postgres://localhost/db".to_string();
        assert!(config.validate().is_err());
        config.database_url = "sqlite::memory:".to_string();
        assert!(config.validate().is_ok());

        config.short_code_length = 3;
        assert!(config.validate().is_err());
        config.short_code_length = 33;
        assert!(config.validate().is_err());
        config.short_code_length = 8;

        config.max_generation_attempts = 0;
        assert!(config.validate().is_err());
        config.max_generation_attempts = 10;

        config.db_max_connections = 0;
        assert!(config.validate().is_err());
        config.db_max_connections = 1;

        config.db_connect_timeout = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_code_policy_from_config() {
        let config = Config {
            short_code_length: 8,
            max_generation_attempts: 4,
            ..Config::default()
        };

        let policy = config.code_policy();

        assert_eq!(policy.code_length, 8);
        assert_eq!(policy.max_attempts, 4);
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();

        let config = Config::from_env().unwrap();

        assert_eq!(config.database_url, "sqlite://urls.db?mode=rwc");
        assert_eq!(config.listen_addr, "0.0.0.0:8080");
        assert_eq!(config.short_code_length, 6);
        assert_eq!(config.max_generation_attempts, 10);
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();

        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("DATABASE_URL", "sqlite::memory:");
            env::set_var("LISTEN", "127.0.0.1:9000");
            env::set_var("SHORT_CODE_LENGTH", "8");
            env::set_var("MAX_GENERATION_ATTEMPTS", "not-a-number");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.listen_addr, "127.0.0.1:9000");
        assert_eq!(config.short_code_length, 8);
        // Unparseable values fall back to the default
        assert_eq!(config.max_generation_attempts, 10);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_load_from_env_rejects_invalid() {
        clear_env();

        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("SHORT_CODE_LENGTH", "2");
        }

        assert!(load_from_env().is_err());

        clear_env();
    }
}
