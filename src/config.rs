//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:$PORT`)
//! - `PORT` - Port used when `LISTEN` is not set (default: `3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `RESOLVE_TIMEOUT_MS` - Hostname lookup bound in milliseconds (default: 5000)
//! - `BODY_LIMIT_BYTES` - Maximum request body size (default: 10 MiB)
//! - `CORS_ALLOW_ORIGIN` - `*` or a single allowed origin (default: `*`)
//! - `PUBLIC_DIR` - Static asset directory served under `/public` (default: `public`)
//! - `INDEX_FILE` - Page served at `/` (default: `views/index.html`)

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

const DEFAULT_PORT: &str = "3000";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Upper bound on a single hostname lookup during validation.
    /// A lookup that exceeds it rejects the URL.
    pub resolve_timeout_ms: u64,
    pub body_limit_bytes: usize,
    /// `*` allows any origin; anything else is the only allowed origin.
    pub cors_allow_origin: String,
    pub public_dir: String,
    pub index_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: format!("0.0.0.0:{DEFAULT_PORT}"),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            resolve_timeout_ms: 5_000,
            body_limit_bytes: 10 * 1024 * 1024,
            cors_allow_origin: "*".to_string(),
            public_dir: "public".to_string(),
            index_file: "views/index.html".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let listen_addr = Self::load_listen_addr();
        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);

        let resolve_timeout_ms = match env::var("RESOLVE_TIMEOUT_MS") {
            Ok(v) => v
                .parse()
                .with_context(|| format!("RESOLVE_TIMEOUT_MS must be an integer, got '{v}'"))?,
            Err(_) => defaults.resolve_timeout_ms,
        };

        let body_limit_bytes = match env::var("BODY_LIMIT_BYTES") {
            Ok(v) => v
                .parse()
                .with_context(|| format!("BODY_LIMIT_BYTES must be an integer, got '{v}'"))?,
            Err(_) => defaults.body_limit_bytes,
        };

        let cors_allow_origin =
            env::var("CORS_ALLOW_ORIGIN").unwrap_or(defaults.cors_allow_origin);
        let public_dir = env::var("PUBLIC_DIR").unwrap_or(defaults.public_dir);
        let index_file = env::var("INDEX_FILE").unwrap_or(defaults.index_file);

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            resolve_timeout_ms,
            body_limit_bytes,
            cors_allow_origin,
            public_dir,
            index_file,
        })
    }

    /// Loads the bind address.
    ///
    /// Priority:
    /// 1. `LISTEN` environment variable
    /// 2. `0.0.0.0:$PORT`
    /// 3. `0.0.0.0:3000`
    fn load_listen_addr() -> String {
        if let Ok(addr) = env::var("LISTEN") {
            return addr;
        }

        let port = env::var("PORT").unwrap_or_else(|_| DEFAULT_PORT.to_string());
        format!("0.0.0.0:{}", port)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not a socket address
    /// - `resolve_timeout_ms` is outside 1..=60000
    /// - `body_limit_bytes` is 0
    /// - `cors_allow_origin` is empty or not a valid header value
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        self.listen_addr
            .parse::<std::net::SocketAddr>()
            .with_context(|| {
                format!(
                    "LISTEN must be in format 'host:port', got '{}'",
                    self.listen_addr
                )
            })?;

        if self.resolve_timeout_ms == 0 || self.resolve_timeout_ms > 60_000 {
            anyhow::bail!(
                "RESOLVE_TIMEOUT_MS must be between 1 and 60000, got {}",
                self.resolve_timeout_ms
            );
        }

        if self.body_limit_bytes == 0 {
            anyhow::bail!("BODY_LIMIT_BYTES must be greater than 0");
        }

        if self.cors_allow_origin.is_empty() {
            anyhow::bail!("CORS_ALLOW_ORIGIN must not be empty");
        }

        if self.cors_allow_origin != "*" {
            axum::http::HeaderValue::from_str(&self.cors_allow_origin).with_context(|| {
                format!(
                    "CORS_ALLOW_ORIGIN is not a valid origin: '{}'",
                    self.cors_allow_origin
                )
            })?;
        }

        Ok(())
    }

    /// Returns the hostname lookup bound.
    pub fn resolve_timeout(&self) -> Duration {
        Duration::from_millis(self.resolve_timeout_ms)
    }

    /// Prints configuration summary.
    /// Labelled values for every setting, in display order.
    pub fn summary_lines(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Listen address", self.listen_addr.clone()),
            ("Log level", self.log_level.clone()),
            ("Log format", self.log_format.clone()),
            ("Resolve timeout", format!("{}ms", self.resolve_timeout_ms)),
            ("Body limit", format!("{} bytes", self.body_limit_bytes)),
            ("CORS origin", self.cors_allow_origin.clone()),
            ("Public dir", self.public_dir.clone()),
            ("Index file", self.index_file.clone()),
        ]
    }

    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        for (label, value) in self.summary_lines() {
            tracing::info!("  {}: {}", label, value);
        }
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
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

    #[test]
    fn test_summary_lines_cover_every_setting() {
        let config = Config {
            resolve_timeout_ms: 750,
            ..Config::default()
        };
        let lines = config.summary_lines();

        assert_eq!(lines.len(), 8);
        assert!(lines.contains(&("Listen address", config.listen_addr.clone())));
        assert!(lines.contains(&("Resolve timeout", "750ms".to_string())));
        assert!(lines.contains(&("Index file", config.index_file.clone())));
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());

        config.listen_addr = "127.0.0.1:8080".to_string();
        assert!(config.validate().is_ok());

        config.resolve_timeout_ms = 0;
        assert!(config.validate().is_err());

        config.resolve_timeout_ms = 60_001;
        assert!(config.validate().is_err());

        config.resolve_timeout_ms = 250;
        config.body_limit_bytes = 0;
        assert!(config.validate().is_err());

        config.body_limit_bytes = 1024;
        config.cors_allow_origin = String::new();
        assert!(config.validate().is_err());

        config.cors_allow_origin = "https://www.freecodecamp.org".to_string();
        assert!(config.validate().is_ok());

        config.cors_allow_origin = "bad\norigin".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_resolve_timeout() {
        let config = Config {
            resolve_timeout_ms: 1500,
            ..Config::default()
        };
        assert_eq!(config.resolve_timeout(), Duration::from_millis(1500));
    }

    #[test]
    #[serial]
    fn test_listen_addr_from_port() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::remove_var("LISTEN");
            env::set_var("PORT", "8081");
        }

        assert_eq!(Config::load_listen_addr(), "0.0.0.0:8081");

        unsafe {
            env::remove_var("PORT");
        }

        assert_eq!(Config::load_listen_addr(), "0.0.0.0:3000");
    }

    #[test]
    #[serial]
    fn test_listen_priority() {
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("LISTEN", "127.0.0.1:9000");
            env::set_var("PORT", "8081");
        }

        assert_eq!(Config::load_listen_addr(), "127.0.0.1:9000");

        unsafe {
            env::remove_var("LISTEN");
            env::remove_var("PORT");
        }
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_non_numeric_timeout() {
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("RESOLVE_TIMEOUT_MS", "soon");
        }

        assert!(Config::from_env().is_err());

        unsafe {
            env::set_var("RESOLVE_TIMEOUT_MS", "750");
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.resolve_timeout_ms, 750);

        unsafe {
            env::remove_var("RESOLVE_TIMEOUT_MS");
        }
    }
}
