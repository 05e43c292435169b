//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//! Every variable is optional; the defaults reproduce the fixed behavior of the
//! service (port 8080, secret `secret123`, one request per client every 5 seconds).
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:8080`)
//! - `API_KEY` - Shared secret expected in the `X-API-Key` header (default: `secret123`)
//! - `RATE_LIMIT_COOLDOWN_SECS` - Minimum spacing between admitted requests
//!   per client (default: 5)
//! - `RATE_LIMIT_EVICTION_INTERVAL_SECS` - How often idle client records are
//!   dropped (default: 60)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::Result;
use std::env;
use std::time::Duration;

pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_API_KEY: &str = "secret123";
pub const DEFAULT_COOLDOWN_SECS: u64 = 5;
pub const DEFAULT_EVICTION_INTERVAL_SECS: u64 = 60;

const MAX_COOLDOWN_SECS: u64 = 86_400;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Static secret compared verbatim against the `X-API-Key` request header.
    pub api_key: String,
    pub rate_limit_cooldown_secs: u64,
    pub rate_limit_eviction_interval_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            api_key: DEFAULT_API_KEY.to_string(),
            rate_limit_cooldown_secs: DEFAULT_COOLDOWN_SECS,
            rate_limit_eviction_interval_secs: DEFAULT_EVICTION_INTERVAL_SECS,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Unset or unparsable numeric values fall back to their defaults.
    pub fn from_env() -> Self {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
        let api_key = env::var("API_KEY").unwrap_or_else(|_| DEFAULT_API_KEY.to_string());

        let rate_limit_cooldown_secs = env::var("RATE_LIMIT_COOLDOWN_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_COOLDOWN_SECS);

        let rate_limit_eviction_interval_secs = env::var("RATE_LIMIT_EVICTION_INTERVAL_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_EVICTION_INTERVAL_SECS);

        Self {
            listen_addr,
            log_level,
            log_format,
            api_key,
            rate_limit_cooldown_secs,
            rate_limit_eviction_interval_secs,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not in `host:port` form
    /// - `api_key` is empty
    /// - the cooldown is zero or longer than a day
    /// - the eviction interval is zero
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

        if self.api_key.is_empty() {
            anyhow::bail!("API_KEY must not be empty");
        }

        if self.rate_limit_cooldown_secs == 0 || self.rate_limit_cooldown_secs > MAX_COOLDOWN_SECS
        {
            anyhow::bail!(
                "RATE_LIMIT_COOLDOWN_SECS must be between 1 and {}, got {}",
                MAX_COOLDOWN_SECS,
                self.rate_limit_cooldown_secs
            );
        }

        if self.rate_limit_eviction_interval_secs == 0 {
            anyhow::bail!("RATE_LIMIT_EVICTION_INTERVAL_SECS must be greater than 0");
        }

        Ok(())
    }

    pub fn cooldown(&self) -> Duration {
        Duration::from_secs(self.rate_limit_cooldown_secs)
    }

    pub fn eviction_interval(&self) -> Duration {
        Duration::from_secs(self.rate_limit_eviction_interval_secs)
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  API key: {}", mask_secret(&self.api_key));
        tracing::info!("  Rate limit cooldown: {}s", self.rate_limit_cooldown_secs);
        tracing::info!(
            "  Rate limit eviction interval: {}s",
            self.rate_limit_eviction_interval_secs
        );
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Masks a secret for logging, keeping only its first character.
///
/// - `secret123` → `s********`
/// - `ab` → `**`
fn mask_secret(secret: &str) -> String {
    let len = secret.chars().count();
    if len <= 4 {
        return "*".repeat(len);
    }

    let mut masked = String::with_capacity(len);
    masked.extend(secret.chars().take(1));
    masked.push_str(&"*".repeat(len - 1));
    masked
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_mask_secret() {
        assert_eq!(mask_secret("secret123"), "s********");
        assert_eq!(mask_secret("ab"), "**");
        assert_eq!(mask_secret(""), "");
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();

        assert!(config.validate().is_ok());
        assert_eq!(config.cooldown(), Duration::from_secs(5));
        assert_eq!(config.api_key, "secret123");
        assert_eq!(config.listen_addr, "0.0.0.0:8080");
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "8080".to_string();
        assert!(config.validate().is_err());

        config.listen_addr = "127.0.0.1:8080".to_string();
        config.api_key = String::new();
        assert!(config.validate().is_err());

        config.api_key = "k".to_string();
        config.rate_limit_cooldown_secs = 0;
        assert!(config.validate().is_err());

        config.rate_limit_cooldown_secs = MAX_COOLDOWN_SECS + 1;
        assert!(config.validate().is_err());

        config.rate_limit_cooldown_secs = 5;
        config.rate_limit_eviction_interval_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("LISTEN", "127.0.0.1:9000");
            env::set_var("API_KEY", "hunter2");
            env::set_var("RATE_LIMIT_COOLDOWN_SECS", "10");
            env::set_var("RATE_LIMIT_EVICTION_INTERVAL_SECS", "30");
        }

        let config = Config::from_env();

        assert_eq!(config.listen_addr, "127.0.0.1:9000");
        assert_eq!(config.api_key, "hunter2");
        assert_eq!(config.cooldown(), Duration::from_secs(10));
        assert_eq!(config.eviction_interval(), Duration::from_secs(30));

        // Cleanup
        unsafe {
            env::remove_var("LISTEN");
            env::remove_var("API_KEY");
            env::remove_var("RATE_LIMIT_COOLDOWN_SECS");
            env::remove_var("RATE_LIMIT_EVICTION_INTERVAL_SECS");
        }
    }

    #[test]
    #[serial]
    fn test_unparsable_numbers_fall_back_to_defaults() {
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("RATE_LIMIT_COOLDOWN_SECS", "five");
        }

        let config = Config::from_env();
        assert_eq!(config.rate_limit_cooldown_secs, DEFAULT_COOLDOWN_SECS);

        unsafe {
            env::remove_var("RATE_LIMIT_COOLDOWN_SECS");
        }
    }
}
