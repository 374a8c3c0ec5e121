//! Configuration Module
//!
//! Handles loading and managing client configuration from environment variables.

use std::env;
use std::time::Duration;

/// Client configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root of the remote REST API
    pub api_base_url: String,
    /// Per-request timeout in milliseconds
    pub request_timeout_ms: u64,
    /// Maximum number of entries the response cache can hold
    pub cache_max_entries: usize,
    /// Response cache TTL in milliseconds
    pub cache_ttl_ms: u64,
    /// GET calls slower than this are logged at warn level
    pub slow_call_threshold_ms: u64,
    /// Route handed to the unauthorized handler on a 401
    pub login_route: String,
    /// Where the command-line front end persists the session
    pub session_file: String,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `API_BASE_URL` - API root (default: http://localhost:5001/api)
    /// - `REQUEST_TIMEOUT_MS` - Request timeout (default: 10000)
    /// - `CACHE_MAX_ENTRIES` - Maximum cache entries (default: 100)
    /// - `CACHE_TTL_MS` - Cache TTL (default: 300000)
    /// - `SLOW_CALL_THRESHOLD_MS` - Slow GET warning threshold (default: 1000)
    /// - `LOGIN_ROUTE` - Login entry point (default: /login)
    /// - `SESSION_FILE` - Session file path (default: .session.json)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: env::var("API_BASE_URL").unwrap_or(defaults.api_base_url),
            request_timeout_ms: parse_var("REQUEST_TIMEOUT_MS")
                .unwrap_or(defaults.request_timeout_ms),
            cache_max_entries: parse_var("CACHE_MAX_ENTRIES")
                .unwrap_or(defaults.cache_max_entries),
            cache_ttl_ms: parse_var("CACHE_TTL_MS").unwrap_or(defaults.cache_ttl_ms),
            slow_call_threshold_ms: parse_var("SLOW_CALL_THRESHOLD_MS")
                .unwrap_or(defaults.slow_call_threshold_ms),
            login_route: env::var("LOGIN_ROUTE").unwrap_or(defaults.login_route),
            session_file: env::var("SESSION_FILE").unwrap_or(defaults.session_file),
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_millis(self.cache_ttl_ms)
    }

    pub fn slow_call_threshold(&self) -> Duration {
        Duration::from_millis(self.slow_call_threshold_ms)
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:5001/api".to_string(),
            request_timeout_ms: 10_000,
            cache_max_entries: 100,
            cache_ttl_ms: 300_000,
            slow_call_threshold_ms: 1000,
            login_route: "/login".to_string(),
            session_file: ".session.json".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.api_base_url, "http://localhost:5001/api");
        assert_eq!(config.request_timeout_ms, 10_000);
        assert_eq!(config.cache_max_entries, 100);
        assert_eq!(config.cache_ttl_ms, 300_000);
        assert_eq!(config.slow_call_threshold_ms, 1000);
        assert_eq!(config.login_route, "/login");
    }

    #[test]
    fn test_config_durations() {
        let config = Config::default();
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
        assert_eq!(config.cache_ttl(), Duration::from_secs(300));
        assert_eq!(config.slow_call_threshold(), Duration::from_secs(1));
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        env::remove_var("API_BASE_URL");
        env::remove_var("REQUEST_TIMEOUT_MS");
        env::remove_var("CACHE_MAX_ENTRIES");
        env::remove_var("CACHE_TTL_MS");
        env::remove_var("SLOW_CALL_THRESHOLD_MS");
        env::remove_var("LOGIN_ROUTE");

        let config = Config::from_env();
        assert_eq!(config.api_base_url, "http://localhost:5001/api");
        assert_eq!(config.request_timeout_ms, 10_000);
        assert_eq!(config.cache_max_entries, 100);
        assert_eq!(config.cache_ttl_ms, 300_000);
        assert_eq!(config.login_route, "/login");
    }
}
