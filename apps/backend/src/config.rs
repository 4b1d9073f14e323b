//! Environment-driven server configuration.

use std::{env, fmt::Display, str::FromStr, time::Duration};

use tracing::{info, warn};

pub const DEFAULT_RAE_API_BASE: &str = "https://rae-api.com/api/words";

/// Server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Base URL of the upstream word endpoint; the word is appended as a path segment.
    pub rae_api_base: String,
    pub upstream_timeout: Duration,
}

impl Config {
    /// Load from `HOST`, `PORT`, `RAE_API_BASE` and `UPSTREAM_TIMEOUT_SECS`.
    pub fn from_env() -> Self {
        Self {
            host: try_load("HOST", "0.0.0.0".to_string()),
            port: try_load("PORT", 3000),
            rae_api_base: try_load("RAE_API_BASE", DEFAULT_RAE_API_BASE.to_string()),
            upstream_timeout: Duration::from_secs(try_load("UPSTREAM_TIMEOUT_SECS", 10)),
        }
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn try_load<T>(key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|e| {
            warn!("Invalid {key} value {raw:?}: {e}, using default: {default}");
            default
        }),
        Err(_) => {
            info!("{key} not set, using default: {default}");
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_load_falls_back_on_missing_var() {
        let value: u16 = try_load("OPENDICT_TEST_SURELY_UNSET_PORT", 4242);
        assert_eq!(value, 4242);
    }

    #[test]
    fn test_try_load_falls_back_on_invalid_value() {
        env::set_var("OPENDICT_TEST_INVALID_PORT", "not-a-port");
        let value: u16 = try_load("OPENDICT_TEST_INVALID_PORT", 3000);
        assert_eq!(value, 3000);
    }

    #[test]
    fn test_try_load_parses_value() {
        env::set_var("OPENDICT_TEST_TIMEOUT", "25");
        let value: u64 = try_load("OPENDICT_TEST_TIMEOUT", 10);
        assert_eq!(value, 25);
    }

    #[test]
    fn test_addr_format() {
        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 8080,
            rae_api_base: DEFAULT_RAE_API_BASE.to_string(),
            upstream_timeout: Duration::from_secs(10),
        };
        assert_eq!(config.addr(), "127.0.0.1:8080");
    }
}
