//! User service configuration.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use common::DatabaseConfig;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// User service configuration.
#[derive(Debug, Clone)]
pub struct UserServiceConfig {
    /// Database connection pool settings
    pub database: DatabaseConfig,
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Deadline applied to every store call
    pub request_timeout: Duration,
}

impl UserServiceConfig {
    /// Load configuration from environment variables.
    ///
    /// Unset or unparsable values fall back to the defaults. `.env` is
    /// loaded by the binary before this runs.
    pub fn from_env() -> Self {
        let defaults = DatabaseConfig::default();
        let database = DatabaseConfig {
            url: env::var("USER_SERVICE_DATABASE_URL")
                .or_else(|_| env::var("DATABASE_URL"))
                .unwrap_or(defaults.url),
            max_connections: parse_var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or(defaults.max_connections),
            min_connections: parse_var("DATABASE_MIN_CONNECTIONS")
                .unwrap_or(defaults.min_connections),
            connect_timeout_secs: parse_var("DATABASE_CONNECT_TIMEOUT_SECS")
                .unwrap_or(defaults.connect_timeout_secs),
        };

        Self {
            database,
            host: env::var("USER_SERVICE_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: parse_var("USER_SERVICE_PORT").unwrap_or(DEFAULT_PORT),
            request_timeout: Duration::from_secs(
                parse_var("USER_SERVICE_REQUEST_TIMEOUT_SECS")
                    .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
            ),
        }
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for UserServiceConfig {
    fn default() -> Self {
        Self {
            database: DatabaseConfig::default(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

fn parse_var<T: FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.parse().ok())
}
