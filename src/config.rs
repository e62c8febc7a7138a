//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::net::SocketAddr;
use std::str::FromStr;

/// Default HTTP port when `PORT` is unset or invalid
pub const DEFAULT_PORT: u16 = 7860;

/// Default entry time-to-live since last touch, in seconds
pub const DEFAULT_EXPIRATION_TIME: u64 = 90;

/// Default evictor sweep period, in seconds
pub const DEFAULT_CLEANUP_INTERVAL: u64 = 60;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
/// The listener always binds all interfaces (`0.0.0.0`).
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub port: u16,
    /// Idle time in seconds after which an entry expires
    pub expiration_time: u64,
    /// Background evictor interval in seconds
    pub cleanup_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `PORT` - HTTP server port (default: 7860)
    /// - `EXPIRATION_TIME` - Entry TTL in seconds (default: 90)
    /// - `CLEANUP_INTERVAL` - Sweep frequency in seconds (default: 60, minimum 1)
    pub fn from_env() -> Self {
        Self {
            port: parse_var("PORT").unwrap_or(DEFAULT_PORT),
            expiration_time: parse_var("EXPIRATION_TIME").unwrap_or(DEFAULT_EXPIRATION_TIME),
            cleanup_interval: parse_var("CLEANUP_INTERVAL")
                .unwrap_or(DEFAULT_CLEANUP_INTERVAL)
                .max(1),
        }
    }

    /// Address the HTTP listener binds to.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            expiration_time: DEFAULT_EXPIRATION_TIME,
            cleanup_interval: DEFAULT_CLEANUP_INTERVAL,
        }
    }
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}
