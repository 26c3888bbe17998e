// src/config/mod.rs
// Environment-based configuration, loaded once at startup and passed down

use std::str::FromStr;

use tracing::{Level, warn};

/// Server configuration. Every field has a default so an empty environment
/// still yields a runnable server.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackerConfig {
    // ── Server
    pub host: String,
    pub port: u16,

    // ── CORS ("*" allows any origin)
    pub cors_origin: String,

    // ── Data
    pub seed_demo: bool,

    // ── Logging
    pub log_level: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            cors_origin: "*".to_string(),
            seed_demo: true,
            log_level: "info".to_string(),
        }
    }
}

impl TrackerConfig {
    /// Load from `.env` (if present) and the process environment
    pub fn from_env() -> Self {
        // Missing .env is fine: plain env vars and defaults still apply
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unparseable values fall back to
    /// the default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            host: var_or(&lookup, "TRACKER_HOST", defaults.host),
            port: var_or(&lookup, "TRACKER_PORT", defaults.port),
            cors_origin: var_or(&lookup, "TRACKER_CORS_ORIGIN", defaults.cors_origin),
            seed_demo: lookup("TRACKER_SEED_DEMO")
                .and_then(|v| parse_bool(&v))
                .unwrap_or(defaults.seed_demo),
            log_level: var_or(&lookup, "TRACKER_LOG_LEVEL", defaults.log_level),
        }
    }

    /// `host:port` for the listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Max tracing level; unknown names fall back to INFO
    pub fn tracing_level(&self) -> Level {
        match self.log_level.trim().to_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" | "warning" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        }
    }
}

// Trims whitespace and trailing `# comments` before parsing
fn var_or<T, F>(lookup: &F, key: &str, default: T) -> T
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(val) => {
            let clean_val = val.split('#').next().unwrap_or("").trim();
            match clean_val.parse::<T>() {
                Ok(parsed) => parsed,
                Err(_) => {
                    warn!(key, value = %val, "Config value failed to parse, using default");
                    default
                }
            }
        }
        None => default,
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
