//! Shared configuration structures.

use std::env;

use serde::{Deserialize, Serialize};

/// Base service configuration shared by all services.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceConfig {
    /// Host address to bind
    pub host: String,
    /// Port to listen on
    pub port: u16,
}

impl ServiceConfig {
    /// Load `<PREFIX>_HOST` and `<PREFIX>_PORT`, falling back to defaults.
    pub fn from_env(prefix: &str, default_port: u16) -> Self {
        Self {
            host: env::var(format!("{}_HOST", prefix)).unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env_parse(&format!("{}_PORT", prefix)).unwrap_or(default_port),
        }
    }

    /// Socket address string for binding.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

impl DatabaseConfig {
    /// Load `<PREFIX>_DATABASE_URL`, then `DATABASE_URL`, then `default_url`.
    pub fn from_env(prefix: &str, default_url: &str) -> Self {
        Self {
            url: env::var(format!("{}_DATABASE_URL", prefix))
                .or_else(|_| env::var("DATABASE_URL"))
                .unwrap_or_else(|_| default_url.to_string()),
            max_connections: env_parse("DB_MAX_CONNECTIONS").unwrap_or(10),
            min_connections: env_parse("DB_MIN_CONNECTIONS").unwrap_or(1),
        }
    }

    /// Single-connection in-memory SQLite store.
    pub fn in_memory() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            min_connections: 1,
        }
    }
}

/// HTTP client configuration for calling another service.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DownstreamConfig {
    /// Base URL (e.g., "http://localhost:8001")
    pub base_url: String,
}

impl DownstreamConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Join a path onto the base URL.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

/// Parse an environment variable, ignoring missing or malformed values.
pub fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.parse().ok())
}

/// Host to use when connecting to a service bound on `host`.
pub fn connect_host(host: &str) -> &str {
    match host {
        "0.0.0.0" | "::" => "127.0.0.1",
        other => other,
    }
}
