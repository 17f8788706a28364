use serde::{Deserialize, Serialize};
use std::env;

/// Resolved service configuration. Built once at startup and handed to the
/// router through `AppState`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub classes: ClassConfig,
    pub security: SecurityConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub bind_address: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassConfig {
    /// When false the `date` attribute is neither accepted nor returned.
    pub date_field_enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    pub cors_origins: Vec<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as `from_env` but reads variables through `lookup`, so tests can
    /// feed a fixed map instead of touching the process environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = match lookup("APP_ENV").as_deref() {
            Some("production") | Some("prod") => Environment::Production,
            _ => Environment::Development,
        };

        // Set defaults based on environment, then override with specific env vars
        match environment {
            Environment::Production => Self::production(),
            Environment::Development => Self::development(),
        }
        .with_env_overrides(lookup)
    }

    fn with_env_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        // Server overrides
        if let Some(v) = lookup("PORT") {
            self.server.port = v.parse().unwrap_or(self.server.port);
        }
        if let Some(v) = lookup("BIND_ADDRESS") {
            if !v.trim().is_empty() {
                self.server.bind_address = v.trim().to_string();
            }
        }

        // Database overrides
        if let Some(v) = lookup("DATABASE_URL") {
            if !v.trim().is_empty() {
                self.database.url = v.trim().to_string();
            }
        }
        if let Some(v) = lookup("DATABASE_MAX_CONNECTIONS") {
            self.database.max_connections = v.parse().unwrap_or(self.database.max_connections);
        }

        // Class overrides
        if let Some(v) = lookup("CLASS_DATE_ENABLED") {
            self.classes.date_field_enabled = parse_bool(&v).unwrap_or(self.classes.date_field_enabled);
        }

        // Security overrides
        if let Some(v) = lookup("CORS_ORIGINS") {
            self.security.cors_origins = split_origins(&v);
        }
        if let Some(v) = lookup("FRONTEND_URL") {
            let origin = v.trim();
            if origin == "*" {
                tracing::warn!("Ignoring FRONTEND_URL=*; wildcard origins are not allowed");
            } else if !origin.is_empty() && !self.security.cors_origins.iter().any(|o| o == origin) {
                self.security.cors_origins.push(origin.to_string());
            }
        }

        self
    }

    /// Address string suitable for `TcpListener::bind`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.bind_address, self.server.port)
    }

    pub fn development() -> Self {
        Self {
            environment: Environment::Development,
            server: ServerConfig {
                bind_address: "0.0.0.0".to_string(),
                port: 8080,
            },
            database: DatabaseConfig {
                url: "sqlite://classes.db".to_string(),
                max_connections: 5,
            },
            classes: ClassConfig {
                date_field_enabled: true,
            },
            security: SecurityConfig {
                cors_origins: vec![
                    "http://localhost:5173".to_string(),
                    "http://localhost:5174".to_string(),
                ],
            },
        }
    }

    pub fn production() -> Self {
        Self {
            environment: Environment::Production,
            server: ServerConfig {
                bind_address: "0.0.0.0".to_string(),
                port: 8080,
            },
            database: DatabaseConfig {
                url: "sqlite://classes.db".to_string(),
                max_connections: 10,
            },
            classes: ClassConfig {
                date_field_enabled: true,
            },
            // Production origins must come from FRONTEND_URL or CORS_ORIGINS
            security: SecurityConfig {
                cors_origins: Vec::new(),
            },
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn split_origins(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .filter(|s| {
            if s == "*" {
                tracing::warn!("Ignoring wildcard in CORS_ORIGINS; list origins explicitly");
                return false;
            }
            true
        })
        .collect()
}
