// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables, deployment modes, and runtime configuration parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Environment-based configuration management for production deployment

use crate::constants::defaults;
use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::PathBuf;

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages
    #[default]
    Info,
    /// Debug output
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Convert to `tracing::Level`
    #[must_use]
    pub const fn to_tracing_level(self) -> tracing::Level {
        match self {
            Self::Error => tracing::Level::ERROR,
            Self::Warn => tracing::Level::WARN,
            Self::Info => tracing::Level::INFO,
            Self::Debug => tracing::Level::DEBUG,
            Self::Trace => tracing::Level::TRACE,
        }
    }

    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Environment type for security and logging defaults
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Type-safe database location
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum DatabaseUrl {
    /// `SQLite` database with file path
    SQLite {
        /// Path of the database file
        path: PathBuf,
    },
    /// In-memory `SQLite` (for testing)
    Memory,
}

impl DatabaseUrl {
    /// Parse from string
    ///
    /// # Errors
    ///
    /// Returns an error for URL schemes the inventory store cannot open.
    pub fn parse_url(s: &str) -> Result<Self> {
        if let Some(path_str) = s.strip_prefix("sqlite:") {
            if path_str == ":memory:" {
                Ok(Self::Memory)
            } else {
                Ok(Self::SQLite {
                    path: PathBuf::from(path_str),
                })
            }
        } else if s.contains("://") {
            Err(anyhow!("Unsupported database URL scheme: {s}"))
        } else {
            // Bare paths are treated as SQLite files
            Ok(Self::SQLite {
                path: PathBuf::from(s),
            })
        }
    }

    /// Convert to connection string
    #[must_use]
    pub fn to_connection_string(&self) -> String {
        match self {
            Self::SQLite { path } => format!("sqlite:{}", path.display()),
            Self::Memory => "sqlite::memory:".to_owned(),
        }
    }

    /// Check if this is an in-memory database
    #[must_use]
    pub const fn is_memory(&self) -> bool {
        matches!(self, Self::Memory)
    }
}

impl Default for DatabaseUrl {
    fn default() -> Self {
        Self::SQLite {
            path: PathBuf::from("./data/bakery.db"),
        }
    }
}

impl fmt::Display for DatabaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_connection_string())
    }
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Where the inventory store lives
    pub url: DatabaseUrl,
    /// Create tables on startup
    pub auto_migrate: bool,
}

/// Cross-origin configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Comma-separated origins, or `*`
    pub allowed_origins: String,
}

/// Complete server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP API port
    pub http_port: u16,
    /// Log level
    pub log_level: LogLevel,
    /// Deployment environment
    pub environment: Environment,
    /// Database configuration
    pub database: DatabaseConfig,
    /// CORS configuration
    pub cors: CorsConfig,
    /// Server version (from Cargo.toml)
    pub server_version: String,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to a value that cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let http_port = env_var_or("HTTP_PORT", &defaults::HTTP_PORT.to_string())
            .parse::<u16>()
            .map_err(|e| anyhow!("Invalid HTTP_PORT: {e}"))?;

        let auto_migrate = env_var_or("AUTO_MIGRATE", "true")
            .parse::<bool>()
            .map_err(|e| anyhow!("Invalid AUTO_MIGRATE: {e}"))?;

        let config = Self {
            http_port,
            log_level: LogLevel::from_str_or_default(
                &env::var("LOG_LEVEL")
                    .or_else(|_| env::var("RUST_LOG"))
                    .unwrap_or_else(|_| defaults::LOG_LEVEL.to_owned()),
            ),
            environment: Environment::from_str_or_default(&env_var_or(
                "ENVIRONMENT",
                "development",
            )),
            database: DatabaseConfig {
                url: DatabaseUrl::parse_url(&env_var_or("DATABASE_URL", defaults::DATABASE_URL))?,
                auto_migrate,
            },
            cors: CorsConfig {
                allowed_origins: env_var_or("CORS_ORIGINS", "*"),
            },
            server_version: env!("CARGO_PKG_VERSION").to_owned(),
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate cross-field constraints
    ///
    /// # Errors
    ///
    /// Returns an error when production is configured with an in-memory store
    /// or the port is zero.
    pub fn validate(&self) -> Result<()> {
        if self.http_port == 0 {
            return Err(anyhow!("HTTP_PORT must be non-zero"));
        }
        if self.environment.is_production() && self.database.url.is_memory() {
            return Err(anyhow!(
                "In-memory database is not allowed in production environment"
            ));
        }
        Ok(())
    }

    /// Human-readable configuration summary for startup logs
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Bakery Production Server Configuration:\n\
             - HTTP Port: {}\n\
             - Environment: {}\n\
             - Log Level: {}\n\
             - Database: {}\n\
             - Auto Migrate: {}\n\
             - CORS Origins: {}\n\
             - Version: {}",
            self.http_port,
            self.environment,
            self.log_level,
            self.database.url,
            self.database.auto_migrate,
            self.cors.allowed_origins,
            self.server_version,
        )
    }
}

/// Read an environment variable, falling back to `default`
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}
