// ABOUTME: Logging configuration and structured logging setup for the bakery server
// ABOUTME: Configures log levels, output formats, and noise reduction for dependency crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Structured logging configuration built on `tracing-subscriber`

/// Tenant-aware logging utilities
pub mod tenant;

pub use tenant::{record_tenant_context, TenantLogger};

use crate::config::environment::{Environment, LogLevel, ServerConfig};
use crate::constants::service_names;
use anyhow::Result;
use serde_json::json;
use std::env;
use std::io;
use tracing::info;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Level for this crate and the default filter
    pub level: LogLevel,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Include span open/close events
    pub include_spans: bool,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
    /// Deployment environment
    pub environment: Environment,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` format for production logging
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact format for space-constrained environments
    Compact,
}

impl LogFormat {
    /// Parse a `LOG_FORMAT` value, defaulting to pretty output
    #[must_use]
    pub fn from_str_or_default(value: &str) -> Self {
        match value {
            "json" => Self::Json,
            "compact" => Self::Compact,
            _ => Self::Pretty,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
            format: LogFormat::Pretty,
            include_location: false,
            include_spans: false,
            service_name: service_names::BAKERY_SERVER.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment: Environment::default(),
        }
    }
}

impl LoggingConfig {
    /// Logging configuration for a loaded server configuration
    ///
    /// Level and environment come from `config`; output shape comes from
    /// `LOG_FORMAT`, `LOG_INCLUDE_LOCATION`, `LOG_INCLUDE_SPANS` and `SERVICE_NAME`.
    #[must_use]
    pub fn from_server_config(config: &ServerConfig) -> Self {
        let format = env::var("LOG_FORMAT")
            .map_or(LogFormat::Pretty, |value| LogFormat::from_str_or_default(&value));
        let environment = config.environment;
        let is_production = environment.is_production();

        Self {
            level: config.log_level,
            format,
            include_location: is_production || env::var("LOG_INCLUDE_LOCATION").is_ok(),
            include_spans: is_production || env::var("LOG_INCLUDE_SPANS").is_ok(),
            service_name: env::var("SERVICE_NAME")
                .unwrap_or_else(|_| service_names::BAKERY_SERVER.into()),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment,
        }
    }

    /// Build the filter: configured level plus fixed noise reduction rules
    fn env_filter(&self) -> EnvFilter {
        let noise_reduction = [
            "hyper=warn",
            "hyper::proto=warn",
            "sqlx=warn",
            "sqlx::query=warn",
            "tower_http=info",
        ];

        let base = EnvFilter::default().add_directive(self.level.to_tracing_level().into());

        noise_reduction
            .iter()
            .fold(base, |filter, directive| {
                filter.add_directive(
                    directive
                        .parse()
                        .unwrap_or_else(|_| tracing::Level::WARN.into()),
                )
            })
            .add_directive(
                format!("bakery_inventory={}", self.level)
                    .parse()
                    .unwrap_or_else(|_| tracing::Level::INFO.into()),
            )
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber was already installed
    pub fn init(&self) -> Result<()> {
        let registry = tracing_subscriber::registry().with(self.env_filter());
        let span_events = if self.include_spans {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        };

        match self.format {
            LogFormat::Json => {
                let json_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_target(true)
                    .with_writer(io::stdout)
                    .with_span_events(span_events)
                    .json();
                registry.with(json_layer).try_init()?;
            }
            LogFormat::Pretty => {
                let pretty_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_target(true)
                    .with_writer(io::stdout)
                    .with_span_events(span_events);
                registry.with(pretty_layer).try_init()?;
            }
            LogFormat::Compact => {
                let compact_layer = fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(io::stdout)
                    .with_span_events(FmtSpan::NONE);
                registry.with(compact_layer).try_init()?;
            }
        }

        self.log_startup_info();
        Ok(())
    }

    fn log_startup_info(&self) {
        info!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            environment = %self.environment,
            log.level = %self.level,
            log.format = ?self.format,
            "Bakery production server starting up"
        );

        let config_summary = json!({
            "service": {
                "name": self.service_name,
                "version": self.service_version,
                "environment": self.environment.to_string()
            },
            "logging": {
                "level": self.level.to_string(),
                "format": format!("{:?}", self.format),
                "location": self.include_location,
                "spans": self.include_spans
            }
        });

        info!("Configuration loaded: {}", config_summary);
    }
}

/// Initialize logging for a loaded server configuration
///
/// # Errors
///
/// Returns an error if logging initialization fails
pub fn init_from_config(config: &ServerConfig) -> Result<()> {
    LoggingConfig::from_server_config(config).init()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::environment::{CorsConfig, DatabaseConfig, DatabaseUrl};

    #[test]
    fn test_log_format_parsing() {
        assert_eq!(LogFormat::from_str_or_default("json"), LogFormat::Json);
        assert_eq!(LogFormat::from_str_or_default("compact"), LogFormat::Compact);
        assert_eq!(LogFormat::from_str_or_default("anything"), LogFormat::Pretty);
    }

    #[test]
    fn test_default_config_names_the_server() {
        let config = LoggingConfig::default();
        assert_eq!(config.service_name, service_names::BAKERY_SERVER);
        assert_eq!(config.format, LogFormat::Pretty);
        assert!(!config.include_spans);
    }

    #[test]
    fn test_level_follows_server_config() {
        let server_config = ServerConfig {
            http_port: 8081,
            log_level: LogLevel::Debug,
            environment: Environment::Production,
            database: DatabaseConfig {
                url: DatabaseUrl::default(),
                auto_migrate: false,
            },
            cors: CorsConfig {
                allowed_origins: "*".to_owned(),
            },
            server_version: "test".to_owned(),
        };

        let config = LoggingConfig::from_server_config(&server_config);
        assert_eq!(config.level, LogLevel::Debug);
        assert_eq!(config.environment, Environment::Production);
        assert!(config.include_location);
        assert!(config.include_spans);

        let filter = config.env_filter().to_string();
        assert!(filter.contains("debug"));
        assert!(filter.contains("bakery_inventory=debug"));
    }
}
