// ABOUTME: Configuration module for the bakery production server
// ABOUTME: Environment-only configuration loaded at startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

/// Environment variable driven server configuration
pub mod environment;

pub use environment::{DatabaseUrl, Environment, LogLevel, ServerConfig};
