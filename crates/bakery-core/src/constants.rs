// ABOUTME: Application constants shared by the engine and the HTTP server
// ABOUTME: Header names, route paths, and service identifiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

/// HTTP header names
pub mod headers {
    /// Header carrying the caller's tenant id
    pub const TENANT_ID: &str = "x-tenant-id";
    /// Header carrying the request correlation id
    pub const REQUEST_ID: &str = "x-request-id";
}

/// Service identifiers used in logs
pub mod service_names {
    /// Name of the HTTP server binary
    pub const BAKERY_SERVER: &str = "bakery-server";
}

/// Default values for environment configuration
pub mod defaults {
    /// Default HTTP port
    pub const HTTP_PORT: u16 = 8081;
    /// Default database location
    pub const DATABASE_URL: &str = "sqlite:./data/bakery.db";
    /// Default log level
    pub const LOG_LEVEL: &str = "info";
}
