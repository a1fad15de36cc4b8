// ABOUTME: CORS middleware configuration for HTTP API endpoints
// ABOUTME: Provides Cross-Origin Resource Sharing setup for bakery dashboards
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use crate::config::environment::ServerConfig;
use crate::constants::headers;
use http::{header::HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Configure CORS from `CORS_ORIGINS`
///
/// `*` or an empty value allows any origin. Otherwise the value is a
/// comma-separated origin list; unparseable entries are skipped.
#[must_use]
pub fn setup_cors(config: &ServerConfig) -> CorsLayer {
    let allowed = config.cors.allowed_origins.trim();
    let allow_origin = if allowed.is_empty() || allowed == "*" {
        AllowOrigin::any()
    } else {
        let origins: Vec<HeaderValue> = allowed
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .filter_map(|origin| HeaderValue::from_str(origin).ok())
            .collect();

        if origins.is_empty() {
            AllowOrigin::any()
        } else {
            AllowOrigin::list(origins)
        }
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_headers([
            HeaderName::from_static("content-type"),
            HeaderName::from_static("accept"),
            HeaderName::from_static("origin"),
            HeaderName::from_static(headers::TENANT_ID),
            HeaderName::from_static(headers::REQUEST_ID),
        ])
        .allow_methods([Method::GET, Method::OPTIONS])
}
