// ABOUTME: Error types for the bakery production server
// ABOUTME: Re-exports the shared AppError system from bakery-core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Error handling for the server crate
//!
//! The server uses the [`AppError`] defined in `bakery-core`; engine
//! failures convert through `From<ProductionError>` and store failures
//! through `From<DatabaseError>`.

pub use bakery_core::errors::{AppError, AppResult, DatabaseError, ErrorCode, ErrorResponse};
