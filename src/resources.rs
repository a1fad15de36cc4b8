// ABOUTME: Shared server resources handed to every route handler
// ABOUTME: Holds configuration and the production service built over the inventory store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use crate::config::environment::ServerConfig;
use crate::database::InventoryProvider;
use crate::services::ProductionService;
use std::sync::Arc;

/// Server resources with proper Arc sharing
#[derive(Clone)]
pub struct ServerResources {
    /// Loaded configuration
    pub config: Arc<ServerConfig>,
    /// Feasibility and costing over the tenant-scoped store
    pub production: ProductionService,
}

impl ServerResources {
    /// Wire resources around one store
    #[must_use]
    pub fn new(config: Arc<ServerConfig>, store: Arc<dyn InventoryProvider>) -> Self {
        Self {
            config,
            production: ProductionService::new(store),
        }
    }
}
