// ABOUTME: Error kinds raised by feasibility and cost analysis
// ABOUTME: ProductionError and its mapping onto application error codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use bakery_core::errors::AppError;
use uuid::Uuid;

/// Failures of a production analysis
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProductionError {
    /// The inventory snapshot could not be fetched
    #[error("Inventory data unavailable: {reason}")]
    DataUnavailable {
        /// What went wrong upstream
        reason: String,
    },

    /// The requested recipe does not exist for this tenant
    #[error("Recipe {recipe_id} not found")]
    NotFound {
        /// Requested recipe id
        recipe_id: Uuid,
    },

    /// Cost per unit was requested for a recipe with a non-positive yield
    #[error("Recipe '{recipe}' has invalid yield quantity {yield_quantity}")]
    InvalidYield {
        /// Recipe name
        recipe: String,
        /// Offending yield
        yield_quantity: f64,
    },
}

impl From<ProductionError> for AppError {
    fn from(error: ProductionError) -> Self {
        match error {
            ProductionError::NotFound { recipe_id } => Self::not_found(format!("Recipe {recipe_id}")),
            ProductionError::DataUnavailable { .. } => Self::data_unavailable(error.to_string()),
            ProductionError::InvalidYield { .. } => Self::invalid_input(error.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bakery_core::errors::ErrorCode;

    #[test]
    fn test_not_found_maps_to_404_with_recipe_id() {
        let recipe_id = Uuid::new_v4();
        let error = AppError::from(ProductionError::NotFound { recipe_id });

        assert_eq!(error.code, ErrorCode::ResourceNotFound);
        assert_eq!(error.http_status(), 404);
        assert_eq!(error.message, format!("Recipe {recipe_id} not found"));
    }

    #[test]
    fn test_data_unavailable_maps_to_500() {
        let error = AppError::from(ProductionError::DataUnavailable {
            reason: "store offline".to_owned(),
        });

        assert_eq!(error.code, ErrorCode::DataUnavailable);
        assert_eq!(error.http_status(), 500);
        assert!(error.message.contains("store offline"));
    }
}
