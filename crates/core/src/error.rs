//! Inventory error model.

use thiserror::Error;

use crate::id::ProductId;

/// Result type used across the inventory layers.
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Inventory-level error.
///
/// Every variant is a deterministic business failure. Storage concerns
/// (file handles, encoders) are wrapped by the infrastructure layer instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InventoryError {
    /// A product with the same identifier is already present.
    #[error("a product with ID {id} already exists in the inventory")]
    DuplicateProductId { id: ProductId },

    /// A sale asked for more units than are in stock.
    #[error("insufficient stock for product {id}. Requested: {requested}, Available: {available}")]
    InsufficientStock {
        id: ProductId,
        requested: i64,
        available: i64,
    },

    /// No product with this identifier exists.
    #[error("product with ID {id} not found")]
    NotFound { id: ProductId },

    /// A persisted record set could not be turned back into an inventory.
    ///
    /// `cause` is the rendered underlying failure. Callers only ever see this
    /// kind, whatever went wrong underneath (including duplicate ids).
    #[error("invalid product data encountered while loading: {cause}")]
    InvalidProductData { cause: String },

    /// A field value was rejected when building a product.
    #[error("validation failed: {0}")]
    Validation(String),
}

impl InventoryError {
    pub fn duplicate(id: ProductId) -> Self {
        Self::DuplicateProductId { id }
    }

    pub fn not_found(id: ProductId) -> Self {
        Self::NotFound { id }
    }

    pub fn insufficient_stock(id: ProductId, requested: i64, available: i64) -> Self {
        Self::InsufficientStock {
            id,
            requested,
            available,
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Collapse any failure into `InvalidProductData`, keeping its text.
    pub fn invalid_data(cause: impl core::fmt::Display) -> Self {
        Self::InvalidProductData {
            cause: cause.to_string(),
        }
    }
}
