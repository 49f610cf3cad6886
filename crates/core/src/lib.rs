//! `stockroom-core`: shared building blocks for the stockroom inventory.
//!
//! This crate contains **pure domain** primitives (no IO, no logging):
//! identifiers, value objects and the error model shared by every layer.

pub mod error;
pub mod id;
pub mod value_object;

pub use error::{InventoryError, InventoryResult};
pub use id::ProductId;
pub use value_object::{Price, ValueObject};
