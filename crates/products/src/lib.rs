//! Product variant model.
//!
//! This crate contains the per-category business rules for products,
//! implemented purely as deterministic domain logic (no IO, no storage).

pub mod category;
pub mod product;

pub use category::ProductCategory;
pub use product::{Product, ProductKind, today};
