//! Inventory collection.
//!
//! Owns the products of a store keyed by id and enforces the collection
//! invariants (unique ids, existence checks) on top of the product rules.
//! Pure domain logic: no IO, no logging.

pub mod inventory;

pub use inventory::Inventory;
