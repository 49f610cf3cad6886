//! Whole-inventory snapshot persistence.
//!
//! A small trait in front of the codec so the shell can work against a file
//! in production and an in-memory buffer in tests.

pub mod in_memory;
pub mod json_file;
pub mod r#trait;

pub use in_memory::InMemorySnapshotStore;
pub use json_file::JsonFileStore;
pub use r#trait::{SnapshotStore, StoreError};
