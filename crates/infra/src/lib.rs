//! Infrastructure layer: persistence codec and snapshot stores.

pub mod codec;
pub mod snapshot_store;

pub use codec::{ProductRecord, decode_json, encode_json};
pub use snapshot_store::{InMemorySnapshotStore, JsonFileStore, SnapshotStore, StoreError};
