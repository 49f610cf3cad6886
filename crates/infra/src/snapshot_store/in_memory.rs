use std::sync::RwLock;

use stockroom_inventory::Inventory;

use super::r#trait::{SnapshotStore, StoreError};
use crate::codec;

/// In-memory snapshot store.
///
/// Holds the encoded JSON text so loads go through the same codec as the
/// file store. Intended for tests/dev. Loading before any save yields an
/// empty inventory.
#[derive(Debug, Default)]
pub struct InMemorySnapshotStore {
    snapshot: RwLock<Option<String>>,
}

impl InMemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with raw text, e.g. a hand-written record array.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            snapshot: RwLock::new(Some(text.into())),
        }
    }

    pub fn text(&self) -> Result<Option<String>, StoreError> {
        let guard = self.snapshot.read().map_err(|_| StoreError::Poisoned)?;
        Ok(guard.clone())
    }
}

impl SnapshotStore for InMemorySnapshotStore {
    fn save(&self, inventory: &Inventory) -> Result<(), StoreError> {
        let text = codec::encode_json(inventory)?;
        let mut guard = self.snapshot.write().map_err(|_| StoreError::Poisoned)?;
        *guard = Some(text);
        Ok(())
    }

    fn load(&self) -> Result<Inventory, StoreError> {
        let guard = self.snapshot.read().map_err(|_| StoreError::Poisoned)?;
        match guard.as_deref() {
            Some(text) => Ok(codec::decode_json(text)?),
            None => Ok(Inventory::new()),
        }
    }
}
