use std::path::PathBuf;

use thiserror::Error;

use stockroom_core::InventoryError;
use stockroom_inventory::Inventory;

/// Snapshot store operation error.
///
/// I/O failures are kept apart from content failures: a file that cannot
/// be opened is `Io`, a file whose records cannot be rebuilt is
/// `Inventory(InvalidProductData)`.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("i/o error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode inventory: {0}")]
    Encode(#[from] serde_json::Error),

    #[error(transparent)]
    Inventory(#[from] InventoryError),

    #[error("snapshot store lock poisoned")]
    Poisoned,
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Whole-inventory save/restore.
///
/// `save` replaces the previous snapshot entirely; there is no partial
/// write and no history. `load` either returns a complete inventory or an
/// error, never a partially rebuilt one.
pub trait SnapshotStore: Send + Sync {
    fn save(&self, inventory: &Inventory) -> Result<(), StoreError>;

    fn load(&self) -> Result<Inventory, StoreError>;
}
