use std::ffi::OsString;
use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};

use stockroom_inventory::Inventory;

use super::r#trait::{SnapshotStore, StoreError};
use crate::codec;

/// Snapshot store backed by a single JSON file.
///
/// Saving encodes the whole inventory first, writes it to a sibling
/// `<file>.tmp` and renames that over the target, so a failed save leaves
/// the previous snapshot intact. File handles live only for the duration
/// of one call and are closed on every exit path.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl SnapshotStore for JsonFileStore {
    fn save(&self, inventory: &Inventory) -> Result<(), StoreError> {
        let text = codec::encode_json(inventory)?;
        let staging = self.staging_path();
        fs::write(&staging, text).map_err(|e| StoreError::io(&staging, e))?;
        fs::rename(&staging, &self.path).map_err(|e| StoreError::io(&self.path, e))?;
        Ok(())
    }

    fn load(&self) -> Result<Inventory, StoreError> {
        let mut text = String::new();
        File::open(&self.path)
            .and_then(|mut file| file.read_to_string(&mut text))
            .map_err(|e| StoreError::io(&self.path, e))?;

        Ok(codec::decode_json(&text)?)
    }
}
