//! Persistence codec: inventory <-> tagged record array.
//!
//! The external form is a JSON array with one object per product, in
//! inventory order. Decoding is all-or-nothing: the first bad record aborts
//! the whole load and no partial inventory escapes.

pub mod record;

use std::io::Write;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use stockroom_core::{InventoryError, InventoryResult};
use stockroom_inventory::Inventory;
use stockroom_products::Product;

pub use record::ProductRecord;

const INDENT: &[u8] = b"    ";

/// One record per product, in collection order.
pub fn save(inventory: &Inventory) -> Vec<ProductRecord> {
    inventory.iter().map(ProductRecord::from).collect()
}

/// Rebuild an inventory from records.
///
/// Every failure (bad values, duplicate ids) is reported as
/// `InvalidProductData`; the finer-grained kind only survives as text in
/// `cause`.
pub fn load<I>(records: I) -> InventoryResult<Inventory>
where
    I: IntoIterator<Item = ProductRecord>,
{
    let mut inventory = Inventory::new();
    for (index, record) in records.into_iter().enumerate() {
        Product::try_from(record)
            .and_then(|product| inventory.add_product(product))
            .map_err(|e| InventoryError::invalid_data(format!("record {index}: {e}")))?;
    }
    Ok(inventory)
}

/// Write the inventory as a pretty-printed JSON array.
pub fn write_json<W: Write>(inventory: &Inventory, writer: W) -> serde_json::Result<()> {
    let mut ser = serde_json::Serializer::with_formatter(writer, PrettyFormatter::with_indent(INDENT));
    save(inventory).serialize(&mut ser)
}

pub fn encode_json(inventory: &Inventory) -> serde_json::Result<String> {
    let mut buf = Vec::new();
    write_json(inventory, &mut buf)?;
    String::from_utf8(buf).map_err(<serde_json::Error as serde::ser::Error>::custom)
}

/// Parse a JSON record array; unknown `type` tags, missing or malformed
/// fields and non-array documents all fail with `InvalidProductData`.
pub fn decode_json(text: &str) -> InventoryResult<Inventory> {
    let records: Vec<ProductRecord> =
        serde_json::from_str(text).map_err(InventoryError::invalid_data)?;
    load(records)
}
