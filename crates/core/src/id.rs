//! Strongly-typed product identifier.

use core::borrow::Borrow;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::InventoryError;

/// Identifier of a product within an inventory.
///
/// Free-form text chosen by the operator (e.g. `"E1"`), never blank.
/// Immutable once a product has been created with it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProductId(String);

impl ProductId {
    pub fn new(value: impl Into<String>) -> Result<Self, InventoryError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(InventoryError::validation("product id cannot be empty"));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Lets keyed collections be queried with a plain `&str`.
impl Borrow<str> for ProductId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ProductId {
    type Error = InventoryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ProductId> for String {
    fn from(value: ProductId) -> Self {
        value.0
    }
}

impl FromStr for ProductId {
    type Err = InventoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_ids_are_rejected() {
        assert!(ProductId::new("").is_err());
        assert!(ProductId::new("   ").is_err());
        assert!("".parse::<ProductId>().is_err());
    }

    #[test]
    fn id_is_kept_verbatim() {
        let id = ProductId::new(" E1 ").unwrap();
        assert_eq!(id.as_str(), " E1 ");
        assert_eq!(id.to_string(), " E1 ");
    }

    #[test]
    fn serializes_as_plain_string() {
        let id: ProductId = "C-42".parse().unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"C-42\"");
        let back: ProductId = serde_json::from_str("\"C-42\"").unwrap();
        assert_eq!(back, id);
        assert!(serde_json::from_str::<ProductId>("\"\"").is_err());
    }
}
