use core::str::FromStr;

use stockroom_core::InventoryError;

/// Discriminator of the product variants.
///
/// `as_str` yields the variant name verbatim (`"Electronics"`, ...), the same
/// text persisted records carry in their `type` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductCategory {
    Electronics,
    Grocery,
    Clothing,
}

impl ProductCategory {
    pub const ALL: [ProductCategory; 3] = [
        ProductCategory::Electronics,
        ProductCategory::Grocery,
        ProductCategory::Clothing,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProductCategory::Electronics => "Electronics",
            ProductCategory::Grocery => "Grocery",
            ProductCategory::Clothing => "Clothing",
        }
    }
}

impl core::fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive, surrounding whitespace ignored.
impl FromStr for ProductCategory {
    type Err = InventoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "electronics" => Ok(ProductCategory::Electronics),
            "grocery" => Ok(ProductCategory::Grocery),
            "clothing" => Ok(ProductCategory::Clothing),
            _ => Err(InventoryError::validation(
                "product type must be one of: Electronics, Grocery, Clothing",
            )),
        }
    }
}
