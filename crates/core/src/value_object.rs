//! Value objects: equality by value, not identity.

use serde::{Deserialize, Serialize};

use crate::error::InventoryError;

/// Marker trait for value objects.
///
/// Value objects have **no identity**: two instances holding the same values
/// are interchangeable. They are immutable; "changing" one means building a
/// new one.
///
/// ```ignore
/// let a = Price::new(9.99)?;
/// let b = Price::new(9.99)?;
/// assert_eq!(a, b);
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

/// Unit price of a product.
///
/// A plain decimal amount with no currency attached; always finite and
/// non-negative.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Price(f64);

impl ValueObject for Price {}

impl Price {
    pub const ZERO: Price = Price(0.0);

    pub fn new(amount: f64) -> Result<Self, InventoryError> {
        if !amount.is_finite() {
            return Err(InventoryError::validation("price must be a finite number"));
        }
        if amount < 0.0 {
            return Err(InventoryError::validation("price cannot be negative"));
        }
        // Normalise -0.0 so it prints and compares like 0.0.
        Ok(Self(amount + 0.0))
    }

    pub fn amount(self) -> f64 {
        self.0
    }

    /// Value of `quantity` units at this price.
    pub fn times(self, quantity: i64) -> f64 {
        self.0 * quantity as f64
    }
}

impl Default for Price {
    fn default() -> Self {
        Self::ZERO
    }
}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

impl TryFrom<f64> for Price {
    type Error = InventoryError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Price> for f64 {
    fn from(value: Price) -> Self {
        value.0
    }
}
