//! External record shape of a product.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use stockroom_core::{InventoryError, Price, ProductId};
use stockroom_products::{Product, ProductKind};

/// One persisted product, tagged by `type`.
///
/// Field names are camelCase. The snake_case names written by older files
/// (`product_id`, `quantity_in_stock`, ...) are accepted as aliases on read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ProductRecord {
    Electronics {
        #[serde(alias = "product_id")]
        id: String,
        name: String,
        price: f64,
        #[serde(rename = "quantityInStock", alias = "quantity_in_stock")]
        quantity_in_stock: i64,
        #[serde(rename = "warrantyYears", alias = "warranty_years")]
        warranty_years: u32,
        brand: String,
    },
    Grocery {
        #[serde(alias = "product_id")]
        id: String,
        name: String,
        price: f64,
        #[serde(rename = "quantityInStock", alias = "quantity_in_stock")]
        quantity_in_stock: i64,
        #[serde(rename = "expiryDate", alias = "expiry_date")]
        expiry_date: NaiveDate,
    },
    Clothing {
        #[serde(alias = "product_id")]
        id: String,
        name: String,
        price: f64,
        #[serde(rename = "quantityInStock", alias = "quantity_in_stock")]
        quantity_in_stock: i64,
        size: String,
        material: String,
    },
}

impl From<&Product> for ProductRecord {
    fn from(product: &Product) -> Self {
        let id = product.id().to_string();
        let name = product.name().to_string();
        let price = product.price().amount();
        let quantity_in_stock = product.quantity_in_stock();

        match product.kind() {
            ProductKind::Electronics {
                warranty_years,
                brand,
            } => ProductRecord::Electronics {
                id,
                name,
                price,
                quantity_in_stock,
                warranty_years: *warranty_years,
                brand: brand.clone(),
            },
            ProductKind::Grocery { expiry_date } => ProductRecord::Grocery {
                id,
                name,
                price,
                quantity_in_stock,
                expiry_date: *expiry_date,
            },
            ProductKind::Clothing { size, material } => ProductRecord::Clothing {
                id,
                name,
                price,
                quantity_in_stock,
                size: size.clone(),
                material: material.clone(),
            },
        }
    }
}

/// Rebuilds the product through [`Product::restore`]: id, price and name
/// rules are checked again, stock is taken as stored.
impl TryFrom<ProductRecord> for Product {
    type Error = InventoryError;

    fn try_from(record: ProductRecord) -> Result<Self, Self::Error> {
        let (id, name, price, quantity_in_stock, kind) = match record {
            ProductRecord::Electronics {
                id,
                name,
                price,
                quantity_in_stock,
                warranty_years,
                brand,
            } => (
                id,
                name,
                price,
                quantity_in_stock,
                ProductKind::Electronics {
                    warranty_years,
                    brand,
                },
            ),
            ProductRecord::Grocery {
                id,
                name,
                price,
                quantity_in_stock,
                expiry_date,
            } => (
                id,
                name,
                price,
                quantity_in_stock,
                ProductKind::Grocery { expiry_date },
            ),
            ProductRecord::Clothing {
                id,
                name,
                price,
                quantity_in_stock,
                size,
                material,
            } => (
                id,
                name,
                price,
                quantity_in_stock,
                ProductKind::Clothing { size, material },
            ),
        };

        Product::restore(
            ProductId::new(id)?,
            name,
            Price::new(price)?,
            quantity_in_stock,
            kind,
        )
    }
}
