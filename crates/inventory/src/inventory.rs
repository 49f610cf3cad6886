use chrono::NaiveDate;
use indexmap::IndexMap;

use stockroom_core::{InventoryError, InventoryResult, ProductId};
use stockroom_products::{Product, ProductCategory, today};

/// Products of one store, keyed by id.
///
/// Iteration follows insertion order; removals keep the relative order of
/// the remaining products.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inventory {
    products: IndexMap<ProductId, Product>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.products.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }

    /// Insert a product; its id must not already be present.
    ///
    /// Field validation is the product constructor's job, not repeated here.
    pub fn add_product(&mut self, product: Product) -> InventoryResult<()> {
        if self.products.contains_key(product.id()) {
            return Err(InventoryError::duplicate(product.id().clone()));
        }
        self.products.insert(product.id().clone(), product);
        Ok(())
    }

    pub fn remove_product(&mut self, id: &ProductId) -> InventoryResult<Product> {
        self.products
            .shift_remove(id)
            .ok_or_else(|| InventoryError::not_found(id.clone()))
    }

    pub fn sell_product(&mut self, id: &ProductId, quantity: i64) -> InventoryResult<()> {
        self.product_mut(id)?.sell(quantity)
    }

    pub fn restock_product(&mut self, id: &ProductId, quantity: i64) -> InventoryResult<()> {
        self.product_mut(id)?.restock(quantity);
        Ok(())
    }

    /// Case-insensitive substring match on product names.
    pub fn search_by_name(&self, needle: &str) -> Vec<&Product> {
        let needle = needle.to_lowercase();
        self.iter()
            .filter(|p| p.name().to_lowercase().contains(&needle))
            .collect()
    }

    pub fn search_by_type(&self, category: ProductCategory) -> Vec<&Product> {
        self.iter().filter(|p| p.category() == category).collect()
    }

    pub fn list_all(&self) -> Vec<&Product> {
        self.iter().collect()
    }

    /// Sum of `price × quantity_in_stock` over every product.
    pub fn total_inventory_value(&self) -> f64 {
        self.iter().map(Product::total_value).sum()
    }

    /// Drop every grocery past its expiry date today; returns removed ids.
    pub fn remove_expired_products(&mut self) -> Vec<ProductId> {
        self.remove_expired_products_as_of(today())
    }

    pub fn remove_expired_products_as_of(&mut self, date: NaiveDate) -> Vec<ProductId> {
        let mut removed = Vec::new();
        self.products.retain(|id, product| {
            let expired =
                product.category() == ProductCategory::Grocery && product.is_expired_on(date);
            if expired {
                removed.push(id.clone());
            }
            !expired
        });
        removed
    }

    fn product_mut(&mut self, id: &ProductId) -> InventoryResult<&mut Product> {
        self.products
            .get_mut(id)
            .ok_or_else(|| InventoryError::not_found(id.clone()))
    }
}

impl<'a> IntoIterator for &'a Inventory {
    type Item = &'a Product;
    type IntoIter = indexmap::map::Values<'a, ProductId, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.values()
    }
}
