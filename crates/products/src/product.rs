use chrono::{Local, NaiveDate};

use stockroom_core::{InventoryError, InventoryResult, Price, ProductId};

use crate::category::ProductCategory;

/// Today's local calendar date; the reference point for expiry checks.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Category-specific data of a product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductKind {
    Electronics { warranty_years: u32, brand: String },
    Grocery { expiry_date: NaiveDate },
    Clothing { size: String, material: String },
}

impl ProductKind {
    pub fn category(&self) -> ProductCategory {
        match self {
            ProductKind::Electronics { .. } => ProductCategory::Electronics,
            ProductKind::Grocery { .. } => ProductCategory::Grocery,
            ProductKind::Clothing { .. } => ProductCategory::Clothing,
        }
    }
}

/// A stocked product: shared attributes plus its category data.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    id: ProductId,
    name: String,
    price: Price,
    quantity_in_stock: i64,
    kind: ProductKind,
}

impl Product {
    /// Build a product, validating the shared fields.
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: Price,
        quantity_in_stock: i64,
        kind: ProductKind,
    ) -> InventoryResult<Self> {
        if quantity_in_stock < 0 {
            return Err(InventoryError::validation(
                "quantity in stock cannot be negative",
            ));
        }
        Self::restore(id, name, price, quantity_in_stock, kind)
    }

    /// Rebuild a previously stored product.
    ///
    /// Same rules as [`Product::new`] except that stock is taken as given:
    /// a negative restock can leave stock below zero and that state must
    /// reload unchanged.
    pub fn restore(
        id: ProductId,
        name: impl Into<String>,
        price: Price,
        quantity_in_stock: i64,
        kind: ProductKind,
    ) -> InventoryResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(InventoryError::validation("name cannot be empty"));
        }
        Ok(Self {
            id,
            name,
            price,
            quantity_in_stock,
            kind,
        })
    }

    pub fn electronics(
        id: ProductId,
        name: impl Into<String>,
        price: Price,
        quantity_in_stock: i64,
        warranty_years: u32,
        brand: impl Into<String>,
    ) -> InventoryResult<Self> {
        let kind = ProductKind::Electronics {
            warranty_years,
            brand: brand.into(),
        };
        Self::new(id, name, price, quantity_in_stock, kind)
    }

    pub fn grocery(
        id: ProductId,
        name: impl Into<String>,
        price: Price,
        quantity_in_stock: i64,
        expiry_date: NaiveDate,
    ) -> InventoryResult<Self> {
        Self::new(
            id,
            name,
            price,
            quantity_in_stock,
            ProductKind::Grocery { expiry_date },
        )
    }

    pub fn clothing(
        id: ProductId,
        name: impl Into<String>,
        price: Price,
        quantity_in_stock: i64,
        size: impl Into<String>,
        material: impl Into<String>,
    ) -> InventoryResult<Self> {
        let kind = ProductKind::Clothing {
            size: size.into(),
            material: material.into(),
        };
        Self::new(id, name, price, quantity_in_stock, kind)
    }

    pub fn id(&self) -> &ProductId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn quantity_in_stock(&self) -> i64 {
        self.quantity_in_stock
    }

    pub fn kind(&self) -> &ProductKind {
        &self.kind
    }

    pub fn category(&self) -> ProductCategory {
        self.kind.category()
    }

    /// Add `amount` units to stock.
    ///
    /// No lower bound is enforced: a zero or negative amount is applied as
    /// given, so "restocking" can reduce stock and even drive it below zero.
    pub fn restock(&mut self, amount: i64) {
        self.quantity_in_stock = self.quantity_in_stock.saturating_add(amount);
    }

    /// Remove `quantity` units from stock, all or nothing.
    pub fn sell(&mut self, quantity: i64) -> InventoryResult<()> {
        if quantity > self.quantity_in_stock {
            return Err(InventoryError::insufficient_stock(
                self.id.clone(),
                quantity,
                self.quantity_in_stock,
            ));
        }
        self.quantity_in_stock = self.quantity_in_stock.saturating_sub(quantity);
        Ok(())
    }

    /// `price × quantity_in_stock`.
    pub fn total_value(&self) -> f64 {
        self.price.times(self.quantity_in_stock)
    }

    /// Whether the product is past its expiry date today.
    ///
    /// Only groceries expire; every other category is never expired.
    pub fn is_expired(&self) -> bool {
        self.is_expired_on(today())
    }

    /// Expired means `date` is strictly after the expiry date.
    pub fn is_expired_on(&self, date: NaiveDate) -> bool {
        match self.kind {
            ProductKind::Grocery { expiry_date } => date > expiry_date,
            _ => false,
        }
    }

    /// Human-readable summary; grocery status is evaluated against today.
    pub fn describe(&self) -> String {
        self.describe_on(today())
    }

    pub fn describe_on(&self, date: NaiveDate) -> String {
        let head = format!(
            "[{}] ID: {}, Name: {}, Price: {}, Stock: {}",
            self.category(),
            self.id,
            self.name,
            self.price,
            self.quantity_in_stock
        );
        match &self.kind {
            ProductKind::Electronics {
                warranty_years,
                brand,
            } => format!("{head}, Brand: {brand}, Warranty: {warranty_years} years"),
            ProductKind::Grocery { expiry_date } => {
                let status = if self.is_expired_on(date) {
                    "Expired"
                } else {
                    "Not Expired"
                };
                format!(
                    "{head}, Expiry Date: {}, Status: {status}",
                    expiry_date.format("%Y-%m-%d")
                )
            }
            ProductKind::Clothing { size, material } => {
                format!("{head}, Size: {size}, Material: {material}")
            }
        }
    }
}

impl core::fmt::Display for Product {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.describe())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> ProductId {
        ProductId::new(s).unwrap()
    }

    fn price(amount: f64) -> Price {
        Price::new(amount).unwrap()
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn tv() -> Product {
        Product::electronics(id("E1"), "TV", price(100.0), 5, 2, "Acme").unwrap()
    }

    fn milk(expiry: &str) -> Product {
        Product::grocery(id("G1"), "Milk", price(2.5), 10, date(expiry)).unwrap()
    }

    #[test]
    fn electronics_sell_scenario() {
        let mut product = tv();
        assert_eq!(product.total_value(), 500.0);

        product.sell(3).unwrap();
        assert_eq!(product.quantity_in_stock(), 2);

        let err = product.sell(5).unwrap_err();
        assert_eq!(err, InventoryError::insufficient_stock(id("E1"), 5, 2));
        assert_eq!(product.quantity_in_stock(), 2);
    }

    #[test]
    fn selling_exact_stock_empties_it() {
        let mut product = tv();
        product.sell(5).unwrap();
        assert_eq!(product.quantity_in_stock(), 0);
        assert_eq!(product.total_value(), 0.0);
    }

    #[test]
    fn restock_accepts_non_positive_amounts() {
        // Documented behavior: restock has no lower bound.
        let mut product = tv();
        product.restock(0);
        assert_eq!(product.quantity_in_stock(), 5);
        product.restock(-7);
        assert_eq!(product.quantity_in_stock(), -2);
    }

    #[test]
    fn constructor_rejects_bad_shared_fields() {
        let kind = ProductKind::Clothing {
            size: "M".to_string(),
            material: "Cotton".to_string(),
        };
        let err = Product::new(id("C1"), "  ", price(1.0), 1, kind.clone()).unwrap_err();
        assert!(matches!(err, InventoryError::Validation(_)));

        let err = Product::new(id("C1"), "Shirt", price(1.0), -1, kind).unwrap_err();
        assert!(matches!(err, InventoryError::Validation(_)));
    }

    #[test]
    fn restore_keeps_negative_stock_but_checks_name() {
        let kind = ProductKind::Electronics {
            warranty_years: 1,
            brand: "Acme".to_string(),
        };
        let product = Product::restore(id("E1"), "TV", price(10.0), -4, kind.clone()).unwrap();
        assert_eq!(product.quantity_in_stock(), -4);
        assert_eq!(product.total_value(), -40.0);

        let err = Product::restore(id("E1"), "", price(10.0), -4, kind).unwrap_err();
        assert!(matches!(err, InventoryError::Validation(_)));
    }

    #[test]
    fn grocery_expiry_is_strictly_after_expiry_date() {
        let product = milk("2024-03-15");
        assert!(!product.is_expired_on(date("2024-03-14")));
        assert!(!product.is_expired_on(date("2024-03-15")));
        assert!(product.is_expired_on(date("2024-03-16")));
    }

    #[test]
    fn grocery_expiry_uses_current_date() {
        let yesterday = today().pred_opt().unwrap();
        let tomorrow = today().succ_opt().unwrap();
        let old = Product::grocery(id("G1"), "Milk", price(1.0), 1, yesterday).unwrap();
        let fresh = Product::grocery(id("G2"), "Bread", price(1.0), 1, tomorrow).unwrap();
        assert!(old.is_expired());
        assert!(!fresh.is_expired());
    }

    #[test]
    fn non_grocery_never_expires() {
        assert!(!tv().is_expired_on(NaiveDate::MAX));
    }

    #[test]
    fn describe_electronics() {
        assert_eq!(
            tv().describe(),
            "[Electronics] ID: E1, Name: TV, Price: $100.00, Stock: 5, Brand: Acme, Warranty: 2 years"
        );
    }

    #[test]
    fn describe_grocery_reports_status_at_call_time() {
        let product = milk("2024-03-15");
        assert_eq!(
            product.describe_on(date("2024-03-10")),
            "[Grocery] ID: G1, Name: Milk, Price: $2.50, Stock: 10, Expiry Date: 2024-03-15, Status: Not Expired"
        );
        assert!(product.describe_on(date("2024-04-01")).ends_with("Status: Expired"));
    }

    #[test]
    fn describe_clothing() {
        let shirt =
            Product::clothing(id("C1"), "Shirt", price(20.0), 3, "M", "Cotton").unwrap();
        assert_eq!(
            shirt.to_string(),
            "[Clothing] ID: C1, Name: Shirt, Price: $20.00, Stock: 3, Size: M, Material: Cotton"
        );
    }

    #[test]
    fn category_follows_kind() {
        assert_eq!(tv().category(), ProductCategory::Electronics);
        assert_eq!(milk("2030-01-01").category(), ProductCategory::Grocery);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 512,
                ..ProptestConfig::default()
            })]

            /// Property: a sale either removes exactly `q` units or fails leaving stock untouched.
            #[test]
            fn sell_conserves_stock(stock in 0i64..10_000, q in 0i64..20_000) {
                let mut product =
                    Product::electronics(id("E1"), "TV", price(1.0), stock, 1, "Acme").unwrap();
                match product.sell(q) {
                    Ok(()) => {
                        prop_assert!(q <= stock);
                        prop_assert_eq!(product.quantity_in_stock(), stock - q);
                    }
                    Err(err) => {
                        prop_assert!(q > stock);
                        prop_assert_eq!(err, InventoryError::insufficient_stock(id("E1"), q, stock));
                        prop_assert_eq!(product.quantity_in_stock(), stock);
                    }
                }
            }

            /// Property: restock(a) yields s + a for any a, negative included.
            #[test]
            fn restock_is_additive(stock in 0i64..10_000, a in -20_000i64..20_000) {
                let mut product =
                    Product::clothing(id("C1"), "Shirt", price(1.0), stock, "M", "Wool").unwrap();
                product.restock(a);
                prop_assert_eq!(product.quantity_in_stock(), stock + a);
            }

            /// Property: total value is price times stock.
            #[test]
            fn total_value_is_price_times_stock(cents in 0u32..1_000_000, stock in 0i64..10_000) {
                let amount = f64::from(cents) / 100.0;
                let product =
                    Product::grocery(id("G1"), "Milk", price(amount), stock, date("2030-01-01")).unwrap();
                prop_assert_eq!(product.total_value(), amount * stock as f64);
            }
        }
    }
}
