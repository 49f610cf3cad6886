use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;

use chrono::NaiveDate;
use thiserror::Error;

use stockroom_core::{InventoryError, Price, ProductId};
use stockroom_infra::{JsonFileStore, SnapshotStore, StoreError};
use stockroom_inventory::Inventory;
use stockroom_products::{Product, ProductCategory, ProductKind};

const MENU: &str = "\
=== Inventory Management System ===
1. Add Product
2. Sell Product
3. Restock Product
4. Search by Name
5. List All Products
6. Remove Expired Products
7. Save Inventory to File
8. Load Inventory from File
9. Exit
10. Search by Type
11. Total Inventory Value
12. Remove Product";

/// Failure of one menu action.
///
/// Everything except `Io` and `EndOfInput` is reported to the user and the
/// loop carries on.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("invalid input: {0}")]
    Input(String),

    #[error(transparent)]
    Inventory(#[from] InventoryError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("terminal i/o failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("input closed")]
    EndOfInput,
}

enum Flow {
    Continue,
    Exit,
}

/// Menu loop over a line-oriented input and a text output.
pub struct Shell<R, W> {
    inventory: Inventory,
    default_file: PathBuf,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(inventory: Inventory, default_file: PathBuf, input: R, output: W) -> Self {
        Self {
            inventory,
            default_file,
            input,
            output,
        }
    }

    pub fn into_inventory(self) -> Inventory {
        self.inventory
    }

    /// Run until the user exits or input ends.
    ///
    /// Only terminal I/O failures escape; every other error is printed.
    pub fn run(&mut self) -> Result<(), ShellError> {
        loop {
            writeln!(self.output, "\n{MENU}")?;
            let choice = match self.prompt("Enter your choice: ") {
                Ok(choice) => choice,
                Err(ShellError::EndOfInput) => return Ok(()),
                Err(e) => return Err(e),
            };

            match self.dispatch(choice.trim()) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => return Ok(()),
                Err(ShellError::EndOfInput) => return Ok(()),
                Err(ShellError::Io(e)) => return Err(ShellError::Io(e)),
                Err(e) => {
                    tracing::debug!(choice = %choice.trim(), error = %e, "menu action failed");
                    writeln!(self.output, "{e}")?;
                }
            }
        }
    }

    fn dispatch(&mut self, choice: &str) -> Result<Flow, ShellError> {
        match choice {
            "1" => self.add_product()?,
            "2" => self.sell_product()?,
            "3" => self.restock_product()?,
            "4" => self.search_by_name()?,
            "5" => self.list_all()?,
            "6" => self.remove_expired()?,
            "7" => self.save()?,
            "8" => self.load()?,
            "9" => {
                self.say("Exiting...")?;
                return Ok(Flow::Exit);
            }
            "10" => self.search_by_type()?,
            "11" => self.total_value()?,
            "12" => self.remove_product()?,
            _ => self.say("Invalid choice. Please try again.")?,
        }
        Ok(Flow::Continue)
    }

    fn add_product(&mut self) -> Result<(), ShellError> {
        let category: ProductCategory =
            self.prompt("Enter product type (Electronics/Grocery/Clothing): ")?.parse()?;
        let id = self.prompt_id()?;
        let name = self.prompt("Enter product name: ")?;
        let price = Price::new(self.prompt_parsed::<f64>("Enter product price: ")?)?;
        let quantity = self.prompt_parsed::<i64>("Enter stock quantity: ")?;

        let kind = match category {
            ProductCategory::Electronics => {
                let warranty_years = self.prompt_parsed::<u32>("Enter warranty years: ")?;
                let brand = self.prompt("Enter brand: ")?;
                ProductKind::Electronics {
                    warranty_years,
                    brand,
                }
            }
            ProductCategory::Grocery => {
                let raw = self.prompt("Enter expiry date (YYYY-MM-DD): ")?;
                let expiry_date = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(
                    |e| ShellError::Input(format!("expiry date must be YYYY-MM-DD ({e})")),
                )?;
                ProductKind::Grocery { expiry_date }
            }
            ProductCategory::Clothing => {
                let size = self.prompt("Enter size: ")?;
                let material = self.prompt("Enter material: ")?;
                ProductKind::Clothing { size, material }
            }
        };

        let product = Product::new(id, name, price, quantity, kind)?;
        self.inventory.add_product(product)?;
        self.say("Product added successfully.")
    }

    fn sell_product(&mut self) -> Result<(), ShellError> {
        let id = self.prompt_id()?;
        let quantity = self.prompt_parsed::<i64>("Enter quantity to sell: ")?;
        self.inventory.sell_product(&id, quantity)?;
        self.say(&format!("Sold {quantity} units of product {id}."))
    }

    fn restock_product(&mut self) -> Result<(), ShellError> {
        let id = self.prompt_id()?;
        let quantity = self.prompt_parsed::<i64>("Enter quantity to restock: ")?;
        self.inventory.restock_product(&id, quantity)?;
        self.say(&format!("Restocked {quantity} units of product {id}."))
    }

    fn remove_product(&mut self) -> Result<(), ShellError> {
        let id = self.prompt_id()?;
        self.inventory.remove_product(&id)?;
        self.say(&format!("Removed product {id}."))
    }

    fn search_by_name(&mut self) -> Result<(), ShellError> {
        let needle = self.prompt("Enter product name to search: ")?;
        let lines = describe_all(&self.inventory.search_by_name(&needle));
        self.print_results(lines, "No products found.")
    }

    fn search_by_type(&mut self) -> Result<(), ShellError> {
        let category: ProductCategory =
            self.prompt("Enter product type (Electronics/Grocery/Clothing): ")?.parse()?;
        let lines = describe_all(&self.inventory.search_by_type(category));
        self.print_results(lines, "No products found.")
    }

    fn list_all(&mut self) -> Result<(), ShellError> {
        let lines = describe_all(&self.inventory.list_all());
        self.print_results(lines, "Inventory is empty.")
    }

    fn total_value(&mut self) -> Result<(), ShellError> {
        let total = self.inventory.total_inventory_value();
        self.say(&format!("Total inventory value: ${total:.2}"))
    }

    fn remove_expired(&mut self) -> Result<(), ShellError> {
        let removed = self.inventory.remove_expired_products();
        if removed.is_empty() {
            return self.say("No expired products found.");
        }
        tracing::info!(count = removed.len(), "expired products removed");
        let ids: Vec<&str> = removed.iter().map(ProductId::as_str).collect();
        self.say(&format!("Removed expired products: {}", ids.join(", ")))
    }

    fn save(&mut self) -> Result<(), ShellError> {
        let path = self.prompt_path("Enter filename to save inventory")?;
        JsonFileStore::new(&path).save(&self.inventory)?;
        tracing::info!(path = %path.display(), products = self.inventory.len(), "inventory saved");
        self.say("Inventory saved successfully.")
    }

    /// Replaces the in-memory inventory only when the whole file loads.
    fn load(&mut self) -> Result<(), ShellError> {
        let path = self.prompt_path("Enter filename to load inventory")?;
        let loaded = JsonFileStore::new(&path).load().inspect_err(|e| {
            tracing::warn!(path = %path.display(), error = %e, "inventory load rejected");
        })?;
        tracing::info!(path = %path.display(), products = loaded.len(), "inventory loaded");
        self.inventory = loaded;
        self.say("Inventory loaded successfully.")
    }

    fn print_results(&mut self, lines: Vec<String>, empty: &str) -> Result<(), ShellError> {
        if lines.is_empty() {
            return self.say(empty);
        }
        for line in lines {
            self.say(&line)?;
        }
        Ok(())
    }

    fn say(&mut self, line: &str) -> Result<(), ShellError> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    /// Print `label`, read one line, strip the line ending.
    fn prompt(&mut self, label: &str) -> Result<String, ShellError> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ShellError::EndOfInput);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    /// Surrounding whitespace is not part of an id.
    fn prompt_id(&mut self) -> Result<ProductId, ShellError> {
        let raw = self.prompt("Enter product ID: ")?;
        Ok(raw.trim().parse()?)
    }

    fn prompt_parsed<T>(&mut self, label: &str) -> Result<T, ShellError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        let raw = self.prompt(label)?;
        raw.trim()
            .parse()
            .map_err(|e| ShellError::Input(format!("{:?} is not a valid number ({e})", raw.trim())))
    }

    /// Empty input falls back to the configured default file.
    fn prompt_path(&mut self, label: &str) -> Result<PathBuf, ShellError> {
        let label = format!("{label} [{}]: ", self.default_file.display());
        let raw = self.prompt(&label)?;
        let raw = raw.trim();
        if raw.is_empty() {
            Ok(self.default_file.clone())
        } else {
            Ok(PathBuf::from(raw))
        }
    }
}

fn describe_all(products: &[&Product]) -> Vec<String> {
    products.iter().map(|p| p.describe()).collect()
}
