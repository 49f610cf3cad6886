use anyhow::Context;
use clap::Parser;

use stockroom_cli::{CliArgs, Shell};
use stockroom_infra::{JsonFileStore, SnapshotStore};
use stockroom_inventory::Inventory;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    stockroom_observability::init(&args.log_settings());

    let inventory = if args.load {
        let store = JsonFileStore::new(&args.file);
        let inventory = store
            .load()
            .with_context(|| format!("failed to load inventory from {}", args.file.display()))?;
        tracing::info!(path = %args.file.display(), products = inventory.len(), "inventory loaded at start-up");
        inventory
    } else {
        Inventory::new()
    };

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut shell = Shell::new(inventory, args.file.clone(), stdin.lock(), stdout.lock());
    shell.run().context("shell terminated on a terminal i/o error")?;
    Ok(())
}
