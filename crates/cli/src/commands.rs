use std::io::Write;

use anyhow::Context;

use stockbook_inventory::{InventoryFile, InventoryStore, Removal};

use crate::cli::Commands;
use crate::config::CliConfig;

/// Execute one command against the configured inventory file, writing
/// human-readable output to `out`.
pub fn run(command: &Commands, config: &CliConfig, out: &mut impl Write) -> anyhow::Result<()> {
    let file = InventoryFile::new(&config.file);
    let mut store = file
        .load_or_empty()
        .with_context(|| format!("failed to open inventory at {:?}", file.path()))?;

    match command {
        Commands::Add { item, qty } => {
            let entry = store
                .add(item, *qty)
                .with_context(|| format!("could not add {qty} of '{item}'"))?;
            writeln!(out, "{entry}")?;
            save(&file, &store, out)?;
        }
        Commands::Remove { item, qty } => {
            let removal = store
                .remove(item, *qty)
                .with_context(|| format!("could not remove {qty} of '{item}'"))?;
            match removal {
                Removal::Reduced { remaining } => {
                    writeln!(out, "Removed {qty} of {item}; {remaining} left")?
                }
                Removal::Depleted => writeln!(out, "Removed {qty} of {item}; none left")?,
            }
            save(&file, &store, out)?;
        }
        Commands::Get { item } => {
            writeln!(out, "{item}: {}", store.get_quantity(item))?;
        }
        Commands::LowStock { threshold } => {
            let threshold = threshold.unwrap_or(config.low_stock_threshold);
            write_low_stock(&store, threshold, out)?;
        }
        Commands::Report => {
            write!(out, "{}", store.report())?;
        }
        Commands::Demo => demo(&file, &mut store, config.low_stock_threshold, out)?,
    }

    Ok(())
}

fn save(file: &InventoryFile, store: &InventoryStore, out: &mut impl Write) -> anyhow::Result<()> {
    file.save(store)
        .with_context(|| format!("failed to save inventory to {:?}", file.path()))?;
    writeln!(out, "Inventory data saved successfully.")?;
    Ok(())
}

fn write_low_stock(
    store: &InventoryStore,
    threshold: i64,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let low = store.low_stock(threshold);
    if low.is_empty() {
        writeln!(out, "No items below {threshold}.")?;
    } else {
        writeln!(out, "Low items: {}", low.join(", "))?;
    }
    Ok(())
}

fn demo(
    file: &InventoryFile,
    store: &mut InventoryStore,
    threshold: i64,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let mut log = Vec::new();
    store.add_logged("apple", 10, &mut log)?;
    store.add_logged("banana", 2, &mut log)?;
    store.remove("apple", 3)?;

    for entry in &log {
        writeln!(out, "{entry}")?;
    }
    writeln!(out, "Apple stock: {}", store.get_quantity("apple"))?;
    write_low_stock(store, threshold, out)?;
    save(file, store, out)?;
    writeln!(out)?;
    write!(out, "{}", store.report())?;
    Ok(())
}
