use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Track stock levels in a JSON inventory file.
#[derive(Debug, Parser)]
#[command(name = "stockbook")]
#[command(about = "Track item quantities and report low stock")]
#[command(version)]
pub struct Cli {
    /// Inventory file to read and write.
    ///
    /// Falls back to $STOCKBOOK_FILE, then `inventory.json`.
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Add units of an item
    Add {
        item: String,
        #[arg(allow_negative_numbers = true)]
        qty: i64,
    },
    /// Remove units of an item (deletes it once none are left)
    Remove {
        item: String,
        #[arg(allow_negative_numbers = true)]
        qty: i64,
    },
    /// Show the quantity on hand for an item
    Get { item: String },
    /// List items below the low-stock threshold
    LowStock {
        /// Overrides $STOCKBOOK_LOW_STOCK_THRESHOLD (default 5)
        #[arg(short, long, allow_negative_numbers = true)]
        threshold: Option<i64>,
    },
    /// Print every item and its quantity
    Report,
    /// Run the apple/banana walkthrough against the inventory file
    Demo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_add_with_global_file() {
        let cli = Cli::try_parse_from(["stockbook", "add", "apple", "10", "--file", "x.json"])
            .unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("x.json")));
        assert_eq!(
            cli.command,
            Commands::Add {
                item: "apple".to_string(),
                qty: 10
            }
        );
    }

    #[test]
    fn negative_quantity_reaches_the_domain() {
        let cli = Cli::try_parse_from(["stockbook", "remove", "apple", "-3"]).unwrap();
        assert_eq!(
            cli.command,
            Commands::Remove {
                item: "apple".to_string(),
                qty: -3
            }
        );
    }

    #[test]
    fn low_stock_threshold_is_optional() {
        let cli = Cli::try_parse_from(["stockbook", "low-stock"]).unwrap();
        assert_eq!(cli.command, Commands::LowStock { threshold: None });

        let cli = Cli::try_parse_from(["stockbook", "low-stock", "-t", "12"]).unwrap();
        assert_eq!(cli.command, Commands::LowStock { threshold: Some(12) });
    }

    #[test]
    fn rejects_non_integer_quantity() {
        assert!(Cli::try_parse_from(["stockbook", "add", "apple", "lots"]).is_err());
    }
}
