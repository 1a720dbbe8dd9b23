//! Inventory module: in-memory stock levels with JSON file persistence.
//!
//! [`InventoryStore`] holds the business rules and performs no IO.
//! [`InventoryFile`] moves a store to and from disk.

pub mod file;
pub mod log;
pub mod report;
pub mod store;

pub use file::{DEFAULT_INVENTORY_FILE, InventoryFile, StoreError};
pub use log::StockLogEntry;
pub use report::InventoryReport;
pub use store::{DEFAULT_LOW_STOCK_THRESHOLD, InventoryStore, Removal};
