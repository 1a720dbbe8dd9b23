//! Timestamped log entries produced by stock additions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockbook_core::{ItemName, Quantity};

/// Record of a successful `add`, rendered as `<timestamp>: Added <qty> of <item>`.
///
/// Entries are handed back to the caller and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockLogEntry {
    pub timestamp: DateTime<Utc>,
    pub item: ItemName,
    pub quantity: Quantity,
}

impl StockLogEntry {
    pub fn added(item: ItemName, quantity: Quantity, timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp,
            item,
            quantity,
        }
    }
}

impl core::fmt::Display for StockLogEntry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{}: Added {} of {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S%.6f"),
            self.quantity,
            self.item
        )
    }
}
