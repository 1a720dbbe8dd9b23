//! Printable inventory listing.

use serde::Serialize;

/// Human-readable listing of every stocked item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventoryReport {
    pub lines: Vec<(String, i64)>,
}

impl InventoryReport {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl core::fmt::Display for InventoryReport {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Inventory Report:")?;
        if self.lines.is_empty() {
            return writeln!(f, "No items in inventory.");
        }
        for (item, qty) in &self.lines {
            writeln!(f, "{item} -> {qty}")?;
        }
        Ok(())
    }
}
