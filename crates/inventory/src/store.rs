use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use stockbook_core::{DomainError, DomainResult, ItemName, Quantity};

use crate::log::StockLogEntry;
use crate::report::InventoryReport;

/// Items strictly below this quantity count as low stock unless a caller says otherwise.
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 5;

/// Outcome of a successful `remove`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Removal {
    /// Stock remains on hand.
    Reduced { remaining: i64 },
    /// Stock reached zero (or below) and the entry was deleted.
    Depleted,
}

/// In-memory inventory: item name -> quantity on hand.
///
/// Invariant: every stored quantity is > 0. Iteration is in ascending item-name order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct InventoryStore {
    items: BTreeMap<ItemName, Quantity>,
}

impl InventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from raw `(name, quantity)` pairs, enforcing the store invariants.
    ///
    /// Duplicate names are summed.
    pub fn from_entries<I, S>(entries: I) -> DomainResult<Self>
    where
        I: IntoIterator<Item = (S, i64)>,
        S: Into<String>,
    {
        let mut store = Self::new();
        for (name, qty) in entries {
            let (name, qty) = stored_entry(name.into(), qty)?;
            store.increment(name, qty)?;
        }
        Ok(store)
    }

    /// Build a store from raw pairs, skipping entries that break the store invariants.
    ///
    /// Valid entries are kept; each skipped entry is returned with the reason.
    pub fn from_entries_lossy<I, S>(entries: I) -> (Self, Vec<(String, DomainError)>)
    where
        I: IntoIterator<Item = (S, i64)>,
        S: Into<String>,
    {
        let mut store = Self::new();
        let mut rejected = Vec::new();
        for (name, qty) in entries {
            let raw: String = name.into();
            let result = stored_entry(raw.clone(), qty)
                .and_then(|(name, qty)| store.increment(name, qty));
            if let Err(err) = result {
                rejected.push((raw, err));
            }
        }
        (store, rejected)
    }

    /// Add `qty` units of `item`, returning the log entry for the change.
    ///
    /// Fails with `Validation` for a blank name or negative quantity; the store is
    /// left untouched on any error.
    pub fn add(&mut self, item: &str, qty: i64) -> DomainResult<StockLogEntry> {
        self.add_at(item, qty, Utc::now())
    }

    /// Like [`add`](Self::add), appending the log entry to `sink` on success.
    pub fn add_logged(
        &mut self,
        item: &str,
        qty: i64,
        sink: &mut Vec<StockLogEntry>,
    ) -> DomainResult<()> {
        let entry = self.add(item, qty)?;
        sink.push(entry);
        Ok(())
    }

    /// `add` with an explicit timestamp (deterministic for tests and replays).
    pub fn add_at(
        &mut self,
        item: &str,
        qty: i64,
        at: DateTime<Utc>,
    ) -> DomainResult<StockLogEntry> {
        let name = ItemName::parse(item)?;
        let qty = Quantity::new(qty)?;

        self.increment(name.clone(), qty)?;
        tracing::debug!(item = %name, qty = qty.get(), "stock added");

        Ok(StockLogEntry::added(name, qty, at))
    }

    /// Remove `qty` units of `item`. The entry is deleted once nothing is left.
    ///
    /// Validation matches `add`: blank names and negative quantities are rejected.
    pub fn remove(&mut self, item: &str, qty: i64) -> DomainResult<Removal> {
        let name = ItemName::parse(item)?;
        let qty = Quantity::new(qty)?;

        let Some(current) = self.items.get_mut(name.as_str()) else {
            tracing::debug!(item = %name, "remove on unknown item");
            return Err(DomainError::not_found(name.into_inner()));
        };

        let remaining = current.saturating_sub(qty);
        if remaining.is_zero() {
            self.items.remove(name.as_str());
            tracing::debug!(item = %name, qty = qty.get(), "stock depleted");
            return Ok(Removal::Depleted);
        }

        *current = remaining;
        tracing::debug!(
            item = %name,
            qty = qty.get(),
            remaining = remaining.get(),
            "stock removed"
        );
        Ok(Removal::Reduced {
            remaining: remaining.get(),
        })
    }

    /// Quantity on hand, or 0 if the item is not stocked.
    pub fn get_quantity(&self, item: &str) -> i64 {
        self.items.get(item).map(|q| q.get()).unwrap_or(0)
    }

    /// Items whose quantity is strictly below `threshold`, in iteration order.
    pub fn low_stock(&self, threshold: i64) -> Vec<String> {
        self.items
            .iter()
            .filter(|(_, qty)| qty.get() < threshold)
            .map(|(name, _)| name.to_string())
            .collect()
    }

    /// [`low_stock`](Self::low_stock) with [`DEFAULT_LOW_STOCK_THRESHOLD`].
    pub fn low_stock_default(&self) -> Vec<String> {
        self.low_stock(DEFAULT_LOW_STOCK_THRESHOLD)
    }

    pub fn report(&self) -> InventoryReport {
        InventoryReport {
            lines: self
                .items
                .iter()
                .map(|(name, qty)| (name.to_string(), qty.get()))
                .collect(),
        }
    }

    pub fn contains(&self, item: &str) -> bool {
        self.items.contains_key(item)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ItemName, Quantity)> {
        self.items.iter().map(|(name, qty)| (name, *qty))
    }

    /// Sum of all quantities on hand (saturating).
    pub fn total_units(&self) -> i64 {
        self.items
            .values()
            .fold(0i64, |acc, qty| acc.saturating_add(qty.get()))
    }

    fn increment(&mut self, name: ItemName, qty: Quantity) -> DomainResult<()> {
        if qty.is_zero() {
            // Zero-unit adds never create an entry.
            return Ok(());
        }
        let current = self.items.get(&name).copied().unwrap_or(Quantity::ZERO);
        let next = current.checked_add(qty).ok_or_else(|| {
            DomainError::invariant(format!("quantity overflow for '{name}'"))
        })?;
        self.items.insert(name, next);
        Ok(())
    }
}

/// Validate one persisted `(name, quantity)` pair; stored quantities must be positive.
fn stored_entry(name: String, qty: i64) -> DomainResult<(ItemName, Quantity)> {
    let name = ItemName::parse(name)?;
    let qty = Quantity::new(qty)?;
    if qty.is_zero() {
        return Err(DomainError::invariant(format!(
            "stored quantity for '{name}' must be positive"
        )));
    }
    Ok((name, qty))
}
