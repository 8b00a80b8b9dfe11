//! Stock and price reconciliation.
//!
//! Stock is reconciled in two passes over a read-only [`KnownOffers`]:
//! matched inventory rows get their real count, then every remote identifier
//! left unmatched is zeroed. Prices are only emitted for matched rows; an
//! offer the marketplace lists but the inventory lacks keeps its current
//! remote price.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use mktsync_core::{
    convert_price, normalize_quantity, CoreError, InventoryRecord, PriceUpdate, StockUpdate,
};
use rust_decimal::prelude::ToPrimitive;

use crate::error::SyncError;
use crate::known::KnownOffers;

/// Output of [`reconcile_stock`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StockReconciliation {
    /// Matched rows in inventory order, then zeroed residuals in catalog order.
    pub updates: Vec<StockUpdate>,
    /// Remote identifiers with no inventory row; each has a zero-count update.
    pub unmatched: Vec<String>,
}

impl StockReconciliation {
    /// Updates that leave the offer purchasable.
    pub fn available(&self) -> impl Iterator<Item = &StockUpdate> {
        self.updates.iter().filter(|u| u.is_available())
    }
}

/// Computes the full stock update set for one campaign warehouse.
///
/// Every identifier in `known` appears in the output exactly once. Inventory
/// rows for offers the marketplace does not list are ignored, as are repeat
/// rows for an already matched code. All updates share `updated_at`.
///
/// # Errors
///
/// Returns [`SyncError::Record`] if a matched row's quantity cannot be
/// normalized.
pub fn reconcile_stock(
    inventory: &[InventoryRecord],
    known: &KnownOffers,
    warehouse_id: &str,
    updated_at: DateTime<Utc>,
) -> Result<StockReconciliation, SyncError> {
    let mut matched: HashSet<&str> = HashSet::with_capacity(known.len());
    let mut updates = Vec::with_capacity(known.len());

    for record in inventory {
        let code = record.code.as_str();
        if !known.contains(code) || matched.contains(code) {
            continue;
        }
        let count = normalize_quantity(&record.quantity).map_err(|e| record_error(code, e))?;
        matched.insert(code);
        updates.push(StockUpdate {
            sku: code.to_owned(),
            warehouse_id: warehouse_id.to_owned(),
            count,
            updated_at,
        });
    }

    let unmatched: Vec<String> = known
        .iter()
        .filter(|id| !matched.contains(id))
        .map(str::to_owned)
        .collect();

    updates.extend(unmatched.iter().map(|id| StockUpdate {
        sku: id.clone(),
        warehouse_id: warehouse_id.to_owned(),
        count: 0,
        updated_at,
    }));

    tracing::debug!(
        warehouse_id,
        matched = matched.len(),
        zeroed = unmatched.len(),
        "reconciled stock"
    );

    Ok(StockReconciliation { updates, unmatched })
}

/// Computes price updates for inventory rows the marketplace already lists.
///
/// Prices are truncated toward zero to whole currency units. Only the first
/// row for a given code is used.
///
/// # Errors
///
/// Returns [`SyncError::Record`] if a matched row's price cannot be parsed or
/// does not fit in an `i64`.
pub fn reconcile_prices(
    inventory: &[InventoryRecord],
    known: &KnownOffers,
) -> Result<Vec<PriceUpdate>, SyncError> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut prices = Vec::new();

    for record in inventory {
        let code = record.code.as_str();
        if !known.contains(code) || !seen.insert(code) {
            continue;
        }
        let value = convert_price(&record.price)
            .map_err(|e| record_error(code, e))?
            .trunc()
            .to_i64()
            .ok_or_else(|| {
                record_error(
                    code,
                    CoreError::InvalidPrice {
                        raw: record.price.clone(),
                    },
                )
            })?;
        prices.push(PriceUpdate {
            id: code.to_owned(),
            value,
        });
    }

    tracing::debug!(prices = prices.len(), "reconciled prices");
    Ok(prices)
}

fn record_error(code: &str, source: CoreError) -> SyncError {
    SyncError::Record {
        code: code.to_owned(),
        source,
    }
}

#[cfg(test)]
#[path = "reconcile_test.rs"]
mod tests;
