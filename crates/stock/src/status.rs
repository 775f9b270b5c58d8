use serde::{Deserialize, Serialize};

use homekeep_core::policy;
use homekeep_items::Item;

/// Stock level of an item relative to its thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    Sufficient,
    Low,
    OutOfStock,
    Zero,
}

impl StockStatus {
    /// Total severity order: Sufficient < Low < OutOfStock < Zero.
    pub fn severity(&self) -> u8 {
        match self {
            StockStatus::Sufficient => 0,
            StockStatus::Low => 1,
            StockStatus::OutOfStock => 2,
            StockStatus::Zero => 3,
        }
    }

    pub fn needs_attention(&self) -> bool {
        self.severity() > 0
    }
}

/// Classify an item's stock level.
///
/// Items without stock management are always `Sufficient`. Comparisons are
/// inclusive and evaluated most-severe first, so when a category is
/// misconfigured with an out-of-stock threshold at or above the low-stock
/// one, the more severe branch wins.
pub fn classify_stock(item: &Item) -> StockStatus {
    if !item.has_stock_management {
        return StockStatus::Sufficient;
    }

    let quantity = item.quantity_or_zero();
    let out_threshold = policy::stock_thresholds(item.category).out_of_stock;

    if quantity == 0 {
        StockStatus::Zero
    } else if quantity <= out_threshold {
        StockStatus::OutOfStock
    } else if quantity <= effective_min_stock(item) {
        StockStatus::Low
    } else {
        StockStatus::Sufficient
    }
}

/// Low-stock threshold for an item: the per-item override when set, else
/// the category default. The out-of-stock threshold has no per-item
/// override.
pub(crate) fn effective_min_stock(item: &Item) -> u32 {
    item.min_stock
        .unwrap_or_else(|| policy::stock_thresholds(item.category).low_stock)
}
