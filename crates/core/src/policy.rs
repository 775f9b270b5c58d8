//! Static category policy table.
//!
//! Maps each [`Category`] to its default expiry-reminder lead time and its
//! default stock thresholds. Every lookup is an exhaustive `match` with an
//! explicit default arm, so a category absent from the table can never
//! produce an undefined threshold.

use serde::{Deserialize, Serialize};

use crate::category::Category;

/// Lead time applied when neither the item nor its category carries one.
pub const DEFAULT_REMINDER_DAYS: u32 = 7;

/// Thresholds applied to categories without a dedicated table entry.
pub const DEFAULT_STOCK_THRESHOLDS: StockThresholds = StockThresholds {
    low_stock: 3,
    out_of_stock: 1,
};

/// Per-category stock thresholds.
///
/// `low_stock` is overridable per item (`min_stock`); `out_of_stock` is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockThresholds {
    pub low_stock: u32,
    pub out_of_stock: u32,
}

/// Default number of days before expiry at which an item is first flagged
/// as near-expiry.
pub fn reminder_lead_days(category: Category) -> u32 {
    match category {
        Category::Food => 3,
        Category::Medicine => 7,
        Category::Cosmetics => 30,
        _ => DEFAULT_REMINDER_DAYS,
    }
}

/// Default stock thresholds for a category.
pub fn stock_thresholds(category: Category) -> StockThresholds {
    match category {
        Category::Food => StockThresholds {
            low_stock: 2,
            out_of_stock: 1,
        },
        Category::Medicine => StockThresholds {
            low_stock: 5,
            out_of_stock: 2,
        },
        Category::Cosmetics => StockThresholds {
            low_stock: 1,
            out_of_stock: 0,
        },
        Category::Kitchenware => StockThresholds {
            low_stock: 3,
            out_of_stock: 1,
        },
        Category::Tools => StockThresholds {
            low_stock: 2,
            out_of_stock: 0,
        },
        _ => DEFAULT_STOCK_THRESHOLDS,
    }
}

/// Whether the app should require expiry tracking for items of a category.
pub fn requires_expiry_tracking(category: Category) -> bool {
    matches!(
        category,
        Category::Food | Category::Medicine | Category::Cosmetics
    )
}

/// Whether the app should offer stock management for items of a category.
pub fn is_stock_managed(category: Category) -> bool {
    matches!(
        category,
        Category::Food
            | Category::Medicine
            | Category::Cosmetics
            | Category::Kitchenware
            | Category::Tools
    )
}
