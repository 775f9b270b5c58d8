use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use homekeep_core::{Category, ItemId};

/// A stored item record.
///
/// Records arrive from browser local storage as camelCase JSON written by
/// many app versions, so every optional field defaults when absent and the
/// engine must classify any shape without failing. Derived statuses are
/// never stored on the record; they are recomputed from `(item, now)` on
/// every read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub category: Category,
    /// Count currently held. Classifiers treat a missing quantity as zero.
    #[serde(default)]
    pub quantity: Option<u32>,

    // Expiry management. Only meaningful when `has_expiry_management` is set;
    // classification falls back to "no expiry" otherwise.
    #[serde(default)]
    pub has_expiry_management: bool,
    #[serde(default)]
    pub expiry_date: Option<NaiveDate>,
    #[serde(default)]
    pub purchase_date: Option<NaiveDate>,
    #[serde(default)]
    pub production_date: Option<NaiveDate>,
    /// Shelf life in days, for deriving an expiry date from a purchase date.
    #[serde(default)]
    pub shelf_life: Option<u32>,
    #[serde(default)]
    pub reminder_enabled: bool,
    /// Per-item lead-time override. Honored only when positive.
    #[serde(default)]
    pub reminder_days: Option<u32>,
    #[serde(default)]
    pub is_consumed: bool,

    // Stock management. Only meaningful when `has_stock_management` is set;
    // classification falls back to "sufficient" otherwise.
    #[serde(default)]
    pub has_stock_management: bool,
    /// Per-item low-stock threshold override.
    #[serde(default)]
    pub min_stock: Option<u32>,
    /// Target ceiling used by restock suggestions.
    #[serde(default)]
    pub max_stock: Option<u32>,
    /// Mean units consumed per 30-day period.
    #[serde(default)]
    pub average_usage: Option<f64>,
    /// Display unit ("pcs", "bottles", ...). Never used in classification.
    #[serde(default)]
    pub stock_unit: Option<String>,
}

impl Item {
    /// Create a minimal record with a fresh id and no management enabled.
    pub fn new(name: impl Into<String>, category: Category) -> Self {
        Self {
            id: ItemId::new(),
            name: name.into(),
            category,
            quantity: None,
            has_expiry_management: false,
            expiry_date: None,
            purchase_date: None,
            production_date: None,
            shelf_life: None,
            reminder_enabled: false,
            reminder_days: None,
            is_consumed: false,
            has_stock_management: false,
            min_stock: None,
            max_stock: None,
            average_usage: None,
            stock_unit: None,
        }
    }

    /// Quantity with the missing-is-zero rule applied.
    pub fn quantity_or_zero(&self) -> u32 {
        self.quantity.unwrap_or(0)
    }

    /// Display unit, falling back to a generic count word.
    pub fn unit_label(&self) -> &str {
        self.stock_unit.as_deref().unwrap_or("pcs")
    }
}
