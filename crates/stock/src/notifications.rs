use serde::Serialize;

use homekeep_core::Priority;
use homekeep_items::Item;

use crate::status::{StockStatus, classify_stock};

/// Route key consumers navigate to from any stock notification.
pub const STOCK_ROUTE: &str = "/stock";

/// Which stock bucket a notification group covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StockNotificationKind {
    ZeroStock,
    OutOfStock,
    LowStock,
}

/// Display severity of a group (the original app's error/warning styling).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// One notification covering every item in a stock bucket.
///
/// Unlike expiry reminders, stock alerts are grouped: a bucket with twelve
/// depleted items yields a single group carrying all twelve references.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockNotificationGroup<'a> {
    pub kind: StockNotificationKind,
    pub severity: Severity,
    pub priority: Priority,
    pub title: &'static str,
    pub message: String,
    pub items: Vec<&'a Item>,
    pub action: &'static str,
    pub route: &'static str,
}

/// Generate grouped stock notifications for one snapshot of items.
///
/// Buckets are disjoint and emitted in fixed severity order: zero stock,
/// then out of stock, then low stock. Empty buckets emit nothing, so the
/// result holds between zero and three groups. Consumers rely on this order
/// for display; there is no re-sort.
pub fn generate_stock_notifications(items: &[Item]) -> Vec<StockNotificationGroup<'_>> {
    let mut zero = Vec::new();
    let mut out = Vec::new();
    let mut low = Vec::new();

    for item in items {
        match classify_stock(item) {
            StockStatus::Zero => zero.push(item),
            StockStatus::OutOfStock => out.push(item),
            StockStatus::Low => low.push(item),
            StockStatus::Sufficient => {}
        }
    }

    let mut groups = Vec::with_capacity(3);

    if !zero.is_empty() {
        groups.push(StockNotificationGroup {
            kind: StockNotificationKind::ZeroStock,
            severity: Severity::Error,
            priority: Priority::High,
            title: "Zero stock",
            message: format!("{} items have no stock left", zero.len()),
            items: zero,
            action: "Restock now",
            route: STOCK_ROUTE,
        });
    }

    if !out.is_empty() {
        groups.push(StockNotificationGroup {
            kind: StockNotificationKind::OutOfStock,
            severity: Severity::Warning,
            priority: Priority::High,
            title: "Out of stock",
            message: format!("{} items are critically low on stock", out.len()),
            items: out,
            action: "Review stock",
            route: STOCK_ROUTE,
        });
    }

    if !low.is_empty() {
        groups.push(StockNotificationGroup {
            kind: StockNotificationKind::LowStock,
            severity: Severity::Warning,
            priority: Priority::Medium,
            title: "Low stock",
            message: format!("{} items are running low on stock", low.len()),
            items: low,
            action: "Review stock",
            route: STOCK_ROUTE,
        });
    }

    tracing::debug!(groups = groups.len(), "generated stock notifications");

    groups
}
