use serde::Serialize;

use homekeep_items::Item;

use crate::status::{StockStatus, classify_stock, effective_min_stock};

/// Days in the usage reporting period (`average_usage` is per 30 days).
const USAGE_PERIOD_DAYS: f64 = 30.0;

/// Direction a stock level is heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Unknown,
    Critical,
    Declining,
    Stable,
}

/// Trend classification plus a display message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendReport {
    pub trend: Trend,
    pub message: String,
}

/// Days until the stock runs out at the reported usage rate, rounded up.
///
/// `None` unless the item is stock-managed with a positive usage rate.
pub fn estimated_runout_days(item: &Item) -> Option<u32> {
    if !item.has_stock_management {
        return None;
    }
    let usage = item.average_usage.filter(|u| *u > 0.0)?;

    let daily_usage = usage / USAGE_PERIOD_DAYS;
    if daily_usage <= 0.0 {
        return None;
    }

    Some((f64::from(item.quantity_or_zero()) / daily_usage).ceil() as u32)
}

/// How many units to buy.
///
/// Fills up to `max_stock` when one is set above the current quantity;
/// otherwise targets twice the effective low-stock threshold.
pub fn suggest_restock_quantity(item: &Item) -> Option<u32> {
    if !item.has_stock_management {
        return None;
    }

    let quantity = item.quantity_or_zero();
    if let Some(max) = item.max_stock.filter(|m| *m > quantity) {
        return Some(max - quantity);
    }

    let target = effective_min_stock(item).saturating_mul(2);
    Some(target.saturating_sub(quantity))
}

/// Classify where an item's stock level is heading.
///
/// Without usable usage data the trend is unknown. With usage data, the
/// projected runout drives the bands: a week or less is critical, a month
/// or less is declining, anything further is stable. A present but
/// unusable rate (negative) reports stable since no projection exists.
pub fn stock_trend(item: &Item) -> TrendReport {
    let has_usage = item
        .average_usage
        .is_some_and(|u| !u.is_nan() && u != 0.0);
    if !item.has_stock_management || !has_usage {
        return TrendReport {
            trend: Trend::Unknown,
            message: "insufficient data".to_string(),
        };
    }

    match estimated_runout_days(item) {
        None => TrendReport {
            trend: Trend::Stable,
            message: "stock stable".to_string(),
        },
        Some(days) => {
            let trend = if days <= 7 {
                Trend::Critical
            } else if days <= 30 {
                Trend::Declining
            } else {
                Trend::Stable
            };
            TrendReport {
                trend,
                message: format!("projected to run out in {days} days"),
            }
        }
    }
}

/// One-line stock level summary, e.g. "running low (2 pcs)".
pub fn format_stock_level(item: &Item) -> String {
    if !item.has_stock_management {
        return "stock not managed".to_string();
    }

    let quantity = item.quantity_or_zero();
    let unit = item.unit_label();
    match classify_stock(item) {
        StockStatus::Zero => format!("zero stock (0 {unit})"),
        StockStatus::OutOfStock => format!("out of stock ({quantity} {unit})"),
        StockStatus::Low => format!("running low ({quantity} {unit})"),
        StockStatus::Sufficient => format!("well stocked ({quantity} {unit})"),
    }
}
