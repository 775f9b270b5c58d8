use chrono::{DateTime, Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use homekeep_core::policy;
use homekeep_items::Item;

/// Freshness of an item relative to its expiry date and reminder lead time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpiryStatus {
    Fresh,
    NearExpiry,
    Expired,
    NoExpiry,
}

/// Whole days until the item expires, negative once it has.
///
/// `None` when the item is not expiry-managed or has no expiry date. The
/// count compares calendar dates, so "later today" is day 0 regardless of
/// the time of day carried by `now`.
pub fn days_remaining(item: &Item, now: DateTime<Utc>) -> Option<i64> {
    if !item.has_expiry_management {
        return None;
    }
    let expiry = item.expiry_date?;
    Some((expiry - now.date_naive()).num_days())
}

/// Classify an item's expiry status against an explicit `now`.
///
/// Total over any record shape: items without expiry management or without
/// a date are `NoExpiry` no matter what the other fields say.
pub fn classify_expiry(item: &Item, now: DateTime<Utc>) -> ExpiryStatus {
    let Some(days) = days_remaining(item, now) else {
        return ExpiryStatus::NoExpiry;
    };

    if days < 0 {
        return ExpiryStatus::Expired;
    }
    if days <= i64::from(effective_lead_days(item)) {
        return ExpiryStatus::NearExpiry;
    }
    ExpiryStatus::Fresh
}

/// Human-readable remaining time, e.g. "due in 3 days".
pub fn format_remaining(item: &Item, now: DateTime<Utc>) -> String {
    let Some(days) = days_remaining(item, now) else {
        return "no expiry".to_string();
    };

    match days {
        d if d < 0 => format!("expired {} days ago", -d),
        0 => "due today".to_string(),
        1 => "due tomorrow".to_string(),
        d => format!("due in {d} days"),
    }
}

/// Derive an expiry date from a purchase date and a shelf life in days.
///
/// `None` when either input is absent or the shelf life is zero.
pub fn expiry_date_from_shelf_life(
    purchase_date: Option<NaiveDate>,
    shelf_life_days: Option<u32>,
) -> Option<NaiveDate> {
    let purchase = purchase_date?;
    let days = shelf_life_days.filter(|d| *d > 0)?;
    purchase.checked_add_days(Days::new(u64::from(days)))
}

/// Shelf life in whole days between production and expiry dates.
pub fn shelf_life_between(
    production_date: Option<NaiveDate>,
    expiry_date: Option<NaiveDate>,
) -> Option<i64> {
    let production = production_date?;
    let expiry = expiry_date?;
    Some((expiry - production).num_days())
}

/// Lead time for an item: the per-item override when positive, else the
/// category default.
fn effective_lead_days(item: &Item) -> u32 {
    item.reminder_days
        .filter(|d| *d > 0)
        .unwrap_or_else(|| policy::reminder_lead_days(item.category))
}
