use chrono::{DateTime, Utc};
use serde::Serialize;

use homekeep_items::Item;

use crate::status::{ExpiryStatus, classify_expiry};

/// Collection-level expiry counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExpiryStatistics {
    /// Items classified `Expired` in the given slice.
    pub expired: usize,
    /// Items classified `NearExpiry` in the given slice.
    pub near_expiry: usize,
    /// Expiry-managed, dated items not yet consumed.
    pub total_tracked: usize,
    /// Expiry-managed items marked consumed.
    pub consumed: usize,
}

/// Compute expiry statistics over one snapshot of items.
///
/// Status counts run over exactly the slice given: consumed items still
/// count toward `expired`/`near_expiry` unless the caller pre-filters them
/// out. Only `total_tracked` excludes consumed items, and only `consumed`
/// counts them.
pub fn expiry_statistics(items: &[Item], now: DateTime<Utc>) -> ExpiryStatistics {
    let mut stats = ExpiryStatistics {
        expired: 0,
        near_expiry: 0,
        total_tracked: 0,
        consumed: 0,
    };

    for item in items {
        match classify_expiry(item, now) {
            ExpiryStatus::Expired => stats.expired += 1,
            ExpiryStatus::NearExpiry => stats.near_expiry += 1,
            ExpiryStatus::Fresh | ExpiryStatus::NoExpiry => {}
        }

        if item.has_expiry_management {
            if item.is_consumed {
                stats.consumed += 1;
            } else if item.expiry_date.is_some() {
                stats.total_tracked += 1;
            }
        }
    }

    tracing::debug!(
        expired = stats.expired,
        near_expiry = stats.near_expiry,
        total_tracked = stats.total_tracked,
        "computed expiry statistics"
    );

    stats
}

/// Items currently classified `Expired`.
pub fn expired_items<'a>(items: &'a [Item], now: DateTime<Utc>) -> Vec<&'a Item> {
    items
        .iter()
        .filter(|item| classify_expiry(item, now) == ExpiryStatus::Expired)
        .collect()
}

/// Items currently classified `NearExpiry`.
pub fn near_expiry_items<'a>(items: &'a [Item], now: DateTime<Utc>) -> Vec<&'a Item> {
    items
        .iter()
        .filter(|item| classify_expiry(item, now) == ExpiryStatus::NearExpiry)
        .collect()
}
