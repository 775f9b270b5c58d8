use chrono::{DateTime, Utc};
use serde::Serialize;

use homekeep_core::{ItemId, Priority};
use homekeep_items::Item;

use crate::status::{ExpiryStatus, classify_expiry, format_remaining};

/// What an expiry notification is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpiryNotificationKind {
    Expired,
    NearExpiry,
}

/// An actionable per-item expiry reminder.
///
/// Carries a reference to the source record; the engine never copies or
/// mutates items into its outputs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpiryNotification<'a> {
    pub id: ItemId,
    pub kind: ExpiryNotificationKind,
    pub title: &'static str,
    pub message: String,
    pub item: &'a Item,
    pub priority: Priority,
}

/// Generate expiry reminders for one snapshot of items.
///
/// Eligible items are expiry-managed, dated, and have reminders enabled.
/// Expired items produce a high-priority notification, near-expiry items a
/// medium one; fresh items produce nothing. The result is ordered by
/// descending priority weight, and within equal priority keeps the relative
/// input order of the eligible items.
pub fn generate_expiry_notifications<'a>(
    items: &'a [Item],
    now: DateTime<Utc>,
) -> Vec<ExpiryNotification<'a>> {
    let mut notifications = Vec::new();

    for item in items {
        if !item.has_expiry_management || !item.reminder_enabled || item.expiry_date.is_none() {
            continue;
        }

        match classify_expiry(item, now) {
            ExpiryStatus::Expired => notifications.push(ExpiryNotification {
                id: item.id.clone(),
                kind: ExpiryNotificationKind::Expired,
                title: "Item expired",
                message: format!("{} has expired and should be dealt with", item.name),
                item,
                priority: Priority::High,
            }),
            ExpiryStatus::NearExpiry => notifications.push(ExpiryNotification {
                id: item.id.clone(),
                kind: ExpiryNotificationKind::NearExpiry,
                title: "Item expiring soon",
                message: format!("{} {}", item.name, format_remaining(item, now)),
                item,
                priority: Priority::Medium,
            }),
            ExpiryStatus::Fresh | ExpiryStatus::NoExpiry => {}
        }
    }

    // The generation loop interleaves expired and near-expiry entries in
    // input order; the stable sort groups them by priority without
    // disturbing that order inside a group.
    notifications.sort_by(|a, b| b.priority.weight().cmp(&a.priority.weight()));

    tracing::debug!(count = notifications.len(), "generated expiry notifications");

    notifications
}

/// Whether an expiry reminder should currently be shown for an item.
pub fn should_remind(item: &Item, now: DateTime<Utc>) -> bool {
    if !item.has_expiry_management || !item.reminder_enabled || item.expiry_date.is_none() {
        return false;
    }

    matches!(
        classify_expiry(item, now),
        ExpiryStatus::NearExpiry | ExpiryStatus::Expired
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use homekeep_core::Category;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 14, 12, 0, 0).unwrap()
    }

    fn reminded_item(name: &str, days_from_now: i64) -> Item {
        let mut item = Item::new(name, Category::Food);
        item.has_expiry_management = true;
        item.reminder_enabled = true;
        item.expiry_date = Some(now().date_naive() + chrono::Duration::days(days_from_now));
        item
    }

    #[test]
    fn expired_before_near_expiry_in_original_relative_order() {
        // 2 expired and 3 near-expiry scattered through 100 fresh items.
        let mut items: Vec<Item> = (0..95)
            .map(|i| reminded_item(&format!("fresh-{i}"), 120))
            .collect();
        items.insert(10, reminded_item("near-a", 1));
        items.insert(30, reminded_item("gone-a", -5));
        items.insert(50, reminded_item("near-b", 2));
        items.insert(70, reminded_item("gone-b", -1));
        items.insert(90, reminded_item("near-c", 3));

        let notifications = generate_expiry_notifications(&items, now());
        assert_eq!(notifications.len(), 5);

        let names: Vec<&str> = notifications
            .iter()
            .map(|n| n.item.name.as_str())
            .collect();
        assert_eq!(names, ["gone-a", "gone-b", "near-a", "near-b", "near-c"]);

        assert!(
            notifications[..2]
                .iter()
                .all(|n| n.priority == Priority::High)
        );
        assert!(
            notifications[2..]
                .iter()
                .all(|n| n.priority == Priority::Medium)
        );
    }

    #[test]
    fn reminders_disabled_suppress_notifications() {
        let mut item = reminded_item("Milk", -2);
        item.reminder_enabled = false;
        assert!(generate_expiry_notifications(&[item], now()).is_empty());
    }

    #[test]
    fn fresh_items_are_silent() {
        let items = vec![reminded_item("Rice", 200)];
        assert!(generate_expiry_notifications(&items, now()).is_empty());
    }

    #[test]
    fn near_expiry_message_embeds_remaining_time() {
        let items = vec![reminded_item("Milk", 1)];
        let notifications = generate_expiry_notifications(&items, now());
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].kind, ExpiryNotificationKind::NearExpiry);
        assert_eq!(notifications[0].message, "Milk due tomorrow");
        assert_eq!(notifications[0].id, items[0].id);
    }

    #[test]
    fn expired_message_is_fixed() {
        let items = vec![reminded_item("Yogurt", -7)];
        let notifications = generate_expiry_notifications(&items, now());
        assert_eq!(notifications[0].kind, ExpiryNotificationKind::Expired);
        assert_eq!(
            notifications[0].message,
            "Yogurt has expired and should be dealt with"
        );
        assert_eq!(notifications[0].title, "Item expired");
    }

    #[test]
    fn should_remind_only_for_eligible_flagged_items() {
        assert!(should_remind(&reminded_item("Milk", 1), now()));
        assert!(should_remind(&reminded_item("Milk", -1), now()));
        assert!(!should_remind(&reminded_item("Milk", 300), now()));

        let mut muted = reminded_item("Milk", -1);
        muted.reminder_enabled = false;
        assert!(!should_remind(&muted, now()));

        assert!(!should_remind(&Item::new("Chair", Category::Other), now()));
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 500,
                ..ProptestConfig::default()
            })]

            /// Property: every high-priority entry precedes every
            /// medium-priority entry, for any mix of expiry offsets.
            #[test]
            fn high_priority_groups_first(
                offsets in proptest::collection::vec(-30i64..30, 0..40)
            ) {
                let items: Vec<Item> = offsets
                    .iter()
                    .enumerate()
                    .map(|(i, off)| reminded_item(&format!("item-{i}"), *off))
                    .collect();

                let notifications = generate_expiry_notifications(&items, now());
                let weights: Vec<u8> =
                    notifications.iter().map(|n| n.priority.weight()).collect();
                let mut sorted = weights.clone();
                sorted.sort_unstable_by(|a, b| b.cmp(a));
                prop_assert_eq!(weights, sorted);
            }

            /// Property: one notification per non-fresh eligible item, none
            /// for the rest.
            #[test]
            fn emission_count_matches_classification(
                offsets in proptest::collection::vec(-30i64..120, 0..40)
            ) {
                let items: Vec<Item> = offsets
                    .iter()
                    .enumerate()
                    .map(|(i, off)| reminded_item(&format!("item-{i}"), *off))
                    .collect();

                let expected = items
                    .iter()
                    .filter(|item| {
                        matches!(
                            classify_expiry(item, now()),
                            ExpiryStatus::Expired | ExpiryStatus::NearExpiry
                        )
                    })
                    .count();
                let notifications = generate_expiry_notifications(&items, now());
                prop_assert_eq!(notifications.len(), expected);
            }
        }
    }
}
