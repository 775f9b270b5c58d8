use serde::Serialize;

use homekeep_items::Item;

use crate::status::{StockStatus, classify_stock};

/// Collection-level stock counts.
///
/// The four status buckets partition the managed items, so their sum always
/// equals `total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StockStatistics {
    /// Items with stock management enabled.
    pub total: usize,
    pub sufficient: usize,
    pub low: usize,
    pub out_of_stock: usize,
    pub zero: usize,
    /// Everything below `Sufficient`.
    pub needs_attention: usize,
}

/// Compute stock statistics over one snapshot of items.
pub fn stock_statistics(items: &[Item]) -> StockStatistics {
    let mut stats = StockStatistics {
        total: 0,
        sufficient: 0,
        low: 0,
        out_of_stock: 0,
        zero: 0,
        needs_attention: 0,
    };

    for item in items {
        if !item.has_stock_management {
            continue;
        }
        stats.total += 1;
        match classify_stock(item) {
            StockStatus::Sufficient => stats.sufficient += 1,
            StockStatus::Low => stats.low += 1,
            StockStatus::OutOfStock => stats.out_of_stock += 1,
            StockStatus::Zero => stats.zero += 1,
        }
    }
    stats.needs_attention = stats.low + stats.out_of_stock + stats.zero;

    tracing::debug!(
        total = stats.total,
        needs_attention = stats.needs_attention,
        "computed stock statistics"
    );

    stats
}

/// Items running low, including those already past the out-of-stock
/// threshold.
pub fn low_stock_items(items: &[Item]) -> Vec<&Item> {
    items
        .iter()
        .filter(|item| {
            matches!(
                classify_stock(item),
                StockStatus::Low | StockStatus::OutOfStock
            )
        })
        .collect()
}

/// Items past the out-of-stock threshold, including fully depleted ones.
pub fn out_of_stock_items(items: &[Item]) -> Vec<&Item> {
    items
        .iter()
        .filter(|item| {
            matches!(
                classify_stock(item),
                StockStatus::OutOfStock | StockStatus::Zero
            )
        })
        .collect()
}

/// Items with nothing left.
pub fn zero_stock_items(items: &[Item]) -> Vec<&Item> {
    items
        .iter()
        .filter(|item| classify_stock(item) == StockStatus::Zero)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use homekeep_core::Category;

    fn stocked_item(name: &str, category: Category, quantity: u32) -> Item {
        let mut item = Item::new(name, category);
        item.has_stock_management = true;
        item.quantity = Some(quantity);
        item
    }

    #[test]
    fn buckets_partition_managed_items() {
        let items = vec![
            stocked_item("rice", Category::Food, 20),
            stocked_item("noodles", Category::Food, 2),
            stocked_item("oil", Category::Food, 1),
            stocked_item("salt", Category::Food, 0),
            Item::new("chair", Category::Other),
        ];

        let stats = stock_statistics(&items);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.sufficient, 1);
        assert_eq!(stats.low, 1);
        assert_eq!(stats.out_of_stock, 1);
        assert_eq!(stats.zero, 1);
        assert_eq!(stats.needs_attention, 3);
        assert_eq!(
            stats.sufficient + stats.low + stats.out_of_stock + stats.zero,
            stats.total
        );
    }

    #[test]
    fn unmanaged_items_are_invisible() {
        let mut unmanaged = Item::new("vase", Category::Other);
        unmanaged.quantity = Some(0);

        let stats = stock_statistics(&[unmanaged]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.needs_attention, 0);
    }

    #[test]
    fn filter_unions_match_the_original_shapes() {
        let items = vec![
            stocked_item("a", Category::Food, 2), // low
            stocked_item("b", Category::Food, 1), // out of stock
            stocked_item("c", Category::Food, 0), // zero
            stocked_item("d", Category::Food, 9), // sufficient
        ];

        let low: Vec<&str> = low_stock_items(&items)
            .iter()
            .map(|i| i.name.as_str())
            .collect();
        assert_eq!(low, ["a", "b"]);

        let out: Vec<&str> = out_of_stock_items(&items)
            .iter()
            .map(|i| i.name.as_str())
            .collect();
        assert_eq!(out, ["b", "c"]);

        let zero: Vec<&str> = zero_stock_items(&items)
            .iter()
            .map(|i| i.name.as_str())
            .collect();
        assert_eq!(zero, ["c"]);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 1000,
                ..ProptestConfig::default()
            })]

            /// Property: the four status buckets always sum to the managed
            /// total.
            #[test]
            fn buckets_are_complete(
                specs in proptest::collection::vec(
                    (any::<bool>(), 0u32..40, proptest::option::of(0u32..20)),
                    0..60,
                )
            ) {
                let items: Vec<Item> = specs
                    .iter()
                    .enumerate()
                    .map(|(i, (managed, quantity, min_stock))| {
                        let mut item =
                            stocked_item(&format!("item-{i}"), Category::Food, *quantity);
                        item.has_stock_management = *managed;
                        item.min_stock = *min_stock;
                        item
                    })
                    .collect();

                let stats = stock_statistics(&items);
                prop_assert_eq!(
                    stats.sufficient + stats.low + stats.out_of_stock + stats.zero,
                    stats.total
                );
                prop_assert_eq!(
                    stats.needs_attention,
                    stats.low + stats.out_of_stock + stats.zero
                );
            }
        }
    }
}
