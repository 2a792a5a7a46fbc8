use serde::Serialize;

use crate::engine::Aggregation;

pub const DEFAULT_TOP_N: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedEntry {
    pub entity_name: String,
    pub total_amount: f64,
}

pub type RankedList = Vec<RankedEntry>;

/// The `n` entities with the highest totals, highest first.
///
/// Equal totals are ordered by entity name ascending so the result does not depend on map
/// iteration order.
pub fn top_n(aggregation: &Aggregation, n: usize) -> RankedList {
    let mut entries: Vec<RankedEntry> = aggregation
        .iter()
        .map(|(name, total)| RankedEntry {
            entity_name: name.to_string(),
            total_amount: total,
        })
        .collect();

    entries.sort_by(|a, b| {
        b.total_amount
            .total_cmp(&a.total_amount)
            .then_with(|| a.entity_name.cmp(&b.entity_name))
    });
    entries.truncate(n);
    entries
}
