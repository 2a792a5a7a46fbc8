use indexmap::IndexMap;
use log::debug;

use crate::donations::DonationRecord;

/// Entity name to summed amount for one dimension.
///
/// Keys keep the order in which they first appeared with a usable amount. Every total is the
/// sum, in input order, of the finite amounts recorded for that key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Aggregation {
    totals: IndexMap<String, f64>,
}

impl Aggregation {
    pub fn get(&self, entity_name: &str) -> Option<f64> {
        self.totals.get(entity_name).copied()
    }

    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    /// Entries in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.totals.iter().map(|(name, total)| (name.as_str(), *total))
    }

    /// Sum over all entities.
    pub fn total(&self) -> f64 {
        self.totals.values().sum()
    }
}

/// Fold `records` into per-key totals.
///
/// Records whose amount is NaN or infinite are dropped without creating a key, so an entity
/// seen only with unusable amounts never appears. The first usable amount establishes a key.
pub fn aggregate<F>(records: &[DonationRecord], key_of: F) -> Aggregation
where
    F: Fn(&DonationRecord) -> &str,
{
    let mut totals: IndexMap<String, f64> = IndexMap::new();
    let mut dropped = 0usize;

    for record in records {
        if !record.has_valid_amount() {
            dropped += 1;
            continue;
        }

        let key = key_of(record);
        match totals.get_mut(key) {
            Some(total) => *total += record.amount,
            None => {
                totals.insert(key.to_string(), record.amount);
            }
        }
    }

    if dropped > 0 {
        debug!("dropped {} records with invalid amounts", dropped);
    }
    debug!("aggregated {} records into {} entities", records.len() - dropped, totals.len());

    Aggregation { totals }
}
