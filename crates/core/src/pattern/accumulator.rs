use alloc::vec::Vec;
use core::hash::Hash;

use hashbrown::HashMap;

use super::PatternRow;

/// Count-keyed accumulator over pattern keys.
///
/// Maps each pattern's item prefix to its accumulated support count.
/// Accumulators combine by summing counts per key; a key absent on one
/// side contributes its value unchanged. The merged count for a key is
/// therefore the exact sum of that key's counts across every merged-in
/// chunk result, and counts can never go negative.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternAccumulator<Item>
where
    Item: Hash + Eq + Clone,
{
    /// Maps each pattern key to its accumulated row count.
    pub counts: HashMap<Vec<Item>, u64>,
}

impl<Item> Default for PatternAccumulator<Item>
where
    Item: Hash + Eq + Clone,
{
    fn default() -> Self {
        Self {
            counts: HashMap::new(),
        }
    }
}

impl<Item> PatternAccumulator<Item>
where
    Item: Hash + Eq + Clone,
{
    /// Adds one row's count under its pattern key.
    ///
    /// An engine emits each pattern once per chunk, but duplicate keys
    /// within one chunk still sum rather than overwrite.
    pub fn add_row(&mut self, row: &PatternRow<Item>) {
        *self.counts.entry(row.items.clone()).or_default() += row.count;
    }

    /// Builds an accumulator from one chunk's mining output.
    #[must_use]
    pub fn from_rows(rows: &[PatternRow<Item>]) -> Self {
        let mut accumulator = Self::default();
        for row in rows {
            accumulator.add_row(row);
        }
        accumulator
    }

    /// Additively merges `other` into this accumulator.
    pub fn merge(&mut self, other: &Self) {
        for (key, count) in &other.counts {
            *self.counts.entry(key.clone()).or_default() += count;
        }
    }

    /// Emits one row per key whose merged count reaches `min_row_count`.
    ///
    /// Below-threshold keys are dropped, not retained with a partial
    /// count. Row order is unspecified; callers sort with
    /// [`sort_rows`](super::sort_rows).
    #[must_use]
    pub fn filtered_rows(&self, min_row_count: u64) -> Vec<PatternRow<Item>> {
        self.counts
            .iter()
            .filter(|&(_, &count)| count >= min_row_count)
            .map(|(items, &count)| PatternRow::new(items.clone(), count))
            .collect()
    }

    /// Number of distinct pattern keys seen so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
