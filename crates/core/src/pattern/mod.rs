//! Pattern rows and merge-then-filter aggregation of chunked mining results.
//!
//! A mining engine emits one [`PatternRow`] per frequent pattern per chunk.
//! Aggregation folds all chunk outputs into a single
//! [`PatternAccumulator`], filters by the global minimum row count, and
//! sorts the survivors deterministically.
//!
//! # Data flow
//!
//! ```text
//! chunk rows -> PatternAccumulator::from_rows  (one per chunk)
//!     -> PatternAccumulator::merge             (additive, any order)
//!     -> filtered_rows(min_row_count)
//!     -> sort_rows
//! ```
//!
//! The merge is associative and commutative over chunk accumulators, so
//! chunks may be merged in any order or incrementally as they complete;
//! [`aggregate`] produces the same output under any chunk permutation.

use alloc::vec::Vec;
use core::fmt::{Debug, Formatter, Result as FmtResult};
use core::hash::Hash;

pub mod accumulator;

pub use accumulator::PatternAccumulator;

/// One mined pattern: its item prefix and the number of rows supporting it.
///
/// Two rows with equal item prefixes refer to the same pattern regardless
/// of count; the prefix is the equality/hash key during aggregation.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[cfg_attr(feature = "schemars", derive(::schemars::JsonSchema))]
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PatternRow<Item> {
    /// The pattern key: an ordered list of items.
    pub items: Vec<Item>,
    /// Support count in the chunk or dataset this row was computed over.
    pub count: u64,
}

impl<Item> PatternRow<Item> {
    #[must_use]
    pub const fn new(items: Vec<Item>, count: u64) -> Self {
        Self { items, count }
    }
}

impl<Item> Debug for PatternRow<Item>
where
    Item: Debug,
{
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        write!(f, "{:?}x{}", self.items, self.count)
    }
}

/// Sort rows by ascending lexicographic item prefix, ties broken by
/// descending count.
///
/// Applied as the final aggregation step so output ordering is
/// reproducible independent of merge order or chunk split.
pub fn sort_rows<Item: Ord>(rows: &mut [PatternRow<Item>]) {
    rows.sort_by(|a, b| a.items.cmp(&b.items).then_with(|| b.count.cmp(&a.count)));
}

/// Merge per-chunk mining results into the final frequent-pattern set.
///
/// Builds one accumulator per chunk, merges them additively, drops every
/// pattern whose summed count is below `min_row_count`, and sorts the
/// result with [`sort_rows`].
///
/// Provided each chunk was mined at a local threshold from
/// [`MinFrequency::adjust_for_batch`](crate::MinFrequency::adjust_for_batch),
/// this is equivalent to mining the full unchunked dataset at the absolute
/// threshold `min_row_count`.
#[must_use]
pub fn aggregate<Item>(
    chunk_results: &[Vec<PatternRow<Item>>],
    min_row_count: u64,
) -> Vec<PatternRow<Item>>
where
    Item: Eq + Hash + Clone + Ord,
{
    tracing::debug!(
        chunks = chunk_results.len(),
        min_row_count,
        "aggregating chunk results"
    );

    let mut merged = PatternAccumulator::default();
    for rows in chunk_results {
        merged.merge(&PatternAccumulator::from_rows(rows));
    }

    let mut rows = merged.filtered_rows(min_row_count);
    sort_rows(&mut rows);

    tracing::debug!(patterns = rows.len(), "aggregation complete");
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_debug() {
        let row = PatternRow::new(vec![1, 2], 5);
        assert_eq!(format!("{row:?}"), "[1, 2]x5");
    }

    #[test]
    fn test_sort_rows_prefix_then_count() {
        let mut rows = vec![
            PatternRow::new(vec![2, 1], 9),
            PatternRow::new(vec![1, 2], 3),
            PatternRow::new(vec![1, 2], 7),
            PatternRow::new(vec![1], 4),
        ];
        sort_rows(&mut rows);
        assert_eq!(
            rows,
            vec![
                PatternRow::new(vec![1], 4),
                PatternRow::new(vec![1, 2], 7),
                PatternRow::new(vec![1, 2], 3),
                PatternRow::new(vec![2, 1], 9),
            ]
        );
    }

    #[test]
    fn test_aggregate_sums_and_filters() {
        let chunk_a = vec![PatternRow::new(vec![1, 2], 3)];
        let chunk_b = vec![PatternRow::new(vec![1, 2], 2)];

        assert_eq!(
            aggregate(&[chunk_a.clone(), chunk_b.clone()], 4),
            vec![PatternRow::new(vec![1, 2], 5)]
        );
        assert_eq!(aggregate(&[chunk_a, chunk_b], 6), vec![]);
    }

    #[test]
    fn test_aggregate_zero_threshold_keeps_union() {
        let chunk_a = vec![
            PatternRow::new(vec![1], 2),
            PatternRow::new(vec![1, 3], 1),
        ];
        let chunk_b = vec![PatternRow::new(vec![2], 1)];

        assert_eq!(
            aggregate(&[chunk_a, chunk_b], 0),
            vec![
                PatternRow::new(vec![1], 2),
                PatternRow::new(vec![1, 3], 1),
                PatternRow::new(vec![2], 1),
            ]
        );
    }

    #[test]
    fn test_aggregate_empty() {
        let no_chunks: [Vec<PatternRow<u64>>; 0] = [];
        assert_eq!(aggregate(&no_chunks, 1), vec![]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_row_json_shape() {
        let row = PatternRow::new(vec![1u64, 2], 5);
        assert_eq!(
            serde_json::to_string(&row).unwrap(),
            r#"{"items":[1,2],"count":5}"#
        );
        let parsed: PatternRow<u64> = serde_json::from_str(r#"{"items":[1,2],"count":5}"#).unwrap();
        assert_eq!(parsed, row);
    }
}
