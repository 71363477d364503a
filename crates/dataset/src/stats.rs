//! Summary statistics over sequences and mined pattern rows.

use std::collections::HashSet;
use std::hash::Hash;

use seqmine_core::pattern::PatternRow;

/// Arithmetic mean of one value list, or `None` when empty.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn mean(values: &[i64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<i64>() as f64 / values.len() as f64)
}

/// Median of one value list, or `None` when empty.
///
/// Even-length lists average the two middle values.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn median(values: &[i64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Some(sorted[mid] as f64)
    } else {
        Some((sorted[mid - 1] + sorted[mid]) as f64 / 2.0)
    }
}

/// Pairwise differences between consecutive values.
#[must_use]
pub fn gaps(values: &[i64]) -> Vec<i64> {
    values.windows(2).map(|pair| pair[1] - pair[0]).collect()
}

/// Difference between the largest and smallest value, or `None` when
/// empty.
#[must_use]
pub fn span(values: &[i64]) -> Option<i64> {
    let max = values.iter().max()?;
    let min = values.iter().min()?;
    Some(max - min)
}

/// Mean of each row's item prefix (the trailing count is not a value).
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn pattern_means(rows: &[PatternRow<u64>]) -> Vec<Option<f64>> {
    rows.iter()
        .map(|row| {
            if row.items.is_empty() {
                None
            } else {
                Some(row.items.iter().sum::<u64>() as f64 / row.items.len() as f64)
            }
        })
        .collect()
}

/// Median of each row's item prefix.
#[allow(clippy::cast_possible_wrap)]
#[must_use]
pub fn pattern_medians(rows: &[PatternRow<u64>]) -> Vec<Option<f64>> {
    rows.iter()
        .map(|row| {
            let values: Vec<i64> = row.items.iter().map(|&item| item as i64).collect();
            median(&values)
        })
        .collect()
}

/// The pattern keys of `rows`, with support counts dropped.
#[must_use]
pub fn drop_counts<Item: Clone>(rows: &[PatternRow<Item>]) -> Vec<Vec<Item>> {
    rows.iter().map(|row| row.items.clone()).collect()
}

/// Rows of `a` whose pattern key never appears in `b`, and vice versa.
///
/// Counts are ignored for membership, so two runs that found the same
/// patterns with different supports compare as equal.
#[must_use]
pub fn compare_rows<Item>(
    a: &[PatternRow<Item>],
    b: &[PatternRow<Item>],
) -> (Vec<PatternRow<Item>>, Vec<PatternRow<Item>>)
where
    Item: Eq + Hash + Clone,
{
    let a_keys: HashSet<&Vec<Item>> = a.iter().map(|row| &row.items).collect();
    let b_keys: HashSet<&Vec<Item>> = b.iter().map(|row| &row.items).collect();

    let only_a = a
        .iter()
        .filter(|row| !b_keys.contains(&row.items))
        .cloned()
        .collect();
    let only_b = b
        .iter()
        .filter(|row| !a_keys.contains(&row.items))
        .cloned()
        .collect();
    (only_a, only_b)
}
