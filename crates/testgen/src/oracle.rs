//! Brute-force reference miner.
//!
//! [`ExhaustiveMiner`] enumerates every distinct non-empty subsequence of
//! every sequence in the chunk, counts each candidate's support with the
//! plain subsequence check, and keeps the candidates meeting the
//! threshold. That is exponential in sequence length, which is exactly
//! what makes it a trustworthy oracle: nothing clever enough to be wrong.
//! Keep sequences to a dozen-or-so items and leave production-scale
//! mining to a real engine.

use std::collections::BTreeSet;
use std::hash::Hash;

use seqmine_core::engine::PatternMiner;
use seqmine_core::frequency::MinFrequency;
use seqmine_core::pattern::{sort_rows, PatternRow};
use seqmine_core::subsequence::is_subsequence;

/// Exhaustive [`PatternMiner`] for small test datasets.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExhaustiveMiner;

impl<Item> PatternMiner<Item> for ExhaustiveMiner
where
    Item: Eq + Hash + Clone + Ord,
{
    type Error = core::convert::Infallible;

    #[allow(clippy::cast_possible_truncation)]
    fn mine(
        &self,
        sequences: &[Vec<Item>],
        min_frequency: MinFrequency,
    ) -> Result<Vec<PatternRow<Item>>, Self::Error> {
        let min_row_count = min_frequency.min_row_count(sequences.len() as u64);

        let mut candidates: BTreeSet<Vec<Item>> = BTreeSet::new();
        for sequence in sequences {
            collect_subsequences(sequence, &mut candidates);
        }

        let mut rows: Vec<PatternRow<Item>> = candidates
            .into_iter()
            .map(|pattern| {
                let support = sequences
                    .iter()
                    .filter(|sequence| is_subsequence(&pattern, sequence))
                    .count() as u64;
                PatternRow::new(pattern, support)
            })
            .filter(|row| row.count >= min_row_count)
            .collect();

        sort_rows(&mut rows);
        Ok(rows)
    }
}

/// Inserts every distinct non-empty subsequence of `sequence` into `out`.
///
/// Explicit-stack include/exclude traversal; 2^len subsets.
fn collect_subsequences<Item: Clone + Ord>(sequence: &[Item], out: &mut BTreeSet<Vec<Item>>) {
    let mut stack: Vec<(usize, Vec<Item>)> = vec![(0, Vec::new())];
    while let Some((position, chosen)) = stack.pop() {
        if position == sequence.len() {
            if !chosen.is_empty() {
                out.insert(chosen);
            }
            continue;
        }
        stack.push((position + 1, chosen.clone()));
        let mut extended = chosen;
        extended.push(sequence[position].clone());
        stack.push((position + 1, extended));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mines_known_patterns() {
        let sequences = vec![vec![1, 2, 3], vec![1, 3], vec![2, 3]];
        let rows = ExhaustiveMiner
            .mine(&sequences, MinFrequency::Count(2))
            .unwrap();

        // [1, 3] is supported by the first two sequences only.
        assert!(rows.contains(&PatternRow::new(vec![1, 3], 2)));
        // [3] occurs everywhere.
        assert!(rows.contains(&PatternRow::new(vec![3], 3)));
        // [3, 1] never occurs in order.
        assert!(rows.iter().all(|row| row.items != vec![3, 1]));
        // Everything reported meets the threshold.
        assert!(rows.iter().all(|row| row.count >= 2));
    }

    #[test]
    fn test_fraction_threshold() {
        let sequences = vec![vec![1, 2], vec![1], vec![2]];
        let rows = ExhaustiveMiner
            .mine(&sequences, MinFrequency::Fraction(2.0 / 3.0))
            .unwrap();

        // ceil(2/3 * 3) = 2 supporting rows required.
        assert_eq!(
            rows,
            vec![
                PatternRow::new(vec![1], 2),
                PatternRow::new(vec![2], 2),
            ]
        );
    }

    #[test]
    fn test_output_is_sorted() {
        let sequences = vec![vec![2, 1], vec![2, 1], vec![1]];
        let rows = ExhaustiveMiner
            .mine(&sequences, MinFrequency::Count(1))
            .unwrap();

        let mut expected = rows.clone();
        sort_rows(&mut expected);
        assert_eq!(rows, expected);
    }
}
