//! Exhaustive enumeration of a pattern's occurrences within one sequence.
//!
//! Every position of the sequence carries an include/exclude decision, so
//! the search space is the full 2^len subset tree. A subset matches when
//! its selected item values equal the target pattern exactly; each match
//! is reported with the original positions it was drawn from.
//!
//! # Algorithm
//!
//! Depth-first traversal of the decision tree with an explicit frame
//! stack rather than recursion, so sequence length never translates into
//! call-stack depth:
//!
//! 1. A frame holds the next position to decide and the positions chosen
//!    so far. Chosen positions always select a strict prefix of the
//!    pattern, so an include branch is only pushed when the item at the
//!    current position equals the next unmatched pattern item.
//! 2. The exclude branch is pushed before the include branch, so the
//!    include branch is explored first and matches are reported in the
//!    same order as the reference recursive search.
//! 3. A frame that has decided every position records a match iff the
//!    chosen positions cover the whole pattern.
//!
//! # Complexity
//!
//! Worst case exponential in `sequence.len()` (a sequence of repeated
//! items matching a repeated pattern genuinely has combinatorially many
//! occurrences). This is brute-force verification tooling for exhaustive
//! test oracles: keep sequences to a few tens of items, and do not put it
//! anywhere near production-scale mining.

use alloc::vec::Vec;

/// Enumerates every occurrence of `pattern` inside `sequence`.
///
/// Returns parallel vectors: the matched value lists (each equal to
/// `pattern`) and the strictly increasing position lists they were drawn
/// from. Both are empty when nothing matches; a pattern longer than the
/// sequence simply yields no matches, not an error.
///
/// See the module documentation for the exponential cost bound.
#[must_use]
pub fn matched_subsequences<T>(sequence: &[T], pattern: &[T]) -> (Vec<Vec<T>>, Vec<Vec<usize>>)
where
    T: Clone + PartialEq,
{
    let mut matched_values: Vec<Vec<T>> = Vec::new();
    let mut matched_positions: Vec<Vec<usize>> = Vec::new();

    // (next position to decide, positions chosen so far)
    let mut stack: Vec<(usize, Vec<usize>)> = Vec::new();
    stack.push((0, Vec::new()));

    while let Some((position, chosen)) = stack.pop() {
        if position == sequence.len() {
            if chosen.len() == pattern.len() {
                matched_values.push(pattern.to_vec());
                matched_positions.push(chosen);
            }
            continue;
        }

        // Exclude branch first on the stack, so include pops first.
        stack.push((position + 1, chosen.clone()));

        if chosen.len() < pattern.len() && sequence[position] == pattern[chosen.len()] {
            let mut extended = chosen;
            extended.push(position);
            stack.push((position + 1, extended));
        }
    }

    (matched_values, matched_positions)
}
