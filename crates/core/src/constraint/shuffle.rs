//! Correspondence-preserving shuffling of sequences and attribute values.
//!
//! One uniformly random permutation is drawn from the caller's generator
//! and applied both to the sequence list and to every constraint's
//! per-sequence value list of every attribute, so the index-alignment
//! invariant survives the reorder. Everything returned is a fresh copy:
//! the originals (and any other holder of the same constraint values) are
//! left untouched.
//!
//! The generator is explicit state passed by the caller -- the same seed
//! reproduces the same permutation, which is what randomized-order tests
//! rely on.

use alloc::vec::Vec;

use rand::RngExt;

use super::Attribute;

/// Draws a uniformly random permutation of `0..len`.
///
/// Fisher-Yates over the index range, driven by the supplied generator.
#[must_use]
pub fn random_permutation<R>(len: usize, rng: &mut R) -> Vec<usize>
where
    R: RngExt + ?Sized,
{
    let mut permutation: Vec<usize> = (0..len).collect();
    for i in (1..len).rev() {
        let j = rng.random_range(0..=i);
        permutation.swap(i, j);
    }
    permutation
}

/// Clones `values` reordered so that output position `i` holds the entry
/// formerly at `permutation[i]`.
fn reorder<T: Clone>(permutation: &[usize], values: &[T]) -> Vec<T> {
    permutation.iter().map(|&from| values[from].clone()).collect()
}

/// Randomly permutes `sequences` together with every attribute constraint
/// value list, preserving their index alignment.
///
/// Returns the reordered sequence list and the reordered attributes; the
/// inputs are not modified and the returned constraints share no storage
/// with them.
///
/// # Panics
///
/// Panics if a constraint's value list length differs from the sequence
/// count (a violation of the alignment invariant documented on
/// [`Constraint`]).
#[must_use]
pub fn shuffle<Item, Value, R>(
    sequences: &[Vec<Item>],
    attributes: &[Attribute<Value>],
    rng: &mut R,
) -> (Vec<Vec<Item>>, Vec<Attribute<Value>>)
where
    Item: Clone,
    Value: Clone,
    R: RngExt + ?Sized,
{
    tracing::debug!(
        sequences = sequences.len(),
        attributes = attributes.len(),
        "shuffling sequences with attribute correspondence"
    );

    let permutation = random_permutation(sequences.len(), rng);

    let shuffled_sequences = reorder(&permutation, sequences);
    let shuffled_attributes = attributes
        .iter()
        .map(|attribute| {
            let mut shuffled = Attribute::new();
            for (name, constraint) in &attribute.constraints {
                assert_eq!(
                    constraint.len(),
                    sequences.len(),
                    "constraint values must align one-to-one with sequences",
                );
                // An independent copy gets the reordered values installed;
                // the source constraint's storage is never touched.
                let mut copy = constraint.clone();
                copy.replace_values(reorder(&permutation, constraint.values()));
                shuffled.insert(name.clone(), copy);
            }
            shuffled
        })
        .collect();

    (shuffled_sequences, shuffled_attributes)
}
