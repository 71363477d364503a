use seqmine_core::pattern::PatternRow;

/// A small retail-style dataset: 9 sequences over the alphabet 1..=4.
#[must_use]
pub fn small_dataset() -> Vec<Vec<u64>> {
    vec![
        vec![1, 2, 3],
        vec![1, 3],
        vec![2, 3],
        vec![1, 2, 2, 3],
        vec![4, 1, 3],
        vec![2, 4],
        vec![1, 4, 2, 3],
        vec![3, 2, 1],
        vec![1, 2, 3, 4],
    ]
}

/// Splits rows into chunks of `size` (last chunk may be shorter).
#[must_use]
pub fn chunked(sequences: &[Vec<u64>], size: usize) -> Vec<Vec<Vec<u64>>> {
    sequences.chunks(size).map(<[Vec<u64>]>::to_vec).collect()
}

/// All orderings of three chunk results, for order-independence checks.
#[must_use]
pub fn chunk_orderings<Item: Clone>(
    chunks: &[Vec<PatternRow<Item>>; 3],
) -> Vec<Vec<Vec<PatternRow<Item>>>> {
    let [a, b, c] = chunks;
    vec![
        vec![a.clone(), b.clone(), c.clone()],
        vec![a.clone(), c.clone(), b.clone()],
        vec![b.clone(), a.clone(), c.clone()],
        vec![b.clone(), c.clone(), a.clone()],
        vec![c.clone(), a.clone(), b.clone()],
        vec![c.clone(), b.clone(), a.clone()],
    ]
}
