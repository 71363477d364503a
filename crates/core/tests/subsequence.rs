use seqmine_core::subsequence::{
    is_subsequence, is_subsequence_in_rolling, matched_subsequences,
};

/// Reference search: every one of the `2^len` index subsets, in the same
/// include-first order as the enumerator, kept when its values equal the
/// pattern.
fn reference_matches(sequence: &[u64], pattern: &[u64]) -> Vec<Vec<usize>> {
    fn explore(
        sequence: &[u64],
        pattern: &[u64],
        position: usize,
        chosen: &mut Vec<usize>,
        out: &mut Vec<Vec<usize>>,
    ) {
        if position == sequence.len() {
            let values: Vec<u64> = chosen.iter().map(|&index| sequence[index]).collect();
            if values == pattern {
                out.push(chosen.clone());
            }
            return;
        }
        chosen.push(position);
        explore(sequence, pattern, position + 1, chosen, out);
        chosen.pop();
        explore(sequence, pattern, position + 1, chosen, out);
    }

    let mut out = Vec::new();
    explore(sequence, pattern, 0, &mut Vec::new(), &mut out);
    out
}

/// Reference containment: some strictly increasing index sequence into
/// `sequence` reproduces `pattern`.
fn reference_contains(sequence: &[u64], pattern: &[u64]) -> bool {
    !reference_matches(sequence, pattern).is_empty()
}

/// Deterministic little generator for test inputs (linear congruential).
fn pseudo_random_sequence(seed: u64, len: usize, alphabet: u64) -> Vec<u64> {
    let mut state = seed;
    (0..len)
        .map(|_| {
            state = state
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            (state >> 33) % alphabet + 1
        })
        .collect()
}

// -- is_subsequence ------------------------------------------------------

#[test]
fn containment_example() {
    // The classic: [1, 3] sits inside [1, 2, 3] but not [2, 3].
    assert!(is_subsequence(&[1, 3], &[1, 2, 3]));
    assert!(is_subsequence(&[1, 3], &[1, 3]));
    assert!(!is_subsequence(&[1, 3], &[2, 3]));
}

#[test]
fn containment_agrees_with_reference() {
    for seed in 0..40 {
        let sequence = pseudo_random_sequence(seed, 10, 3);
        let pattern = pseudo_random_sequence(seed.wrapping_add(1000), 3, 3);
        assert_eq!(
            is_subsequence(&pattern, &sequence),
            reference_contains(&sequence, &pattern),
            "sequence {sequence:?}, pattern {pattern:?}",
        );
    }
}

// -- rolling window ------------------------------------------------------

#[test]
fn full_window_equals_plain_check() {
    for seed in 0..40 {
        let sequence = pseudo_random_sequence(seed, 8, 3);
        let pattern = pseudo_random_sequence(seed.wrapping_add(2000), 2, 3);
        for window_size in sequence.len()..sequence.len() + 3 {
            assert_eq!(
                is_subsequence_in_rolling(&pattern, &sequence, window_size),
                is_subsequence(&pattern, &sequence),
            );
        }
    }
}

#[test]
fn window_bounds_recency_span() {
    let sequence = [1, 9, 9, 9, 3];
    // [1, 3] occurs, but never within 3 consecutive positions.
    assert!(is_subsequence(&[1, 3], &sequence));
    assert!(!is_subsequence_in_rolling(&[1, 3], &sequence, 3));
    assert!(is_subsequence_in_rolling(&[1, 3], &sequence, 5));
}

#[test]
fn rolling_window_smaller_than_pattern() {
    // A 2-window can still contain a 2-pattern, but only contiguously.
    assert!(is_subsequence_in_rolling(&[1, 3], &[2, 1, 3, 2], 2));
    assert!(!is_subsequence_in_rolling(&[1, 3], &[1, 2, 3], 2));
}

// -- exhaustive enumeration ----------------------------------------------

#[test]
fn enumeration_agrees_with_reference() {
    for seed in 0..30 {
        let sequence = pseudo_random_sequence(seed, 9, 2);
        for pattern_len in 1..4 {
            let pattern = pseudo_random_sequence(seed.wrapping_add(3000), pattern_len, 2);
            let (values, positions) = matched_subsequences(&sequence, &pattern);
            let expected = reference_matches(&sequence, &pattern);

            assert_eq!(
                positions, expected,
                "sequence {sequence:?}, pattern {pattern:?}",
            );
            assert!(values.iter().all(|value_list| value_list == &pattern));
            assert_eq!(values.len(), positions.len());
        }
    }
}

#[test]
fn enumeration_positions_reconstruct_pattern() {
    let sequence = [2, 1, 2, 1, 2];
    let pattern = [2, 1, 2];
    let (_, positions) = matched_subsequences(&sequence, &pattern);

    assert!(!positions.is_empty());
    for occurrence in &positions {
        assert!(occurrence.windows(2).all(|pair| pair[0] < pair[1]));
        let reconstructed: Vec<u64> = occurrence.iter().map(|&index| sequence[index]).collect();
        assert_eq!(reconstructed, pattern);
    }
}
