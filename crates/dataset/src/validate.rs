//! Shape checks over sequences and their attribute values.

/// Returns `true` when `values` carries exactly one entry per event of
/// the corresponding sequence: same row count, and row `i` of `values`
/// as long as sequence `i`.
#[must_use]
pub fn same_shape<T, U>(sequences: &[Vec<T>], values: &[Vec<U>]) -> bool {
    sequences.len() == values.len()
        && sequences
            .iter()
            .zip(values)
            .all(|(sequence, row)| sequence.len() == row.len())
}

/// Length of the longest row.
#[must_use]
pub fn max_column_size<T>(rows: &[Vec<T>]) -> usize {
    rows.iter().map(Vec::len).max().unwrap_or(0)
}

/// Largest value across all rows, or `None` when every row is empty.
#[must_use]
pub fn max_value<T: Ord + Copy>(rows: &[Vec<T>]) -> Option<T> {
    rows.iter().flatten().max().copied()
}

/// Smallest value across all rows, or `None` when every row is empty.
#[must_use]
pub fn min_value<T: Ord + Copy>(rows: &[Vec<T>]) -> Option<T> {
    rows.iter().flatten().min().copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_shape() {
        let sequences = vec![vec![1, 2, 3], vec![4]];
        assert!(same_shape(&sequences, &[vec![10, 20, 30], vec![40]]));
        assert!(!same_shape(&sequences, &[vec![10, 20], vec![40]]));
        assert!(!same_shape(&sequences, &[vec![10, 20, 30]]));
    }

    #[test]
    fn test_extremes() {
        let rows = vec![vec![3, 9], vec![1]];
        assert_eq!(max_column_size(&rows), 2);
        assert_eq!(max_value(&rows), Some(9));
        assert_eq!(min_value(&rows), Some(1));

        let empty: Vec<Vec<i64>> = vec![];
        assert_eq!(max_column_size(&empty), 0);
        assert_eq!(max_value(&empty), None);
    }
}
