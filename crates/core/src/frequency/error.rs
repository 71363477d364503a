/// Error returned when a minimum-frequency threshold is rejected.
///
/// Every variant carries the offending values, so a failure for one chunk
/// size is distinguishable from a failure for another (the same threshold
/// can be valid for a full batch and invalid for a short remainder batch).
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Error {
    /// Relative threshold outside `(0, 1]`. NaN lands here as well.
    FractionOutOfRange { fraction: f64 },
    /// Relative threshold too small to ever match a row of the given chunk:
    /// `fraction * num_rows < 1`.
    FractionBelowOneRow { fraction: f64, num_rows: u64 },
    /// Absolute threshold outside `[1, num_rows]`.
    CountOutOfRange { count: u64, num_rows: u64 },
    /// Absolute row counts are not meaningful once rows span several
    /// batches of varying size; only relative thresholds are accepted.
    CountAcrossBatches { count: u64 },
    /// A batch size of zero rows.
    EmptyBatch,
}
