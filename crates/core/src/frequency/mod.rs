//! Minimum-frequency thresholds and their batch-safe adjustment.
//!
//! A threshold is either an absolute row count or a relative fraction of
//! the rows. Mining over chunked inputs needs two extra operations beyond
//! plain validation:
//!
//! - [`MinFrequency::validate_for_batches`] rejects thresholds that are
//!   meaningless under a given batch layout (absolute counts across
//!   batches, fractions too small for a short remainder batch).
//! - [`MinFrequency::adjust_for_batch`] derives the chunk-local threshold
//!   handed to the mining engine. Support is anti-monotone under
//!   chunking, so the local threshold is loosened by a caller-supplied
//!   factor but never below one supporting row of the chunk. Any pattern
//!   frequent at the global threshold is then locally frequent in at
//!   least one chunk it occurs in, and merge-then-filter aggregation
//!   loses no true pattern.
//!
//! All validation is eager: a threshold is rejected before any mining call
//! is issued, and a failure aborts the whole batch-mining attempt.

use derive_more::From;

use self::error::Error;

pub mod error;

/// A minimum-frequency threshold for pattern support.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[cfg_attr(feature = "schemars", derive(::schemars::JsonSchema))]
#[derive(Debug, Copy, Clone, PartialEq, From)]
pub enum MinFrequency {
    /// Absolute support: the pattern must occur in at least this many rows.
    Count(u64),
    /// Relative support: the pattern must occur in at least this fraction
    /// of the rows, with the fraction in `(0, 1]`.
    Fraction(f64),
}

impl MinFrequency {
    /// Check this threshold against a dataset (or chunk) of `num_rows` rows.
    ///
    /// A [`Fraction`](Self::Fraction) must lie in `(0, 1]` and satisfy
    /// `fraction * num_rows >= 1`, otherwise no row count could ever meet
    /// it. A [`Count`](Self::Count) must lie in `[1, num_rows]`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FractionOutOfRange`], [`Error::FractionBelowOneRow`],
    /// or [`Error::CountOutOfRange`] naming the offending values.
    #[allow(clippy::cast_precision_loss)]
    pub fn validate(&self, num_rows: u64) -> Result<(), Error> {
        match *self {
            Self::Fraction(fraction) => {
                if !(fraction > 0.0 && fraction <= 1.0) {
                    return Err(Error::FractionOutOfRange { fraction });
                }
                if fraction * (num_rows as f64) < 1.0 {
                    return Err(Error::FractionBelowOneRow { fraction, num_rows });
                }
                Ok(())
            }
            Self::Count(count) => {
                if count == 0 || count > num_rows {
                    return Err(Error::CountOutOfRange { count, num_rows });
                }
                Ok(())
            }
        }
    }

    /// Check this threshold against a batch layout of `num_rows` rows split
    /// into batches of `batch_size`.
    ///
    /// A dataset that fits into a single batch is validated against
    /// `num_rows` directly. Once rows span more than one batch the
    /// threshold must be relative, and it is validated against the full
    /// batch size as well as against a final partial batch of more than
    /// one row (`num_rows % batch_size`), since a fraction valid for a
    /// full batch can be invalid for a short remainder.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CountAcrossBatches`] for an absolute threshold over
    /// several batches, [`Error::EmptyBatch`] for `batch_size == 0`, or the
    /// underlying [`validate`](Self::validate) error whose fields name the
    /// offending chunk size.
    pub fn validate_for_batches(&self, num_rows: u64, batch_size: u64) -> Result<(), Error> {
        if batch_size == 0 {
            return Err(Error::EmptyBatch);
        }
        if num_rows <= batch_size {
            return self.validate(num_rows);
        }

        tracing::debug!(num_rows, batch_size, threshold = ?self, "validating threshold for batches");

        match *self {
            Self::Count(count) => Err(Error::CountAcrossBatches { count }),
            Self::Fraction(_) => {
                self.validate(batch_size)?;
                let remainder = num_rows % batch_size;
                if remainder > 1 {
                    self.validate(remainder)?;
                }
                Ok(())
            }
        }
    }

    /// Derive the local threshold for mining one chunk of `num_rows` rows
    /// independently.
    ///
    /// For a relative threshold `f` the result is
    /// `Fraction(max(f * lower_bound_factor, 1 / num_rows))`: loosened by
    /// the caller-supplied factor, but never below `1 / num_rows` -- the
    /// support needed to count a single matching row of the chunk. Support
    /// is anti-monotone under chunking, so any pattern frequent at the
    /// global threshold stays locally frequent in at least one chunk it
    /// occurs in, and merge-then-filter aggregation misses no true
    /// pattern. A chunk of one row (or none) rounds the fraction up to an
    /// exact row count instead.
    ///
    /// An absolute threshold is returned unchanged: adjustment is only
    /// meaningful for relative thresholds, and
    /// [`validate_for_batches`](Self::validate_for_batches) has already
    /// rejected absolute thresholds for any multi-chunk layout.
    ///
    /// `lower_bound_factor` is a required input with no internally
    /// enforced range; callers typically pass a chunk-size-derived ratio
    /// in `(0, 1]`. A factor small enough that the `1 / num_rows` floor
    /// wins makes every chunk report each pattern it contains at all, and
    /// aggregation then reproduces unchunked mining exactly.
    ///
    /// The receiver is left untouched: the caller-facing global threshold
    /// is never rewritten, only the local copy handed to the engine.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn adjust_for_batch(&self, num_rows: u64, lower_bound_factor: f64) -> Self {
        tracing::debug!(num_rows, lower_bound_factor, threshold = ?self, "adjusting threshold");

        match *self {
            Self::Count(count) => Self::Count(count),
            Self::Fraction(fraction) => {
                if num_rows <= 1 {
                    Self::Count(ceil_positive(fraction))
                } else {
                    let one_row = 1.0 / num_rows as f64;
                    Self::Fraction((fraction * lower_bound_factor).max(one_row))
                }
            }
        }
    }

    /// The absolute row count this threshold denotes over `num_rows` rows.
    ///
    /// A fraction is rounded up, so the returned count is never strictly
    /// below `fraction * num_rows`.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn min_row_count(&self, num_rows: u64) -> u64 {
        match *self {
            Self::Count(count) => count,
            Self::Fraction(fraction) => ceil_positive(fraction * num_rows as f64),
        }
    }
}

/// Smallest integer `>= value`, for non-negative finite inputs.
/// `f64::ceil` lives in std and this crate is `no_std`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
fn ceil_positive(value: f64) -> u64 {
    let truncated = value as u64;
    if (truncated as f64) < value {
        truncated + 1
    } else {
        truncated
    }
}
