//! Batch-safe support machinery for sequential pattern mining.
//!
//! `seqmine_core` provides the pieces that let a sequential-pattern mining
//! engine run correctly over chunked (batched) inputs, and lets its results
//! be verified against the raw sequences:
//!
//! 1. **Threshold adjustment** -- validating a minimum-frequency threshold
//!    and deriving the chunk-local threshold that keeps chunked mining free
//!    of false negatives ([`frequency`]).
//! 2. **Aggregation** -- merging per-chunk mining results into a single
//!    globally-correct frequent-pattern set via an additive count
//!    accumulator ([`pattern`]).
//! 3. **Verification** -- exact and rolling-window subsequence checks, plus
//!    exhaustive enumeration of every occurrence of a pattern inside a
//!    sequence ([`subsequence`]).
//! 4. **Shuffling** -- reordering sequences together with every attribute
//!    constraint value list under one permutation, for chunk assignment or
//!    randomized-order testing ([`constraint`]).
//!
//! The pattern search itself is an external collaborator behind the
//! [`PatternMiner`] trait; this crate never partitions sequences into chunks
//! nor schedules chunk execution. The intended flow is: the driver splits
//! rows into chunks, derives each chunk's local threshold with
//! [`MinFrequency::adjust_for_batch`], runs the engine per chunk, and merges
//! everything with [`aggregate`].
//!
//! # Soundness
//!
//! Pattern support is anti-monotone: splitting rows into chunks can only
//! lower a pattern's per-chunk support relative to its global support. The
//! adjusted chunk threshold never drops below the support of a single
//! matching row, and never rises above the global threshold, so any
//! globally-frequent pattern is locally frequent in at least one chunk it
//! occurs in, and the merge-then-filter aggregation loses no true pattern.
//!
//! ```rust,ignore
//! use seqmine_core::{aggregate, MinFrequency};
//!
//! let threshold = MinFrequency::Fraction(0.2);
//! threshold.validate_for_batches(num_rows, batch_size)?;
//! let local = threshold.adjust_for_batch(batch_size, 0.8);
//! // ... run the engine on each chunk at `local` ...
//! let rows = aggregate(&chunk_results, threshold.min_row_count(num_rows));
//! ```
//!
//! # Crate features
//!
//! - **`serde`** -- enables `Serialize`/`Deserialize` derives on core types
//!   (`MinFrequency`, `PatternRow`, `PatternAccumulator`, `Constraint`,
//!   `Attribute`, errors).
//! - **`schemars`** -- enables `JsonSchema` derives for the dataset input
//!   format (requires `std`).
//!
//! This crate is `no_std` compatible (requires `alloc`). Dataset parsing and
//! item-ID mapping live in the separate `seqmine_dataset` crate.

#![cfg_attr(not(any(test, feature = "schemars")), no_std)]
extern crate alloc;

pub mod constraint;
pub mod engine;
pub mod frequency;
pub mod pattern;
pub mod subsequence;

pub use engine::PatternMiner;
pub use frequency::MinFrequency;
pub use pattern::{aggregate, PatternRow};
