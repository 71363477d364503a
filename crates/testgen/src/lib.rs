//! Random sequence-dataset generation and the exhaustive oracle miner.
//!
//! Everything here exists to exercise `seqmine_core`: [`generator`]
//! produces datasets with index-aligned attribute constraints, and
//! [`oracle`] provides a brute-force [`PatternMiner`] implementation whose
//! output is trustworthy enough to serve as a reference for aggregation
//! tests -- at exponential cost, so keep the datasets small.
//!
//! [`PatternMiner`]: seqmine_core::PatternMiner

pub mod generator;
pub mod oracle;

pub use generator::{Dataset, DatasetParams};
pub use oracle::ExhaustiveMiner;
