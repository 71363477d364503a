//! The seam to an external sequential-pattern mining engine.
//!
//! The search algorithm itself is a collaborator: this crate only fixes
//! the contract it must honor so that its per-chunk output can be merged
//! by [`aggregate`](crate::aggregate).

use alloc::vec::Vec;

use crate::frequency::MinFrequency;
use crate::pattern::PatternRow;

/// A sequential-pattern mining engine.
///
/// An implementation is called once per chunk with that chunk's sequences
/// and its local threshold (derived via
/// [`MinFrequency::adjust_for_batch`]). It returns one [`PatternRow`] per
/// pattern meeting the threshold in the chunk -- exactly the row shape the
/// aggregator consumes, each pattern emitted once.
///
/// Engines that honor attribute constraints own their constraint set;
/// constraints are configuration of the engine instance, not a per-call
/// argument.
pub trait PatternMiner<Item> {
    type Error;

    /// Mines frequent patterns from one chunk of sequences at the given
    /// (chunk-local) threshold.
    ///
    /// # Errors
    ///
    /// Engine-specific; this crate imposes none of its own.
    fn mine(
        &self,
        sequences: &[Vec<Item>],
        min_frequency: MinFrequency,
    ) -> Result<Vec<PatternRow<Item>>, Self::Error>;
}
