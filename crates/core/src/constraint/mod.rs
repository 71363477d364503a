//! Per-sequence attributes and the constraints attached to them.
//!
//! An attribute (say, event price or dwell time) carries one value entry
//! per sequence; a constraint over that attribute owns a copy of those
//! per-sequence values. The alignment invariant is positional: value `i`
//! belongs to sequence `i`, and any reordering of the sequences must
//! reorder every constraint's values under the same permutation --
//! [`shuffle`] does exactly that.

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

pub mod shuffle;

pub use shuffle::{random_permutation, shuffle};

/// A constraint over one attribute, owning the per-sequence values it is
/// evaluated against.
///
/// Invariant: `values.len()` equals the number of sequences it was built
/// for, and entry `i` is aligned with sequence `i` under any permutation.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[cfg_attr(feature = "schemars", derive(::schemars::JsonSchema))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraint<Value> {
    values: Vec<Value>,
}

impl<Value> Constraint<Value> {
    #[must_use]
    pub const fn new(values: Vec<Value>) -> Self {
        Self { values }
    }

    /// The per-sequence value list, aligned by index with the sequences.
    #[must_use]
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Replaces the per-sequence value list wholesale.
    ///
    /// Used to install reordered values without touching any other copy
    /// of the constraint.
    pub fn replace_values(&mut self, values: Vec<Value>) {
        self.values = values;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// An attribute and the named constraints attached to it.
///
/// The map is ordered so iteration (and serialization) is deterministic.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[cfg_attr(feature = "schemars", derive(::schemars::JsonSchema))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute<Value> {
    /// Maps each constraint name to its constraint.
    pub constraints: BTreeMap<String, Constraint<Value>>,
}

impl<Value> Default for Attribute<Value> {
    fn default() -> Self {
        Self {
            constraints: BTreeMap::new(),
        }
    }
}

impl<Value> Attribute<Value> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches a named constraint to this attribute.
    pub fn insert(&mut self, name: impl Into<String>, constraint: Constraint<Value>) {
        self.constraints.insert(name.into(), constraint);
    }

    /// Looks up a constraint by name.
    #[must_use]
    pub fn constraint(&self, name: &str) -> Option<&Constraint<Value>> {
        self.constraints.get(name)
    }
}
