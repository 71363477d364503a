//! Deterministic mapping between symbolic items and the integer IDs the
//! mining core operates on.

use std::collections::BTreeMap;

use seqmine_core::pattern::PatternRow;

/// Error translating between symbolic items and integer IDs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An item was not present when the map was built.
    UnknownItem { item: String },
    /// An ID outside the map's range.
    UnknownId { id: u64 },
}

/// One-to-one mapping between symbolic items and integer IDs.
///
/// IDs are assigned from 1 upward over the sorted set of distinct items,
/// so the same input always produces the same map.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemMap {
    to_id: BTreeMap<String, u64>,
    to_item: Vec<String>,
}

impl ItemMap {
    /// Builds the map from every distinct item occurring in `sequences`.
    #[must_use]
    pub fn from_sequences(sequences: &[Vec<String>]) -> Self {
        let to_id: BTreeMap<String, u64> = sequences
            .iter()
            .flatten()
            .cloned()
            .collect::<std::collections::BTreeSet<String>>()
            .into_iter()
            .zip(1u64..)
            .collect();
        let to_item = to_id.keys().cloned().collect();
        Self { to_id, to_item }
    }

    /// The ID assigned to `item`, if any.
    #[must_use]
    pub fn id(&self, item: &str) -> Option<u64> {
        self.to_id.get(item).copied()
    }

    /// The item behind `id`, if any.
    #[must_use]
    pub fn item(&self, id: u64) -> Option<&str> {
        usize::try_from(id)
            .ok()
            .and_then(|id| id.checked_sub(1))
            .and_then(|index| self.to_item.get(index))
            .map(String::as_str)
    }

    /// Number of distinct items in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.to_item.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.to_item.is_empty()
    }

    /// Translates symbolic sequences into integer-item sequences.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownItem`] for an item the map was not built
    /// from.
    pub fn encode(&self, sequences: &[Vec<String>]) -> Result<Vec<Vec<u64>>, Error> {
        sequences
            .iter()
            .map(|sequence| {
                sequence
                    .iter()
                    .map(|item| {
                        self.id(item).ok_or_else(|| Error::UnknownItem {
                            item: item.clone(),
                        })
                    })
                    .collect()
            })
            .collect()
    }

    /// Translates mined pattern rows back to symbolic items, keeping each
    /// row's support count.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownId`] for an ID outside the map.
    pub fn decode_rows(&self, rows: &[PatternRow<u64>]) -> Result<Vec<PatternRow<String>>, Error> {
        rows.iter()
            .map(|row| {
                let items = row
                    .items
                    .iter()
                    .map(|&id| {
                        self.item(id)
                            .map(str::to_string)
                            .ok_or(Error::UnknownId { id })
                    })
                    .collect::<Result<Vec<String>, Error>>()?;
                Ok(PatternRow::new(items, row.count))
            })
            .collect()
    }
}
