use chrono::{DateTime, Duration, Local};
use rand::distr::{Distribution, Uniform};
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use seqmine_core::constraint::{Attribute, Constraint};
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

#[derive(Clone, Debug, Default, Deserialize, Serialize, TypedBuilder)]
#[cfg_attr(feature = "schemars", derive(::schemars::JsonSchema))]
pub struct DatasetParams {
    pub id: u64,
    pub n_sequence: u64,
    pub n_symbol: u64,
    pub max_events: u64,
    pub n_attribute: u64,
}

#[derive(Deserialize, Serialize, Debug)]
#[cfg_attr(feature = "schemars", derive(::schemars::JsonSchema))]
pub struct Dataset {
    params: DatasetParams,
    info: String,
    start: DateTime<Local>,
    end: DateTime<Local>,
    sequences: Vec<Vec<u64>>,
    attributes: Vec<Attribute<Vec<i64>>>,
}

impl Dataset {
    #[must_use]
    pub const fn new(
        params: DatasetParams,
        info: String,
        start: DateTime<Local>,
        end: DateTime<Local>,
        sequences: Vec<Vec<u64>>,
        attributes: Vec<Attribute<Vec<i64>>>,
    ) -> Self {
        Self {
            params,
            info,
            start,
            end,
            sequences,
            attributes,
        }
    }

    #[must_use]
    pub const fn get_id(&self) -> u64 {
        self.params.id
    }

    #[must_use]
    pub const fn get_sequences(&self) -> &Vec<Vec<u64>> {
        &self.sequences
    }

    #[must_use]
    pub const fn get_attributes(&self) -> &Vec<Attribute<Vec<i64>>> {
        &self.attributes
    }

    #[must_use]
    pub const fn get_params(&self) -> &DatasetParams {
        &self.params
    }

    #[must_use]
    pub fn get_cloned_params(&self) -> DatasetParams {
        self.params.clone()
    }

    #[must_use]
    pub fn get_duration(&self) -> Duration {
        self.end - self.start
    }
}

/// Generate a single dataset of `n_sequence` sequences over a symbol
/// alphabet of `1..=n_symbol`, each sequence holding between 1 and
/// `max_events` events.
///
/// # Alignment invariant
///
/// Every generated attribute carries one per-event value list per
/// sequence, with the inner length equal to that sequence's length, so
/// sequence/attribute shape checks hold by construction. Each attribute
/// exposes two named constraints (`average` and `span`) over the same
/// values, matching how downstream consumers attach several constraints
/// to one attribute.
///
/// # Panics
///
/// Panics if `n_symbol` or `max_events` is zero (cannot create a uniform
/// distribution over an empty range).
#[must_use]
pub fn generate_single_dataset(
    n_sequence: u64,
    n_symbol: u64,
    max_events: u64,
    n_attribute: u64,
) -> (Vec<Vec<u64>>, Vec<Attribute<Vec<i64>>>) {
    let mut random_generator = rand::rng();
    let symbol_range = Uniform::new(1, n_symbol + 1).unwrap();
    let length_range = Uniform::new(1, max_events + 1).unwrap();
    let value_range = Uniform::new(1i64, 101).unwrap();

    let sequences: Vec<Vec<u64>> = (0..n_sequence)
        .map(|_| {
            let length = length_range.sample(&mut random_generator);
            (0..length)
                .map(|_| symbol_range.sample(&mut random_generator))
                .collect()
        })
        .collect();

    let attributes: Vec<Attribute<Vec<i64>>> = (0..n_attribute)
        .map(|_| {
            let values: Vec<Vec<i64>> = sequences
                .iter()
                .map(|sequence| {
                    sequence
                        .iter()
                        .map(|_| value_range.sample(&mut random_generator))
                        .collect()
                })
                .collect();

            let mut attribute = Attribute::new();
            attribute.insert("average", Constraint::new(values.clone()));
            attribute.insert("span", Constraint::new(values));
            attribute
        })
        .collect();

    (sequences, attributes)
}

#[must_use]
pub fn generate_mult_datasets(
    n_dataset: u64,
    n_sequence: u64,
    n_symbol: u64,
    max_events: u64,
    n_attribute: u64,
) -> Vec<Dataset> {
    (0..n_dataset)
        .into_par_iter()
        .map(|i_dataset| {
            let start_time = Local::now();
            let (sequences, attributes) =
                generate_single_dataset(n_sequence, n_symbol, max_events, n_attribute);
            let end_time = Local::now();
            Dataset {
                params: DatasetParams {
                    id: i_dataset,
                    n_sequence,
                    n_symbol,
                    max_events,
                    n_attribute,
                },
                info: "generated".to_string(),
                start: start_time,
                end: end_time,
                sequences,
                attributes,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_shapes_align() {
        let (sequences, attributes) = generate_single_dataset(8, 5, 6, 2);

        assert_eq!(sequences.len(), 8);
        assert!(sequences.iter().all(|s| (1..=6).contains(&s.len())));
        assert!(sequences.iter().flatten().all(|&s| (1..=5).contains(&s)));

        assert_eq!(attributes.len(), 2);
        for attribute in &attributes {
            for constraint in attribute.constraints.values() {
                assert_eq!(constraint.len(), sequences.len());
                for (sequence, values) in sequences.iter().zip(constraint.values()) {
                    assert_eq!(sequence.len(), values.len());
                }
            }
        }
    }

    #[test]
    fn test_mult_datasets_ids() {
        let datasets = generate_mult_datasets(3, 4, 3, 4, 1);
        let mut ids: Vec<u64> = datasets.iter().map(Dataset::get_id).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![0, 1, 2]);
    }
}
