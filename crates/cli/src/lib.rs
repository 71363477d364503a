//! seqmine CLI -- generate, shuffle, mine, and verify sequence datasets.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use seqmine_core::MinFrequency;

#[derive(Debug, Parser)]
#[command(
    name = "seqmine",
    about = "Chunked mining support for sequential patterns"
)]
pub struct App {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate random sequence datasets
    Generate(GenerateArgs),
    /// Shuffle a dataset, keeping attribute values aligned with sequences
    Shuffle(ShuffleArgs),
    /// Mine frequent patterns in batches and aggregate the results
    Mine(MineArgs),
    /// Verify that a pattern occurs in a dataset's sequences
    Verify(VerifyArgs),
    /// Print the JSON Schema for the dataset input format to stdout
    Schema,
}

#[derive(Debug, Parser)]
pub struct GenerateArgs {
    /// Number of datasets to generate
    #[arg(long)]
    pub n_dataset: u64,
    /// Number of sequences per dataset
    #[arg(long)]
    pub n_sequence: u64,
    /// Size of the item alphabet
    #[arg(long)]
    pub n_symbol: u64,
    /// Maximum events per sequence
    #[arg(long)]
    pub max_events: u64,
    /// Number of attributes per dataset
    #[arg(long, default_value_t = 0)]
    pub n_attribute: u64,
    /// Output directory for generated dataset files
    #[arg(long)]
    pub output_dir: PathBuf,
}

#[derive(Debug, Parser)]
pub struct ShuffleArgs {
    /// Input dataset JSON file
    #[arg(long)]
    pub input: PathBuf,
    /// Seed for the permutation (same seed, same shuffle)
    #[arg(long)]
    pub seed: u64,
    /// Output dataset JSON file
    #[arg(long)]
    pub output: PathBuf,
}

#[derive(Debug, Parser)]
pub struct MineArgs {
    /// Input dataset JSON file
    #[arg(long)]
    pub input: PathBuf,
    /// Minimum frequency: an absolute row count ("5") or a fraction ("0.3")
    #[arg(long, value_parser = parse_min_frequency)]
    pub min_frequency: MinFrequency,
    /// Rows per batch; defaults to mining everything as one batch
    #[arg(long)]
    pub batch_size: Option<u64>,
    /// Loosening factor applied to each batch-local threshold
    #[arg(long, default_value_t = 0.8)]
    pub lower_bound_factor: f64,
    /// Print each aggregated row with its support
    #[arg(long)]
    pub verbose: bool,
    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Parser)]
pub struct VerifyArgs {
    /// Input dataset JSON file
    #[arg(long)]
    pub input: PathBuf,
    /// Pattern to verify, as comma-separated item IDs (e.g. "1,3")
    #[arg(long)]
    pub pattern: String,
    /// Only accept occurrences within a rolling window of this many events
    #[arg(long)]
    pub window: Option<usize>,
    /// List every occurrence's positions (exponential; short sequences only)
    #[arg(long)]
    pub enumerate: bool,
    /// Output results as JSON (one object per sequence)
    #[arg(long)]
    pub json: bool,
}

/// Parses "5" into an absolute count and "0.3" into a fraction.
///
/// # Errors
///
/// Returns a description of the offending value when it is neither an
/// integer nor a real number.
pub fn parse_min_frequency(raw: &str) -> Result<MinFrequency, String> {
    if raw.contains('.') {
        raw.parse::<f64>()
            .map(MinFrequency::Fraction)
            .map_err(|e| format!("invalid fraction `{raw}`: {e}"))
    } else {
        raw.parse::<u64>()
            .map(MinFrequency::Count)
            .map_err(|e| format!("invalid row count `{raw}`: {e}"))
    }
}

/// Parses a comma-separated pattern like "1,3" into item IDs.
///
/// # Errors
///
/// Returns a description of the first non-integer entry.
pub fn parse_pattern(raw: &str) -> Result<Vec<u64>, String> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<u64>()
                .map_err(|e| format!("invalid item `{part}`: {e}"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_min_frequency() {
        assert_eq!(parse_min_frequency("5"), Ok(MinFrequency::Count(5)));
        assert_eq!(parse_min_frequency("0.3"), Ok(MinFrequency::Fraction(0.3)));
        assert!(parse_min_frequency("five").is_err());
    }

    #[test]
    fn test_parse_pattern() {
        assert_eq!(parse_pattern("1,3"), Ok(vec![1, 3]));
        assert_eq!(parse_pattern(" 2 , 4 "), Ok(vec![2, 4]));
        assert!(parse_pattern("1,x").is_err());
    }
}
