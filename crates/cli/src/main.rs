use std::path::Path;
use std::{fs, process};

use chrono::Local;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use seqmine_cli::{parse_pattern, App, Command};
use seqmine_core::constraint::shuffle;
use seqmine_core::pattern::{aggregate, PatternRow};
use seqmine_core::subsequence::{
    is_subsequence, is_subsequence_in_rolling, matched_subsequences,
};
use seqmine_core::PatternMiner;
use seqmine_dataset::{parse_rows, ItemMap, RowData};
use seqmine_testgen::generator::Dataset;
use seqmine_testgen::ExhaustiveMiner;
use tracing_subscriber::EnvFilter;

/// Exhaustive occurrence listing is exponential; refuse beyond this.
const MAX_ENUMERATE_LEN: usize = 24;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let app = App::parse();
    match &app.command {
        Command::Generate(args) => generate(args),
        Command::Shuffle(args) => shuffle_dataset(args),
        Command::Mine(args) => mine(args),
        Command::Verify(args) => verify(args),
        Command::Schema => schema(),
    }
}

fn generate(args: &seqmine_cli::GenerateArgs) {
    fs::create_dir_all(&args.output_dir).unwrap_or_else(|e| {
        eprintln!("Failed to create output directory: {e}");
        process::exit(1);
    });

    let datasets = seqmine_testgen::generator::generate_mult_datasets(
        args.n_dataset,
        args.n_sequence,
        args.n_symbol,
        args.max_events,
        args.n_attribute,
    );

    for dataset in &datasets {
        let path = args.output_dir.join(format!("{}.json", dataset.get_id()));
        let file = fs::File::create(&path).unwrap_or_else(|e| {
            eprintln!("Failed to create {}: {e}", path.display());
            process::exit(1);
        });
        serde_json::to_writer_pretty(file, dataset).unwrap_or_else(|e| {
            eprintln!("Failed to write {}: {e}", path.display());
            process::exit(1);
        });
    }

    println!(
        "Generated {} datasets to {}",
        datasets.len(),
        args.output_dir.display()
    );
}

fn load_dataset(path: &Path) -> Dataset {
    let file = fs::File::open(path).unwrap_or_else(|e| {
        eprintln!("Failed to open {}: {e}", path.display());
        process::exit(1);
    });
    serde_json::from_reader(file).unwrap_or_else(|e| {
        eprintln!("Failed to parse {}: {e}", path.display());
        process::exit(1);
    })
}

/// Sequences in integer-item form, plus the item map when the source file
/// was symbolic (so output patterns can be translated back).
struct LoadedSequences {
    sequences: Vec<Vec<u64>>,
    items: Option<ItemMap>,
}

/// Reads sequences from a dataset JSON file or a whitespace row file.
fn load_sequences(path: &Path) -> LoadedSequences {
    if path.extension().is_some_and(|ext| ext == "json") {
        return LoadedSequences {
            sequences: load_dataset(path).get_sequences().clone(),
            items: None,
        };
    }

    let text = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Failed to read {}: {e}", path.display());
        process::exit(1);
    });
    match parse_rows(&text) {
        Ok(RowData::Numeric(rows)) => {
            let sequences = rows
                .into_iter()
                .map(|row| {
                    row.into_iter()
                        .map(|value| {
                            u64::try_from(value).unwrap_or_else(|_| {
                                eprintln!("Negative item ID {value} in {}", path.display());
                                process::exit(1);
                            })
                        })
                        .collect()
                })
                .collect();
            LoadedSequences {
                sequences,
                items: None,
            }
        }
        Ok(RowData::Symbolic(rows)) => {
            let items = ItemMap::from_sequences(&rows);
            let sequences = items.encode(&rows).unwrap_or_else(|e| {
                eprintln!("Failed to encode {}: {e:?}", path.display());
                process::exit(1);
            });
            LoadedSequences {
                sequences,
                items: Some(items),
            }
        }
        Err(e) => {
            eprintln!("Failed to parse {}: {e}", path.display());
            process::exit(1);
        }
    }
}

fn shuffle_dataset(args: &seqmine_cli::ShuffleArgs) {
    let dataset = load_dataset(&args.input);

    let mut rng = StdRng::seed_from_u64(args.seed);
    let start = Local::now();
    let (sequences, attributes) = shuffle(
        dataset.get_sequences(),
        dataset.get_attributes(),
        &mut rng,
    );
    let end = Local::now();

    let shuffled = Dataset::new(
        dataset.get_cloned_params(),
        format!("shuffled (seed {})", args.seed),
        start,
        end,
        sequences,
        attributes,
    );

    let file = fs::File::create(&args.output).unwrap_or_else(|e| {
        eprintln!("Failed to create {}: {e}", args.output.display());
        process::exit(1);
    });
    serde_json::to_writer_pretty(file, &shuffled).unwrap_or_else(|e| {
        eprintln!("Failed to write {}: {e}", args.output.display());
        process::exit(1);
    });

    println!(
        "Shuffled {} to {}",
        args.input.display(),
        args.output.display()
    );
}

#[allow(clippy::cast_possible_truncation)]
fn mine(args: &seqmine_cli::MineArgs) {
    let loaded = load_sequences(&args.input);
    let sequences = &loaded.sequences;
    let num_rows = sequences.len() as u64;
    if num_rows == 0 {
        eprintln!("No sequences in {}", args.input.display());
        process::exit(1);
    }

    let batch_size = args.batch_size.unwrap_or(num_rows);
    if let Err(e) = args.min_frequency.validate_for_batches(num_rows, batch_size) {
        eprintln!("Invalid threshold: {e:?}");
        process::exit(1);
    }

    let chunks: Vec<&[Vec<u64>]> = sequences.chunks(batch_size as usize).collect();

    let miner = ExhaustiveMiner;
    let chunk_results: Vec<Vec<PatternRow<u64>>> = chunks
        .iter()
        .map(|chunk| {
            let local_threshold = args
                .min_frequency
                .adjust_for_batch(chunk.len() as u64, args.lower_bound_factor);
            match miner.mine(chunk, local_threshold) {
                Ok(rows) => rows,
                Err(never) => match never {},
            }
        })
        .collect();

    let rows = aggregate(&chunk_results, args.min_frequency.min_row_count(num_rows));

    match &loaded.items {
        Some(items) => {
            let decoded = items.decode_rows(&rows).unwrap_or_else(|e| {
                eprintln!("Failed to decode mined patterns: {e:?}");
                process::exit(1);
            });
            report_rows(&decoded, args.json, args.verbose);
        }
        None => report_rows(&rows, args.json, args.verbose),
    }
}

fn report_rows<Item>(rows: &[PatternRow<Item>], json: bool, verbose: bool)
where
    Item: core::fmt::Debug + serde::Serialize,
{
    if json {
        let result = serde_json::json!({ "patterns": rows });
        println!("{}", serde_json::to_string(&result).unwrap());
    } else if verbose {
        println!("{} patterns", rows.len());
        for row in rows {
            println!("  {row:?}");
        }
    } else {
        println!("{} patterns", rows.len());
    }
}

fn verify(args: &seqmine_cli::VerifyArgs) {
    let loaded = load_sequences(&args.input);

    let pattern: Vec<u64> = match &loaded.items {
        Some(items) => args
            .pattern
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| {
                items.id(part).unwrap_or_else(|| {
                    eprintln!("Unknown item `{part}`");
                    process::exit(1);
                })
            })
            .collect(),
        None => parse_pattern(&args.pattern).unwrap_or_else(|e| {
            eprintln!("Invalid pattern: {e}");
            process::exit(1);
        }),
    };

    let mut support = 0u64;
    for (index, sequence) in loaded.sequences.iter().enumerate() {
        let contained = args.window.map_or_else(
            || is_subsequence(&pattern, sequence),
            |window| is_subsequence_in_rolling(&pattern, sequence, window),
        );
        if contained {
            support += 1;
        }

        if args.json {
            let occurrences = occurrence_positions(sequence, &pattern, args.enumerate);
            let result = serde_json::json!({
                "sequence": index,
                "contained": contained,
                "occurrences": occurrences,
            });
            println!("{}", serde_json::to_string(&result).unwrap());
        } else if contained {
            println!("sequence {index}: FOUND");
            if let Some(positions) = occurrence_positions(sequence, &pattern, args.enumerate) {
                for occurrence in positions {
                    println!("  at positions {occurrence:?}");
                }
            }
        } else {
            println!("sequence {index}: not found");
        }
    }

    println!(
        "pattern occurs in {support} of {} sequences",
        loaded.sequences.len()
    );
    if support == 0 {
        process::exit(1);
    }
}

fn occurrence_positions(
    sequence: &[u64],
    pattern: &[u64],
    enumerate: bool,
) -> Option<Vec<Vec<usize>>> {
    if !enumerate {
        return None;
    }
    if sequence.len() > MAX_ENUMERATE_LEN {
        eprintln!(
            "Skipping occurrence listing for a sequence of {} items (limit {MAX_ENUMERATE_LEN})",
            sequence.len()
        );
        return None;
    }
    let (_, positions) = matched_subsequences(sequence, pattern);
    Some(positions)
}

fn schema() {
    let schema = schemars::schema_for!(Dataset);
    println!("{}", serde_json::to_string_pretty(&schema).unwrap());
}
