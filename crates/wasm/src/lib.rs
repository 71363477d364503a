//! wasm library for seqmine
//! compiled binary is uploaded as github action artifact

#![cfg_attr(not(test), no_std)]
#![cfg_attr(not(test), no_main)]

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use seqmine_core::pattern::{aggregate, PatternRow};
use seqmine_core::subsequence::{is_subsequence, is_subsequence_in_rolling};
use wasm_bindgen::prelude::*;

/// Merge per-chunk mining results (as JSON) at the given absolute
/// threshold.
///
/// `chunks_json` is an array of chunk outputs, each an array of
/// `{"items": [...], "count": n}` rows.
///
/// Returns a JSON string:
/// - On success: `{"ok":true,"patterns":[{"items":[...],"count":n},...]}`
/// - On invalid input: `{"ok":false,"error":"<description>"}`
#[must_use]
#[wasm_bindgen]
pub fn aggregate_chunks(chunks_json: &str, min_row_count: u64) -> String {
    let chunks = match serde_json::from_str::<Vec<Vec<PatternRow<u64>>>>(chunks_json) {
        Ok(chunks) => chunks,
        Err(e) => {
            return serde_json::json!({"ok": false, "error": e.to_string()}).to_string();
        }
    };

    let patterns = aggregate(&chunks, min_row_count);
    serde_json::json!({"ok": true, "patterns": patterns}).to_string()
}

/// Check a pattern against every sequence, plainly or within a rolling
/// window (`window_size == 0` means unbounded).
///
/// Returns a JSON string:
/// - On success: `{"ok":true,"support":n,"contained":[true,false,...]}`
/// - On invalid input: `{"ok":false,"error":"<description>"}`
#[must_use]
#[wasm_bindgen]
pub fn verify_pattern(sequences_json: &str, pattern_json: &str, window_size: u32) -> String {
    let sequences = match serde_json::from_str::<Vec<Vec<u64>>>(sequences_json) {
        Ok(sequences) => sequences,
        Err(e) => {
            return serde_json::json!({"ok": false, "error": e.to_string()}).to_string();
        }
    };
    let pattern = match serde_json::from_str::<Vec<u64>>(pattern_json) {
        Ok(pattern) => pattern,
        Err(e) => {
            return serde_json::json!({"ok": false, "error": e.to_string()}).to_string();
        }
    };

    let contained: Vec<bool> = sequences
        .iter()
        .map(|sequence| {
            if window_size == 0 {
                is_subsequence(&pattern, sequence)
            } else {
                is_subsequence_in_rolling(&pattern, sequence, window_size as usize)
            }
        })
        .collect();
    let support = contained.iter().filter(|&&found| found).count();

    serde_json::json!({"ok": true, "support": support, "contained": contained}).to_string()
}
