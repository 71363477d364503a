//! Dataset collaborators for seqmine.
//!
//! The mining core works on integer items and stays free of I/O; this
//! crate supplies everything around it: parsing whitespace-separated row
//! files ([`parse`]), mapping symbolic items to the integer IDs the core
//! expects and back ([`items`]), shape validation of sequences against
//! attribute values ([`validate`]), and the summary statistics commonly
//! reported over sequences and mined patterns ([`stats`]).

pub mod items;
pub mod parse;
pub mod stats;
pub mod validate;

pub use items::ItemMap;
pub use parse::{format_rows, parse_rows, ParseError, RowData};
