//! Master file parsers.
//!
//! Every master file is read once and parsed twice:
//! - `jsonc`: lenient comment-stripping parser, yields key/value pairs
//! - `structured`: line scanner, yields comments and entries in source order

pub mod jsonc;
pub mod structured;

pub use jsonc::{parse_jsonc_values, strip_jsonc};
pub use structured::{LineKind, classify_line, parse_jsonc_items};
