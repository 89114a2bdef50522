//! Lingo - multi-platform translation generator
//!
//! Lingo compiles one master set of per-language JSONC translation files
//! into an iOS string catalog, Android string resources and flat React
//! JSON files.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, commands, console output)
//! - `config`: Configuration file loading and parsing
//! - `core`: Master file parsers, loader and platform placeholder handling
//! - `emitters`: One writer per output platform
//! - `pipeline`: Clean, load and emit in one run
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod emitters;
pub mod pipeline;
pub mod utils;
