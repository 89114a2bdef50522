//! Core loading engine.
//!
//! ## Module Structure
//!
//! - `data`: Loaded data types (Repository, Translations, OrderedItem)
//! - `parsers`: JSONC value parser and order-preserving line scanner
//! - `loader`: Walks the master directory and fills the Repository
//! - `platform`: Output platforms and placeholder substitution

pub mod data;
pub mod loader;
pub mod parsers;
pub mod platform;

pub use data::{OrderedItem, RawMap, Repository, Translations, ValueMap};
pub use loader::{MASTER_FILE_EXTENSION, load_repository};
pub use platform::{PLATFORM_PLACEHOLDER, Platform, PlatformNames, substitute_platform};
