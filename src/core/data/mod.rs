//! Data types shared by the loader and the emitters.
//!
//! ## Module Structure
//!
//! - `item`: A single master file's contents (Translations, OrderedItem)
//! - `repository`: Aggregate maps over all modules and languages (Repository)

pub mod item;
pub mod repository;

pub use item::{OrderedItem, Translations};
pub use repository::{RawMap, Repository, ValueMap};
