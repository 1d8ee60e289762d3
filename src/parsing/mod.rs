//! Classmap parsing: locating alias registrations in PHP source lines
//! and accumulating them into maps.

pub mod classmap;
pub mod extractor;

pub use classmap::ClassMaps;
pub use extractor::{AliasExtractor, AliasRecord};
