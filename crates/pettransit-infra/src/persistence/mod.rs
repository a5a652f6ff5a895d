//! Repository implementations
//!
//! The catalog repository serves all reference data from a single
//! in-memory `Catalog`, either the built-in sample or a TOML file.

mod catalog_repo;

pub use catalog_repo::{CatalogRepository, CatalogSource};
