//! Infrastructure layer - sample catalog, loaders, repository implementations

pub mod catalog;
pub mod catalog_loader;
pub mod persistence;
pub mod sample_data;
pub mod trip_request_csv;

pub use catalog::Catalog;
