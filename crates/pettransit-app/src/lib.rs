//! Application service layer - config, logging, rider/driver/admin use cases

pub mod app;
pub mod config;
pub mod logging;
pub mod repository;
