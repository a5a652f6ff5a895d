//! Domain layer for pet transport dispatch
//!
//! Models, the fare estimator, the driver and rider lifecycles, and the
//! read-only repository traits the infrastructure layer implements.

pub mod model;
pub mod repository;
pub mod service;
