//! Error types for pettransit

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration directory not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
}

/// Catalog (sample data) errors
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Read(String),

    #[error("Failed to parse catalog: {0}")]
    Parse(String),

    #[error("Duplicate {kind} id in catalog: {id}")]
    DuplicateId { kind: &'static str, id: String },

    #[error("Veterinary not found: {0}")]
    VeterinaryNotFound(String),
}

/// Fare estimation errors
#[derive(Debug, Error, PartialEq)]
pub enum FareError {
    #[error("Distance must be a finite, non-negative number of kilometers (got {0})")]
    InvalidDistance(f64),

    #[error("Hour must be between 0 and 23 (got {0})")]
    InvalidHour(u32),
}

/// Driver session transition errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DriverError {
    #[error("A trip is already in progress ({active_id}); complete it before accepting another")]
    AlreadyActive { active_id: String },

    #[error("Trip request not found: {0}")]
    RequestNotFound(String),

    #[error("No trip in progress")]
    NoActiveTrip,
}

/// Rider flow transition errors
#[derive(Debug, Error, PartialEq)]
pub enum RiderError {
    #[error("Cannot {action} while at step '{step}'")]
    WrongStep {
        action: &'static str,
        step: &'static str,
    },

    #[error("Please complete all fields (missing: {})", .missing.join(", "))]
    IncompleteDetails { missing: Vec<&'static str> },

    #[error("Weight must be a positive number of kilograms (got '{0}')")]
    InvalidWeight(String),

    #[error("Already at the first step")]
    AtFirstStep,

    #[error("Trip confirmed; the form resets shortly")]
    ResetPending,

    #[error(transparent)]
    Fare(#[from] FareError),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Fare error: {0}")]
    Fare(#[from] FareError),

    #[error("Driver error: {0}")]
    Driver(#[from] DriverError),

    #[error("Rider error: {0}")]
    Rider(#[from] RiderError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, Error>;
