//! Veterinary reference data

use pettransit_types::VetStatus;
use serde::{Deserialize, Serialize};

/// A veterinary clinic a rider can be taken to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Veterinary {
    pub id: String,
    pub name: String,
    pub address: String,
    /// Distance from the rider in kilometers
    pub distance_km: f64,
    pub status: VetStatus,
    /// Accepted species, as displayed (e.g. "Dogs", "Cats", "Exotics")
    #[serde(default)]
    pub accepts: Vec<String>,
    /// Average rating out of 5
    pub rating: f64,
}

impl Veterinary {
    pub fn is_open(&self) -> bool {
        self.status.is_open()
    }
}
