//! Fleet vehicle model

use pettransit_types::{PetType, VehicleStatus};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// Summary of the trip a vehicle is currently running
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripSummary {
    pub pickup: String,
    pub destination: String,
    pub pet_type: PetType,
    /// Estimated time of arrival, as displayed (e.g. "15 min")
    pub eta: String,
}

/// A vehicle and its driver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: String,
    pub driver: String,
    pub status: VehicleStatus,
    pub location: GeoPoint,
    #[serde(default)]
    pub current_trip: Option<TripSummary>,
}
