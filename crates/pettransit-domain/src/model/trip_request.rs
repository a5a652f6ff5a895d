//! Trip request model

use pettransit_types::PetType;
use serde::{Deserialize, Serialize};

/// A rider's request for a pet transport, as seen by drivers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripRequest {
    pub id: String,
    pub client_name: String,
    pub client_phone: String,
    pub pet_type: PetType,
    pub breed: String,
    /// Pet weight in kilograms
    pub weight_kg: f64,
    pub pickup: String,
    pub destination: String,
    /// Trip distance in kilometers
    pub distance_km: f64,
    pub fare: f64,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub is_night_time: bool,
}
