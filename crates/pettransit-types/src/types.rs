//! Shared enums used across the dispatch domain

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Kind of pet being transported
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PetType {
    Dog,
    Cat,
}

impl PetType {
    pub fn label(&self) -> &'static str {
        match self {
            PetType::Dog => "Dog",
            PetType::Cat => "Cat",
        }
    }
}

impl std::fmt::Display for PetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PetType::Dog => write!(f, "dog"),
            PetType::Cat => write!(f, "cat"),
        }
    }
}

/// Opening status of a veterinary
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VetStatus {
    /// Open during regular hours
    Online,
    /// Closed
    Offline,
    /// Open 24 hours
    Extended,
}

impl VetStatus {
    pub fn label(&self) -> &'static str {
        match self {
            VetStatus::Online => "Open",
            VetStatus::Offline => "Closed",
            VetStatus::Extended => "24 Hours",
        }
    }

    /// Whether the veterinary currently takes patients
    pub fn is_open(&self) -> bool {
        !matches!(self, VetStatus::Offline)
    }
}

/// Status of a fleet vehicle
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VehicleStatus {
    Available,
    InTransit,
    Offline,
}

impl VehicleStatus {
    pub fn label(&self) -> &'static str {
        match self {
            VehicleStatus::Available => "Available",
            VehicleStatus::InTransit => "In Transit",
            VehicleStatus::Offline => "Offline",
        }
    }
}

impl std::fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VehicleStatus::Available => write!(f, "available"),
            VehicleStatus::InTransit => write!(f, "in-transit"),
            VehicleStatus::Offline => write!(f, "offline"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vehicle_status_serializes_kebab_case() {
        let json = serde_json::to_string(&VehicleStatus::InTransit).unwrap();
        assert_eq!(json, "\"in-transit\"");
        let status: VehicleStatus = serde_json::from_str("\"available\"").unwrap();
        assert_eq!(status, VehicleStatus::Available);
    }

    #[test]
    fn test_vet_status_open() {
        assert!(VetStatus::Online.is_open());
        assert!(VetStatus::Extended.is_open());
        assert!(!VetStatus::Offline.is_open());
        assert_eq!(VetStatus::Extended.label(), "24 Hours");
    }
}
