//! Reference data catalog backing the repositories

use std::collections::HashSet;

use pettransit_domain::model::{DailyTotals, TripRequest, Vehicle, Veterinary};
use pettransit_types::CatalogError;
use serde::{Deserialize, Serialize};

/// All reference data for a session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub veterinaries: Vec<Veterinary>,
    #[serde(default)]
    pub trip_requests: Vec<TripRequest>,
    #[serde(default)]
    pub vehicles: Vec<Vehicle>,
    #[serde(default)]
    pub daily_totals: DailyTotals,
}

impl Catalog {
    /// Check ids are unique per entity and numeric fields are in range
    pub fn validate(&self) -> Result<(), CatalogError> {
        ensure_unique("veterinary", self.veterinaries.iter().map(|v| v.id.as_str()))?;
        ensure_unique("trip request", self.trip_requests.iter().map(|r| r.id.as_str()))?;
        ensure_unique("vehicle", self.vehicles.iter().map(|v| v.id.as_str()))?;

        for vet in &self.veterinaries {
            if !vet.distance_km.is_finite() || vet.distance_km < 0.0 {
                return Err(CatalogError::Parse(format!(
                    "veterinary {} has invalid distance {}",
                    vet.id, vet.distance_km
                )));
            }
        }
        for request in &self.trip_requests {
            if !request.distance_km.is_finite() || request.distance_km < 0.0 {
                return Err(CatalogError::Parse(format!(
                    "trip request {} has invalid distance {}",
                    request.id, request.distance_km
                )));
            }
        }
        Ok(())
    }

    /// Append imported trip requests, refusing ids that already exist
    pub fn extend_trip_requests(&mut self, requests: Vec<TripRequest>) -> Result<(), CatalogError> {
        ensure_unique(
            "trip request",
            self.trip_requests.iter().chain(requests.iter()).map(|r| r.id.as_str()),
        )?;
        self.trip_requests.extend(requests);
        Ok(())
    }
}

fn ensure_unique<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(CatalogError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample_data;

    #[test]
    fn test_sample_catalog_is_valid() {
        assert!(sample_data::catalog().validate().is_ok());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut catalog = sample_data::catalog();
        let dup = catalog.vehicles[0].clone();
        catalog.vehicles.push(dup);
        match catalog.validate() {
            Err(CatalogError::DuplicateId { kind, id }) => {
                assert_eq!(kind, "vehicle");
                assert_eq!(id, "1");
            }
            other => panic!("expected duplicate id error, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_distance_rejected() {
        let mut catalog = sample_data::catalog();
        catalog.veterinaries[0].distance_km = -2.0;
        assert!(matches!(catalog.validate(), Err(CatalogError::Parse(_))));
    }

    #[test]
    fn test_extend_refuses_existing_ids() {
        let mut catalog = sample_data::catalog();
        let existing = catalog.trip_requests[0].clone();
        assert!(catalog.extend_trip_requests(vec![existing]).is_err());
    }
}
