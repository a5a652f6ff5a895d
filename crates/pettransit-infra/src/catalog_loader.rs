//! Catalog loader from TOML files

use std::fs;
use std::path::Path;

use pettransit_types::{CatalogError, Error, Result};
use tracing::debug;

use crate::catalog::Catalog;

pub struct CatalogLoader;

impl CatalogLoader {
    /// Load a catalog from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Catalog> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Catalog(CatalogError::Read(format!("{}: {}", path.display(), e)))
        })?;

        let catalog = Self::load_from_str(&content)?;
        debug!(
            path = %path.display(),
            veterinaries = catalog.veterinaries.len(),
            trip_requests = catalog.trip_requests.len(),
            vehicles = catalog.vehicles.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Load a catalog from a TOML string
    pub fn load_from_str(toml_content: &str) -> Result<Catalog> {
        let catalog: Catalog = toml::from_str(toml_content)
            .map_err(|e| Error::Catalog(CatalogError::Parse(e.to_string())))?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Serialize a catalog to TOML
    pub fn to_toml_string(catalog: &Catalog) -> Result<String> {
        toml::to_string_pretty(catalog)
            .map_err(|e| Error::Catalog(CatalogError::Parse(e.to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pettransit_types::{PetType, VehicleStatus, VetStatus};

    const TEST_TOML: &str = r#"
[daily_totals]
completed_today = 3
revenue = 512.5

[[veterinaries]]
id = "a"
name = "Paws Clinic"
address = "Main St 1"
distance_km = 1.2
status = "extended"
accepts = ["Dogs"]
rating = 4.2

[[trip_requests]]
id = "r1"
client_name = "Lee"
client_phone = "+1 555 0100"
pet_type = "cat"
breed = "Persian"
weight_kg = 3.8
pickup = "Elm St 4"
destination = "Paws Clinic"
distance_km = 1.2
fare = 68.0

[[vehicles]]
id = "v1"
driver = "Sam"
status = "in-transit"
location = { lat = 19.4, lng = -99.1 }

[vehicles.current_trip]
pickup = "Elm St 4"
destination = "Paws Clinic"
pet_type = "cat"
eta = "5 min"
"#;

    #[test]
    fn test_load_from_str() {
        let catalog = CatalogLoader::load_from_str(TEST_TOML).unwrap();
        assert_eq!(catalog.veterinaries.len(), 1);
        assert_eq!(catalog.veterinaries[0].status, VetStatus::Extended);
        assert_eq!(catalog.trip_requests[0].pet_type, PetType::Cat);
        assert_eq!(catalog.trip_requests[0].notes, None);
        assert!(!catalog.trip_requests[0].is_night_time);
        assert_eq!(catalog.vehicles[0].status, VehicleStatus::InTransit);
        assert_eq!(
            catalog.vehicles[0].current_trip.as_ref().map(|t| t.eta.as_str()),
            Some("5 min")
        );
        assert_eq!(catalog.daily_totals.completed_today, 3);
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let catalog = CatalogLoader::load_from_str("").unwrap();
        assert!(catalog.veterinaries.is_empty());
        assert!(catalog.vehicles.is_empty());
    }

    #[test]
    fn test_invalid_toml() {
        let err = CatalogLoader::load_from_str("[[veterinaries]]\nid = 3").unwrap_err();
        assert!(matches!(err, Error::Catalog(CatalogError::Parse(_))));
    }

    #[test]
    fn test_sample_catalog_survives_toml() {
        let sample = crate::sample_data::catalog();
        let text = CatalogLoader::to_toml_string(&sample).unwrap();
        let loaded = CatalogLoader::load_from_str(&text).unwrap();
        assert_eq!(loaded, sample);
    }
}
