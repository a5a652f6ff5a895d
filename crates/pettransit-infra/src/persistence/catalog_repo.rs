//! Catalog-backed implementation of the reference data repositories

use std::path::{Path, PathBuf};

use pettransit_domain::model::{DailyTotals, TripRequest, Vehicle, Veterinary};
use pettransit_domain::repository::{
    TripRequestRepository, VehicleRepository, VeterinaryRepository,
};
use pettransit_types::Error;

use crate::catalog::Catalog;
use crate::catalog_loader::CatalogLoader;
use crate::sample_data;
use crate::trip_request_csv::load_trip_requests_from_csv;

/// Where the catalog came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    BuiltIn,
    File(PathBuf),
}

pub struct CatalogRepository {
    source: CatalogSource,
    catalog: Catalog,
}

impl CatalogRepository {
    /// Repository over the built-in sample data
    pub fn builtin() -> Self {
        Self {
            source: CatalogSource::BuiltIn,
            catalog: sample_data::catalog(),
        }
    }

    /// Repository over a TOML catalog file
    pub fn open(toml_path: PathBuf) -> Result<Self, Error> {
        let catalog = CatalogLoader::load_from_file(&toml_path)?;
        Ok(Self {
            source: CatalogSource::File(toml_path),
            catalog,
        })
    }

    pub fn source(&self) -> &CatalogSource {
        &self.source
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Reload data from the source file. The built-in catalog is simply rebuilt.
    pub fn reload(&mut self) -> Result<(), Error> {
        self.catalog = match &self.source {
            CatalogSource::BuiltIn => sample_data::catalog(),
            CatalogSource::File(path) => CatalogLoader::load_from_file(path)?,
        };
        Ok(())
    }

    /// Append trip requests from a CSV file
    pub fn import_trip_requests(&mut self, csv_path: &Path) -> Result<usize, Error> {
        let requests = load_trip_requests_from_csv(csv_path)?;
        let count = requests.len();
        self.catalog.extend_trip_requests(requests)?;
        Ok(count)
    }
}

impl VeterinaryRepository for CatalogRepository {
    fn find_all(&self) -> Result<Vec<Veterinary>, Error> {
        Ok(self.catalog.veterinaries.clone())
    }

    fn find_by_id(&self, id: &str) -> Result<Option<Veterinary>, Error> {
        Ok(self.catalog.veterinaries.iter().find(|v| v.id == id).cloned())
    }
}

impl TripRequestRepository for CatalogRepository {
    fn find_all(&self) -> Result<Vec<TripRequest>, Error> {
        Ok(self.catalog.trip_requests.clone())
    }

    fn find_by_id(&self, id: &str) -> Result<Option<TripRequest>, Error> {
        Ok(self.catalog.trip_requests.iter().find(|r| r.id == id).cloned())
    }
}

impl VehicleRepository for CatalogRepository {
    fn find_all(&self) -> Result<Vec<Vehicle>, Error> {
        Ok(self.catalog.vehicles.clone())
    }

    fn daily_totals(&self) -> Result<DailyTotals, Error> {
        Ok(self.catalog.daily_totals)
    }
}
