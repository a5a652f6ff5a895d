//! Repository trait definitions for reference data

use pettransit_types::{Error, VehicleStatus};

use crate::model::{DailyTotals, TripRequest, Vehicle, Veterinary};

/// Repository for veterinaries
pub trait VeterinaryRepository {
    /// Find all veterinaries, in catalog order
    fn find_all(&self) -> Result<Vec<Veterinary>, Error>;

    /// Find a veterinary by id
    fn find_by_id(&self, id: &str) -> Result<Option<Veterinary>, Error>;

    /// Find veterinaries currently taking patients
    fn find_open(&self) -> Result<Vec<Veterinary>, Error> {
        Ok(self.find_all()?.into_iter().filter(|v| v.is_open()).collect())
    }
}

/// Repository for pending trip requests
pub trait TripRequestRepository {
    /// Find all trip requests, in catalog order
    fn find_all(&self) -> Result<Vec<TripRequest>, Error>;

    /// Find a trip request by id
    fn find_by_id(&self, id: &str) -> Result<Option<TripRequest>, Error>;
}

/// Repository for fleet vehicles
pub trait VehicleRepository {
    /// Find all vehicles, in catalog order
    fn find_all(&self) -> Result<Vec<Vehicle>, Error>;

    /// Find vehicles with the given status
    fn find_by_status(&self, status: VehicleStatus) -> Result<Vec<Vehicle>, Error> {
        Ok(self
            .find_all()?
            .into_iter()
            .filter(|v| v.status == status)
            .collect())
    }

    /// Totals for the current day
    fn daily_totals(&self) -> Result<DailyTotals, Error>;
}
