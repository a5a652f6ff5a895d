//! Application use cases, one per role

pub mod admin_service;
pub mod driver_service;
pub mod rider_service;

pub use admin_service::{fleet_board, FleetBoard};
pub use driver_service::{run_driver_session, ActionOutcome, DriverAction, DriverReport};
pub use rider_service::{run_rider_flow, RiderReport, RiderRequest};

use pettransit_domain::service::{estimate_fare, estimate_now, FareBreakdown};
use pettransit_types::Result;

use crate::config::Config;

/// Price a trip with the configured tariff, at `hour` or the current local hour
pub fn quote_fare(config: &Config, distance_km: f64, hour: Option<u32>) -> Result<FareBreakdown> {
    let fare = match hour {
        Some(hour) => estimate_fare(&config.fare, distance_km, hour)?,
        None => estimate_now(&config.fare, distance_km)?,
    };
    Ok(fare)
}
