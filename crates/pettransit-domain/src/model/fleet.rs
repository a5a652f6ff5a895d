//! Admin dashboard figures

use serde::{Deserialize, Serialize};

use super::Vehicle;

/// Totals for the current day that are not derivable from the live fleet
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyTotals {
    pub completed_today: u32,
    pub revenue: f64,
}

/// Dashboard statistics
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FleetStats {
    pub active_trips: usize,
    pub available_drivers: usize,
    pub completed_today: u32,
    pub revenue: f64,
}

/// Position of a vehicle marker on the dashboard map, in percent of the map box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapMarker {
    pub top_pct: f64,
    pub left_pct: f64,
}

/// A listed vehicle with the marker it was assigned in the full fleet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardEntry {
    pub vehicle: Vehicle,
    pub marker: MapMarker,
}
