//! Admin use case: fleet dashboard

use pettransit_domain::model::{BoardEntry, FleetStats};
use pettransit_domain::repository::VehicleRepository;
use pettransit_domain::service::{board_entries, fleet_stats};
use pettransit_types::{Result, VehicleStatus};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct FleetBoard {
    pub stats: FleetStats,
    pub entries: Vec<BoardEntry>,
}

/// Build the dashboard. Stats always cover the whole fleet; `status`
/// only narrows the listed vehicles, which keep their map positions.
pub fn fleet_board<R: VehicleRepository>(
    repo: &R,
    status: Option<VehicleStatus>,
) -> Result<FleetBoard> {
    let vehicles = repo.find_all()?;
    let stats = fleet_stats(&vehicles, &repo.daily_totals()?);

    let entries = board_entries(vehicles, status);
    Ok(FleetBoard { stats, entries })
}
