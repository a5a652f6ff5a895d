//! Admin fleet board: dashboard statistics and map placement

use pettransit_types::VehicleStatus;

use crate::model::{BoardEntry, DailyTotals, FleetStats, MapMarker, Vehicle};

/// Compute dashboard statistics from the live fleet and the day's totals
pub fn fleet_stats(vehicles: &[Vehicle], totals: &DailyTotals) -> FleetStats {
    let count = |status: VehicleStatus| vehicles.iter().filter(|v| v.status == status).count();
    FleetStats {
        active_trips: count(VehicleStatus::InTransit),
        available_drivers: count(VehicleStatus::Available),
        completed_today: totals.completed_today,
        revenue: totals.revenue,
    }
}

/// Marker position for the vehicle at `index` in the board listing
pub fn marker_position(index: usize) -> MapMarker {
    let i = index as f64;
    MapMarker {
        top_pct: 35.0 + i * 20.0,
        left_pct: 40.0 + i * 15.0,
    }
}

/// Place every vehicle on the map, then keep those matching `status`.
///
/// Markers come from the position in the full fleet, so a filtered listing
/// shows each vehicle where the unfiltered board would.
pub fn board_entries(vehicles: Vec<Vehicle>, status: Option<VehicleStatus>) -> Vec<BoardEntry> {
    vehicles
        .into_iter()
        .enumerate()
        .filter(|(_, v)| status.map_or(true, |s| v.status == s))
        .map(|(index, vehicle)| BoardEntry {
            vehicle,
            marker: marker_position(index),
        })
        .collect()
}

pub fn generate_fleet_report(entries: &[BoardEntry], stats: &FleetStats) -> String {
    let mut report = String::new();
    report.push_str("==================================================\n");
    report.push_str("                  Fleet Dashboard                 \n");
    report.push_str("==================================================\n\n");
    report.push_str("[Summary]\n");
    report.push_str(&format!("  Active trips:        {}\n", stats.active_trips));
    report.push_str(&format!("  Available drivers:   {}\n", stats.available_drivers));
    report.push_str(&format!("  Completed today:     {}\n", stats.completed_today));
    report.push_str(&format!("  Revenue:             ${:.2}\n", stats.revenue));
    report.push('\n');

    if entries.is_empty() {
        report.push_str("[No vehicles]\n\n");
    } else {
        report.push_str("[Vehicles]\n");
        report.push_str("-".repeat(78).as_str());
        report.push('\n');
        report.push_str(&format!(
            "{:<4} {:<18} {:<11} {:>10} {:>11} {:>6} {:>6}  {}\n",
            "ID", "Driver", "Status", "Lat", "Lng", "Top%", "Left%", "Trip"
        ));
        report.push_str("-".repeat(78).as_str());
        report.push('\n');
        for BoardEntry { vehicle, marker } in entries {
            let trip = vehicle
                .current_trip
                .as_ref()
                .map(|t| format!("{} -> {} ({}, {})", t.pickup, t.destination, t.pet_type.label(), t.eta))
                .unwrap_or_else(|| "-".to_string());
            report.push_str(&format!(
                "{:<4} {:<18} {:<11} {:>10.6} {:>11.6} {:>6.0} {:>6.0}  {}\n",
                truncate_str(&vehicle.id, 4),
                truncate_str(&vehicle.driver, 18),
                vehicle.status.label(),
                vehicle.location.lat,
                vehicle.location.lng,
                marker.top_pct,
                marker.left_pct,
                trip
            ));
        }
        report.push('\n');
    }

    report.push_str("==================================================\n");
    report
}

fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let truncated: String = s.chars().take(max_len.saturating_sub(2)).collect();
        format!("{}..", truncated)
    } else {
        s.to_string()
    }
}
