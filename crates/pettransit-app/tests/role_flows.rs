//! Rider, driver and admin flows over a catalog file

use std::fs;
use std::time::Duration;

use pettransit_app::app::{
    fleet_board, quote_fare, run_driver_session, run_rider_flow, DriverAction, RiderRequest,
};
use pettransit_app::config::Config;
use pettransit_app::repository::open_catalog;
use pettransit_domain::model::NoticeLevel;
use pettransit_domain::service::{DriverState, RiderStep};
use pettransit_types::{PetType, VehicleStatus};
use tempfile::tempdir;

const CATALOG: &str = r#"
[daily_totals]
completed_today = 5
revenue = 900.0

[[veterinaries]]
id = "north"
name = "North Clinic"
address = "Norte 1"
distance_km = 4.0
status = "online"
accepts = ["Perros", "Gatos"]
rating = 4.5

[[trip_requests]]
id = "a"
client_name = "Elena"
client_phone = "+52 1"
pet_type = "dog"
breed = "Boxer"
weight_kg = 30.0
pickup = "Calle A"
destination = "North Clinic"
distance_km = 4.0
fare = 110.0

[[trip_requests]]
id = "b"
client_name = "Jorge"
client_phone = "+52 2"
pet_type = "cat"
breed = "Persa"
weight_kg = 5.0
pickup = "Calle B"
destination = "North Clinic"
distance_km = 2.0
fare = 80.0
is_night_time = true

[[vehicles]]
id = "v1"
driver = "Rita"
status = "available"
location = { lat = 19.40, lng = -99.10 }

[[vehicles]]
id = "v2"
driver = "Omar"
status = "offline"
location = { lat = 19.41, lng = -99.11 }
"#;

fn config_with_catalog() -> (tempfile::TempDir, Config) {
    let dir = tempdir().unwrap();
    let path = dir.path().join("catalog.toml");
    fs::write(&path, CATALOG).unwrap();
    let config = Config {
        catalog_path: Some(path),
        reset_delay_ms: 10,
        ..Default::default()
    };
    (dir, config)
}

#[test]
fn test_rider_flow_against_catalog_file() {
    let (_dir, config) = config_with_catalog();
    let repo = open_catalog(&config, None).unwrap();
    let request = RiderRequest {
        vet_id: "north".to_string(),
        pet_type: Some(PetType::Dog),
        breed: "Boxer".to_string(),
        weight: "30".to_string(),
        notes: "Friendly".to_string(),
        hour: 22,
        ..Default::default()
    };

    let report = run_rider_flow(&repo, &config, &request, std::thread::sleep).unwrap();
    let confirmation = report.confirmation.unwrap();
    // (50 + 4 * 15) * 1.5
    assert!((confirmation.request.fare - 165.0).abs() < 1e-9);
    assert!(confirmation.request.is_night_time);
    assert_eq!(confirmation.request.destination, "North Clinic");
    assert_eq!(report.final_step, RiderStep::SelectVet);
}

#[test]
fn test_rider_reset_not_applied_before_delay() {
    let (_dir, mut config) = config_with_catalog();
    config.reset_delay_ms = 60_000;
    let repo = open_catalog(&config, None).unwrap();
    let request = RiderRequest {
        vet_id: "north".to_string(),
        pet_type: Some(PetType::Cat),
        breed: "Persa".to_string(),
        weight: "5".to_string(),
        hour: 10,
        ..Default::default()
    };

    let mut waited = Duration::ZERO;
    let report = run_rider_flow(&repo, &config, &request, |d| waited = d).unwrap();
    assert_eq!(waited, Duration::from_secs(60));
    assert!(report.confirmation.is_some());
    assert_eq!(report.final_step, RiderStep::Confirm);
}

#[test]
fn test_driver_session_against_catalog_file() {
    let (_dir, config) = config_with_catalog();
    let repo = open_catalog(&config, None).unwrap();
    let actions: Vec<DriverAction> = ["reject:a", "accept:b", "accept:a", "complete", "complete"]
        .iter()
        .map(|s| s.parse().unwrap())
        .collect();

    let report = run_driver_session(&repo, &actions).unwrap();
    let levels: Vec<_> = report.outcomes.iter().map(|o| o.notice.level).collect();
    assert_eq!(
        levels,
        vec![
            NoticeLevel::Info,
            NoticeLevel::Success,
            NoticeLevel::Error,
            NoticeLevel::Success,
            NoticeLevel::Error
        ]
    );
    assert_eq!(report.state, DriverState::Idle);
    assert!((report.earnings - 80.0).abs() < 1e-9);
}

#[test]
fn test_fleet_board_against_catalog_file() {
    let (_dir, config) = config_with_catalog();
    let repo = open_catalog(&config, None).unwrap();
    let board = fleet_board(&repo, None).unwrap();
    assert_eq!(board.stats.active_trips, 0);
    assert_eq!(board.stats.available_drivers, 1);
    assert_eq!(board.stats.completed_today, 5);

    let offline = fleet_board(&repo, Some(VehicleStatus::Offline)).unwrap();
    assert_eq!(offline.entries.len(), 1);
    assert_eq!(offline.entries[0].vehicle.driver, "Omar");
}

#[test]
fn test_quote_fare_examples() {
    let config = Config::default();
    assert!((quote_fare(&config, 5.2, Some(14)).unwrap().total - 128.0).abs() < 1e-9);
    assert!((quote_fare(&config, 8.5, Some(23)).unwrap().total - 266.25).abs() < 1e-9);
    assert!(quote_fare(&config, -0.5, Some(9)).is_err());
}
