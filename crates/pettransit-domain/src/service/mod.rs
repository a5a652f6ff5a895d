//! Domain services

pub mod driver_session;
pub mod fare_estimator;
pub mod fleet_board;
pub mod rider_flow;

pub use driver_session::{CompletedTrip, DriverSession, DriverState};
pub use fare_estimator::{estimate_fare, estimate_now, FareBreakdown, FareSchedule};
pub use fleet_board::{board_entries, fleet_stats, generate_fleet_report, marker_position};
pub use rider_flow::{Confirmation, RiderContact, RiderFlow, RiderStep, DEFAULT_RESET_DELAY};
