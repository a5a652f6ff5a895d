//! Domain model types

pub mod fleet;
pub mod notice;
pub mod pet_details;
pub mod trip_request;
pub mod vehicle;
pub mod veterinary;

pub use fleet::{BoardEntry, DailyTotals, FleetStats, MapMarker};
pub use notice::{Notice, NoticeLevel};
pub use pet_details::PetDetails;
pub use trip_request::TripRequest;
pub use vehicle::{GeoPoint, TripSummary, Vehicle};
pub use veterinary::Veterinary;
