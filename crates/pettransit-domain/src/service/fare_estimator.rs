//! Fare estimation

use chrono::Timelike;
use pettransit_types::FareError;
use serde::{Deserialize, Serialize};

/// Tariff used to price a trip
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FareSchedule {
    #[serde(default = "default_base_fare")]
    pub base_fare: f64,
    #[serde(default = "default_per_km_rate")]
    pub per_km_rate: f64,
    /// Multiplier applied to the subtotal during night hours
    #[serde(default = "default_night_multiplier")]
    pub night_multiplier: f64,
    /// First night hour (inclusive)
    #[serde(default = "default_night_start_hour")]
    pub night_start_hour: u32,
    /// First day hour (exclusive end of the night window)
    #[serde(default = "default_night_end_hour")]
    pub night_end_hour: u32,
}

fn default_base_fare() -> f64 {
    50.0
}

fn default_per_km_rate() -> f64 {
    15.0
}

fn default_night_multiplier() -> f64 {
    1.5
}

fn default_night_start_hour() -> u32 {
    22
}

fn default_night_end_hour() -> u32 {
    6
}

impl Default for FareSchedule {
    fn default() -> Self {
        Self {
            base_fare: default_base_fare(),
            per_km_rate: default_per_km_rate(),
            night_multiplier: default_night_multiplier(),
            night_start_hour: default_night_start_hour(),
            night_end_hour: default_night_end_hour(),
        }
    }
}

impl FareSchedule {
    /// Whether `hour` falls in the night window. The window may wrap midnight.
    pub fn is_night_hour(&self, hour: u32) -> bool {
        let (start, end) = (self.night_start_hour, self.night_end_hour);
        if start > end {
            hour >= start || hour < end
        } else {
            hour >= start && hour < end
        }
    }

    /// Surcharge as a whole percentage, e.g. 50 for a 1.5x multiplier
    pub fn surcharge_percent(&self) -> f64 {
        ((self.night_multiplier - 1.0) * 100.0).round()
    }
}

/// Itemized fare for a single trip
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FareBreakdown {
    pub distance_km: f64,
    pub hour: u32,
    pub base_fare: f64,
    pub per_km_rate: f64,
    pub distance_cost: f64,
    pub subtotal: f64,
    pub is_night: bool,
    /// Amount added by the night multiplier, if it applied
    pub night_surcharge: Option<f64>,
    pub total: f64,
}

/// Estimate the fare for `distance_km` at wall-clock `hour` (0-23)
pub fn estimate_fare(
    schedule: &FareSchedule,
    distance_km: f64,
    hour: u32,
) -> Result<FareBreakdown, FareError> {
    if !distance_km.is_finite() || distance_km < 0.0 {
        return Err(FareError::InvalidDistance(distance_km));
    }
    if hour >= 24 {
        return Err(FareError::InvalidHour(hour));
    }

    // Each line item is rounded before it is summed so the breakdown adds up.
    let distance_cost = round_cents(distance_km * schedule.per_km_rate);
    let subtotal = round_cents(schedule.base_fare + distance_cost);
    let is_night = schedule.is_night_hour(hour);
    let night_surcharge =
        is_night.then(|| round_cents(subtotal * (schedule.night_multiplier - 1.0)));
    let total = round_cents(subtotal + night_surcharge.unwrap_or(0.0));

    Ok(FareBreakdown {
        distance_km,
        hour,
        base_fare: schedule.base_fare,
        per_km_rate: schedule.per_km_rate,
        distance_cost,
        subtotal,
        is_night,
        night_surcharge,
        total,
    })
}

/// Estimate the fare using the local wall-clock hour
pub fn estimate_now(schedule: &FareSchedule, distance_km: f64) -> Result<FareBreakdown, FareError> {
    estimate_fare(schedule, distance_km, current_hour())
}

/// Local wall-clock hour (0-23)
pub fn current_hour() -> u32 {
    chrono::Local::now().hour()
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn estimate(distance: f64, hour: u32) -> FareBreakdown {
        estimate_fare(&FareSchedule::default(), distance, hour).unwrap()
    }

    #[test]
    fn test_day_fare_example() {
        let fare = estimate(5.2, 14);
        assert!((fare.total - 128.0).abs() < 1e-9);
        assert!((fare.distance_cost - 78.0).abs() < 1e-9);
        assert!(!fare.is_night);
        assert!(fare.night_surcharge.is_none());
    }

    #[test]
    fn test_night_fare_example() {
        let fare = estimate(8.5, 23);
        assert!((fare.total - 266.25).abs() < 1e-9);
        assert!((fare.subtotal - 177.5).abs() < 1e-9);
        assert!(fare.is_night);
        assert!((fare.night_surcharge.unwrap() - 88.75).abs() < 1e-9);
    }

    #[test]
    fn test_zero_distance_charges_base_fare() {
        assert!((estimate(0.0, 12).total - 50.0).abs() < 1e-9);
        assert!((estimate(0.0, 2).total - 75.0).abs() < 1e-9);
    }

    #[test]
    fn test_night_window_boundaries() {
        let schedule = FareSchedule::default();
        let is_night_hour = |hour| schedule.is_night_hour(hour);
        assert!(!is_night_hour(21));
        assert!(is_night_hour(22));
        assert!(is_night_hour(23));
        assert!(is_night_hour(0));
        assert!(is_night_hour(5));
        assert!(!is_night_hour(6));
    }

    #[test]
    fn test_fare_formula_over_all_hours() {
        for hour in 0..24 {
            for tenths in 0..200 {
                let distance = tenths as f64 / 10.0;
                let subtotal = 50.0 + 15.0 * distance;
                let expected = if hour >= 22 || hour < 6 {
                    subtotal * 1.5
                } else {
                    subtotal
                };
                let fare = estimate(distance, hour);
                assert!(
                    (fare.total - expected).abs() < 0.006,
                    "distance {} hour {}: {} != {}",
                    distance,
                    hour,
                    fare.total,
                    expected
                );
            }
        }
    }

    #[test]
    fn test_breakdown_adds_up_to_total() {
        for hour in [3, 14, 23] {
            for cents in 0..5000 {
                let distance = cents as f64 / 100.0;
                let fare = estimate(distance, hour);
                let sum = fare.subtotal + fare.night_surcharge.unwrap_or(0.0);
                assert!(
                    (sum - fare.total).abs() < 1e-9,
                    "distance {} hour {}: {} + {:?} != {}",
                    distance,
                    hour,
                    fare.subtotal,
                    fare.night_surcharge,
                    fare.total
                );
            }
        }
    }

    #[test]
    fn test_small_night_distance_rounds_consistently() {
        let fare = estimate(0.01, 23);
        assert!((fare.subtotal - 50.15).abs() < 1e-9);
        let surcharge = fare.night_surcharge.unwrap();
        assert!((fare.subtotal + surcharge - fare.total).abs() < 1e-9);
        assert!((fare.total - 75.225).abs() < 0.006);
    }

    #[test]
    fn test_rejects_invalid_input() {
        let schedule = FareSchedule::default();
        assert_eq!(
            estimate_fare(&schedule, -1.0, 10),
            Err(FareError::InvalidDistance(-1.0))
        );
        assert!(estimate_fare(&schedule, f64::NAN, 10).is_err());
        assert_eq!(
            estimate_fare(&schedule, 1.0, 24),
            Err(FareError::InvalidHour(24))
        );
    }

    #[test]
    fn test_custom_schedule_without_wrap() {
        let schedule = FareSchedule {
            night_start_hour: 1,
            night_end_hour: 4,
            ..Default::default()
        };
        assert!(!schedule.is_night_hour(0));
        assert!(schedule.is_night_hour(1));
        assert!(!schedule.is_night_hour(4));
        assert_eq!(schedule.surcharge_percent(), 50.0);
    }
}
