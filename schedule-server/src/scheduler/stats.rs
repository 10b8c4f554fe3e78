//! Aggregate figures shown above a schedule.

use serde::Serialize;

use crate::domain::Trip;

/// Trips per 100% platform utilisation.
const UTILISATION_DIVISOR: f64 = 4.0;

/// Summary statistics over a list of trips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScheduleStats {
    pub total_trains: usize,
    pub total_passengers: u64,
    /// Passengers as a share of seats offered, rounded percent.
    pub average_occupancy_pct: u32,
    /// `min(round(trains / 4 × 100), 100)`.
    pub platform_utilization_pct: u32,
}

impl ScheduleStats {
    /// Compute statistics for `trips` given the per-train capacity.
    pub fn from_trips(trips: &[Trip], train_capacity: u32) -> Self {
        let total_trains = trips.len();
        let total_passengers: u64 = trips.iter().map(|t| u64::from(t.passengers)).sum();

        let seats = total_trains as f64 * f64::from(train_capacity);
        let average_occupancy_pct = if total_passengers > 0 && seats > 0.0 {
            (total_passengers as f64 / seats * 100.0).round() as u32
        } else {
            0
        };

        let platform_utilization_pct =
            ((total_trains as f64 / UTILISATION_DIVISOR * 100.0).round() as u32).min(100);

        Self {
            total_trains,
            total_passengers,
            average_occupancy_pct,
            platform_utilization_pct,
        }
    }
}
