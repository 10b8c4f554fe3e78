//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::Trip;
use crate::scheduler::{Algorithm, ComplexityReport, ScheduleRun, ScheduleStats};
use crate::session::ScheduleView;

/// Response after uploading demand.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    /// Number of demand rows stored
    pub records: usize,
}

/// Request to generate a schedule.
#[derive(Debug, Deserialize)]
pub struct ScheduleRequest {
    /// "Greedy" or "DP"
    pub algorithm: String,
}

/// A trip in a schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TripResult {
    /// Trip id, e.g. "G001"
    pub train_id: String,

    /// Route text, e.g. "Putrajaya → KL Sentral"
    pub route: String,

    /// Departure time (HH:MM)
    pub departure: String,

    /// Arrival time (HH:MM)
    pub arrival: String,

    /// Platform label
    pub platform: String,

    /// Passengers carried
    pub passengers: u32,
}

impl TripResult {
    /// Create from a domain Trip.
    pub fn from_trip(trip: &Trip) -> Self {
        Self {
            train_id: trip.id.to_string(),
            route: trip.route.to_string(),
            departure: trip.departure.to_string(),
            arrival: trip.arrival.to_string(),
            platform: trip.platform.to_string(),
            passengers: trip.passengers,
        }
    }
}

/// Response for a scheduling run.
#[derive(Debug, Serialize)]
pub struct ScheduleResponse {
    /// Algorithm used
    pub algorithm: Algorithm,

    /// Engine time for the run, in milliseconds
    pub runtime_ms: f64,

    /// Number of distinct time slots
    pub slots: usize,

    /// Trips in departure order
    pub trips: Vec<TripResult>,

    /// Summary statistics
    pub stats: ScheduleStats,

    /// Complexity analysis
    pub complexity: ComplexityReport,
}

impl ScheduleResponse {
    /// Create from a completed run.
    pub fn from_run(run: &ScheduleRun, stats: ScheduleStats, runtime_ms: f64) -> Self {
        Self {
            algorithm: run.algorithm,
            runtime_ms,
            slots: run.slots,
            trips: run.schedule.iter().map(TripResult::from_trip).collect(),
            stats,
            complexity: run.report.clone(),
        }
    }
}

/// Response for a filtered view.
#[derive(Debug, Serialize)]
pub struct ViewResponse {
    /// Matching trips in departure order
    pub trips: Vec<TripResult>,

    /// Statistics over the matching trips
    pub stats: ScheduleStats,
}

impl ViewResponse {
    pub fn from_view(view: &ScheduleView) -> Self {
        Self {
            trips: view.trips.iter().map(TripResult::from_trip).collect(),
            stats: view.stats,
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
