//! Askama templates for the web frontend.

use askama::Template;

use crate::domain::Route;
use crate::scheduler::{Algorithm, ComplexityReport, ScheduleStats};

use super::dto::TripResult;

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Home page with upload form and algorithm picker.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    /// Route options for the filter dropdown.
    pub routes: Vec<String>,
    /// Demand rows already loaded, if any.
    pub records: usize,
}

impl IndexTemplate {
    pub fn new(records: usize) -> Self {
        Self {
            routes: Route::all().iter().map(Route::to_string).collect(),
            records,
        }
    }
}

// ============================================================================
// Fragment Templates (AJAX responses, no base.html)
// ============================================================================

/// Results of a scheduling run: status, stats, table and complexity.
#[derive(Template)]
#[template(path = "schedule.html")]
pub struct ScheduleTemplate {
    pub algorithm: Algorithm,
    pub runtime_ms: String,
    pub trips: Vec<TripResult>,
    pub stats: ScheduleStats,
    pub complexity: ComplexityReport,
}

/// Filtered table with its stats.
#[derive(Template)]
#[template(path = "schedule_table.html")]
pub struct ScheduleTableTemplate {
    pub trips: Vec<TripResult>,
    pub stats: ScheduleStats,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ClockTime, Platform, Station, Trip, TripId};

    fn trip_result() -> TripResult {
        let departure = ClockTime::new(6, 0).unwrap();
        TripResult::from_trip(&Trip {
            id: TripId::new("DP", 1),
            route: Route::departing(Station::Putrajaya),
            departure,
            arrival: departure.add_minutes(90),
            platform: Platform::numbered(1),
            passengers: 400,
        })
    }

    #[test]
    fn index_lists_both_routes() {
        let html = IndexTemplate::new(0).render().unwrap();
        assert!(html.contains("Putrajaya → KL Sentral"));
        assert!(html.contains("KL Sentral → Putrajaya"));
    }

    #[test]
    fn schedule_fragment_renders_trips_and_analysis() {
        let trips = vec![trip_result()];
        let template = ScheduleTemplate {
            algorithm: Algorithm::Dp,
            runtime_ms: "0.42".into(),
            stats: ScheduleStats {
                total_trains: 1,
                total_passengers: 400,
                average_occupancy_pct: 100,
                platform_utilization_pct: 25,
            },
            trips,
            complexity: ComplexityReport::new(Algorithm::Dp, 1, 30, 5),
        };

        let html = template.render().unwrap();
        assert!(html.contains("DP001"));
        assert!(html.contains("06:00"));
        assert!(html.contains("07:30"));
        assert!(html.contains("DP Algorithm"));
        assert!(html.contains("O(n × m)"));
        assert!(html.contains("Backtracking solution"));
    }

    #[test]
    fn empty_table_says_so() {
        let template = ScheduleTableTemplate {
            trips: vec![],
            stats: ScheduleStats::from_trips(&[], 400),
        };
        let html = template.render().unwrap();
        assert!(html.contains("No trips match"));
    }
}
