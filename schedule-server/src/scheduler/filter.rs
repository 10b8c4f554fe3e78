//! Search and route filtering over a schedule.

use serde::Deserialize;

use crate::domain::Trip;

/// View filter over a schedule.
///
/// `search` matches case-insensitively against the trip id, route and
/// platform text; `route` must equal the route text exactly. Empty values
/// match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ScheduleFilter {
    #[serde(default, alias = "q")]
    pub search: Option<String>,
    #[serde(default)]
    pub route: Option<String>,
}

impl ScheduleFilter {
    /// Whether `trip` is part of the filtered view.
    pub fn matches(&self, trip: &Trip) -> bool {
        self.matches_search(trip) && self.matches_route(trip)
    }

    fn matches_search(&self, trip: &Trip) -> bool {
        let Some(needle) = self.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) else {
            return true;
        };
        let needle = needle.to_lowercase();

        [
            trip.id.to_string(),
            trip.route.to_string(),
            trip.platform.to_string(),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
    }

    fn matches_route(&self, trip: &Trip) -> bool {
        match self.route.as_deref().filter(|r| !r.is_empty()) {
            Some(route) => trip.route.to_string() == route,
            None => true,
        }
    }

    /// Filtered copy of `trips`, order preserved. The input is untouched.
    pub fn apply(&self, trips: &[Trip]) -> Vec<Trip> {
        trips.iter().filter(|t| self.matches(t)).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ClockTime, Platform, PlatformGroup, Route, Station, TripId};

    fn trips() -> Vec<Trip> {
        let departure = ClockTime::new(8, 0).unwrap();
        let make = |seq, from, platform| Trip {
            id: TripId::new("G", seq),
            route: Route::departing(from),
            departure,
            arrival: departure.add_minutes(90),
            platform,
            passengers: 100,
        };
        vec![
            make(1, Station::Putrajaya, Platform::in_group(PlatformGroup::Pj, 1)),
            make(2, Station::KlSentral, Platform::in_group(PlatformGroup::Kl, 1)),
            make(3, Station::Putrajaya, Platform::in_group(PlatformGroup::Pj, 2)),
        ]
    }

    fn ids(trips: &[Trip]) -> Vec<String> {
        trips.iter().map(|t| t.id.to_string()).collect()
    }

    #[test]
    fn empty_filter_keeps_everything() {
        let all = trips();
        assert_eq!(ScheduleFilter::default().apply(&all), all);
    }

    #[test]
    fn search_matches_id_case_insensitively() {
        let filter = ScheduleFilter {
            search: Some("g002".into()),
            route: None,
        };
        assert_eq!(ids(&filter.apply(&trips())), vec!["G002"]);
    }

    #[test]
    fn search_matches_route_and_platform() {
        let filter = ScheduleFilter {
            search: Some("kl sentral →".into()),
            route: None,
        };
        assert_eq!(ids(&filter.apply(&trips())), vec!["G002"]);

        let filter = ScheduleFilter {
            search: Some("pj".into()),
            route: None,
        };
        assert_eq!(ids(&filter.apply(&trips())), vec!["G001", "G003"]);
    }

    #[test]
    fn route_must_match_exactly() {
        let filter = ScheduleFilter {
            search: None,
            route: Some("Putrajaya → KL Sentral".into()),
        };
        assert_eq!(ids(&filter.apply(&trips())), vec!["G001", "G003"]);

        let filter = ScheduleFilter {
            search: None,
            route: Some("putrajaya → kl sentral".into()),
        };
        assert!(filter.apply(&trips()).is_empty());
    }

    #[test]
    fn search_and_route_combine() {
        let filter = ScheduleFilter {
            search: Some("3".into()),
            route: Some("Putrajaya → KL Sentral".into()),
        };
        assert_eq!(ids(&filter.apply(&trips())), vec!["G003"]);
    }
}
