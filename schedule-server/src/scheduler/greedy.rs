//! Greedy platform-aware scheduler.
//!
//! Serves the busiest time slots first. Each slot's demand is split into
//! capacity-sized trips; every trip takes the first platform at its origin
//! whose existing departures are at least the minimum interval away. When
//! no platform is free the departure is pushed back by the interval and the
//! scan repeats, up to the configured search horizon.

use std::collections::HashMap;

use tracing::{debug, trace, warn};

use crate::demand::DemandMap;
use crate::domain::{ClockTime, Platform, PlatformGroup, Route, Trip, TripId, sort_by_departure};

use super::Scheduler;
use super::config::SchedulerConfig;

/// Trip id prefix for greedy schedules.
pub const GREEDY_PREFIX: &str = "G";

/// Departures already assigned to each platform during one run.
#[derive(Debug, Default)]
pub struct PlatformSchedule {
    departures: HashMap<Platform, Vec<ClockTime>>,
}

impl PlatformSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `departure` keeps at least `min_interval` minutes from every
    /// departure already on `platform`.
    pub fn is_free(&self, platform: Platform, departure: ClockTime, min_interval: u32) -> bool {
        self.departures.get(&platform).is_none_or(|times| {
            times
                .iter()
                .all(|t| t.minutes_difference(departure) >= min_interval)
        })
    }

    /// First free platform in `group`, scanning numbers `1..=count`.
    pub fn first_free(
        &self,
        group: PlatformGroup,
        count: u8,
        departure: ClockTime,
        min_interval: u32,
    ) -> Option<Platform> {
        (1..=count)
            .map(|n| Platform::in_group(group, n))
            .find(|p| self.is_free(*p, departure, min_interval))
    }

    /// Record a departure on a platform.
    pub fn assign(&mut self, platform: Platform, departure: ClockTime) {
        self.departures.entry(platform).or_default().push(departure);
    }
}

/// Greedy scheduler: highest demand first, conflict-free platforms.
pub struct GreedyScheduler<'a> {
    config: &'a SchedulerConfig,
}

impl<'a> GreedyScheduler<'a> {
    /// Create a new greedy scheduler.
    pub fn new(config: &'a SchedulerConfig) -> Self {
        Self { config }
    }

    fn platform_count(&self, group: PlatformGroup) -> u8 {
        match group {
            PlatformGroup::Kl => self.config.kl_platforms,
            PlatformGroup::Pj => self.config.pj_platforms,
        }
    }
}

impl Scheduler for GreedyScheduler<'_> {
    fn schedule(&self, demand: &DemandMap) -> Vec<Trip> {
        let config = self.config;
        let min_interval = u32::try_from(config.min_interval_mins).unwrap_or(0);
        let max_retries = config.max_retries();

        let mut platforms = PlatformSchedule::new();
        let mut trips: Vec<Trip> = Vec::new();
        let mut dropped: u64 = 0;

        for (slot, slot_demand) in demand.by_demand_desc() {
            let mut remaining = slot_demand;
            let mut departure = slot;
            let mut retries = 0;

            while remaining > 0 && trips.len() < config.max_trains {
                let passengers = remaining.min(config.train_capacity);
                let route = Route::by_parity(trips.len());
                let group = route.from.platform_group();

                let Some(platform) =
                    platforms.first_free(group, self.platform_count(group), departure, min_interval)
                else {
                    if retries >= max_retries {
                        warn!(
                            %slot,
                            remaining,
                            "no free platform within search horizon, dropping demand"
                        );
                        break;
                    }
                    retries += 1;
                    departure = departure.add(config.min_interval());
                    continue;
                };

                let trip = Trip {
                    id: TripId::new(GREEDY_PREFIX, trips.len() + 1),
                    route,
                    departure,
                    arrival: departure.add(config.trip_duration()),
                    platform,
                    passengers,
                };
                trace!(id = %trip.id, %slot, %departure, %platform, passengers, "placed trip");

                platforms.assign(platform, departure);
                trips.push(trip);
                remaining -= passengers;
                retries = 0;
            }

            dropped += u64::from(remaining);
        }

        if dropped > 0 {
            debug!(dropped, "demand left unserved by greedy schedule");
        }
        debug!(
            slots = demand.len(),
            trips = trips.len(),
            "greedy schedule complete"
        );

        sort_by_departure(&mut trips);
        trips
    }
}
