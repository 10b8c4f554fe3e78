//! Scheduling configuration.

use chrono::Duration;

/// Configuration parameters for both schedulers.
#[derive(Debug, Clone)]
pub struct SchedulerConfig {
    /// Maximum passengers carried by one trip.
    pub train_capacity: u32,

    /// Maximum number of trips in one schedule.
    pub max_trains: usize,

    /// Journey time between the terminals (minutes).
    pub trip_duration_mins: i64,

    /// Minimum gap between departures from the same platform (minutes).
    /// Also the step by which a blocked departure is pushed back.
    pub min_interval_mins: i64,

    /// Number of KL Sentral platforms.
    pub kl_platforms: u8,

    /// Number of Putrajaya platforms.
    pub pj_platforms: u8,

    /// How far past its slot the greedy scheduler will push a departure
    /// looking for a free platform (minutes). Demand still unplaced after
    /// that is dropped.
    pub search_horizon_mins: i64,
}

impl SchedulerConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        train_capacity: u32,
        max_trains: usize,
        trip_duration_mins: i64,
        min_interval_mins: i64,
        kl_platforms: u8,
        pj_platforms: u8,
        search_horizon_mins: i64,
    ) -> Self {
        Self {
            train_capacity,
            max_trains,
            trip_duration_mins,
            min_interval_mins,
            kl_platforms,
            pj_platforms,
            search_horizon_mins,
        }
    }

    /// Default configuration with a different train budget.
    pub fn with_max_trains(max_trains: usize) -> Self {
        Self {
            max_trains,
            ..Self::default()
        }
    }

    /// Returns the trip duration as a Duration.
    pub fn trip_duration(&self) -> Duration {
        Duration::minutes(self.trip_duration_mins)
    }

    /// Returns the minimum platform interval as a Duration.
    pub fn min_interval(&self) -> Duration {
        Duration::minutes(self.min_interval_mins)
    }

    /// Platforms across both terminals.
    pub fn total_platforms(&self) -> usize {
        usize::from(self.kl_platforms) + usize::from(self.pj_platforms)
    }

    /// Trips needed to carry `demand` passengers (rounded up).
    pub fn trains_needed(&self, demand: u32) -> usize {
        demand.div_ceil(self.train_capacity.max(1)) as usize
    }

    /// Number of times a departure may be pushed back by the minimum
    /// interval before the greedy search gives up on a slot.
    pub fn max_retries(&self) -> usize {
        (self.search_horizon_mins / self.min_interval_mins.max(1)).max(0) as usize
    }
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            train_capacity: 400,
            max_trains: 30,
            trip_duration_mins: 90,
            min_interval_mins: 15,
            kl_platforms: 3,
            pj_platforms: 2,
            search_horizon_mins: 24 * 60,
        }
    }
}
