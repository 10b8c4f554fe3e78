//! Dynamic-programming train allocation.
//!
//! Treats each time slot as an all-or-nothing item costing
//! `ceil(demand / capacity)` trains and worth `demand` passengers, and
//! solves the resulting 0/1 knapsack over the train budget. The chosen
//! slots are then split into capacity-sized trips.
//!
//! Platforms are numbered round-robin by trip id and are not checked for
//! conflicts; the allocation is optimal for passengers served, not for
//! platform occupancy.

use tracing::{debug, trace};

use crate::demand::DemandMap;
use crate::domain::{ClockTime, Platform, Route, Trip, TripId, sort_by_departure};

use super::Scheduler;
use super::config::SchedulerConfig;

/// Trip id prefix for DP schedules.
pub const DP_PREFIX: &str = "DP";

/// `served[i][j]`: the most passengers carried using the first `i` slots
/// (in time order) and at most `j` trains.
#[derive(Debug, Clone)]
pub struct AllocationTable {
    slots: Vec<(ClockTime, u32)>,
    needed: Vec<usize>,
    served: Vec<Vec<u64>>,
}

impl AllocationTable {
    /// Fill the table for `slots`, which must already be in time order.
    pub fn build(slots: Vec<(ClockTime, u32)>, config: &SchedulerConfig) -> Self {
        let n = slots.len();
        let m = config.max_trains;
        let needed: Vec<usize> = slots
            .iter()
            .map(|&(_, demand)| config.trains_needed(demand))
            .collect();

        let mut served = vec![vec![0u64; m + 1]; n + 1];
        for i in 1..=n {
            let demand = u64::from(slots[i - 1].1);
            let cost = needed[i - 1];
            for j in 0..=m {
                let skip = served[i - 1][j];
                served[i][j] = if j >= cost {
                    skip.max(served[i - 1][j - cost] + demand)
                } else {
                    skip
                };
            }
        }

        Self {
            slots,
            needed,
            served,
        }
    }

    /// Number of time slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Train budget the table was filled for.
    pub fn budget(&self) -> usize {
        self.served[0].len() - 1
    }

    /// Table cell: best passengers over the first `slots` slots with at
    /// most `trains` trains.
    pub fn served(&self, slots: usize, trains: usize) -> u64 {
        self.served[slots][trains]
    }

    /// Best achievable passengers within the full budget.
    pub fn best(&self) -> u64 {
        self.served(self.len(), self.budget())
    }

    /// Trains slot `index` needs to be served in full.
    pub fn trains_needed(&self, index: usize) -> usize {
        self.needed[index]
    }

    /// Indices of the slots in the optimal allocation, latest first.
    pub fn selected(&self) -> Vec<usize> {
        let mut left = self.budget();
        let mut chosen = Vec::new();
        for i in (1..=self.len()).rev() {
            if self.served[i][left] != self.served[i - 1][left] {
                chosen.push(i - 1);
                left = left.saturating_sub(self.needed[i - 1]);
            }
        }
        chosen
    }
}

/// Optimal-allocation scheduler.
pub struct DpScheduler<'a> {
    config: &'a SchedulerConfig,
}

impl<'a> DpScheduler<'a> {
    /// Create a new DP scheduler.
    pub fn new(config: &'a SchedulerConfig) -> Self {
        Self { config }
    }

    /// Fill the allocation table for a demand map.
    pub fn table(&self, demand: &DemandMap) -> AllocationTable {
        AllocationTable::build(demand.by_time(), self.config)
    }

    /// Emit trips for the table's optimal allocation.
    fn backtrack(&self, table: &AllocationTable) -> Vec<Trip> {
        let config = self.config;
        let round_robin = usize::from(config.kl_platforms.max(1));
        let mut trips = Vec::new();
        let mut trains_left = table.budget();

        for index in table.selected() {
            let (slot, mut remaining) = table.slots[index];
            let mut departure = slot;
            while remaining > 0 && trains_left > 0 {
                let seq = trips.len() + 1;
                let passengers = remaining.min(config.train_capacity);
                let number = ((seq - 1) % round_robin + 1) as u8;

                let trip = Trip {
                    id: TripId::new(DP_PREFIX, seq),
                    route: Route::by_parity(seq),
                    departure,
                    arrival: departure.add(config.trip_duration()),
                    platform: Platform::numbered(number),
                    passengers,
                };
                trace!(id = %trip.id, %slot, %departure, passengers, "allocated trip");

                trips.push(trip);
                remaining -= passengers;
                trains_left -= 1;
                departure = departure.add(config.min_interval());
            }
        }

        trips
    }
}

impl Scheduler for DpScheduler<'_> {
    fn schedule(&self, demand: &DemandMap) -> Vec<Trip> {
        let table = self.table(demand);
        let mut trips = self.backtrack(&table);

        debug!(
            slots = table.len(),
            trips = trips.len(),
            served = table.best(),
            "dp schedule complete"
        );

        sort_by_departure(&mut trips);
        trips
    }
}
