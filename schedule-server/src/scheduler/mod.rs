//! Scheduling engine.
//!
//! Assigns departures to platforms and time slots from aggregated
//! passenger demand, using one of two interchangeable strategies:
//!
//! - [`GreedyScheduler`] serves the busiest slots first and keeps every
//!   platform free of departures closer than the minimum interval.
//! - [`DpScheduler`] solves a knapsack over the train budget for the
//!   largest number of passengers served.
//!
//! Each run also produces a [`ComplexityReport`] for the strategy used.

mod complexity;
mod config;
mod dp;
mod engine;
mod filter;
mod greedy;
mod stats;


pub use complexity::{Characteristics, ComplexityReport, Phase};
pub use config::SchedulerConfig;
pub use dp::{AllocationTable, DP_PREFIX, DpScheduler};
pub use engine::{
    Algorithm, ScheduleError, ScheduleRun, Scheduler, run_schedule, schedule_demand,
};
pub use filter::ScheduleFilter;
pub use greedy::{GREEDY_PREFIX, GreedyScheduler, PlatformSchedule};
pub use stats::ScheduleStats;
