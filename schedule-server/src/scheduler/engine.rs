//! Scheduling entry point.
//!
//! Aggregates demand records, runs the chosen scheduler and attaches the
//! complexity report for the run.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use tracing::debug;

use crate::demand::{DemandError, DemandMap, DemandRecord, PassengerSource, aggregate_demand};
use crate::domain::Trip;

use super::complexity::ComplexityReport;
use super::config::SchedulerConfig;
use super::dp::DpScheduler;
use super::greedy::GreedyScheduler;

/// Error from a scheduling run.
#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    /// No demand has been uploaded
    #[error("no demand data: upload a demand CSV file first")]
    NoData,

    /// A view was requested before any schedule was generated
    #[error("no schedule has been generated yet")]
    NotScheduled,

    /// Algorithm name not recognised
    #[error("unknown algorithm: {0} (expected Greedy or DP)")]
    UnknownAlgorithm(String),

    /// Demand could not be aggregated
    #[error(transparent)]
    Demand(#[from] DemandError),
}

/// Scheduling strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Greedy,
    Dp,
}

impl Algorithm {
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Greedy => "Greedy",
            Algorithm::Dp => "DP",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "greedy" => Ok(Algorithm::Greedy),
            "dp" => Ok(Algorithm::Dp),
            _ => Err(ScheduleError::UnknownAlgorithm(s.to_string())),
        }
    }
}

impl Serialize for Algorithm {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// A strategy turning aggregated demand into a schedule.
///
/// Implementations return trips sorted by departure, at most
/// `max_trains` of them, each carrying at most `train_capacity`.
pub trait Scheduler {
    fn schedule(&self, demand: &DemandMap) -> Vec<Trip>;
}

/// Outcome of one scheduling run.
#[derive(Debug, Clone)]
pub struct ScheduleRun {
    pub algorithm: Algorithm,
    /// Trips in departure order.
    pub schedule: Vec<Trip>,
    pub report: ComplexityReport,
    /// Number of distinct time slots in the aggregated demand.
    pub slots: usize,
}

impl ScheduleRun {
    /// Passengers carried by the whole schedule.
    pub fn served(&self) -> u64 {
        self.schedule.iter().map(|t| u64::from(t.passengers)).sum()
    }
}

/// Run one strategy over an already-aggregated demand map.
pub fn schedule_demand(
    demand: &DemandMap,
    algorithm: Algorithm,
    config: &SchedulerConfig,
) -> Vec<Trip> {
    match algorithm {
        Algorithm::Greedy => GreedyScheduler::new(config).schedule(demand),
        Algorithm::Dp => DpScheduler::new(config).schedule(demand),
    }
}

/// Aggregate `records` and schedule them with `algorithm`.
///
/// Fails with [`ScheduleError::NoData`] on an empty dataset, before any
/// scheduling work is done.
pub fn run_schedule(
    records: &[DemandRecord],
    algorithm: Algorithm,
    config: &SchedulerConfig,
    source: &mut dyn PassengerSource,
) -> Result<ScheduleRun, ScheduleError> {
    if records.is_empty() {
        return Err(ScheduleError::NoData);
    }

    let demand = aggregate_demand(records, source)?;
    let schedule = schedule_demand(&demand, algorithm, config);
    let report = ComplexityReport::new(
        algorithm,
        demand.len(),
        config.max_trains,
        config.total_platforms(),
    );

    debug!(
        %algorithm,
        records = records.len(),
        slots = demand.len(),
        demand = demand.total(),
        trips = schedule.len(),
        "scheduling run complete"
    );

    Ok(ScheduleRun {
        algorithm,
        schedule,
        report,
        slots: demand.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demand::FixedPassengers;

    fn record(time: &str, passengers: &str) -> DemandRecord {
        DemandRecord::from_pairs([("time", time), ("passengers", passengers)])
    }

    #[test]
    fn algorithm_parsing() {
        assert_eq!("Greedy".parse::<Algorithm>().unwrap(), Algorithm::Greedy);
        assert_eq!("DP".parse::<Algorithm>().unwrap(), Algorithm::Dp);
        assert_eq!(" dp ".parse::<Algorithm>().unwrap(), Algorithm::Dp);

        let err = "genetic".parse::<Algorithm>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown algorithm: genetic (expected Greedy or DP)"
        );
    }

    #[test]
    fn algorithm_serializes_by_name() {
        assert_eq!(serde_json::to_string(&Algorithm::Dp).unwrap(), "\"DP\"");
        assert_eq!(Algorithm::Greedy.to_string(), "Greedy");
    }

    #[test]
    fn empty_dataset_is_rejected() {
        let config = SchedulerConfig::default();
        let mut source = FixedPassengers::new(vec![]);

        let err = run_schedule(&[], Algorithm::Greedy, &config, &mut source).unwrap_err();
        assert!(matches!(err, ScheduleError::NoData));
    }

    #[test]
    fn malformed_time_abandons_run() {
        let config = SchedulerConfig::default();
        let mut source = FixedPassengers::new(vec![]);
        let records = vec![record("08:00", "10"), record("eight", "10")];

        let err = run_schedule(&records, Algorithm::Dp, &config, &mut source).unwrap_err();
        assert!(matches!(
            err,
            ScheduleError::Demand(DemandError::InvalidTime { row: 2, .. })
        ));
    }

    #[test]
    fn greedy_run_reports_its_complexity() {
        let config = SchedulerConfig::default();
        let mut source = FixedPassengers::new(vec![]);
        let records = vec![record("08:00", "500"), record("09:00", "100")];

        let run = run_schedule(&records, Algorithm::Greedy, &config, &mut source).unwrap();

        assert_eq!(run.algorithm, Algorithm::Greedy);
        assert_eq!(run.slots, 2);
        assert_eq!(run.schedule.len(), 3);
        assert_eq!(run.served(), 600);
        assert_eq!(run.report.algorithm, Algorithm::Greedy);
        assert_eq!(
            run.report.explanation,
            "Where n=2 time slots, m=30 max trains, p=5 platforms"
        );
    }

    #[test]
    fn dp_run_reports_its_complexity() {
        let config = SchedulerConfig::default();
        let mut source = FixedPassengers::new(vec![]);
        let records = vec![record("08:00", "500")];

        let run = run_schedule(&records, Algorithm::Dp, &config, &mut source).unwrap();

        assert_eq!(run.schedule.len(), 2);
        assert!(run.schedule.iter().all(|t| t.id.prefix() == "DP"));
        assert_eq!(run.report.overall, "O(n × m)");
    }
}
