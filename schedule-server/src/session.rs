//! Run context for one user's scheduling session.
//!
//! Holds the uploaded demand dataset and the last generated schedule.
//! Regenerating recomputes from scratch over the same dataset; filtering
//! derives a view without touching the stored schedule.

use tracing::info;

use crate::demand::{DemandRecord, PassengerSource};
use crate::domain::Trip;
use crate::scheduler::{
    Algorithm, ScheduleError, ScheduleFilter, ScheduleRun, ScheduleStats, SchedulerConfig,
    run_schedule,
};

/// A filtered view of the last run.
#[derive(Debug, Clone)]
pub struct ScheduleView {
    pub trips: Vec<Trip>,
    pub stats: ScheduleStats,
}

/// Uploaded data and last result.
pub struct Session {
    config: SchedulerConfig,
    source: Box<dyn PassengerSource + Send>,
    records: Vec<DemandRecord>,
    last_run: Option<ScheduleRun>,
}

impl Session {
    /// Create an empty session.
    pub fn new(config: SchedulerConfig, source: Box<dyn PassengerSource + Send>) -> Self {
        Self {
            config,
            source,
            records: Vec::new(),
            last_run: None,
        }
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Replace the uploaded dataset. The previous schedule is kept until
    /// the next regeneration.
    pub fn upload(&mut self, records: Vec<DemandRecord>) -> usize {
        self.records = records;
        info!(records = self.records.len(), "demand uploaded");
        self.records.len()
    }

    /// Number of uploaded demand records.
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Schedule the uploaded dataset with `algorithm`, replacing the last
    /// run on success.
    pub fn regenerate(&mut self, algorithm: Algorithm) -> Result<&ScheduleRun, ScheduleError> {
        let run = run_schedule(
            &self.records,
            algorithm,
            &self.config,
            self.source.as_mut(),
        )?;
        info!(
            %algorithm,
            trips = run.schedule.len(),
            served = run.served(),
            "schedule generated"
        );
        Ok(self.last_run.insert(run))
    }

    /// The last successful run, if any.
    pub fn last_run(&self) -> Option<&ScheduleRun> {
        self.last_run.as_ref()
    }

    /// Filtered view of the last run, with statistics over the view.
    pub fn view(&self, filter: &ScheduleFilter) -> Result<ScheduleView, ScheduleError> {
        let run = self.last_run.as_ref().ok_or(ScheduleError::NotScheduled)?;
        let trips = filter.apply(&run.schedule);
        let stats = ScheduleStats::from_trips(&trips, self.config.train_capacity);
        Ok(ScheduleView { trips, stats })
    }
}
