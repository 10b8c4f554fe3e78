//! Scheduled trips.

use std::fmt;

use super::station::{Platform, Route};
use super::time::ClockTime;

/// Identifier of a scheduled trip: the scheduler's prefix and a sequence
/// number, rendered zero-padded ("G001", "DP012").
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TripId {
    prefix: &'static str,
    seq: usize,
}

impl TripId {
    pub fn new(prefix: &'static str, seq: usize) -> Self {
        Self { prefix, seq }
    }

    pub fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// 1-based sequence number within one run.
    pub fn seq(&self) -> usize {
        self.seq
    }
}

impl fmt::Debug for TripId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TripId({self})")
    }
}

impl fmt::Display for TripId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:03}", self.prefix, self.seq)
    }
}

/// One train departure carrying a share of a time slot's demand.
///
/// Trips are created by a scheduler and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trip {
    pub id: TripId,
    pub route: Route,
    pub departure: ClockTime,
    pub arrival: ClockTime,
    pub platform: Platform,
    pub passengers: u32,
}

/// Sort trips into schedule order: ascending departure, stable for ties.
pub fn sort_by_departure(trips: &mut [Trip]) {
    trips.sort_by_key(|trip| trip.departure);
}
