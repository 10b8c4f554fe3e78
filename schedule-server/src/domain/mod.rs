//! Domain types for the platform scheduler.
//!
//! This module contains the value types the scheduling engine works with.
//! All types enforce their invariants at construction time, so code that
//! receives these types can trust their validity.

mod station;
mod time;
mod trip;

pub use station::{Platform, PlatformGroup, Route, Station};
pub use time::{ClockTime, MINUTES_PER_DAY, TimeError};
pub use trip::{Trip, TripId, sort_by_departure};
