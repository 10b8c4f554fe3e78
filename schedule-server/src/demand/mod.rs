//! Passenger demand input.
//!
//! Demand arrives as loosely-shaped CSV rows. This module parses those rows
//! into [`DemandRecord`]s and aggregates them into a [`DemandMap`] of total
//! passengers per departure time slot, the input both schedulers consume.

mod aggregate;
mod error;
mod record;
mod source;

pub use aggregate::{DemandMap, aggregate_demand, synthesized_slot};
pub use error::DemandError;
pub use record::{DemandRecord, load_demand_csv, parse_demand_csv};
pub use source::{FALLBACK_PASSENGERS, FixedPassengers, PassengerSource, RandomPassengers};
