//! Fallback passenger counts for rows that carry none.
//!
//! Rows without a usable passenger figure get a pseudo-random count. The
//! source is injectable so runs can be made reproducible.

use std::ops::Range;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Range fallback counts are drawn from.
pub const FALLBACK_PASSENGERS: Range<u32> = 50..350;

/// Supplies passenger counts for rows with no usable figure.
pub trait PassengerSource {
    /// Next fallback count, within [`FALLBACK_PASSENGERS`].
    fn fallback_passengers(&mut self) -> u32;
}

/// Uniform draws from [`FALLBACK_PASSENGERS`].
pub struct RandomPassengers(SmallRng);

impl RandomPassengers {
    /// Seed deterministically; the same seed yields the same sequence.
    pub fn seeded(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }

    /// Seed from OS entropy. Runs are not reproducible.
    pub fn from_entropy() -> Self {
        Self(SmallRng::from_entropy())
    }
}

impl PassengerSource for RandomPassengers {
    fn fallback_passengers(&mut self) -> u32 {
        self.0.gen_range(FALLBACK_PASSENGERS)
    }
}

/// Replays a fixed sequence, cycling when exhausted.
///
/// Values are clamped into [`FALLBACK_PASSENGERS`]. An empty sequence
/// yields the lower bound.
#[derive(Debug, Clone)]
pub struct FixedPassengers {
    values: Vec<u32>,
    next: usize,
}

impl FixedPassengers {
    pub fn new(values: Vec<u32>) -> Self {
        Self { values, next: 0 }
    }
}

impl PassengerSource for FixedPassengers {
    fn fallback_passengers(&mut self) -> u32 {
        let Some(&value) = self.values.get(self.next % self.values.len().max(1)) else {
            return FALLBACK_PASSENGERS.start;
        };
        self.next += 1;
        value.clamp(FALLBACK_PASSENGERS.start, FALLBACK_PASSENGERS.end - 1)
    }
}
