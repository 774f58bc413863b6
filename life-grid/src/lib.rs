//! Game of Life engine: binary cells on a growable 2D grid, advanced by a
//! double-buffered step function, with a plain-text snapshot format for
//! loading and saving patterns.

#![deny(clippy::all)]
#![forbid(unsafe_code)]

mod cell;
mod grid;
mod rules;
mod snapshot;

pub use cell::Cell;
pub use grid::{Grid, DEFAULT_FILL_PERCENT};
pub use rules::Ruleset;
pub use snapshot::{SnapshotError, SNAPSHOT_EXTENSION};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Owned random source for probabilistic grid fills.
///
/// Held by the caller and passed in explicitly, so the engine carries no
/// hidden global state and tests can inject a fixed seed.
#[derive(Debug)]
pub struct Random {
    rng: SmallRng,
}

impl Random {
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_rng(&mut rand::rng()),
        }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Bernoulli draw; `p` must be in `[0.0, 1.0]`.
    pub fn next_bool(&mut self, p: f64) -> bool {
        self.rng.random_bool(p)
    }
}

impl Default for Random {
    fn default() -> Self {
        Self::new()
    }
}
