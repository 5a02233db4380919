//! Seeded uniform streams used to place particles in the box.
use rand::{rngs::SmallRng, Rng, SeedableRng};

use crate::constants::{
    PARK_MILLER_MODULUS, PARK_MILLER_MULTIPLIER, PARK_MILLER_QUOTIENT, PARK_MILLER_REMAINDER,
    PARK_MILLER_SCALE,
};
use crate::errors::{MdError, Result};

/// Which generator backs the initial placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum RngKind {
    /// Lehmer minimal-standard generator, reproduces the classic reference stream.
    ParkMiller,
    /// `rand`'s small fast generator.
    Small,
}

impl RngKind {
    pub fn from_str(name: &str) -> Option<Self> {
        match name {
            "park-miller" => Some(Self::ParkMiller),
            "small" => Some(Self::Small),
            _ => None,
        }
    }
}

/// Lehmer generator `x <- 16807 x mod (2^31 - 1)` evaluated with Schrage's method.
#[derive(Clone, Debug)]
pub struct ParkMiller {
    state: i64,
}

impl ParkMiller {
    pub fn new(seed: u64) -> Result<Self> {
        let state = (seed % PARK_MILLER_MODULUS as u64) as i64;
        if state == 0 {
            return Err(MdError::ZeroSeed);
        }
        Ok(Self { state })
    }

    pub fn state(&self) -> i64 {
        self.state
    }

    /// Advances the state and returns a value in (0, 1).
    pub fn next_unit(&mut self) -> f64 {
        let k = self.state / PARK_MILLER_QUOTIENT;
        self.state = PARK_MILLER_MULTIPLIER * (self.state - k * PARK_MILLER_QUOTIENT)
            - k * PARK_MILLER_REMAINDER;
        if self.state < 0 {
            self.state += PARK_MILLER_MODULUS;
        }
        self.state as f64 * PARK_MILLER_SCALE
    }
}

pub enum RandomStream {
    ParkMiller(ParkMiller),
    Small(SmallRng),
}

impl RandomStream {
    pub fn new(kind: RngKind, seed: u64) -> Result<Self> {
        match kind {
            RngKind::ParkMiller => Ok(Self::ParkMiller(ParkMiller::new(seed)?)),
            RngKind::Small => Ok(Self::Small(SmallRng::seed_from_u64(seed))),
        }
    }

    pub fn next_unit(&mut self) -> f64 {
        match self {
            Self::ParkMiller(pm) => pm.next_unit(),
            Self::Small(rng) => rng.gen::<f64>(),
        }
    }
}
