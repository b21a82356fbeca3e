//! # Spawn Value Draw
//!
//! Uniform box value generation with an exclusion, as used when a fresh box
//! must not repeat the value it would instantly merge with.
//!
//! Inputs are validated before the resample loop, so the draw always
//! terminates even when the range is empty or fully excluded.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use thiserror::Error;

/// Highest value a freshly spawned box may take.
///
/// Spawns stop one short of the merge maximum of 20, so the top value can
/// only be reached by merging.
pub const MAX_SPAWN_VALUE: u8 = 19;

/// Errors from the spawn value draw.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnError {
    /// The upper bound leaves no value to draw from.
    #[error("spawn range is empty: upper bound {upper_bound} leaves no candidate")]
    EmptyRange {
        /// The upper bound that was requested.
        upper_bound: u8,
    },

    /// The only value in range is the excluded one.
    #[error("no admissible spawn value: the only candidate {value} is excluded")]
    AllExcluded {
        /// The single candidate, which is also the excluded value.
        value: u8,
    },
}

/// Draws a uniform box value in `[1, min(upper_bound, MAX_SPAWN_VALUE)]`,
/// resampling until the result differs from `forbidden`.
///
/// With validated inputs at least half the range is admissible, so the
/// resample loop terminates with probability 1 and in constant expected
/// time.
///
/// # Errors
///
/// Returns [`SpawnError::EmptyRange`] when `upper_bound` is zero, and
/// [`SpawnError::AllExcluded`] when the range is `[1, 1]` and 1 is the
/// excluded value.
pub fn draw_spawn_value<R: Rng + ?Sized>(
    rng: &mut R,
    upper_bound: u8,
    forbidden: Option<u8>,
) -> Result<u8, SpawnError> {
    let cap = upper_bound.min(MAX_SPAWN_VALUE);
    if cap == 0 {
        return Err(SpawnError::EmptyRange { upper_bound });
    }
    if cap == 1 && forbidden == Some(1) {
        return Err(SpawnError::AllExcluded { value: 1 });
    }

    loop {
        let candidate = rng.gen_range(1..=cap);
        if Some(candidate) != forbidden {
            return Ok(candidate);
        }
    }
}

/// Deterministic spawn generator for replayable games.
///
/// Seeded runs draw identical value sequences, which is what makes recorded
/// games reproducible.
#[derive(Debug, Clone)]
pub struct SpawnRng {
    /// The deterministic generator.
    inner: ChaCha8Rng,
}

impl SpawnRng {
    /// Creates a generator from a 64-bit seed.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Draws a spawn value. See [`draw_spawn_value`].
    ///
    /// # Errors
    ///
    /// Same conditions as [`draw_spawn_value`].
    pub fn draw(&mut self, upper_bound: u8, forbidden: Option<u8>) -> Result<u8, SpawnError> {
        draw_spawn_value(&mut self.inner, upper_bound, forbidden)
    }
}
