//! Sources of uniform draws used to fabricate quotes and latencies.
//!
//! The service never touches a global generator: a `RandomSource` is handed to
//! it at construction, so production code can run on an OS-seeded `StdRng`
//! while tests pin every draw to a known value.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Producer of uniform draws in `[0, 1)`.
pub trait RandomSource: Send {
    /// Next draw in `[0, 1)`.
    fn next_unit(&mut self) -> f64;
}

/// `StdRng`-backed source, seeded from the OS or from a fixed value.
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    /// Create a source seeded from operating system entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create a reproducible source: equal seeds yield equal sequences.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// Source that returns the same value on every draw.
#[derive(Debug, Clone, Copy)]
pub struct FixedRandom(pub f64);

impl RandomSource for FixedRandom {
    fn next_unit(&mut self) -> f64 {
        self.0
    }
}

/// Source that replays a list of draws, wrapping around at the end.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    draws: Vec<f64>,
    cursor: usize,
}

impl ScriptedRandom {
    /// Replay `draws` in order. An empty script behaves like `FixedRandom(0.0)`.
    pub fn new(draws: Vec<f64>) -> Self {
        Self { draws, cursor: 0 }
    }
}

impl RandomSource for ScriptedRandom {
    fn next_unit(&mut self) -> f64 {
        if self.draws.is_empty() {
            return 0.0;
        }
        let value = self.draws[self.cursor % self.draws.len()];
        self.cursor += 1;
        value
    }
}
