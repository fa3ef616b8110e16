//! Service configuration.
//!
//! `ServiceConfig` gathers the two knobs of a `QuoteService`: the latency
//! strategy and an optional seed for the random source. Front-ends build it
//! from their own arguments, or deserialize it with serde.

use serde::Deserialize;

use crate::model::latency::Latency;
use crate::model::random::SeededRandom;

/// Settings used to construct a `QuoteService`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Delay applied before every request resolves or fails.
    pub latency: Latency,
    /// Seed for the random source; `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl ServiceConfig {
    /// Random source described by this configuration.
    pub fn random_source(&self) -> SeededRandom {
        match self.seed {
            Some(seed) => SeededRandom::with_seed(seed),
            None => SeededRandom::from_entropy(),
        }
    }
}
