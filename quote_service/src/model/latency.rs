//! Simulated network latency.
//!
//! A `Latency` decides how long a quote request waits before it resolves or
//! fails. Demo builds keep the randomized delay so the UI shows its loading
//! state; test suites switch it off with `Latency::None`.

use std::time::Duration;

use quote_common::latency::{LATENCY_MAX_MS, LATENCY_MIN_MS};
use serde::Deserialize;

use crate::model::random::RandomSource;

/// Delay strategy applied to every quote request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Latency {
    /// Resolve immediately.
    None,
    /// Wait the same number of milliseconds on every request.
    Fixed {
        /// Delay in milliseconds.
        ms: u64,
    },
    /// Wait a whole number of milliseconds drawn uniformly from `[min_ms, max_ms)`.
    Uniform {
        /// Inclusive lower bound.
        min_ms: u64,
        /// Exclusive upper bound.
        max_ms: u64,
    },
}

impl Default for Latency {
    fn default() -> Self {
        Latency::Uniform {
            min_ms: LATENCY_MIN_MS,
            max_ms: LATENCY_MAX_MS,
        }
    }
}

impl Latency {
    /// Pick the delay for one request.
    ///
    /// Only `Uniform` consumes a draw from `random`, and only when its range is
    /// non-empty; a degenerate range waits `min_ms`.
    pub fn sample(&self, random: &mut dyn RandomSource) -> Duration {
        match *self {
            Latency::None => Duration::ZERO,
            Latency::Fixed { ms } => Duration::from_millis(ms),
            Latency::Uniform { min_ms, max_ms } => {
                if max_ms <= min_ms {
                    return Duration::from_millis(min_ms);
                }
                let span = (max_ms - min_ms) as f64;
                let offset = ((random.next_unit() * span) as u64).min(max_ms - min_ms - 1);
                Duration::from_millis(min_ms + offset)
            }
        }
    }
}
