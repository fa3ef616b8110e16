//! Simulated network latency bounds.

/// Lower bound (inclusive) of the default simulated delay, in milliseconds.
pub const LATENCY_MIN_MS: u64 = 500;
/// Upper bound (exclusive) of the default simulated delay, in milliseconds.
pub const LATENCY_MAX_MS: u64 = 1000;
