//! Domain models and helpers for the quote service.
//!
//! - `store` — ticker records and their mutable base prices.
//! - `random` — injectable sources of uniform draws.
//! - `latency` — simulated network delay strategies.
//! - `quote_generator` — fabrication of quotes from a record and a random source.

pub mod latency;
pub mod quote_generator;
pub mod random;
pub mod store;
