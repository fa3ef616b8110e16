//!
//! Common types shared by the quote service and its clients.
//!
//! This crate aggregates:
//! - `error` — unified error type `QuoteError` used across the workspace.
//! - `result` — handy `Result<T, QuoteError>` alias.
//! - `tickers` — the recognized ticker symbols and their seed data.
//! - `quote` — the `Quote` snapshot returned by the service.
//! - `latency` — default bounds of the simulated network delay.
#![warn(missing_docs)]
pub mod error;
pub mod latency;
pub mod quote;
pub mod result;
pub mod tickers;

pub use error::QuoteError;
pub use quote::Quote;
pub use result::Result;
pub use tickers::Ticker;
