//! Simulated real-time stock-quote provider.
//!
//! This crate stands in for a market-data API while a front-end is being built.
//! Given a ticker symbol, [`QuoteService::fetch_quote`] waits a simulated
//! network delay and then returns a plausible [`Quote`] that drifts from the
//! previous one, or fails for unknown symbols. Building blocks:
//!
//! - `model::store` — `TickerStore`, the in-memory table of base prices.
//! - `model::random` — `RandomSource` and its seeded, fixed and scripted implementations.
//! - `model::latency` — `Latency`, the delay strategy.
//! - `model::quote_generator` — `QuoteGenerator`, the price fabrication formulas.
//! - `service` — `QuoteService`, which ties them together behind one lock.
//! - `config` — `ServiceConfig`, the serde-friendly construction settings.
//!
//! Usage:
//! ```no_run
//! use quote_service::{Latency, QuoteService, SeededRandom, TickerStore};
//!
//! # async fn demo() -> quote_common::Result<()> {
//! let service = QuoteService::new(
//!     TickerStore::seeded(),
//!     SeededRandom::with_seed(1),
//!     Latency::default(),
//! );
//! let quote = service.fetch_quote("aapl").await?;
//! println!("{} {:.2}", quote.ticker, quote.price);
//! # Ok(())
//! # }
//! ```
#![warn(missing_docs)]

pub mod config;
pub mod model;
pub mod service;

pub use config::ServiceConfig;
pub use model::latency::Latency;
pub use model::random::{FixedRandom, RandomSource, ScriptedRandom, SeededRandom};
pub use model::store::{TickerRecord, TickerStore};
pub use quote_common::{Quote, QuoteError};
pub use service::QuoteService;
