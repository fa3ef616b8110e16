//! The quote service.
//!
//! `QuoteService` owns a `TickerStore` and a `RandomSource` behind one `Mutex`
//! and applies a `Latency` to every request. `fetch_quote` first waits out the
//! simulated delay with no lock held, then validates the symbol and fabricates
//! the quote inside a single lock scope, so overlapping requests for the same
//! symbol never interleave the read and write of its base price.

use std::sync::Mutex;
use std::time::Duration;

use futures::future::join_all;
use quote_common::{Quote, QuoteError, Result, Ticker};

use crate::config::ServiceConfig;
use crate::model::latency::Latency;
use crate::model::quote_generator::QuoteGenerator;
use crate::model::random::RandomSource;
use crate::model::store::TickerStore;

struct MarketState {
    store: TickerStore,
    random: Box<dyn RandomSource>,
}

/// Simulated real-time quote provider.
pub struct QuoteService {
    state: Mutex<MarketState>,
    latency: Latency,
}

impl QuoteService {
    /// Create a service over an explicit store, random source and latency.
    pub fn new<R>(store: TickerStore, random: R, latency: Latency) -> Self
    where
        R: RandomSource + 'static,
    {
        Self {
            state: Mutex::new(MarketState {
                store,
                random: Box::new(random),
            }),
            latency,
        }
    }

    /// Create a service over the seeded store as described by `config`.
    pub fn from_config(config: &ServiceConfig) -> Self {
        Self::new(TickerStore::seeded(), config.random_source(), config.latency)
    }

    /// Fetch a quote for `ticker` (case-insensitive).
    ///
    /// Resolves after the simulated delay. Fails with
    /// [`QuoteError::InvalidTicker`] carrying the original input when the symbol
    /// is reserved or unknown; the store is left untouched in that case.
    pub async fn fetch_quote(&self, ticker: &str) -> Result<Quote> {
        let delay = self.next_delay()?;
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        let symbol =
            Ticker::lookup(ticker).ok_or_else(|| QuoteError::InvalidTicker(ticker.to_string()))?;
        self.fabricate(symbol, ticker)
    }

    /// Fetch quotes for every entry of `tickers` concurrently.
    ///
    /// Outcomes are returned in input order; each follows the
    /// [`fetch_quote`](Self::fetch_quote) contract independently.
    pub async fn fetch_quotes<S>(&self, tickers: &[S]) -> Vec<Result<Quote>>
    where
        S: AsRef<str>,
    {
        join_all(tickers.iter().map(|ticker| self.fetch_quote(ticker.as_ref()))).await
    }

    fn next_delay(&self) -> Result<Duration> {
        let mut state = self.state.lock()?;
        Ok(self.latency.sample(state.random.as_mut()))
    }

    fn fabricate(&self, symbol: Ticker, input: &str) -> Result<Quote> {
        let mut state = self.state.lock()?;
        let MarketState { store, random } = &mut *state;
        let record = store
            .record_mut(symbol)
            .ok_or_else(|| QuoteError::InvalidTicker(input.to_string()))?;
        Ok(QuoteGenerator::generate_new(record, random.as_mut()))
    }
}

impl Default for QuoteService {
    fn default() -> Self {
        Self::from_config(&ServiceConfig::default())
    }
}
