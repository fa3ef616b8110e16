//! In-memory table of the tickers known to the service.
//!
//! The store holds one `TickerRecord` per `Ticker`, keyed by symbol. Each record
//! carries the base price the next quote for that symbol is fabricated from.
//!
//! Design notes:
//! - The set of symbols is fixed when the store is built; no operation adds or
//!   removes records afterwards.
//! - Only `base_price` ever changes, and only through the quote generator.
//! - The store is not synchronized; the service wraps it in a `Mutex` together
//!   with its random source.

use std::collections::HashMap;

use quote_common::Ticker;
use strum::IntoEnumIterator;

/// One tradable instrument and its current base price.
#[derive(Debug, Clone, PartialEq)]
pub struct TickerRecord {
    symbol: Ticker,
    company_name: String,
    base_price: f64,
}

impl TickerRecord {
    /// Create a record for `symbol` starting its walk at `base_price`.
    pub fn new(symbol: Ticker, base_price: f64) -> Self {
        Self {
            symbol,
            company_name: symbol.company_name().to_string(),
            base_price,
        }
    }

    /// Symbol this record describes.
    pub fn symbol(&self) -> Ticker {
        self.symbol
    }

    /// Company display name.
    pub fn company_name(&self) -> &str {
        &self.company_name
    }

    /// Most recent fabricated price.
    pub fn base_price(&self) -> f64 {
        self.base_price
    }

    pub(crate) fn set_base_price(&mut self, price: f64) {
        self.base_price = price;
    }
}

/// Table of every recognized ticker with its mutable base price.
#[derive(Debug, Clone)]
pub struct TickerStore {
    records: HashMap<Ticker, TickerRecord>,
}

impl TickerStore {
    /// Build the store from the fixed seed table.
    pub fn seeded() -> Self {
        let records = Ticker::iter()
            .map(|ticker| (ticker, TickerRecord::new(ticker, ticker.seed_price())))
            .collect();
        Self { records }
    }

    /// Build a seeded store, then start the given symbols from other prices.
    ///
    /// Non-positive or non-finite prices are ignored so every record keeps a
    /// usable base.
    pub fn with_base_prices<I>(prices: I) -> Self
    where
        I: IntoIterator<Item = (Ticker, f64)>,
    {
        let mut store = Self::seeded();
        for (ticker, price) in prices {
            if !price.is_finite() || price <= 0.0 {
                continue;
            }
            store
                .records
                .entry(ticker)
                .and_modify(|record| record.set_base_price(price))
                .or_insert_with(|| TickerRecord::new(ticker, price));
        }
        store
    }

    /// Look up the record for `ticker`.
    pub fn record(&self, ticker: Ticker) -> Option<&TickerRecord> {
        self.records.get(&ticker)
    }

    pub(crate) fn record_mut(&mut self, ticker: Ticker) -> Option<&mut TickerRecord> {
        self.records.get_mut(&ticker)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }
}

impl Default for TickerStore {
    fn default() -> Self {
        Self::seeded()
    }
}
