//! Ticker symbols recognized by the quote service, with their seed data.

use std::str::FromStr;
use strum_macros::{Display, EnumIter, EnumString};

/// Symbol that is always rejected, used by front-ends to exercise their error path.
pub const RESERVED_FAILURE_SYMBOL: &str = "FAIL";

/// Set of supported ticker symbols.
///
/// `Display` always yields the uppercase symbol.
#[allow(missing_docs)]
#[derive(
    Debug,
    Clone,
    Copy,
    Display,
    EnumString,
    EnumIter,
    Hash,
    Eq,
    PartialEq,
)]
pub enum Ticker {
    AAPL,
    GOOGL,
    TSLA,
    NVDA,
    AMZN,
    MSFT,
}

impl Ticker {
    /// Resolve raw caller input to a ticker.
    ///
    /// The input is uppercased with full Unicode case mapping first. Returns
    /// `None` for the reserved failure symbol and for anything that is not one
    /// of the recognized symbols.
    pub fn lookup(input: &str) -> Option<Self> {
        let upper = input.to_uppercase();
        if upper == RESERVED_FAILURE_SYMBOL {
            return None;
        }
        Self::from_str(&upper).ok()
    }

    /// Price the service starts its random walk from.
    pub fn seed_price(&self) -> f64 {
        match self {
            Ticker::AAPL => 172.50,
            Ticker::GOOGL => 135.80,
            Ticker::TSLA => 225.40,
            Ticker::NVDA => 488.30,
            Ticker::AMZN => 130.00,
            Ticker::MSFT => 330.00,
        }
    }

    /// Display name of the listed company.
    pub fn company_name(&self) -> &'static str {
        match self {
            Ticker::AAPL => "Apple Inc.",
            Ticker::GOOGL => "Alphabet Inc.",
            Ticker::TSLA => "Tesla, Inc.",
            Ticker::NVDA => "NVIDIA Corporation",
            Ticker::AMZN => "Amazon.com, Inc.",
            Ticker::MSFT => "Microsoft Corporation",
        }
    }
}
