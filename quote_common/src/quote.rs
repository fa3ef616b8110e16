//! Quote data model and JSON encoding helpers.
//!
//! A `Quote` is the payload handed to front-ends: the ticker symbol and company
//! name, the current price, the prior-session close, the intraday range and a
//! trade volume. Field names are serialized in camelCase, the shape consumed
//! by the UI layer.

use serde::Serialize;

use crate::error::QuoteError;

/// Market snapshot for a single ticker symbol.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    /// Uppercase symbol identifier.
    pub ticker: String,
    /// Display name of the company.
    pub company_name: String,
    /// Current price, rounded to cents.
    pub price: f64,
    /// Synthetic trade volume for the session.
    pub volume: u64,
    /// Intraday high, rounded to cents.
    pub day_high: f64,
    /// Intraday low, rounded to cents.
    pub day_low: f64,
    /// Close of the prior session, rounded to cents.
    pub previous_close: f64,
}

impl Quote {
    /// Absolute move of `price` against `previous_close`.
    pub fn change(&self) -> f64 {
        self.price - self.previous_close
    }

    /// Move of `price` against `previous_close`, in percent.
    pub fn change_percent(&self) -> f64 {
        self.change() / self.previous_close * 100.0
    }

    /// Encode the quote to a JSON string.
    pub fn to_json(&self) -> Result<String, QuoteError> {
        let json = serde_json::to_string(self)?;
        Ok(json)
    }
}
