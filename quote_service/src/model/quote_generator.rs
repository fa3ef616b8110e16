//! Quote fabrication.
//!
//! The `QuoteGenerator` turns a `TickerRecord` and a `RandomSource` into a
//! plausible `Quote`. Prices follow a random walk: the freshly fabricated price
//! is written back into the record, so the next quote for the same symbol
//! starts where this one ended.
//!
//! Draw order per quote (all uniform in `[0, 1)`):
//! 1. price move, `(u - 0.495) * 0.05`, a slightly upward-skewed band of about ±2.5%;
//! 2. previous close, within ±0.5% of the pre-update base;
//! 3. day high boost, up to 2% above the higher of price and previous close;
//! 4. day low cut, up to 2% below the lower of the two;
//! 5. volume, `[20M, 70M)` shares.

use quote_common::Quote;

use crate::model::random::RandomSource;
use crate::model::store::TickerRecord;

const MOVE_CENTER: f64 = 0.495;
const MOVE_SCALE: f64 = 0.05;
const CLOSE_SCALE: f64 = 0.01;
const RANGE_SCALE: f64 = 0.02;
const VOLUME_FLOOR: f64 = 20_000_000.0;
const VOLUME_SPAN: f64 = 50_000_000.0;

/// Stateless fabricator of synthetic quotes.
pub struct QuoteGenerator;

impl QuoteGenerator {
    /// Relative price move for the draw `u`.
    pub fn change_percent(u: f64) -> f64 {
        (u - MOVE_CENTER) * MOVE_SCALE
    }

    /// Next price of the walk starting at `base_price`.
    pub fn next_price(base_price: f64, random: &mut dyn RandomSource) -> f64 {
        base_price * (1.0 + Self::change_percent(random.next_unit()))
    }

    /// Fabricate a quote for `record` and advance its base price.
    ///
    /// The previous close is derived from the base *before* the update.
    pub fn generate_new(record: &mut TickerRecord, random: &mut dyn RandomSource) -> Quote {
        let base_price = record.base_price();
        let new_price = Self::next_price(base_price, random);
        record.set_base_price(new_price);

        let previous_close = base_price / (1.0 + (random.next_unit() - 0.5) * CLOSE_SCALE);
        let day_high = new_price.max(previous_close) * (1.0 + random.next_unit() * RANGE_SCALE);
        let day_low = new_price.min(previous_close) * (1.0 - random.next_unit() * RANGE_SCALE);
        let volume = (VOLUME_FLOOR + random.next_unit() * VOLUME_SPAN).round() as u64;

        Quote {
            ticker: record.symbol().to_string(),
            company_name: record.company_name().to_string(),
            price: round_cents(new_price),
            volume,
            day_high: round_cents(day_high),
            day_low: round_cents(day_low),
            previous_close: round_cents(previous_close),
        }
    }
}

/// Round to two decimals, halves away from zero.
fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
