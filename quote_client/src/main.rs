//! Quote Client — a development front-end for the simulated quote service. It collects
//! a watch list of tickers from the command line and/or a text file, asks the service
//! for a quote per ticker (concurrently, with simulated network latency), and logs the
//! results. Invalid tickers are reported and do not stop the run.
//!
//! Usage example (CLI):
//! ```bash
//! quote_client aapl MSFT FAIL --path ./tickers.txt --rounds 3 --seed 42
//! ```
//!
//! The ticker file should contain symbols separated by commas, spaces, or new lines.
//! See `symbols` for details.
#![warn(missing_docs)]
mod args;
mod symbols;

use crate::args::Args;
use crate::symbols::read_symbols;
use clap::Parser;
use log::{debug, error, info, warn};
use quote_common::{Quote, QuoteError, Result};
use quote_service::QuoteService;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[tokio::main]
async fn main() -> Result<(), QuoteError> {
    init_logger();
    let args = Args::parse();

    let mut tickers = args.tickers.clone();
    if let Some(raw_path) = &args.path {
        let file_path = normalize_path(raw_path);
        if !is_file_exist(&file_path) {
            error!("Ticker file not found: {}", file_path.display());
            return Err(QuoteError::Format(format!(
                "ticker file not found: {}",
                file_path.display()
            )));
        }
        let file = File::open(&file_path)?;
        tickers.extend(read_symbols(BufReader::new(file))?);
    }
    if tickers.is_empty() {
        return Err(QuoteError::Format(
            "no tickers given; pass symbols or --path".to_string(),
        ));
    }
    info!("Tickers: {:?}", tickers);

    let config = args.service_config();
    debug!("Service config: {:?}", config);
    let service = QuoteService::from_config(&config);

    for round in 1..=args.rounds {
        info!("Refreshing {} tickers (round {}/{})", tickers.len(), round, args.rounds);
        for result in service.fetch_quotes(tickers.as_slice()).await {
            match result {
                Ok(quote) => print_quote(&quote, args.json)?,
                Err(e @ QuoteError::InvalidTicker(_)) => warn!("{}", e),
                Err(e) => return Err(e),
            }
        }
    }
    Ok(())
}

fn print_quote(quote: &Quote, json: bool) -> Result<(), QuoteError> {
    if json {
        println!("{}", quote.to_json()?);
    } else {
        info!(
            "QUOTE: {} ({}) Price={:.2} Change={:+.2} ({:+.2}%) High={:.2} Low={:.2} PrevClose={:.2} Volume={}",
            quote.ticker,
            quote.company_name,
            quote.price,
            quote.change(),
            quote.change_percent(),
            quote.day_high,
            quote.day_low,
            quote.previous_close,
            quote.volume
        );
    }
    Ok(())
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}

/// Normalize a CLI-provided path string by trimming whitespace and matching quotes.
///
/// This allows passing Windows paths in quotes without breaking parsing.
fn normalize_path(raw: &str) -> PathBuf {
    let trimmed = raw.trim();
    let no_quotes = trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(trimmed);
    PathBuf::from(no_quotes)
}

/// Returns `true` if the provided path exists and is a regular file.
fn is_file_exist(path: &PathBuf) -> bool {
    path.exists() && path.is_file()
}
