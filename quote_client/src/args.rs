//! Command-line arguments for the Quote Client.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use clap::Parser;
use quote_service::{Latency, ServiceConfig};

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Ticker symbols to quote, in any casing. Unknown symbols are reported, not rejected.
    pub tickers: Vec<String>,

    /// Path to a text file with more tickers.
    /// Tickers may be separated by commas, spaces, or new lines.
    #[clap(long)]
    pub path: Option<String>,

    /// How many times to refresh the whole watch list.
    #[clap(long, default_value_t = 1)]
    pub rounds: u32,

    /// Seed for the random source, for reproducible runs.
    #[clap(long)]
    pub seed: Option<u64>,

    /// Resolve requests immediately instead of simulating network latency.
    #[clap(long)]
    pub no_latency: bool,

    /// Print every quote as a JSON document.
    #[clap(long)]
    pub json: bool,
}

impl Args {
    /// Service settings described by these arguments.
    pub fn service_config(&self) -> ServiceConfig {
        ServiceConfig {
            latency: if self.no_latency {
                Latency::None
            } else {
                Latency::default()
            },
            seed: self.seed,
        }
    }
}
