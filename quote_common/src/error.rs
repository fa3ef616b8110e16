//! Error types shared between the quote service and its clients.
//!
//! The `QuoteError` enum unifies the domain failure of a quote request (an
//! unrecognized ticker) with the few infrastructure failures that can surround
//! it: a poisoned service lock, file I/O in the client and JSON encoding.
use std::io;
use std::sync::PoisonError;

use thiserror::Error;

/// Unified error type shared by the service and the client.
#[derive(Error, Debug)]
pub enum QuoteError {
    /// The requested symbol is reserved or unknown. Carries the caller's
    /// original, non-normalized input.
    #[error("Invalid ticker symbol: {0}")]
    InvalidTicker(String),

    /// Error indicating a poisoned mutex/lock was encountered.
    #[error("Mutex Lock Poisoned: {0}")]
    MutexLock(String),

    /// I/O error originating from the standard library or files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Failure while encoding/decoding JSON via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// Generic formatting/validation error with a human-readable message.
    #[error("Format error: {0}")]
    Format(String),
}

impl<T> From<PoisonError<T>> for QuoteError {
    fn from(err: PoisonError<T>) -> Self {
        QuoteError::MutexLock(err.to_string())
    }
}
