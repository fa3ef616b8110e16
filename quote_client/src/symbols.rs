//! Reading watch-list symbols from files.
//!
//! Symbols are kept as raw strings: validation is the service's job, so an
//! unknown entry still reaches it and exercises the error path.
use quote_common::QuoteError;
use std::io::BufRead;

/// Read symbols separated by commas, whitespace or new lines, skipping blanks.
pub fn read_symbols<R: BufRead>(reader: R) -> Result<Vec<String>, QuoteError> {
    let mut symbols = Vec::new();

    for line_result in reader.lines() {
        let line = line_result.map_err(QuoteError::Io)?;
        symbols.extend(
            line.split(|c: char| c == ',' || c.is_whitespace())
                .filter(|entry| !entry.is_empty())
                .map(String::from),
        );
    }
    Ok(symbols)
}
