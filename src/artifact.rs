//! The two-line persisted artifact.
//!
//! Line 1 is the frequency table as a JSON array of symbol/count records, in
//! first-occurrence order; line 2 is the encoded stream as literal `0`/`1`
//! characters, one per bit. The header is parsed structurally, never
//! evaluated: entries are rebuilt in file order and validated.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::codec::freq::FrequencyTable;

#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("missing frequency table line")]
    MissingTable,

    #[error("frequency table line is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("entry {0:?} has a zero count")]
    ZeroCount(String),

    #[error("symbol {0:?} is listed twice")]
    DuplicateSymbol(String),

    #[error("symbol {0:?} is not a single whitespace-free token")]
    InvalidSymbol(String),
}

#[derive(Debug, Serialize, Deserialize)]
struct TableRecord {
    symbol: String,
    count: u64,
}

/// Render the artifact: JSON header, newline, bit stream. The bit line is
/// empty for a single-symbol table.
pub fn render(table: &FrequencyTable, bits: &str) -> Result<String, ArtifactError> {
    let records: Vec<TableRecord> = table
        .iter()
        .map(|(symbol, count)| TableRecord {
            symbol: symbol.to_owned(),
            count,
        })
        .collect();

    Ok(format!("{}\n{}", serde_json::to_string(&records)?, bits))
}

/// Split an artifact into its parsed frequency table and the raw bit line.
///
/// Everything after the first newline is the bit line (surrounding
/// whitespace trimmed); the decoder rejects any embedded non-bit character.
/// Header entries that the tokenizer could never have produced (empty
/// symbols, symbols containing whitespace) are malformed, as are zero
/// counts and duplicates.
pub fn parse(artifact: &str) -> Result<(FrequencyTable, &str), ArtifactError> {
    let (header, bits) = match artifact.split_once('\n') {
        Some((header, bits)) => (header, bits),
        None => (artifact, ""),
    };
    if header.trim().is_empty() {
        return Err(ArtifactError::MissingTable);
    }

    let records: Vec<TableRecord> = serde_json::from_str(header)?;

    let mut table = FrequencyTable::new();
    for TableRecord { symbol, count } in records {
        if count == 0 {
            return Err(ArtifactError::ZeroCount(symbol));
        }
        if symbol.is_empty() || symbol.chars().any(char::is_whitespace) {
            return Err(ArtifactError::InvalidSymbol(symbol));
        }
        if !table.insert(symbol.clone(), count) {
            return Err(ArtifactError::DuplicateSymbol(symbol));
        }
    }

    Ok((table, bits.trim()))
}
