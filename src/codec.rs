//! Word-level Huffman codec.
//!
//! The pipeline is: count token frequencies ([`freq`]), merge them into a
//! binary prefix-code tree ([`tree`]), read codes off the leaves ([`code`]),
//! then translate tokens to bits and back ([`translate`]). Only the frequency
//! table crosses the persistence boundary (no code table is ever stored), so
//! [`tree::build_tree`] must be a pure function of the table, including its
//! entry order, for the encode-time and decode-time trees to coincide.

use thiserror::Error;

pub mod code;
pub mod freq;
pub mod translate;
pub mod tree;

use self::freq::FrequencyTable;

if_tracing! {
    use tracing::debug;
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    #[error("cannot build a code tree from an empty frequency table")]
    EmptyTable,

    #[error("no code for token {0:?}; text and frequency table disagree")]
    UnknownSymbol(String),

    #[error("invalid bit character {0:?} in encoded stream")]
    InvalidBit(char),

    #[error("encoded stream ends in the middle of a code")]
    TruncatedStream,

    #[error("non-empty encoded stream for a single-symbol code tree")]
    BitsWithoutBranches,
}

/// Compress `text`, returning the frequency table and the encoded bit
/// stream. The table is everything the decoder needs to rebuild the tree.
pub fn compress_text(text: &str) -> Result<(FrequencyTable, String), CodecError> {
    let table = freq::count_words(text);
    let root = tree::build_tree(&table)?;
    let codes = code::assign_codes(&root);

    if_tracing! {
        debug!(target: "codec", symbols = table.len(), tokens = table.total(), "code tree built");
    }

    let bits = translate::encode_text(text, &codes)?;
    Ok((table, bits))
}

/// Rebuild the tree from a persisted frequency table and decode `bits` back
/// into space-separated tokens.
pub fn decompress_stream(table: &FrequencyTable, bits: &str) -> Result<String, CodecError> {
    let root = tree::build_tree(table)?;

    if_tracing! {
        debug!(target: "codec", symbols = table.len(), stream_bits = bits.len(), "code tree rebuilt");
    }

    translate::decode_stream(bits, &root)
}

#[cfg(test)]
mod tests {
    #[test]
    fn roundtrip_scenario_text() {
        crate::tests::roundtrip_test("scenario text", "the cat sat on the mat");
    }
}
