use std::ptr;

use crate::codec::CodecError;
use crate::codec::code::CodeTable;
use crate::codec::tree::Node;

/// Concatenate the code of every whitespace-delimited token in `text`, in
/// order. Tokenization matches the frequency counter exactly, so a table
/// built from the same text always covers every token; a miss means the
/// table came from somewhere else.
pub fn encode_text(text: &str, codes: &CodeTable) -> Result<String, CodecError> {
    let mut bits = String::new();
    for word in text.split_whitespace() {
        let code = codes
            .get(word)
            .ok_or_else(|| CodecError::UnknownSymbol(word.to_owned()))?;
        bits.push_str(code);
    }
    Ok(bits)
}

/// Walk the tree bit-by-bit: `0` descends left, `1` descends right, landing
/// on a leaf emits its symbol and resets the pointer to the root. The walk
/// must end back at the root, otherwise the stream was cut off mid-code.
///
/// A bare-leaf root has no edges to walk, so for a single-symbol table only
/// the empty stream is valid. It decodes to zero tokens, not to the original
/// repetitions: the token count is not recoverable from the stream.
pub fn decode_stream(bits: &str, root: &Node) -> Result<String, CodecError> {
    let mut words: Vec<&str> = Vec::new();
    let mut node = root;

    for bit in bits.chars() {
        node = match (node, bit) {
            (Node::Internal { left, .. }, '0') => left.as_ref(),
            (Node::Internal { right, .. }, '1') => right.as_ref(),
            (Node::Leaf { .. }, '0' | '1') => return Err(CodecError::BitsWithoutBranches),
            (_, other) => return Err(CodecError::InvalidBit(other)),
        };

        if let Node::Leaf { symbol, .. } = node {
            words.push(symbol);
            node = root;
        }
    }

    if !ptr::eq(node, root) {
        return Err(CodecError::TruncatedStream);
    }

    Ok(words.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::code::assign_codes;
    use crate::codec::freq::count_words;
    use crate::codec::tree::build_tree;

    fn codec_for(text: &str) -> (CodeTable, Node) {
        let table = count_words(text);
        let root = build_tree(&table).unwrap();
        let codes = assign_codes(&root);
        (codes, root)
    }

    #[test]
    fn encode_then_decode_recovers_tokens() {
        let text = "the cat sat on the mat";
        let (codes, root) = codec_for(text);

        let bits = encode_text(text, &codes).unwrap();
        assert!(bits.chars().all(|bit| bit == '0' || bit == '1'));
        assert_eq!(decode_stream(&bits, &root).unwrap(), text);
    }

    #[test]
    fn unknown_token_is_rejected() {
        let (codes, _) = codec_for("the cat sat on the mat");

        assert_eq!(
            encode_text("the dog", &codes),
            Err(CodecError::UnknownSymbol("dog".to_string()))
        );
    }

    #[test]
    fn truncated_stream_is_rejected() {
        let text = "the cat sat on the mat";
        let (codes, root) = codec_for(text);

        let bits = encode_text(text, &codes).unwrap();
        let cut = &bits[..bits.len() - 1];
        assert_eq!(decode_stream(cut, &root), Err(CodecError::TruncatedStream));
    }

    #[test]
    fn non_bit_character_is_rejected() {
        let (_, root) = codec_for("the cat sat on the mat");

        assert_eq!(decode_stream("01x", &root), Err(CodecError::InvalidBit('x')));
    }

    #[test]
    fn bare_leaf_tree_rejects_any_bits() {
        let (_, root) = codec_for("a a a a");

        assert_eq!(decode_stream("0", &root), Err(CodecError::BitsWithoutBranches));
        assert_eq!(decode_stream("1", &root), Err(CodecError::BitsWithoutBranches));
    }

    #[test]
    fn empty_stream_decodes_to_zero_tokens() {
        // Holds for any tree, including the bare-leaf one: the original
        // repetition count of a single-symbol text is not in the stream.
        let (_, leaf_root) = codec_for("a a a a");
        assert_eq!(decode_stream("", &leaf_root).unwrap(), "");

        let (_, root) = codec_for("the cat sat on the mat");
        assert_eq!(decode_stream("", &root).unwrap(), "");
    }
}
