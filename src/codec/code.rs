use std::collections::HashMap;

use crate::codec::tree::Node;

/// Mapping from symbol to its bit-string code. Derived from a tree, used for
/// one encode pass, never persisted.
pub type CodeTable = HashMap<String, String>;

/// Assign each leaf its prefix-free code: `0` on every left edge, `1` on
/// every right edge, left visited before right. Codes are only recorded at
/// leaves, which is what makes the table prefix-free. A bare-leaf root gets
/// the empty code.
pub fn assign_codes(root: &Node) -> CodeTable {
    let mut codes = CodeTable::new();
    let mut stack = vec![(root, String::new())];

    while let Some((node, prefix)) = stack.pop() {
        match node {
            Node::Leaf { symbol, .. } => {
                codes.insert(symbol.clone(), prefix);
            }
            Node::Internal { left, right, .. } => {
                // Right is pushed first so left pops first.
                stack.push((right.as_ref(), format!("{prefix}1")));
                stack.push((left.as_ref(), format!("{prefix}0")));
            }
        }
    }

    codes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::freq::count_words;
    use crate::codec::tree::build_tree;

    #[test]
    fn codes_are_prefix_free() {
        let table = count_words("the cat sat on the mat");
        let root = build_tree(&table).unwrap();
        let codes = assign_codes(&root);

        assert_eq!(codes.len(), 5);
        for (symbol, code) in &codes {
            for (other_symbol, other_code) in &codes {
                if symbol != other_symbol {
                    assert!(
                        !other_code.starts_with(code.as_str()),
                        "code for {symbol:?} prefixes code for {other_symbol:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn left_edges_are_zero_right_edges_are_one() {
        // Tree shape for three tied symbols is pinned by the tie-break test
        // in tree.rs; the codes read straight off it.
        let table = count_words("a b c");
        let root = build_tree(&table).unwrap();
        let codes = assign_codes(&root);

        assert_eq!(codes["c"], "0");
        assert_eq!(codes["a"], "10");
        assert_eq!(codes["b"], "11");
    }

    #[test]
    fn bare_leaf_root_gets_empty_code() {
        let table = count_words("a a a a");
        let root = build_tree(&table).unwrap();
        let codes = assign_codes(&root);

        assert_eq!(codes.len(), 1);
        assert_eq!(codes["a"], "");
    }
}
