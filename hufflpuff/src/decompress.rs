use bitstream::BitString;
use common::HuffError;
use common::Result;
use common::Symbol;
use log::*;

use crate::tree::tree_node::Node;
use crate::tree::Tree;

/// Decodes `bits` by walking the tree once.
///
/// The cursor starts at the root, moves left on 0 and right on 1, and is reset to the root
/// after each leaf. Fails with `InvalidCode` if the bits end in the middle of a code. An empty
/// bit string decodes to no symbols, see [`decode_exact`] if symbols are expected.
pub fn decode<S: Symbol>(bits: &BitString, tree: &Tree<S>) -> Result<Vec<S>> {
    let mut out = Vec::new();

    if let Node::Leaf { symbol, .. } = *tree.get_root_node() {
        // single symbol tree, every symbol is one 0
        for (position, bit) in bits.bits().enumerate() {
            if bit {
                return Err(HuffError::InvalidCode {
                    position,
                    reason: "no code starts with this bit",
                });
            }
            out.push(symbol);
        }
        return Ok(out);
    }

    let root_pos = tree.root_pos();
    let mut cursor = root_pos;
    for (position, bit) in bits.bits().enumerate() {
        cursor = tree
            .get_node(cursor)
            .child(bit)
            .ok_or(HuffError::InvalidCode {
                position,
                reason: "cursor is not on a parent node",
            })?;
        if let Node::Leaf { symbol, .. } = *tree.get_node(cursor) {
            out.push(symbol);
            cursor = root_pos;
        }
    }
    if cursor != root_pos {
        return Err(HuffError::InvalidCode {
            position: bits.len(),
            reason: "bits end inside a code",
        });
    }
    debug!("decoded {} bits into {} symbols", bits.len(), out.len());
    Ok(out)
}

/// Decodes `bits` and checks that exactly `expected_len` symbols come out.
pub fn decode_exact<S: Symbol>(
    bits: &BitString,
    tree: &Tree<S>,
    expected_len: usize,
) -> Result<Vec<S>> {
    if bits.is_empty() && expected_len != 0 {
        return Err(HuffError::InvalidCode {
            position: 0,
            reason: "bits are empty",
        });
    }
    let out = decode(bits, tree)?;
    if out.len() != expected_len {
        return Err(HuffError::InvalidCode {
            position: bits.len(),
            reason: "decoded symbol count differs from the expected count",
        });
    }
    Ok(out)
}
