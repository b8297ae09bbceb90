/*!
huffcode is a static huffman coder in Rust.

The symbols of an input are counted, the two lightest nodes are merged until a single tree
remains, and each symbol gets the binary code of its path from the root: 0 for a left turn,
1 for a right turn. No code is a prefix of another, so an encoded message can be decoded
greedily by walking the tree.

Bits are kept as the characters `'0'` and `'1'` (see [`BitString`]), so the length of an
encoded message is its size in bits. Packing them into bytes is left to the caller.

```
let input: Vec<char> = "aaabbc".chars().collect();
let (table, tree) = huffcode::build_code(&input)?;
let bits = huffcode::encode(&input, &table)?;
assert_eq!(bits.as_str(), "000111110");
assert_eq!(huffcode::decode(&bits, &tree)?, input);
# Ok::<(), huffcode::HuffError>(())
```
*/

use log::*;

pub use bitstream::BitString;
pub use common::stats::{compression_ratio, text_compression_ratio, DEFAULT_BITS_PER_SYMBOL};
pub use common::{count, count_str, FrequencyTable, HuffError, Result, Symbol};
pub use hufflpuff::{decode, decode_exact, encode};
pub use hufflpuff::{MappingTable, Node, TableEntry, Tree};
pub use hufflpuff::{MAX_LINEAR_SELECT_ALPHABET, SINGLE_SYMBOL_CODE};

use hufflpuff::{build_tree, build_tree_heap, tree_to_table};

/// Builds the prefix codes of all symbols in `input`.
///
/// Returns the mapping table for encoding and the tree for decoding. Both are owned by the
/// caller, nothing is shared between calls.
pub fn build_code<S: Symbol>(input: &[S]) -> Result<(MappingTable<S>, Tree<S>)> {
    let freqs = count(input)?;
    let tree = if freqs.len() > MAX_LINEAR_SELECT_ALPHABET {
        build_tree_heap(&freqs)?
    } else {
        build_tree(&freqs)?
    };
    let table = tree_to_table(&tree);
    debug!(
        "{} symbols get codes, {} bits expected for the input",
        table.len(),
        table.encoded_bit_length()
    );
    Ok((table, tree))
}

/// Builds the codes of a text and encodes it, returning the table, tree and encoded bits.
pub fn encode_str(text: &str) -> Result<(MappingTable<char>, Tree<char>, BitString)> {
    let chars: Vec<char> = text.chars().collect();
    let (table, tree) = build_code(&chars)?;
    let bits = encode(&chars, &table)?;
    Ok((table, tree, bits))
}

/// Decodes bits into a text.
pub fn decode_str(bits: &BitString, tree: &Tree<char>) -> Result<String> {
    Ok(decode(bits, tree)?.into_iter().collect())
}
