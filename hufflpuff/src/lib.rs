/*!
hufflpuff builds static huffman codes.

The symbol counts are turned into a tree by repeatedly merging the two lightest nodes, the tree
is turned into a [`MappingTable`] of prefix codes, which encodes messages. Decoding walks the
tree bit by bit.
*/
pub mod compress;
pub mod decompress;
pub mod table;
pub mod tree;

pub use crate::compress::encode;
pub use crate::decompress::{decode, decode_exact};
pub use crate::table::{MappingTable, TableEntry};
pub use crate::tree::build_tree::tree_to_table;
pub use crate::tree::tree_node::Node;
pub use crate::tree::Tree;
pub use crate::tree::{build_tree, build_tree_heap};

/// Code of the only symbol when the input has a single distinct symbol.
/// The tree is a lone leaf then, so there are no transitions to derive a code from.
pub const SINGLE_SYMBOL_CODE: &str = "0";

/// Up to this alphabet size the tree is built by rescanning the active nodes, above it with
/// a priority queue. Both produce the same tree.
pub const MAX_LINEAR_SELECT_ALPHABET: usize = 256;
