use std::collections::BinaryHeap;
use std::collections::VecDeque;

use bitstream::BitString;
use common::FrequencyTable;
use common::HuffError;
use common::Result;
use common::Symbol;
use log::log_enabled;
use log::Level::Trace;
use log::*;

use crate::table::MappingTable;
use crate::tree::select::select_two_minimum;
use crate::tree::tree_node::{ActiveNode, HeapNode, Node};
use crate::tree::Tree;
use crate::SINGLE_SYMBOL_CODE;

/// creates one leaf per symbol, in the order of the frequency table
fn leaf_nodes<S: Symbol>(freqs: &FrequencyTable<S>) -> Result<Vec<Node<S>>> {
    if freqs.is_empty() {
        return Err(HuffError::EmptyInput);
    }
    // every leaf has a parent except when there is only one, hence 2n - 1 nodes
    let mut nodes = Vec::with_capacity(2 * freqs.len() - 1);
    nodes.extend(
        freqs
            .iter()
            .map(|(symbol, weight)| Node::Leaf { symbol, weight }),
    );
    Ok(nodes)
}

/// adds the parent of `left` and `right` to the node array
fn push_parent<S: Symbol>(
    nodes: &mut Vec<Node<S>>,
    left: ActiveNode,
    right: ActiveNode,
) -> ActiveNode {
    let parent = ActiveNode {
        node_pos: nodes.len(),
        weight: left.weight + right.weight,
    };
    nodes.push(Node::Internal {
        left: left.node_pos,
        right: right.node_pos,
        weight: parent.weight,
    });
    trace!(
        "merged {:?} and {:?} into {:?}",
        nodes[left.node_pos],
        nodes[right.node_pos],
        nodes[parent.node_pos]
    );
    parent
}

/// Creates a huffman tree.
///
/// The two lightest nodes of the active set are merged until a single node remains. The first
/// selected node becomes the left child (transition 0), the second one the right child.
/// The new parent joins the active set at its end.
pub fn build_tree<S: Symbol>(freqs: &FrequencyTable<S>) -> Result<Tree<S>> {
    let mut nodes = leaf_nodes(freqs)?;
    let num_symbols = nodes.len();
    let mut active: Vec<ActiveNode> = nodes
        .iter()
        .enumerate()
        .map(|(node_pos, node)| ActiveNode {
            node_pos,
            weight: node.weight(),
        })
        .collect();

    while let Some((first, second)) = select_two_minimum(&active) {
        let left = active[first];
        let right = active[second];
        // remove the higher position first, so the other one stays valid
        active.remove(first.max(second));
        active.remove(first.min(second));
        let parent = push_parent(&mut nodes, left, right);
        active.push(parent);
    }

    let root_node = active
        .first()
        .map(|node| node.node_pos)
        .ok_or(HuffError::EmptyInput)?;
    debug!(
        "built tree with {} symbols, total weight {}",
        num_symbols,
        nodes[root_node].weight()
    );
    Ok(Tree {
        nodes,
        root_node,
        num_symbols,
    })
}

/// Creates the same tree as [`build_tree`] using a priority queue instead of rescanning the
/// active set, for large alphabets.
///
/// Parents are appended to the active set and to the node array alike, so ordering ties by
/// node position is the same as ordering them by position in the active set.
pub fn build_tree_heap<S: Symbol>(freqs: &FrequencyTable<S>) -> Result<Tree<S>> {
    let mut nodes = leaf_nodes(freqs)?;
    let num_symbols = nodes.len();
    let mut heap: BinaryHeap<HeapNode> = nodes
        .iter()
        .enumerate()
        .map(|(node_pos, node)| {
            HeapNode(ActiveNode {
                node_pos,
                weight: node.weight(),
            })
        })
        .collect();

    let root_node = loop {
        match (heap.pop(), heap.pop()) {
            (Some(HeapNode(left)), Some(HeapNode(right))) => {
                let parent = push_parent(&mut nodes, left, right);
                heap.push(HeapNode(parent));
            }
            (Some(HeapNode(root)), None) => break root.node_pos,
            _ => return Err(HuffError::EmptyInput),
        }
    };
    debug!(
        "built tree with {} symbols, total weight {}",
        num_symbols,
        nodes[root_node].weight()
    );
    Ok(Tree {
        nodes,
        root_node,
        num_symbols,
    })
}

/// Converts the tree into a table with the prefix code of each symbol.
///
/// The tree is traversed breadth first. The root has the empty code, a left child appends 0 to
/// the code of its parent and a right child 1. A tree which consists of a single leaf gets the
/// fixed code [`SINGLE_SYMBOL_CODE`].
pub fn tree_to_table<S: Symbol>(tree: &Tree<S>) -> MappingTable<S> {
    let mut table = MappingTable::with_capacity(tree.get_num_symbol_nodes());

    if let Node::Leaf { symbol, weight } = *tree.get_root_node() {
        let mut code = BitString::new();
        for digit in SINGLE_SYMBOL_CODE.chars() {
            code.add_bit(digit == bitstream::ONE);
        }
        table.insert(symbol, code, weight);
        return table;
    }

    let mut queue = VecDeque::with_capacity(tree.get_num_symbol_nodes());
    queue.push_back((tree.root_pos(), BitString::new()));
    while let Some((node_pos, code)) = queue.pop_front() {
        match *tree.get_node(node_pos) {
            Node::Leaf { symbol, weight } => table.insert(symbol, code, weight),
            Node::Internal { left, right, .. } => {
                queue.push_back((left, code.with_bit(false)));
                queue.push_back((right, code.with_bit(true)));
            }
        }
    }

    if log_enabled!(Trace) {
        for entry in table.iter() {
            trace!("{:?}    {}", entry.symbol, entry.code);
        }
    }
    table
}

/// will validate the table to have generated correct prefix properties for all symbols.
/// This validation is rather slow and should not be used in a regular compression execution.
pub fn test_prefix_property<S: Symbol>(table: &MappingTable<S>) {
    let entries: Vec<_> = table.iter().collect();
    for entry in &entries {
        for comp_entry in &entries {
            if entry.symbol != comp_entry.symbol && entry.code.starts_with(&comp_entry.code) {
                panic!(
                    "invalid prefix detected between {:?} and {:?}",
                    entry, comp_entry
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::{count, count_str};

    fn codes(table: &MappingTable<char>) -> Vec<(char, String)> {
        table
            .iter()
            .map(|entry| (entry.symbol, entry.code.to_string()))
            .collect()
    }

    #[test]
    fn test_true_minimum_pair_is_merged_first() {
        let tree = build_tree(&count_str("aaabbc").unwrap()).unwrap();
        // leafs a, b, c, then parent(c, b), then root(a, parent)
        assert_eq!(tree.nodes.len(), 5);
        assert_eq!(
            tree.nodes[3],
            Node::Internal {
                left: 2,
                right: 1,
                weight: 3
            }
        );
        assert_eq!(
            tree.nodes[4],
            Node::Internal {
                left: 0,
                right: 3,
                weight: 6
            }
        );
        assert_eq!(tree.root_pos(), 4);
    }

    #[test]
    fn test_table_aaabbc() {
        let tree = build_tree(&count_str("aaabbc").unwrap()).unwrap();
        let table = tree_to_table(&tree);
        assert_eq!(
            codes(&table),
            vec![
                ('a', "0".to_string()),
                ('c', "10".to_string()),
                ('b', "11".to_string())
            ]
        );
        test_prefix_property(&table);
    }

    #[test]
    fn test_single_symbol() {
        let tree = build_tree(&count_str("aaaa").unwrap()).unwrap();
        assert_eq!(tree.nodes.len(), 1);
        assert!(tree.get_root_node().is_leaf());
        assert_eq!(tree.weight(), 4);
        let table = tree_to_table(&tree);
        assert_eq!(codes(&table), vec![('a', SINGLE_SYMBOL_CODE.to_string())]);
    }

    #[test]
    fn test_two_symbols() {
        let tree = build_tree(&count_str("abb").unwrap()).unwrap();
        let table = tree_to_table(&tree);
        assert_eq!(
            codes(&table),
            vec![('a', "0".to_string()), ('b', "1".to_string())]
        );
    }

    #[test]
    fn test_all_weights_equal() {
        let tree = build_tree(&count_str("abcd").unwrap()).unwrap();
        let table = tree_to_table(&tree);
        // (a,b) and (c,d) are merged, then both parents
        assert_eq!(
            codes(&table),
            vec![
                ('a', "00".to_string()),
                ('b', "01".to_string()),
                ('c', "10".to_string()),
                ('d', "11".to_string())
            ]
        );
    }

    #[test]
    fn test_heap_builder_matches_linear_builder() {
        let inputs = [
            "aaabbc",
            "abcd",
            "abracadabra",
            "The quick brown fox jumps over the lazy dog !!!",
            "mississippi river",
            "q",
        ];
        for input in inputs.iter() {
            let freqs = count_str(input).unwrap();
            let linear = build_tree(&freqs).unwrap();
            let heap = build_tree_heap(&freqs).unwrap();
            assert_eq!(linear, heap, "input {:?}", input);
            assert_eq!(tree_to_table(&linear), tree_to_table(&heap));
        }
    }

    #[test]
    fn test_full_byte_alphabet() {
        let all_bytes = (0..=u8::MAX).collect::<Vec<u8>>();
        let freqs = count(&all_bytes).unwrap();
        let tree = build_tree_heap(&freqs).unwrap();
        let table = tree_to_table(&tree);
        assert_eq!(table.len(), 256);
        // 256 equal weights give a perfectly balanced tree
        assert!(table.iter().all(|entry| entry.code.len() == 8));
        assert!(table.is_prefix_free());
        assert_eq!(tree, build_tree(&freqs).unwrap());
    }

    #[test]
    #[should_panic]
    fn test_prefix_property_detects_prefix() {
        let mut table = MappingTable::default();
        table.insert('a', "1".parse().unwrap(), 1);
        table.insert('b', "10".parse().unwrap(), 1);
        test_prefix_property(&table);
    }
}
