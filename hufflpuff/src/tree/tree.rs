use bitstream::BitString;
use common::HuffError;
use common::Result;
use common::Symbol;

use super::tree_node::Node;
use crate::table::MappingTable;
use crate::tree::render_tree::render_plan_to;
use crate::SINGLE_SYMBOL_CODE;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree<S: Symbol> {
    pub(crate) nodes: Vec<Node<S>>,
    /// the root node is the last created parent, or the only leaf if there is a single symbol
    pub(crate) root_node: usize,

    /// the nodes with the symbols are at the beginning of the tree, parents are appended in
    /// creation order
    pub(crate) num_symbols: usize,
}

impl<S: Symbol> Tree<S> {
    pub fn get_node(&self, node_pos: usize) -> &Node<S> {
        &self.nodes[node_pos]
    }
    pub fn get_root_node(&self) -> &Node<S> {
        &self.nodes[self.root_node]
    }
    pub fn root_pos(&self) -> usize {
        self.root_node
    }
    pub fn get_num_symbol_nodes(&self) -> usize {
        self.num_symbols
    }
    /// total weight, equals the number of symbols the tree was built from
    pub fn weight(&self) -> usize {
        self.get_root_node().weight()
    }

    /// returns all nodes in the tree containing a symbol, excluding intermediate parent nodes
    pub fn get_symbol_nodes(&self) -> &[Node<S>] {
        &self.nodes[..self.num_symbols]
    }

    /// depth of the deepest leaf, 0 for a single symbol tree
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        self.walk_tree(self.root_node, &mut |_node, _transitions, depth| {
            max_depth = max_depth.max(depth);
        });
        max_depth
    }

    /// returns the number of bits the input of the tree is encoded to
    pub fn encoded_bit_length(&self) -> usize {
        if self.get_root_node().is_leaf() {
            return self.weight() * SINGLE_SYMBOL_CODE.len();
        }
        let mut size_in_bits = 0;
        self.walk_tree(self.root_node, &mut |node, _transitions, depth| {
            if node.is_leaf() {
                size_in_bits += node.weight() * depth;
            }
        });
        size_in_bits
    }

    /// Walks the tree depth first, left before right, calling `fun` for every node below
    /// `start_node_pos` with the transitions taken so far and the depth.
    pub(crate) fn walk_tree<F>(&self, start_node_pos: usize, fun: &mut F)
    where
        F: FnMut(&Node<S>, &BitString, usize),
    {
        self.walk_graph_internal(&BitString::new(), 0, start_node_pos, fun);
    }
    fn walk_graph_internal<F>(
        &self,
        transitions: &BitString,
        depth: usize,
        start_node_pos: usize,
        fun: &mut F,
    ) where
        F: FnMut(&Node<S>, &BitString, usize),
    {
        if let Node::Internal { left, right, .. } = self.nodes[start_node_pos] {
            for (bit, child) in [(false, left), (true, right)].iter().copied() {
                let child_transitions = transitions.with_bit(bit);
                fun(&self.nodes[child], &child_transitions, depth + 1);
                self.walk_graph_internal(&child_transitions, depth + 1, child, fun);
            }
        }
    }

    /// Rebuilds the tree paths from a mapping table.
    ///
    /// The leaf weights are taken from the table, parents sum them up again. Fails if the codes
    /// are not prefix-free or leave a branch without a symbol, since such a table can't be
    /// decoded greedily.
    pub fn from_table(table: &MappingTable<S>) -> Result<Tree<S>> {
        if table.is_empty() {
            return Err(HuffError::EmptyInput);
        }
        let mut nodes: Vec<Node<S>> = table
            .iter()
            .map(|entry| Node::Leaf {
                symbol: entry.symbol,
                weight: entry.weight,
            })
            .collect();
        let num_symbols = nodes.len();

        if num_symbols == 1 {
            let only = table.iter().next().map(|entry| entry.code.as_str());
            if only != Some(SINGLE_SYMBOL_CODE) {
                return Err(HuffError::InvalidCode {
                    position: 0,
                    reason: "a single symbol must have the single symbol code",
                });
            }
            return Ok(Tree {
                nodes,
                root_node: 0,
                num_symbols,
            });
        }

        // parents while they are still incomplete: [left, right], parent 0 is the root
        let mut parents: Vec<[Option<Slot>; 2]> = vec![[None, None]];
        for (leaf_pos, entry) in table.iter().enumerate() {
            let code_len = entry.code.len();
            if code_len == 0 {
                return Err(HuffError::InvalidCode {
                    position: 0,
                    reason: "empty code",
                });
            }
            let mut parent = 0;
            for (position, bit) in entry.code.bits().enumerate() {
                let side = bit as usize;
                let slot = parents[parent][side];
                if position + 1 == code_len {
                    if slot.is_some() {
                        return Err(HuffError::InvalidCode {
                            position,
                            reason: "code is a prefix of another code",
                        });
                    }
                    parents[parent][side] = Some(Slot::Leaf(leaf_pos));
                    break;
                }
                parent = match slot {
                    Some(Slot::Parent(next)) => next,
                    Some(Slot::Leaf(_)) => {
                        return Err(HuffError::InvalidCode {
                            position,
                            reason: "code has another code as prefix",
                        })
                    }
                    None => {
                        let next = parents.len();
                        parents.push([None, None]);
                        parents[parent][side] = Some(Slot::Parent(next));
                        next
                    }
                };
            }
        }

        let to_node_pos = |slot: Slot| match slot {
            Slot::Leaf(leaf_pos) => leaf_pos,
            Slot::Parent(parent) => num_symbols + parent,
        };
        for children in &parents {
            match children {
                [Some(left), Some(right)] => nodes.push(Node::Internal {
                    left: to_node_pos(*left),
                    right: to_node_pos(*right),
                    weight: 0,
                }),
                _ => {
                    return Err(HuffError::InvalidCode {
                        position: 0,
                        reason: "codes leave a branch without symbol",
                    })
                }
            }
        }
        // children are always created after their parent, summing up backwards sees them first
        for node_pos in (num_symbols..nodes.len()).rev() {
            if let Node::Internal { left, right, .. } = nodes[node_pos] {
                let sum = nodes[left].weight() + nodes[right].weight();
                if let Node::Internal { weight, .. } = &mut nodes[node_pos] {
                    *weight = sum;
                }
            }
        }

        Ok(Tree {
            nodes,
            root_node: num_symbols,
            num_symbols,
        })
    }
}

#[derive(Debug, Clone, Copy)]
enum Slot {
    Leaf(usize),
    Parent(usize),
}

impl<S: Symbol> std::fmt::Display for Tree<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        render_plan_to(self, f)
    }
}
