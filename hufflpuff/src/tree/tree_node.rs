use core::cmp::Ordering;

use common::Symbol;

/// A node of the huffman tree. Children are positions in the node array of the tree.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Node<S: Symbol> {
    Leaf {
        symbol: S,
        /// the number of occurences
        weight: usize,
    },
    Internal {
        /// position of the left node in the array, reached with a 0
        left: usize,
        /// position of the right node in the array, reached with a 1
        right: usize,
        /// sum of the weights of both children
        weight: usize,
    },
}

impl<S: Symbol> Node<S> {
    #[inline]
    pub fn weight(&self) -> usize {
        match self {
            Node::Leaf { weight, .. } | Node::Internal { weight, .. } => *weight,
        }
    }

    #[inline]
    pub fn symbol(&self) -> Option<S> {
        match self {
            Node::Leaf { symbol, .. } => Some(*symbol),
            Node::Internal { .. } => None,
        }
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// position of the child behind `bit`, None for leafs
    #[inline]
    pub fn child(&self, bit: bool) -> Option<usize> {
        match self {
            Node::Internal { left, right, .. } => Some(if bit { *right } else { *left }),
            Node::Leaf { .. } => None,
        }
    }
}

impl<S: Symbol> core::fmt::Debug for Node<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Node::Leaf { symbol, weight } => f.write_fmt(format_args!(
                "Leaf{{ symbol:{:?} weight:{} }}",
                symbol, weight
            )),
            Node::Internal {
                left,
                right,
                weight,
            } => f.write_fmt(format_args!(
                "Internal{{ left:{} right:{} weight:{} }}",
                left, right, weight
            )),
        }
    }
}

/// A node which is not merged yet, as seen by the selection of the two minimum nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveNode {
    /// position in the node array of the tree
    pub node_pos: usize,
    pub weight: usize,
}

/// Entry of the priority queue used by `build_tree_heap`.
///
/// Nodes are created in the order they join the active set, so the node position doubles as
/// the tie-break: on equal weight the earlier node is popped first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct HeapNode(pub(crate) ActiveNode);

impl std::cmp::PartialOrd for HeapNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// The priority queue depends on `Ord`.
// Explicitly implement the trait so the queue becomes a min-heap
// instead of a max-heap.
impl std::cmp::Ord for HeapNode {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .0
            .weight
            .cmp(&self.0.weight)
            .then_with(|| other.0.node_pos.cmp(&self.0.node_pos))
    }
}
