use crate::Tree;
use common::Symbol;
use std::borrow::Cow;

#[derive(Debug, Clone)]
pub struct Edge {
    from: usize,
    to: usize,
    transition: u8, // 0 or 1
}

/// renders the tree in the dot format of graphviz
pub fn render_plan_to<S: Symbol, W: core::fmt::Write>(
    graph: &Tree<S>,
    output: &mut W,
) -> std::result::Result<(), core::fmt::Error> {
    dot::render(graph, output)
}

impl<'a, S: Symbol + 'a> dot::Labeller<'a> for Tree<S> {
    type Node = usize;
    type Edge = Edge;
    fn graph_id(&'a self) -> dot::Id<'a> {
        dot::Id::new("huffman").unwrap()
    }

    fn node_id(&'a self, n: &usize) -> dot::Id<'a> {
        dot::Id::new(format!("N{}", n)).unwrap()
    }

    fn node_label<'b>(&'b self, n: &usize) -> dot::LabelText<'b> {
        let node = self.get_node(*n);
        let out = if let Some(symbol) = node.symbol() {
            format!("Weight:{:?} Symbl:{:?}", node.weight(), symbol)
        } else {
            format!("Weight:{:?}", node.weight())
        };
        dot::LabelText::LabelStr(out.into())
    }

    /// Adds attr to `n` that will be used in the rendered output.
    /// Multiple attr can be returned in the String, e.g. `color="red", fontcolor="red"`
    fn node_attr(&'a self, n: &Self::Node) -> Option<String> {
        let out = if self.get_node(*n).is_leaf() {
            "color=dodgerblue4 fontcolor=dodgerblue4 ".to_string()
        } else {
            "color=azure4 fontcolor=azure4 ".to_string()
        };
        Some(out)
    }

    fn edge_label<'b>(&'b self, ed: &Edge) -> dot::LabelText<'b> {
        dot::LabelText::LabelStr(ed.transition.to_string().into())
    }
}

impl<'a, S: Symbol + 'a> dot::GraphWalk<'a> for Tree<S> {
    type Node = usize;
    type Edge = Edge;
    fn nodes(&self) -> dot::Nodes<usize> {
        (0..self.nodes.len()).collect()
    }

    fn edges(&self) -> dot::Edges<Edge> {
        let mut edges = vec![];
        for (i, node) in self.nodes.iter().enumerate() {
            for (transition, bit) in [(0, false), (1, true)].iter().copied() {
                if let Some(child) = node.child(bit) {
                    edges.push(Edge {
                        from: i,
                        to: child,
                        transition,
                    });
                }
            }
        }
        Cow::Owned(edges)
    }

    fn source(&self, e: &Edge) -> usize {
        e.from
    }

    fn target(&self, e: &Edge) -> usize {
        e.to
    }
}
