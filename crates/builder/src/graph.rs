use std::fmt;

use log::info;

use crate::matrix::SquareMatrix;
use crate::Error;

/// Uniquely identifies a node within a graph. Node ids are dense indices in
/// `0..node_count` and double as row and column indices of the weight matrix.
pub type NodeId = usize;

/// The maximum length of a generated edge.
pub const MAX_EDGE_LENGTH: f64 = 1000.0;

/// Finite stand-in for "no edge" and "no path" cells in weight and distance
/// matrices. The value leaves enough headroom that adding two sentinels stays
/// far inside the representable range.
pub const UNREACHABLE: f64 = f64::MAX / 4.0;

/// A directed weighted edge between two nodes.
///
/// Edges are immutable once constructed and owned by the [`Node`] whose
/// outgoing-edge list contains them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    start: NodeId,
    end: NodeId,
    length: f64,
}

impl Edge {
    pub(crate) fn new(start: NodeId, end: NodeId, length: f64) -> Result<Self, Error> {
        if !(length > 0.0) {
            return Err(Error::InvalidEdgeLength { length });
        }
        Ok(Self { start, end, length })
    }

    #[inline]
    pub fn start(&self) -> NodeId {
        self.start
    }

    #[inline]
    pub fn end(&self) -> NodeId {
        self.end
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.length
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} --{}--> {}", self.start, self.length, self.end)
    }
}

/// A node and the outgoing edges attached to it.
#[derive(Clone, Debug)]
pub struct Node {
    id: NodeId,
    edges: Vec<Edge>,
}

impl Node {
    fn new(id: NodeId) -> Self {
        Self {
            id,
            edges: Vec::new(),
        }
    }

    #[inline]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The outgoing edges of this node, in insertion order.
    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    #[inline]
    pub fn degree(&self) -> usize {
        self.edges.len()
    }

    fn push_edge(&mut self, edge: Edge) {
        debug_assert_eq!(edge.start(), self.id);
        self.edges.push(edge);
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Node {} ({} outgoing):", self.id, self.edges.len())?;
        for edge in &self.edges {
            writeln!(f, "    {edge}")?;
        }
        Ok(())
    }
}

/// A directed weighted graph backed by per-node adjacency lists.
///
/// The adjacency lists are the single authoritative representation. Solvers
/// that want a dense table derive it on demand via [`Graph::weight_matrix`],
/// so the lists and the matrix cannot drift apart.
///
/// Graphs are read-only after construction; solvers operating on a shared
/// `&Graph` allocate their own scratch state.
#[derive(Clone, Debug)]
pub struct Graph {
    nodes: Vec<Node>,
}

impl Graph {
    pub(crate) fn with_node_count(node_count: usize) -> Result<Self, Error> {
        if node_count == 0 {
            return Err(Error::InvalidNodeCount);
        }
        Ok(Self {
            nodes: (0..node_count).map(Node::new).collect(),
        })
    }

    /// Builds a graph from an explicit list of `(start, end, length)` triples.
    ///
    /// Fails if a node id is out of bounds, a length is not positive or a
    /// triple describes a self-loop.
    ///
    /// ```
    /// use apsp_builder::prelude::*;
    ///
    /// let graph = Graph::with_edges(3, [(0, 1, 5.0)]).expect("invalid edge list");
    ///
    /// assert_eq!(graph.node_count(), 3);
    /// assert_eq!(graph.node(0).degree(), 1);
    /// assert_eq!(graph.node(1).degree(), 0);
    /// ```
    pub fn with_edges<I>(node_count: usize, edges: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (NodeId, NodeId, f64)>,
    {
        let mut graph = Self::with_node_count(node_count)?;
        for (start, end, length) in edges {
            graph.add_edge(start, end, length)?;
        }

        info!(
            "Created graph (node_count = {}, edge_count = {})",
            graph.node_count(),
            graph.edge_count()
        );

        Ok(graph)
    }

    pub(crate) fn add_edge(&mut self, start: NodeId, end: NodeId, length: f64) -> Result<(), Error> {
        let node_count = self.node_count();
        if start >= node_count {
            return Err(Error::InvalidNodeId {
                id: start,
                node_count,
            });
        }
        if end >= node_count {
            return Err(Error::InvalidNodeId { id: end, node_count });
        }
        if start == end {
            return Err(Error::SelfLoop { id: start });
        }

        let edge = Edge::new(start, end, length)?;
        self.nodes[start].push_edge(edge);
        Ok(())
    }

    /// Returns the number of nodes in the graph.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of directed edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|node| node.edges.len()).sum()
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    #[inline]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Derives the dense weight-matrix view of the adjacency lists.
    ///
    /// The diagonal is `0.0`; every other cell holds the length of the direct
    /// edge between its row and column node, or [`UNREACHABLE`] if there is
    /// none.
    pub fn weight_matrix(&self) -> SquareMatrix {
        let mut weights = SquareMatrix::filled(self.node_count(), UNREACHABLE);
        for id in 0..self.node_count() {
            weights[(id, id)] = 0.0;
        }
        for node in &self.nodes {
            for edge in node.edges() {
                weights[(edge.start(), edge.end())] = edge.length();
            }
        }
        weights
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Graph nodes: {}", self.node_count())?;
        for node in &self.nodes {
            write!(f, "  {node}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tap::prelude::*;

    #[test]
    fn edges_belong_to_their_start_node() {
        let graph =
            Graph::with_edges(3, [(0, 1, 2.0), (0, 2, 4.0), (2, 1, 8.0)]).unwrap();

        for node in graph.nodes() {
            assert!(node.edges().iter().all(|edge| edge.start() == node.id()));
        }
        assert_eq!(graph.node(0).degree(), 2);
        assert_eq!(graph.node(1).degree(), 0);
        assert_eq!(graph.node(2).degree(), 1);
    }

    #[test]
    fn outgoing_targets() {
        let graph =
            Graph::with_edges(3, [(0, 2, 4.0), (0, 1, 2.0), (2, 1, 8.0)]).unwrap();

        let targets = graph
            .node(0)
            .edges()
            .iter()
            .map(Edge::end)
            .collect::<Vec<_>>()
            .tap_mut(|targets| targets.sort_unstable());

        assert_eq!(targets, vec![1, 2]);
    }

    #[test]
    fn weight_matrix_matches_edge_lists() {
        let edges = [(0, 1, 2.0), (1, 2, 3.0), (0, 2, 10.0)];
        let graph = Graph::with_edges(3, edges).unwrap();
        let weights = graph.weight_matrix();

        for (start, end, length) in edges {
            assert_eq!(weights[(start, end)], length);
        }
        assert_eq!(weights[(1, 0)], UNREACHABLE);
        assert_eq!(weights[(2, 0)], UNREACHABLE);
        assert_eq!(weights[(2, 1)], UNREACHABLE);
        for id in 0..3 {
            assert_eq!(weights[(id, id)], 0.0);
        }
    }

    #[test]
    fn rejects_empty_graph() {
        let result = Graph::with_edges(0, []);
        assert!(matches!(result, Err(Error::InvalidNodeCount)));
    }

    #[test]
    fn rejects_non_positive_edge_length() {
        let result = Graph::with_edges(2, [(0, 1, 0.0)]);
        assert!(matches!(
            result,
            Err(Error::InvalidEdgeLength { length }) if length == 0.0
        ));

        let result = Graph::with_edges(2, [(0, 1, -3.0)]);
        assert!(matches!(result, Err(Error::InvalidEdgeLength { .. })));
    }

    #[test]
    fn rejects_nan_edge_length() {
        let result = Graph::with_edges(2, [(0, 1, f64::NAN)]);
        assert!(matches!(result, Err(Error::InvalidEdgeLength { .. })));
    }

    #[test]
    fn rejects_out_of_bounds_node_id() {
        let result = Graph::with_edges(2, [(0, 2, 1.0)]);
        assert!(matches!(
            result,
            Err(Error::InvalidNodeId { id: 2, node_count: 2 })
        ));
    }

    #[test]
    fn rejects_self_loop() {
        let result = Graph::with_edges(2, [(1, 1, 1.0)]);
        assert!(matches!(result, Err(Error::SelfLoop { id: 1 })));
    }

    #[test]
    fn edge_display() {
        let graph = Graph::with_edges(2, [(0, 1, 5.0)]).unwrap();
        let edge = graph.node(0).edges()[0];
        assert_eq!(edge.to_string(), "0 --5--> 1");
    }
}
