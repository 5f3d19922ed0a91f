//! A library that can be used as a building block for all-pairs shortest
//! path experiments.
//!
//! The crate provides a directed weighted graph backed by per-node adjacency
//! lists, a generator for uniformly random graphs and a dense square matrix
//! type used to exchange weight and distance tables with solvers.
//!
//! # What is a graph?
//!
//! A graph consists of nodes and edges where each edge connects exactly two
//! nodes. All graphs in this crate are directed: an edge `(u, v, len)` leads
//! from its start node `u` to its end node `v` and has a positive length.
//! Node identifiers are dense indices in `0..node_count`, which makes them
//! usable as row and column indices of the weight matrix.
//!
//! # How to build a graph
//!
//! Graphs can be created from an explicit edge list:
//!
//! ```
//! use apsp_builder::prelude::*;
//!
//! let graph = Graph::with_edges(3, [(0, 1, 2.0), (1, 2, 3.0), (0, 2, 10.0)])
//!     .expect("invalid edge list");
//!
//! assert_eq!(graph.node_count(), 3);
//! assert_eq!(graph.edge_count(), 3);
//! assert_eq!(graph.node(0).edges().len(), 2);
//! ```
//!
//! Random graphs are created through [`GraphGenerator`]. The generator fills
//! a requested share of the `node_count * node_count` slot matrix with edges
//! of uniformly random length:
//!
//! ```
//! use apsp_builder::prelude::*;
//!
//! let graph = GraphGenerator::new()
//!     .node_count(100)
//!     .edge_percent(20)
//!     .seed(42)
//!     .generate()
//!     .expect("invalid generator parameters");
//!
//! assert_eq!(graph.node_count(), 100);
//! assert_eq!(graph.edge_count(), 2_000);
//! ```
//!
//! The dense weight-matrix view is derived from the adjacency lists on
//! demand:
//!
//! ```
//! use apsp_builder::prelude::*;
//!
//! let graph = Graph::with_edges(2, [(0, 1, 5.0)]).expect("invalid edge list");
//! let weights = graph.weight_matrix();
//!
//! assert_eq!(weights[(0, 0)], 0.0);
//! assert_eq!(weights[(0, 1)], 5.0);
//! assert_eq!(weights[(1, 0)], UNREACHABLE);
//! ```

pub mod generate;
pub mod graph;
pub mod matrix;
pub mod prelude;

pub use crate::generate::GraphGenerator;
pub use crate::graph::Edge;
pub use crate::graph::Graph;
pub use crate::graph::Node;
pub use crate::graph::NodeId;
pub use crate::graph::MAX_EDGE_LENGTH;
pub use crate::graph::UNREACHABLE;
pub use crate::matrix::SquareMatrix;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("node count must be positive")]
    InvalidNodeCount,
    #[error("edge percentage must be below 100, got {percent}")]
    InvalidEdgePercentage { percent: usize },
    #[error("edge length must be positive, got {length}")]
    InvalidEdgeLength { length: f64 },
    #[error("node id {id} is out of bounds for node count {node_count}")]
    InvalidNodeId { id: NodeId, node_count: usize },
    #[error("self-loop edges are not supported (node {id})")]
    SelfLoop { id: NodeId },
}
