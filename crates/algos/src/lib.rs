//! All-pairs shortest path solvers and the harness used to compare them.
//!
//! Two classic algorithms compute the same `n * n` distance table over an
//! [`apsp_builder::Graph`]: [`floyd_warshall`](crate::floyd_warshall::floyd_warshall)
//! relaxes a dense weight matrix, while
//! [`all_pairs_dijkstra`](crate::dijkstra::all_pairs_dijkstra) runs a
//! priority-frontier search once per source node over the adjacency lists.
//! Both treat their input graph as read-only and return a freshly allocated
//! [`SquareMatrix`](apsp_builder::SquareMatrix), so they can be compared cell
//! by cell with [`verify`](crate::verify::verify):
//!
//! ```
//! use apsp::prelude::*;
//!
//! let graph = GraphGenerator::new()
//!     .node_count(64)
//!     .edge_percent(30)
//!     .seed(42)
//!     .generate()
//!     .expect("invalid generator parameters");
//!
//! let dense = floyd_warshall(&graph);
//! let sparse = all_pairs_dijkstra(&graph);
//!
//! assert!(verify(&dense, &sparse, DEFAULT_TOLERANCE).is_ok());
//! ```
//!
//! The [`harness`] module drives a parameter sweep over node counts and edge
//! densities, times both solvers and emits one
//! [`MeasurementRow`](crate::harness::MeasurementRow) per solver and
//! configuration into a caller-provided
//! [`ResultSink`](crate::harness::ResultSink).

pub mod dijkstra;
pub mod floyd_warshall;
pub mod harness;
pub mod prelude;
pub mod verify;
