use std::time::Instant;

use log::info;
use nanorand::{Rng, WyRand};

use crate::graph::{Graph, MAX_EDGE_LENGTH, UNREACHABLE};
use crate::matrix::SquareMatrix;
use crate::Error;

/// A builder for uniformly random directed weighted graphs.
///
/// The generator targets `edge_percent` percent of the
/// `node_count * node_count` slot matrix and fills it by rejection sampling:
/// ordered node pairs are drawn uniformly until enough distinct slots are
/// occupied. Edge lengths are uniform in `(0, MAX_EDGE_LENGTH]`.
///
/// With `double_sided` enabled, every accepted draw installs the same length
/// in both directions and counts once against the target. A double-sided
/// draw therefore occupies two matrix slots per counted edge, which halves
/// the achievable density.
///
/// There is no cap on sampling attempts. Termination is probabilistic and
/// becomes increasingly unlikely as the target approaches the number of free
/// slots; keep the edge percentage well below 100 (and below 50 for
/// double-sided graphs). A target that exceeds the free slots never
/// terminates.
///
/// ```
/// use apsp_builder::prelude::*;
///
/// let graph = GraphGenerator::new()
///     .node_count(100)
///     .edge_percent(20)
///     .seed(42)
///     .generate()
///     .expect("invalid generator parameters");
///
/// assert_eq!(graph.node_count(), 100);
/// assert_eq!(graph.edge_count(), 2_000);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct GraphGenerator {
    node_count: usize,
    edge_percent: usize,
    double_sided: bool,
    seed: Option<u64>,
}

impl GraphGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of nodes. Must be positive.
    pub fn node_count(mut self, node_count: usize) -> Self {
        self.node_count = node_count;
        self
    }

    /// Sets the percentage of the slot matrix to fill with edges. Must be
    /// below 100.
    pub fn edge_percent(mut self, edge_percent: usize) -> Self {
        self.edge_percent = edge_percent;
        self
    }

    /// Generates every edge in both directions with the same length, which
    /// makes the weight matrix symmetric.
    pub fn double_sided(mut self, double_sided: bool) -> Self {
        self.double_sided = double_sided;
        self
    }

    /// Pins the random number generator for reproducible graphs. Without a
    /// seed, the generator is seeded from entropy.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn generate(self) -> Result<Graph, Error> {
        if self.edge_percent >= 100 {
            return Err(Error::InvalidEdgePercentage {
                percent: self.edge_percent,
            });
        }
        let mut graph = Graph::with_node_count(self.node_count)?;

        let start = Instant::now();
        let mut rng = match self.seed {
            Some(seed) => WyRand::new_seed(seed),
            None => WyRand::new(),
        };

        let node_count = self.node_count;

        // Scratch occupancy view used only while sampling; the finished
        // graph keeps the adjacency lists as its single representation.
        let mut slots = SquareMatrix::filled(node_count, UNREACHABLE);
        for id in 0..node_count {
            slots[(id, id)] = 0.0;
        }

        let mut edges_left = self.edge_percent * node_count * node_count / 100;

        while edges_left > 0 {
            let start_node = rng.generate_range(0..node_count);
            let end_node = rng.generate_range(0..node_count);
            if start_node == end_node {
                continue;
            }

            let mut length = MAX_EDGE_LENGTH * rng.generate::<f64>();
            if length == 0.0 {
                length = 1.0;
            }

            if self.double_sided {
                if slots[(start_node, end_node)] == UNREACHABLE
                    && slots[(end_node, start_node)] == UNREACHABLE
                {
                    slots[(start_node, end_node)] = length;
                    slots[(end_node, start_node)] = length;
                    graph.add_edge(start_node, end_node, length)?;
                    graph.add_edge(end_node, start_node, length)?;
                    edges_left -= 1;
                }
            } else if slots[(start_node, end_node)] == UNREACHABLE {
                slots[(start_node, end_node)] = length;
                graph.add_edge(start_node, end_node, length)?;
                edges_left -= 1;
            }
        }

        info!(
            "Generated graph (node_count = {}, edge_count = {}) in {:?}",
            graph.node_count(),
            graph.edge_count(),
            start.elapsed()
        );

        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generator() -> GraphGenerator {
        GraphGenerator::new().node_count(50).edge_percent(20).seed(42)
    }

    #[test]
    fn hits_the_target_edge_count() {
        let graph = generator().generate().unwrap();
        assert_eq!(graph.edge_count(), 20 * 50 * 50 / 100);
    }

    #[test]
    fn double_sided_installs_both_directions() {
        let graph = generator().double_sided(true).generate().unwrap();
        assert_eq!(graph.edge_count(), 2 * (20 * 50 * 50 / 100));
    }

    #[test]
    fn diagonal_is_zero() {
        let weights = generator().generate().unwrap().weight_matrix();
        for id in 0..weights.order() {
            assert_eq!(weights[(id, id)], 0.0);
        }
    }

    #[test]
    fn double_sided_weights_are_symmetric() {
        let weights = generator()
            .double_sided(true)
            .generate()
            .unwrap()
            .weight_matrix();

        for row in 0..weights.order() {
            for col in 0..weights.order() {
                assert_eq!(weights[(row, col)], weights[(col, row)]);
            }
        }
    }

    #[test]
    fn edge_lengths_are_in_range() {
        let graph = generator().generate().unwrap();
        for node in graph.nodes() {
            for edge in node.edges() {
                assert!(edge.length() > 0.0);
                assert!(edge.length() <= MAX_EDGE_LENGTH);
            }
        }
    }

    #[test]
    fn no_self_loops() {
        let graph = generator().generate().unwrap();
        for node in graph.nodes() {
            assert!(node.edges().iter().all(|edge| edge.end() != node.id()));
        }
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let a = generator().generate().unwrap();
        let b = generator().generate().unwrap();
        assert_eq!(a.weight_matrix(), b.weight_matrix());
    }

    #[test]
    fn rejects_full_density() {
        let result = GraphGenerator::new()
            .node_count(10)
            .edge_percent(100)
            .generate();
        assert!(matches!(
            result,
            Err(Error::InvalidEdgePercentage { percent: 100 })
        ));
    }

    #[test]
    fn rejects_zero_nodes() {
        let result = GraphGenerator::new().node_count(0).edge_percent(20).generate();
        assert!(matches!(result, Err(Error::InvalidNodeCount)));
    }
}
