use std::time::Instant;

use log::info;

use crate::prelude::*;

/// Computes all-pairs shortest paths with the Floyd-Warshall algorithm.
///
/// The input graph is never mutated; the solver relaxes a dense working
/// matrix derived from the adjacency lists. Runs in `O(n^3)` time and
/// `O(n^2)` space, independent of the edge count. Correct for non-negative
/// edge lengths; negative cycles are not detected.
///
/// Cells of unreachable pairs hold [`UNREACHABLE`] in the returned matrix.
pub fn floyd_warshall(graph: &Graph) -> SquareMatrix {
    let start = Instant::now();

    let node_count = graph.node_count();
    let mut distances = working_matrix(graph);

    for k in 0..node_count {
        for i in 0..node_count {
            for j in 0..node_count {
                distances[(i, j)] =
                    f64::min(distances[(i, j)], distances[(i, k)] + distances[(k, j)]);
            }
        }
    }

    // Relaxation runs on IEEE infinity; the published table carries the
    // finite sentinel.
    for value in distances.values_mut() {
        if !value.is_finite() {
            *value = UNREACHABLE;
        }
    }

    info!("Computed Floyd-Warshall in {:?}", start.elapsed());

    distances
}

fn working_matrix(graph: &Graph) -> SquareMatrix {
    let mut distances = SquareMatrix::filled(graph.node_count(), f64::INFINITY);
    for id in 0..graph.node_count() {
        distances[(id, id)] = 0.0;
    }
    for node in graph.nodes() {
        for edge in node.edges() {
            distances[(edge.start(), edge.end())] = edge.length();
        }
    }
    distances
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relaxes_through_intermediate_nodes() {
        let graph =
            Graph::with_edges(3, [(0, 1, 2.0), (1, 2, 3.0), (0, 2, 10.0)]).unwrap();

        let distances = floyd_warshall(&graph);

        assert_eq!(distances[(0, 1)], 2.0);
        assert_eq!(distances[(1, 2)], 3.0);
        assert_eq!(distances[(0, 2)], 5.0);
    }

    #[test]
    fn unreachable_pairs_carry_the_sentinel() {
        let graph = Graph::with_edges(3, [(0, 1, 5.0)]).unwrap();

        let distances = floyd_warshall(&graph);

        assert_eq!(distances[(0, 1)], 5.0);
        assert_eq!(distances[(0, 2)], UNREACHABLE);
        assert_eq!(distances[(1, 0)], UNREACHABLE);
        assert_eq!(distances[(2, 0)], UNREACHABLE);
        assert_eq!(distances[(2, 1)], UNREACHABLE);
        assert_eq!(distances[(2, 2)], 0.0);
    }

    #[test]
    fn diagonal_is_zero() {
        let graph = GraphGenerator::new()
            .node_count(30)
            .edge_percent(25)
            .seed(1337)
            .generate()
            .unwrap();

        let distances = floyd_warshall(&graph);

        for id in 0..distances.order() {
            assert_eq!(distances[(id, id)], 0.0);
        }
    }
}
