use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::time::Instant;

use float_ord::FloatOrd;
use log::info;

use crate::prelude::*;

/// Computes single-source shortest paths from `source` over the graph's
/// adjacency lists.
///
/// Returns one distance per node; unreachable nodes hold [`UNREACHABLE`].
/// Panics if `source` is not a node of the graph.
pub fn dijkstra(graph: &Graph, source: NodeId) -> Vec<f64> {
    let mut distances = shortest_paths(graph, source);
    for distance in distances.iter_mut() {
        if !distance.is_finite() {
            *distance = UNREACHABLE;
        }
    }
    distances
}

/// Computes all-pairs shortest paths by running Dijkstra once per node.
///
/// Row `i` of the returned matrix holds the distances from node `i`. Runs in
/// `O(n * e * log n)` time over all sources, which beats the dense solver on
/// sparse graphs.
pub fn all_pairs_dijkstra(graph: &Graph) -> SquareMatrix {
    let start = Instant::now();

    let node_count = graph.node_count();
    let mut distances = SquareMatrix::filled(node_count, UNREACHABLE);

    for source in 0..node_count {
        let row = dijkstra(graph, source);
        for (target, distance) in row.into_iter().enumerate() {
            distances[(source, target)] = distance;
        }
    }

    info!("Computed all-pairs Dijkstra in {:?}", start.elapsed());

    distances
}

/// The frontier holds `(distance, node)` entries behind `Reverse`, so the
/// heap pops the smallest tentative distance first and breaks ties by
/// ascending node id. There is no decrease-key: a node is re-enqueued on
/// every improvement and stale entries are dropped on extraction.
fn shortest_paths(graph: &Graph, source: NodeId) -> Vec<f64> {
    let node_count = graph.node_count();

    let mut min_distances = vec![f64::INFINITY; node_count];
    min_distances[source] = 0.0;

    let mut visited = vec![false; node_count];

    let mut frontier = BinaryHeap::new();
    frontier.push(Reverse((FloatOrd(0.0), source)));

    while let Some(Reverse((FloatOrd(distance), node))) = frontier.pop() {
        if visited[node] {
            continue;
        }
        visited[node] = true;

        // An entry whose distance no longer matches the best known one is
        // stale and must not relax anything.
        if distance > min_distances[node] {
            continue;
        }

        for edge in graph.node(node).edges() {
            let target = edge.end();
            if visited[target] {
                continue;
            }
            let candidate = distance + edge.length();
            if candidate < min_distances[target] {
                min_distances[target] = candidate;
                frontier.push(Reverse((FloatOrd(candidate), target)));
            }
        }
    }

    min_distances
}
