use serde::Serialize;
use tracing::warn;

use crate::error::Result;
use crate::graph::{ensure_node, AdjacencyMatrix, Graph, NodeId};

/// Outcome of a path reconstruction. A zero-length route (start == end)
/// is a route, not an absence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum PathOutcome {
    Route { nodes: Vec<NodeId>, cost: i64 },
    Unreachable,
}

impl PathOutcome {
    pub fn is_route(&self) -> bool {
        matches!(self, PathOutcome::Route { .. })
    }
}

/// Distances and predecessors out of a single-source run, with path
/// reconstruction shared by both algorithms.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortestPathTree {
    start: NodeId,
    distances: Vec<Option<i64>>,
    predecessors: Vec<Option<usize>>,
}

impl ShortestPathTree {
    pub fn start(&self) -> NodeId {
        self.start
    }

    /// Tentative distance to a 1-based node id; `None` when unreachable
    /// or out of range.
    pub fn distance_to(&self, node: NodeId) -> Option<i64> {
        self.distances.get(node.wrapping_sub(1)).copied().flatten()
    }

    /// Walk predecessors from `end` back to the start node. The walk must
    /// land on the start to count as a route; anything else is reported
    /// as unreachable rather than returned as a corrupted prefix.
    pub fn path_to(&self, end: NodeId) -> Result<PathOutcome> {
        let n = self.distances.len();
        ensure_node(end, n)?;

        let start = self.start - 1;
        let mut current = end - 1;
        let mut nodes = vec![end];

        while current != start {
            match self.predecessors[current] {
                Some(previous) => {
                    current = previous;
                    nodes.push(current + 1);
                }
                None => return Ok(PathOutcome::Unreachable),
            }
            // A walk longer than n nodes is cyclic, which can happen after
            // a negative cycle corrupts the predecessor chain.
            if nodes.len() > n {
                return Ok(PathOutcome::Unreachable);
            }
        }

        let Some(cost) = self.distances[end - 1] else {
            return Ok(PathOutcome::Unreachable);
        };

        nodes.reverse();
        Ok(PathOutcome::Route { nodes, cost })
    }
}

/// Dijkstra over the cost matrix: repeatedly take the unvisited node with
/// the smallest tentative distance (linear scan, O(V^2) total) and relax
/// its direct neighbors. Negative weights are undefined behavior and are
/// not validated.
pub fn dijkstra(matrix: &AdjacencyMatrix, start: NodeId) -> Result<ShortestPathTree> {
    let n = matrix.node_count();
    ensure_node(start, n)?;

    let mut distances: Vec<Option<i64>> = vec![None; n];
    let mut predecessors: Vec<Option<usize>> = vec![None; n];
    let mut visited = vec![false; n];
    distances[start - 1] = Some(0);

    for _ in 0..n {
        let Some(current) = closest_unvisited(&distances, &visited) else {
            break;
        };
        visited[current] = true;
        let Some(current_distance) = distances[current] else {
            break;
        };

        for neighbor in 0..n {
            if visited[neighbor] {
                continue;
            }
            let Some(weight) = matrix.rows()[current][neighbor] else {
                continue;
            };
            let candidate = current_distance + weight;
            if distances[neighbor].map_or(true, |d| candidate < d) {
                distances[neighbor] = Some(candidate);
                predecessors[neighbor] = Some(current);
            }
        }
    }

    Ok(ShortestPathTree {
        start,
        distances,
        predecessors,
    })
}

fn closest_unvisited(distances: &[Option<i64>], visited: &[bool]) -> Option<usize> {
    let mut closest = None;
    let mut shortest = i64::MAX;
    for (node, distance) in distances.iter().enumerate() {
        if let Some(distance) = *distance {
            if !visited[node] && distance < shortest {
                shortest = distance;
                closest = Some(node);
            }
        }
    }
    closest
}

/// A Bellman-Ford run. `negative_cycle` is a warning, not an error: the
/// tree is returned either way, though its distances may be unreliable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BellmanFordRun {
    pub tree: ShortestPathTree,
    pub negative_cycle: bool,
}

/// Bellman-Ford over the graph's full directed edge list: relax every edge
/// `n - 1` times, then probe once more; any further improvement means a
/// negative-weight cycle.
pub fn bellman_ford(graph: &Graph, start: NodeId) -> Result<BellmanFordRun> {
    let n = graph.node_count();
    ensure_node(start, n)?;

    let mut distances: Vec<Option<i64>> = vec![None; n];
    let mut predecessors: Vec<Option<usize>> = vec![None; n];
    distances[start - 1] = Some(0);

    for _ in 0..n.saturating_sub(1) {
        for edge in graph.edges() {
            let Some(from_distance) = distances[edge.from - 1] else {
                continue;
            };
            let candidate = from_distance + edge.weight;
            if distances[edge.to - 1].map_or(true, |d| candidate < d) {
                distances[edge.to - 1] = Some(candidate);
                predecessors[edge.to - 1] = Some(edge.from - 1);
            }
        }
    }

    let negative_cycle = graph.edges().iter().any(|edge| {
        distances[edge.from - 1].map_or(false, |from_distance| {
            let candidate = from_distance + edge.weight;
            distances[edge.to - 1].map_or(true, |d| candidate < d)
        })
    });

    if negative_cycle {
        warn!(start, "negative-weight cycle detected; distances may be unreliable");
    }

    Ok(BellmanFordRun {
        tree: ShortestPathTree {
            start,
            distances,
            predecessors,
        },
        negative_cycle,
    })
}

/// Consecutive `(from, to)` pairs along a route, for edge highlighting.
pub fn path_edges(nodes: &[NodeId]) -> Vec<(NodeId, NodeId)> {
    nodes.windows(2).map(|pair| (pair[0], pair[1])).collect()
}
