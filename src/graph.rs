use std::collections::HashSet;

use rand::Rng;
use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};

/// Nodes are numbered 1..=n. Layout is a presentation concern and is not
/// modeled here.
pub type NodeId = usize;

/// A directed weighted edge between two node ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    pub weight: i64,
}

/// Shape of the generated edge set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Topology {
    /// Every connection is mirrored with the same weight.
    Undirected,
    /// Arcs are independent; a reverse arc, when present, carries its own
    /// weight. Weights may be negative.
    Directed,
}

/// A weighted graph as an explicit edge list over `1..=n` node ids.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Graph {
    n: usize,
    topology: Topology,
    edges: Vec<Edge>,
}

impl Graph {
    pub fn new(n: usize, topology: Topology) -> Self {
        Self {
            n,
            topology,
            edges: Vec::new(),
        }
    }

    pub fn add_edge(&mut self, from: NodeId, to: NodeId, weight: i64) {
        debug_assert!(from >= 1 && from <= self.n && to >= 1 && to <= self.n);
        self.edges.push(Edge { from, to, weight });
    }

    pub fn node_count(&self) -> usize {
        self.n
    }

    pub fn topology(&self) -> Topology {
        self.topology
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Generate a random graph with weights in `[min_weight, max_weight]`.
    ///
    /// A spanning chain `i -> i+1` is laid down first so no node is
    /// isolated, then random connections are added until the topology's
    /// target edge count is reached: `n*(n-1)/4` list entries for
    /// undirected graphs, `n*(n-1)/2` for directed ones. Self-loops and
    /// already-connected pairs are skipped. Directed generation adds a
    /// reverse arc with an independent weight at probability 0.7.
    pub fn random<R: Rng>(
        n: usize,
        min_weight: i64,
        max_weight: i64,
        topology: Topology,
        rng: &mut R,
    ) -> Result<Self> {
        if n < 1 {
            return Err(Error::EmptyGraph);
        }
        if min_weight > max_weight {
            return Err(Error::InvalidWeightRange {
                min: min_weight,
                max: max_weight,
            });
        }

        let mut graph = Graph::new(n, topology);
        match topology {
            Topology::Undirected => graph.fill_undirected(min_weight, max_weight, rng),
            Topology::Directed => graph.fill_directed(min_weight, max_weight, rng),
        }

        debug!(
            nodes = n,
            edges = graph.edges.len(),
            ?topology,
            "generated random graph"
        );
        Ok(graph)
    }

    fn fill_undirected<R: Rng>(&mut self, min_weight: i64, max_weight: i64, rng: &mut R) {
        // Pairs are stored normalized so either direction counts as taken.
        let mut pairs: HashSet<(NodeId, NodeId)> = HashSet::new();

        for from in 1..self.n {
            self.add_edge(from, from + 1, rng.gen_range(min_weight..=max_weight));
            pairs.insert((from, from + 1));
        }

        let target = self.n * (self.n - 1) / 4;
        while self.edges.len() < target {
            let a = rng.gen_range(1..=self.n);
            let b = rng.gen_range(1..=self.n);
            if a == b || !pairs.insert((a.min(b), a.max(b))) {
                continue;
            }
            let weight = rng.gen_range(min_weight..=max_weight);
            self.add_edge(a, b, weight);
            self.add_edge(b, a, weight);
        }
    }

    fn fill_directed<R: Rng>(&mut self, min_weight: i64, max_weight: i64, rng: &mut R) {
        let mut arcs: HashSet<(NodeId, NodeId)> = HashSet::new();

        for from in 1..self.n {
            self.add_edge(from, from + 1, rng.gen_range(min_weight..=max_weight));
            arcs.insert((from, from + 1));
        }

        let target = self.n * (self.n - 1) / 2;
        while self.edges.len() < target {
            let a = rng.gen_range(1..=self.n);
            let b = rng.gen_range(1..=self.n);
            if a == b || !arcs.insert((a, b)) {
                continue;
            }
            self.add_edge(a, b, rng.gen_range(min_weight..=max_weight));

            if rng.gen_bool(0.7) && arcs.insert((b, a)) {
                self.add_edge(b, a, rng.gen_range(min_weight..=max_weight));
            }
        }
    }

    /// Derive the n-by-n cost matrix: `None` where no direct edge exists,
    /// `Some(0)` on the diagonal. Undirected graphs fill both cells per
    /// edge; directed graphs fill only `from -> to`.
    pub fn adjacency_matrix(&self) -> AdjacencyMatrix {
        let mut cells = vec![vec![None; self.n]; self.n];
        for i in 0..self.n {
            cells[i][i] = Some(0);
        }
        for edge in &self.edges {
            cells[edge.from - 1][edge.to - 1] = Some(edge.weight);
            if self.topology == Topology::Undirected {
                cells[edge.to - 1][edge.from - 1] = Some(edge.weight);
            }
        }
        AdjacencyMatrix { cells }
    }
}

/// Dense cost matrix with a typed "no edge" sentinel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdjacencyMatrix {
    cells: Vec<Vec<Option<i64>>>,
}

impl AdjacencyMatrix {
    pub fn node_count(&self) -> usize {
        self.cells.len()
    }

    /// Direct edge cost between two 1-based node ids, if any.
    pub fn cost(&self, from: NodeId, to: NodeId) -> Option<i64> {
        self.cells
            .get(from.wrapping_sub(1))
            .and_then(|row| row.get(to.wrapping_sub(1)))
            .copied()
            .flatten()
    }

    pub fn rows(&self) -> &[Vec<Option<i64>>] {
        &self.cells
    }
}

/// Reject node ids outside `1..=count` before any computation runs.
pub(crate) fn ensure_node(node: NodeId, count: usize) -> Result<()> {
    if node >= 1 && node <= count {
        Ok(())
    } else {
        Err(Error::NodeOutOfRange { node, count })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    #[test]
    fn rejects_empty_and_inverted_ranges() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);
        assert_eq!(
            Graph::random(0, 1, 5, Topology::Undirected, &mut rng),
            Err(Error::EmptyGraph)
        );
        assert_eq!(
            Graph::random(4, 9, 5, Topology::Directed, &mut rng),
            Err(Error::InvalidWeightRange { min: 9, max: 5 })
        );
    }

    #[test]
    fn equal_weight_bounds_are_allowed() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(2);
        let graph = Graph::random(5, 3, 3, Topology::Undirected, &mut rng).unwrap();
        assert!(graph.edges().iter().all(|e| e.weight == 3));
    }

    #[test]
    fn chain_keeps_every_node_connected() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(3);
        for topology in [Topology::Undirected, Topology::Directed] {
            let graph = Graph::random(8, 1, 10, topology, &mut rng).unwrap();
            for from in 1..8 {
                assert!(
                    graph
                        .edges()
                        .iter()
                        .any(|e| e.from == from && e.to == from + 1),
                    "missing chain edge {from} -> {} for {topology:?}",
                    from + 1
                );
            }
        }
    }

    #[test]
    fn undirected_generation_reaches_target_without_duplicates() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(4);
        let n = 10;
        let graph = Graph::random(n, 1, 9, Topology::Undirected, &mut rng).unwrap();
        assert!(graph.edges().len() >= n * (n - 1) / 4);

        let mut seen = HashSet::new();
        for edge in graph.edges() {
            assert_ne!(edge.from, edge.to, "self-loop generated");
            assert!(seen.insert((edge.from, edge.to)), "duplicate arc generated");
        }
    }

    #[test]
    fn undirected_matrix_is_symmetric_with_zero_diagonal() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(5);
        let graph = Graph::random(6, 1, 9, Topology::Undirected, &mut rng).unwrap();
        let matrix = graph.adjacency_matrix();
        for i in 1..=6 {
            assert_eq!(matrix.cost(i, i), Some(0));
            for j in 1..=6 {
                assert_eq!(matrix.cost(i, j), matrix.cost(j, i));
            }
        }
    }

    #[test]
    fn directed_matrix_keeps_arcs_one_way() {
        let mut graph = Graph::new(3, Topology::Directed);
        graph.add_edge(1, 2, 4);
        graph.add_edge(2, 1, -7);
        graph.add_edge(2, 3, 1);
        let matrix = graph.adjacency_matrix();

        assert_eq!(matrix.cost(1, 2), Some(4));
        assert_eq!(matrix.cost(2, 1), Some(-7));
        assert_eq!(matrix.cost(2, 3), Some(1));
        assert_eq!(matrix.cost(3, 2), None);
        assert_eq!(matrix.cost(1, 3), None);
    }

    #[test]
    fn matrix_cost_handles_out_of_range_ids() {
        let graph = Graph::new(2, Topology::Undirected);
        let matrix = graph.adjacency_matrix();
        assert_eq!(matrix.cost(0, 1), None);
        assert_eq!(matrix.cost(1, 3), None);
    }

    #[test]
    fn single_node_graph_generates_nothing() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(6);
        let graph = Graph::random(1, 1, 5, Topology::Directed, &mut rng).unwrap();
        assert!(graph.edges().is_empty());
        assert_eq!(graph.adjacency_matrix().cost(1, 1), Some(0));
    }
}
