//! The basis-state graph.
//!
//! Vertices are the 2^n basis states of an n-qubit register; two states are
//! adjacent when their labels differ in exactly one bit. The result is the
//! n-dimensional hypercube with `n * 2^(n-1)` edges, each carrying its
//! Hamming distance (always 1) as an explicit weight.
//!
//! The graph is rebuilt for every estimate and discarded afterwards.
//! Construction scans every unordered pair of vertices, which is O(4^n) and
//! only suitable for small registers.

use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;

use crate::probability::ProbabilityVector;

/// Hamming distance between two basis-state labels.
pub fn hamming_distance(a: usize, b: usize) -> u32 {
    (a ^ b).count_ones()
}

/// Undirected graph over basis states, edges weighted by Hamming distance.
#[derive(Debug, Clone)]
pub struct StateGraph {
    graph: UnGraph<usize, f64>,
    n_qubits: usize,
}

impl StateGraph {
    /// Build the hypercube over `2^n_qubits` basis states.
    ///
    /// Node `i` in the underlying graph is basis state `i`.
    pub fn hypercube(n_qubits: usize) -> Self {
        let n_states = 1usize << n_qubits;
        let n_edges = n_qubits * n_states / 2;
        let mut graph = UnGraph::with_capacity(n_states, n_edges);

        for state in 0..n_states {
            graph.add_node(state);
        }

        for i in 0..n_states {
            for j in (i + 1)..n_states {
                let distance = hamming_distance(i, j);
                if distance == 1 {
                    graph.add_edge(NodeIndex::new(i), NodeIndex::new(j), f64::from(distance));
                }
            }
        }

        Self { graph, n_qubits }
    }

    /// Build the hypercube matching the dimension of `probs`.
    pub fn for_vector(probs: &ProbabilityVector) -> Self {
        Self::hypercube(probs.n_qubits())
    }

    /// Number of qubits the graph was built for.
    pub fn n_qubits(&self) -> usize {
        self.n_qubits
    }

    /// Number of vertices (basis states).
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Iterate over edges as `(u, v, weight)` with `u < v`.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.graph.edge_references().map(|e| {
            let a = self.graph[e.source()];
            let b = self.graph[e.target()];
            (a.min(b), a.max(b), *e.weight())
        })
    }

    /// Whether basis states `a` and `b` share an edge.
    pub fn contains_edge(&self, a: usize, b: usize) -> bool {
        let n = self.graph.node_count();
        a < n && b < n && self.graph.contains_edge(NodeIndex::new(a), NodeIndex::new(b))
    }

    /// Degree of basis state `state`, or `None` if it is not in the graph.
    pub fn degree(&self, state: usize) -> Option<usize> {
        (state < self.graph.node_count())
            .then(|| self.graph.neighbors(NodeIndex::new(state)).count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hamming_distance() {
        assert_eq!(hamming_distance(0b000, 0b000), 0);
        assert_eq!(hamming_distance(0b000, 0b100), 1);
        assert_eq!(hamming_distance(0b101, 0b010), 3);
    }

    #[test]
    fn test_zero_qubits_has_no_edges() {
        let g = StateGraph::hypercube(0);
        assert_eq!(g.node_count(), 1);
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn test_square() {
        let g = StateGraph::hypercube(2);
        assert_eq!(g.node_count(), 4);
        assert_eq!(g.edge_count(), 4);
        assert!(g.contains_edge(0, 1));
        assert!(g.contains_edge(0, 2));
        assert!(!g.contains_edge(0, 3));
        assert!(!g.contains_edge(1, 2));
    }

    #[test]
    fn test_edges_are_ordered_with_unit_weight() {
        let g = StateGraph::hypercube(3);
        for (u, v, w) in g.edges() {
            assert!(u < v);
            assert_eq!(hamming_distance(u, v), 1);
            assert_eq!(w, 1.0);
        }
    }

    #[test]
    fn test_degree_is_n() {
        let g = StateGraph::hypercube(4);
        for state in 0..16 {
            assert_eq!(g.degree(state), Some(4));
        }
        assert_eq!(g.degree(16), None);
    }
}
