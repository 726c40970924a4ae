//! DAG Validator
//!
//! Decides whether a graph is acyclic by attempting a topological sort.
//!
//! # Algorithm
//!
//! Kahn's algorithm over an in-degree table:
//!
//! 1. Index every node by its position in the input
//! 2. For each edge (u, v), record v as a successor of u and bump v's in-degree
//! 3. Seed a FIFO queue, and the output ordering, with every node of
//!    in-degree zero, in input order
//! 4. Pop a node; decrement each successor's in-degree, and when one hits
//!    zero append it to the ordering and enqueue it
//! 5. The graph is a DAG iff the ordering ends up holding every node
//!
//! Runs in O(V + E) time and space. The ordering depends only on input order,
//! so repeated calls on the same input agree exactly.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::node::{Endpoints, NodeIndex};
use crate::error::GraphError;

/// Outcome of validating one graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Verdict {
    /// Number of nodes in the graph.
    pub num_nodes: usize,
    /// Number of edges in the graph, parallel edges included.
    pub num_edges: usize,
    /// Whether the graph has no directed cycle.
    pub is_dag: bool,
}

/// An indexed directed graph, built for a single validation.
#[derive(Debug, Clone)]
pub struct Graph<'a> {
    index: NodeIndex<'a>,

    /// Outgoing edges per node. Most pipeline nodes fan out to a handful
    /// of successors, so these rarely spill to the heap.
    successors: Vec<SmallVec<[usize; 4]>>,

    /// Incoming edge count per node.
    in_degree: Vec<usize>,

    edge_count: usize,
}

impl<'a> Graph<'a> {
    /// Build the adjacency list and in-degree table.
    ///
    /// Fails if a node identifier repeats or an edge names an unknown node.
    pub fn build<N, E>(nodes: &'a [N], edges: &[E]) -> Result<Self, GraphError>
    where
        N: AsRef<str>,
        E: Endpoints,
    {
        let index = NodeIndex::build(nodes)?;
        let mut successors = vec![SmallVec::new(); index.len()];
        let mut in_degree = vec![0; index.len()];

        for (position, edge) in edges.iter().enumerate() {
            let from = index.resolve(edge.source(), position)?;
            let to = index.resolve(edge.target(), position)?;
            successors[from].push(to);
            in_degree[to] += 1;
        }

        Ok(Self {
            index,
            successors,
            in_degree,
            edge_count: edges.len(),
        })
    }

    /// Total number of nodes.
    pub fn node_count(&self) -> usize {
        self.index.len()
    }

    /// Total number of edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Get the identifier of the node at `index`.
    pub fn node_id(&self, index: usize) -> Option<&'a str> {
        self.index.id(index)
    }

    /// Run Kahn's algorithm and return the node indices it could order.
    ///
    /// The result is shorter than [`node_count`](Self::node_count) exactly
    /// when the graph has a cycle.
    pub fn kahn_order(&self) -> Vec<usize> {
        let mut in_degree = self.in_degree.clone();
        let mut order = Vec::with_capacity(self.node_count());
        let mut queue = VecDeque::new();

        for (node, &degree) in in_degree.iter().enumerate() {
            if degree == 0 {
                order.push(node);
                queue.push_back(node);
            }
        }

        while let Some(node) = queue.pop_front() {
            for &child in &self.successors[node] {
                in_degree[child] -= 1;
                if in_degree[child] == 0 {
                    order.push(child);
                    queue.push_back(child);
                }
            }
        }

        order
    }

    /// Topological ordering as identifiers, or `None` if there is a cycle.
    pub fn topological_order(&self) -> Option<Vec<&'a str>> {
        let order = self.kahn_order();
        if order.len() != self.node_count() {
            return None;
        }
        order.into_iter().map(|node| self.index.id(node)).collect()
    }

    /// Check whether the graph has no directed cycle.
    pub fn is_acyclic(&self) -> bool {
        self.kahn_order().len() == self.node_count()
    }

    pub fn verdict(&self) -> Verdict {
        Verdict {
            num_nodes: self.node_count(),
            num_edges: self.edge_count(),
            is_dag: self.is_acyclic(),
        }
    }
}

/// Validate that `nodes` and `edges` form a directed acyclic graph.
///
/// A cycle is not an error: it yields a verdict with `is_dag == false`.
/// Errors are reserved for input that does not describe a graph at all.
pub fn validate_dag<N, E>(nodes: &[N], edges: &[E]) -> Result<Verdict, GraphError>
where
    N: AsRef<str>,
    E: Endpoints,
{
    let verdict = Graph::build(nodes, edges)?.verdict();
    tracing::debug!(
        nodes = verdict.num_nodes,
        edges = verdict.num_edges,
        is_dag = verdict.is_dag,
        "validated graph"
    );
    Ok(verdict)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_counts_degrees() {
        let nodes = ["A", "B", "C"];
        let edges = [("A", "B"), ("A", "C"), ("B", "C")];
        let graph = Graph::build(&nodes, &edges).unwrap();

        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.in_degree, vec![0, 1, 2]);
        assert_eq!(graph.successors[0].as_slice(), &[1, 2]);
        assert_eq!(graph.successors[1].as_slice(), &[2]);
        assert!(graph.successors[2].is_empty());
    }

    #[test]
    fn roots_seed_ordering_in_input_order() {
        // Two roots, listed after their children.
        let nodes = ["x", "y", "r1", "r2"];
        let edges = [("r1", "x"), ("r2", "y")];
        let graph = Graph::build(&nodes, &edges).unwrap();

        assert_eq!(graph.kahn_order(), vec![2, 3, 0, 1]);
        assert_eq!(
            graph.topological_order(),
            Some(vec!["r1", "r2", "x", "y"])
        );
    }

    #[test]
    fn kahn_order_is_partial_on_cycle() {
        // A -> B -> C -> B: only A can be removed.
        let nodes = ["A", "B", "C"];
        let edges = [("A", "B"), ("B", "C"), ("C", "B")];
        let graph = Graph::build(&nodes, &edges).unwrap();

        assert_eq!(graph.kahn_order(), vec![0]);
        assert_eq!(graph.topological_order(), None);
        assert!(!graph.is_acyclic());
    }

    #[test]
    fn parallel_edges_are_counted_twice() {
        let nodes = ["A", "B"];
        let edges = [("A", "B"), ("A", "B")];
        let graph = Graph::build(&nodes, &edges).unwrap();

        assert_eq!(graph.in_degree, vec![0, 2]);
        assert_eq!(
            graph.verdict(),
            Verdict {
                num_nodes: 2,
                num_edges: 2,
                is_dag: true,
            }
        );
    }

    #[test]
    fn kahn_order_leaves_graph_untouched() {
        let nodes = ["A", "B"];
        let edges = [("A", "B")];
        let graph = Graph::build(&nodes, &edges).unwrap();

        assert_eq!(graph.kahn_order(), graph.kahn_order());
        assert_eq!(graph.in_degree, vec![0, 1]);
    }

    #[test]
    fn unknown_source_is_reported() {
        let nodes = ["A"];
        let edges = [("Q", "A")];
        let err = Graph::build(&nodes, &edges).unwrap_err();

        assert_eq!(
            err,
            GraphError::UnknownNode {
                id: "Q".to_string(),
                edge: 0,
            }
        );
    }

    #[test]
    fn node_id_lookup() {
        let nodes = vec!["text-1".to_string(), "llm-2".to_string()];
        let edges: [[&str; 2]; 0] = [];
        let graph = Graph::build(&nodes, &edges).unwrap();

        assert_eq!(graph.node_id(1), Some("llm-2"));
        assert_eq!(graph.node_id(2), None);
    }
}
