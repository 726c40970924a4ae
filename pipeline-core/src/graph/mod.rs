//! Pipeline Graph
//!
//! This module builds a directed graph from node identifiers and edges, and
//! decides whether it is acyclic.
//!
//! # Overview
//!
//! - Nodes are opaque string identifiers, indexed densely in input order
//! - Edges are (source, target) pairs: an edge from A to B means B runs after A
//!
//! A graph is a DAG iff Kahn's algorithm can remove every node. Nodes that
//! never reach in-degree zero sit on a cycle or downstream of one.
//!
//! # Design Decisions
//!
//! 1. Identifiers are resolved to `usize` indices once, up front, so the
//!    traversal works on plain vectors rather than string-keyed maps.
//!
//! 2. The graph borrows identifiers from the caller. Nothing is copied
//!    until an error needs to own the offending identifier.
//!
//! 3. Duplicate identifiers are rejected instead of aliased to one slot.

mod node;
mod validator;

pub use node::{Endpoints, NodeIndex};
pub use validator::{validate_dag, Graph, Verdict};
