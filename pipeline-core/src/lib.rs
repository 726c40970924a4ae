//! Pipeline Core
//!
//! This crate decides whether a pipeline graph is a directed acyclic graph.
//! It implements:
//!
//! - Node indexing and edge resolution
//! - Kahn's algorithm over an in-degree table
//! - A structured verdict (node count, edge count, acyclic flag)
//!
//! The crate knows nothing about HTTP or JSON. Callers hand it node
//! identifiers and edges, and get back either a [`Verdict`] or a
//! [`GraphError`] describing why the input could not be evaluated.
//!
//! # Architecture
//!
//! - `graph`: graph construction, topological ordering, verdicts
//! - `error`: the error type for malformed input
//!
//! # Example
//!
//! ```rust
//! use pipeline_core::validate_dag;
//!
//! let nodes = ["input-1", "llm-2", "output-3"];
//! let edges = [("input-1", "llm-2"), ("llm-2", "output-3")];
//!
//! let verdict = validate_dag(&nodes, &edges).unwrap();
//! assert!(verdict.is_dag);
//! assert_eq!(verdict.num_nodes, 3);
//! assert_eq!(verdict.num_edges, 2);
//! ```

pub mod error;
pub mod graph;

pub use error::GraphError;
pub use graph::{validate_dag, Endpoints, Graph, Verdict};
