//! Graph construction errors.

use thiserror::Error;

/// Input that cannot be turned into a graph.
///
/// Both variants are caller mistakes, never cycles. A cyclic graph is a
/// valid input that produces a negative [`Verdict`](crate::Verdict).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// An edge names an identifier missing from the node list.
    #[error("edge {edge} references unknown node '{id}'")]
    UnknownNode {
        /// The unresolved identifier.
        id: String,
        /// Position of the offending edge in the input.
        edge: usize,
    },

    /// The same identifier appears twice in the node list.
    #[error("duplicate node '{id}' at positions {first} and {second}")]
    DuplicateNode {
        id: String,
        first: usize,
        second: usize,
    },
}

impl GraphError {
    /// Stable machine-readable code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            GraphError::UnknownNode { .. } => "unknown_node",
            GraphError::DuplicateNode { .. } => "duplicate_node",
        }
    }
}
