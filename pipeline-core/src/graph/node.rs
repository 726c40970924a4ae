//! Graph Nodes
//!
//! This module maps node identifiers to dense indices and defines what
//! counts as an edge.

use indexmap::IndexSet;

use crate::error::GraphError;

/// Anything that names a directed edge by its two endpoint identifiers.
pub trait Endpoints {
    /// Identifier of the node the edge leaves.
    fn source(&self) -> &str;

    /// Identifier of the node the edge enters.
    fn target(&self) -> &str;
}

impl<S: AsRef<str>> Endpoints for (S, S) {
    fn source(&self) -> &str {
        self.0.as_ref()
    }

    fn target(&self) -> &str {
        self.1.as_ref()
    }
}

impl<S: AsRef<str>> Endpoints for [S; 2] {
    fn source(&self) -> &str {
        self[0].as_ref()
    }

    fn target(&self) -> &str {
        self[1].as_ref()
    }
}

/// Lookup from node identifier to its position in the input.
///
/// Index `i` is always the `i`-th identifier of the node list, since
/// duplicates are refused at construction.
#[derive(Debug, Clone, Default)]
pub struct NodeIndex<'a> {
    ids: IndexSet<&'a str>,
}

impl<'a> NodeIndex<'a> {
    /// Index the given identifiers in order.
    pub fn build<N: AsRef<str>>(nodes: &'a [N]) -> Result<Self, GraphError> {
        let mut ids = IndexSet::with_capacity(nodes.len());

        for (position, node) in nodes.iter().enumerate() {
            let id = node.as_ref();
            let (first, inserted) = ids.insert_full(id);
            if !inserted {
                return Err(GraphError::DuplicateNode {
                    id: id.to_string(),
                    first,
                    second: position,
                });
            }
        }

        Ok(Self { ids })
    }

    /// Get the index of an identifier, if it is known.
    pub fn lookup(&self, id: &str) -> Option<usize> {
        self.ids.get_index_of(id)
    }

    /// Resolve an endpoint of the edge at `edge`, failing on unknown ids.
    pub fn resolve(&self, id: &str, edge: usize) -> Result<usize, GraphError> {
        self.lookup(id).ok_or_else(|| GraphError::UnknownNode {
            id: id.to_string(),
            edge,
        })
    }

    /// Get the identifier stored at `index`.
    pub fn id(&self, index: usize) -> Option<&'a str> {
        self.ids.get_index(index).copied()
    }

    /// Number of indexed nodes.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
