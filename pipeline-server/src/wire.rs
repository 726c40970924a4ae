//! Request and response bodies.

use serde::{Deserialize, Serialize};

use pipeline_core::Endpoints;

/// Body of a pipeline validation request.
///
/// Missing fields default to empty lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineRequest {
    #[serde(default)]
    pub nodes: Vec<String>,
    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
}

/// One edge as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EdgeSpec {
    /// `["source", "target"]`
    Pair([String; 2]),
    /// `{"source": "...", "target": "..."}`, as a React Flow edge serializes.
    /// Other fields on the object are ignored.
    Link { source: String, target: String },
}

impl EdgeSpec {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        EdgeSpec::Pair([source.into(), target.into()])
    }
}

impl Endpoints for EdgeSpec {
    fn source(&self) -> &str {
        match self {
            EdgeSpec::Pair([source, _]) => source,
            EdgeSpec::Link { source, .. } => source,
        }
    }

    fn target(&self) -> &str {
        match self {
            EdgeSpec::Pair([_, target]) => target,
            EdgeSpec::Link { target, .. } => target,
        }
    }
}

/// Liveness response, `{"Ping": "Pong"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Ping {
    #[serde(rename = "Ping")]
    ping: &'static str,
}

impl Ping {
    pub fn pong() -> Self {
        Self { ping: "Pong" }
    }
}
