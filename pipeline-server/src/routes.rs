//! Route handlers.

use axum::extract::rejection::JsonRejection;
use axum::Json;

use pipeline_core::{validate_dag, Verdict};

use crate::error::ApiError;
use crate::wire::{Ping, PipelineRequest};

/// `GET /`
pub async fn ping() -> Json<Ping> {
    Json(Ping::pong())
}

/// `POST /pipelines/parse`
///
/// The extractor result is taken as-is so malformed bodies are answered
/// with the same error shape as malformed graphs.
pub async fn parse_pipeline(
    payload: Result<Json<PipelineRequest>, JsonRejection>,
) -> Result<Json<Verdict>, ApiError> {
    let Json(request) = payload?;
    let verdict = validate_dag(&request.nodes, &request.edges)?;
    tracing::info!(
        nodes = verdict.num_nodes,
        edges = verdict.num_edges,
        is_dag = verdict.is_dag,
        "pipeline parsed"
    );
    Ok(Json(verdict))
}
