//! Error types for the HTTP boundary.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use pipeline_core::GraphError;

/// A request that could not be answered with a verdict.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The body parsed, but does not describe a graph.
    #[error(transparent)]
    Graph(#[from] GraphError),

    /// The body is not a well-formed pipeline request.
    #[error(transparent)]
    Body(#[from] JsonRejection),
}

/// JSON body sent back for every [`ApiError`].
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub detail: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Graph(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Body(rejection) => rejection.status(),
        }
    }

    pub fn body(&self) -> ErrorBody {
        match self {
            ApiError::Graph(err) => ErrorBody {
                error: err.code(),
                detail: err.to_string(),
            },
            ApiError::Body(rejection) => ErrorBody {
                error: "invalid_request",
                detail: rejection.body_text(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::warn!(%status, error = %self, "rejected pipeline request");
        (status, Json(self.body())).into_response()
    }
}

/// Invalid server configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid allowed origin '{0}'")]
    InvalidOrigin(String),

    /// Credentials are allowed, so origins must be listed explicitly.
    #[error("wildcard origin '*' cannot be combined with credentials")]
    WildcardOrigin,
}

/// Fatal error while starting or running the server.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn graph_errors_are_unprocessable() {
        let err = ApiError::from(GraphError::UnknownNode {
            id: "Z".to_string(),
            edge: 3,
        });

        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = err.body();
        assert_eq!(body.error, "unknown_node");
        assert_eq!(body.detail, "edge 3 references unknown node 'Z'");
    }

    #[test]
    fn duplicate_node_code() {
        let err = ApiError::from(GraphError::DuplicateNode {
            id: "A".to_string(),
            first: 0,
            second: 1,
        });
        assert_eq!(err.body().error, "duplicate_node");
    }
}
