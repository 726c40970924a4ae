//! Server configuration.
//!
//! Every setting can come from a command-line flag or an environment
//! variable, in that order of precedence. The binary also loads a `.env`
//! file from the working directory before parsing.

use std::net::{Ipv4Addr, SocketAddr};

use axum::http::HeaderValue;
use clap::Parser;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use crate::error::ConfigError;

pub const DEFAULT_BIND: &str = "127.0.0.1:8000";
pub const DEFAULT_ORIGIN: &str = "http://localhost:5173";
pub const DEFAULT_BODY_LIMIT: usize = 2 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "pipeline-server")]
#[command(about = "Checks pipeline graphs for cycles over HTTP")]
#[command(version)]
pub struct ServerConfig {
    /// Address to listen on
    #[arg(long, env = "PIPELINE_BIND", default_value = DEFAULT_BIND)]
    pub bind: SocketAddr,

    /// Origin allowed to make cross-origin requests (repeatable, or comma-separated)
    #[arg(
        long = "allow-origin",
        env = "PIPELINE_ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = DEFAULT_ORIGIN
    )]
    pub allowed_origins: Vec<String>,

    /// Maximum request body size in bytes
    #[arg(long, env = "PIPELINE_BODY_LIMIT", default_value_t = DEFAULT_BODY_LIMIT)]
    pub body_limit: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from((Ipv4Addr::LOCALHOST, 8000)),
            allowed_origins: vec![DEFAULT_ORIGIN.to_string()],
            body_limit: DEFAULT_BODY_LIMIT,
        }
    }
}

impl ServerConfig {
    /// Build the CORS policy: listed origins only, any method and header
    /// from them, credentials allowed.
    ///
    /// Methods and headers are mirrored from the preflight request, since
    /// a literal `*` is not honored by browsers once credentials are on.
    pub fn cors_layer(&self) -> Result<CorsLayer, ConfigError> {
        let origins = self
            .allowed_origins
            .iter()
            .map(|origin| origin.trim())
            .filter(|origin| !origin.is_empty())
            .map(parse_origin)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(AllowMethods::mirror_request())
            .allow_headers(AllowHeaders::mirror_request())
            .allow_credentials(true))
    }
}

fn parse_origin(origin: &str) -> Result<HeaderValue, ConfigError> {
    // Browsers never send a trailing slash in Origin.
    let origin = origin.trim_end_matches('/');
    if origin == "*" {
        return Err(ConfigError::WildcardOrigin);
    }
    HeaderValue::from_str(origin).map_err(|_| ConfigError::InvalidOrigin(origin.to_string()))
}
