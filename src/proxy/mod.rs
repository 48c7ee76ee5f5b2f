//! API proxy dispatcher module
//!
//! Requests under the reserved `/api/` prefix land here before the static
//! responder runs. Exactly one endpoint is answered locally — the
//! default-model query — and everything else is forwarded to the configured
//! backend. Each request is handled in isolation; a backend failure is turned
//! into a JSON error response and never touches the listener.

pub mod client;

pub use client::{BackendClient, BackendError, BackendReply};

use http_body_util::{BodyExt, Full};
use hyper::body::Bytes;
use hyper::{Method, Request, Response, StatusCode};
use std::sync::Arc;

use crate::config::AppState;
use crate::http::response;

/// Path prefix that triggers proxy handling instead of static file serving
pub const API_PREFIX: &str = "/api/";

/// The one reserved-prefix path answered without contacting the backend
pub const DEFAULT_MODEL_PATH: &str = "/api/default-model";

/// Entry point for reserved-prefix requests: reads the body, then dispatches
pub async fn handle_api_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
) -> Response<Full<Bytes>> {
    let method = req.method().clone();
    let path_and_query = req
        .uri()
        .path_and_query()
        .map_or_else(|| req.uri().path().to_string(), |pq| pq.as_str().to_string());

    let body = match req.into_body().collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(e) => {
            return response::build_error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                &format!("Failed to read request body: {e}"),
            )
        }
    };

    dispatch(&method, &path_and_query, body, &state).await
}

/// Dispatch one API request.
///
/// `GET /api/default-model` is answered from the selected-model cell; any
/// other method or path under the prefix is forwarded verbatim. Connect-level
/// failures map to 502, everything else to 500, both as `{"error": ...}`
/// bodies.
pub async fn dispatch(
    method: &Method,
    path_and_query: &str,
    body: Bytes,
    state: &AppState,
) -> Response<Full<Bytes>> {
    let path = path_and_query
        .split('?')
        .next()
        .unwrap_or(path_and_query);

    if *method == Method::GET && path == DEFAULT_MODEL_PATH {
        let model = state.selected_model().await;
        return response::build_json_response(
            StatusCode::OK,
            &serde_json::json!({ "model": model }),
        );
    }

    let backend = BackendClient::new(
        state.http_client.clone(),
        state.config.backend.base_url.as_str(),
    );

    match backend.forward(method.clone(), path_and_query, body).await {
        Ok(reply) => response::build_json_passthrough(reply.status, reply.body),
        Err(err @ BackendError::Unreachable(_)) => {
            response::build_error_response(StatusCode::BAD_GATEWAY, &err.to_string())
        }
        Err(err) => {
            response::build_error_response(StatusCode::INTERNAL_SERVER_ERROR, &err.to_string())
        }
    }
}
