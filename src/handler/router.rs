//! Request routing dispatch module
//!
//! Entry point for HTTP request processing. Routes are evaluated in a fixed
//! priority order: CORS preflight first, then the reserved API prefix, then
//! the static file fallback.

use crate::config::AppState;
use crate::handler::static_files;
use crate::http::response;
use crate::logger::{self, AccessLogEntry};
use crate::proxy;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response, Version};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

/// Routing outcome for one request, decided from method and path alone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// CORS preflight, answered immediately with an empty 200
    Preflight,
    /// The locally answered default-model endpoint
    DefaultModel,
    /// Any other reserved-prefix request, forwarded to the backend
    Forward,
    /// Static file lookup under the configured root
    StaticFile,
    /// POST outside the reserved prefix
    EndpointNotFound,
    /// Any other method outside the reserved prefix
    MethodNotAllowed,
}

/// Decide how a request will be handled, before any I/O happens
pub fn classify(method: &Method, path: &str) -> RouteDecision {
    if *method == Method::OPTIONS {
        return RouteDecision::Preflight;
    }

    if path.starts_with(proxy::API_PREFIX) {
        if *method == Method::GET && path == proxy::DEFAULT_MODEL_PATH {
            return RouteDecision::DefaultModel;
        }
        return RouteDecision::Forward;
    }

    if *method == Method::GET || *method == Method::HEAD {
        RouteDecision::StaticFile
    } else if *method == Method::POST {
        RouteDecision::EndpointNotFound
    } else {
        RouteDecision::MethodNotAllowed
    }
}

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let logged_path = req
        .uri()
        .path_and_query()
        .map_or_else(|| path.clone(), |pq| pq.as_str().to_string());
    let version = req.version();

    let response = match classify(&method, &path) {
        RouteDecision::Preflight => response::build_options_response(),
        RouteDecision::DefaultModel | RouteDecision::Forward => {
            proxy::handle_api_request(req, Arc::clone(&state)).await
        }
        RouteDecision::StaticFile => {
            static_files::serve(&state, &path, method == Method::HEAD).await
        }
        RouteDecision::EndpointNotFound => response::build_endpoint_not_found(),
        RouteDecision::MethodNotAllowed => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            response::build_405_response()
        }
    };

    if state.access_log_enabled() {
        let mut entry = AccessLogEntry::new(peer_addr.to_string(), method.to_string(), logged_path);
        entry.protocol = version_label(version).to_string();
        entry.status = response.status().as_u16();
        logger::log_access(&entry);
    }

    Ok(response)
}

fn version_label(version: Version) -> &'static str {
    if version == Version::HTTP_10 {
        "1.0"
    } else if version == Version::HTTP_2 {
        "2"
    } else {
        "1.1"
    }
}
