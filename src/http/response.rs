//! HTTP response building module
//!
//! Builders for every response shape this server produces. Each builder routes
//! through [`cors::apply_headers`], which is what upholds the invariant that
//! no response path omits the CORS and cache-control headers.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde::Serialize;

use super::cors;
use crate::logger;

/// Base builder with the standard header set already attached.
fn base() -> hyper::http::response::Builder {
    cors::apply_headers(Response::builder())
}

/// Build the preflight response: 200 with an empty body.
pub fn build_options_response() -> Response<Full<Bytes>> {
    base()
        .status(200)
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            log_build_error("OPTIONS", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 404 Not Found response for static file misses
pub fn build_404_response() -> Response<Full<Bytes>> {
    base()
        .status(404)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from("404 Not Found")))
        .unwrap_or_else(|e| {
            log_build_error("404", &e);
            Response::new(Full::new(Bytes::from("404 Not Found")))
        })
}

/// Build 405 Method Not Allowed response
pub fn build_405_response() -> Response<Full<Bytes>> {
    base()
        .status(405)
        .header("Content-Type", "text/plain")
        .header("Allow", "GET, HEAD, POST, OPTIONS")
        .body(Full::new(Bytes::from("405 Method Not Allowed")))
        .unwrap_or_else(|e| {
            log_build_error("405", &e);
            Response::new(Full::new(Bytes::from("405 Method Not Allowed")))
        })
}

/// Build the 404 JSON error returned for POST requests outside the API prefix.
pub fn build_endpoint_not_found() -> Response<Full<Bytes>> {
    build_error_response(StatusCode::NOT_FOUND, "Endpoint not found")
}

/// Build a JSON error body of the form `{"error": <message>}`.
pub fn build_error_response(status: StatusCode, message: &str) -> Response<Full<Bytes>> {
    let body = serde_json::json!({ "error": message });
    base()
        .status(status)
        .header("Content-Type", "application/json")
        .body(Full::new(Bytes::from(body.to_string())))
        .unwrap_or_else(|e| {
            log_build_error("error", &e);
            Response::new(Full::new(Bytes::from(r#"{"error":"Internal server error"}"#)))
        })
}

/// Build a JSON response from any serializable value.
pub fn build_json_response<T: Serialize>(status: StatusCode, body: &T) -> Response<Full<Bytes>> {
    let json = match serde_json::to_string(body) {
        Ok(j) => j,
        Err(e) => {
            logger::log_error(&format!("Failed to serialize response: {e}"));
            return build_error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error",
            );
        }
    };

    base()
        .status(status)
        .header("Content-Type", "application/json")
        .body(Full::new(Bytes::from(json)))
        .unwrap_or_else(|e| {
            log_build_error("JSON", &e);
            Response::new(Full::new(Bytes::from(r#"{"error":"Internal server error"}"#)))
        })
}

/// Relay a backend reply: its status code and raw body bytes, declared JSON.
pub fn build_json_passthrough(status: StatusCode, body: Bytes) -> Response<Full<Bytes>> {
    base()
        .status(status)
        .header("Content-Type", "application/json")
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error("passthrough", &e);
            Response::new(Full::new(Bytes::from(r#"{"error":"Internal server error"}"#)))
        })
}

/// Build a static file response. HEAD requests get identical headers with an
/// empty body.
pub fn build_file_response(
    content: Vec<u8>,
    content_type: &'static str,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let content_length = content.len();
    let body = if is_head {
        Bytes::new()
    } else {
        Bytes::from(content)
    };

    base()
        .status(200)
        .header("Content-Type", content_type)
        .header("Content-Length", content_length)
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error("200", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Log response build error
fn log_build_error(kind: &str, error: &hyper::http::Error) {
    logger::log_error(&format!("Failed to build {kind} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    fn assert_standard_headers(response: &Response<Full<Bytes>>) {
        let headers = response.headers();
        assert_eq!(headers["Access-Control-Allow-Origin"], "*");
        assert_eq!(headers["Access-Control-Allow-Methods"], "GET, POST, OPTIONS");
        assert_eq!(headers["Access-Control-Allow-Headers"], "Content-Type");
        assert_eq!(
            headers["Cache-Control"],
            "no-store, no-cache, must-revalidate"
        );
    }

    #[test]
    fn test_every_builder_carries_standard_headers() {
        assert_standard_headers(&build_options_response());
        assert_standard_headers(&build_404_response());
        assert_standard_headers(&build_405_response());
        assert_standard_headers(&build_endpoint_not_found());
        assert_standard_headers(&build_error_response(StatusCode::BAD_GATEWAY, "down"));
        assert_standard_headers(&build_json_response(
            StatusCode::OK,
            &serde_json::json!({"model": "m"}),
        ));
        assert_standard_headers(&build_json_passthrough(
            StatusCode::OK,
            Bytes::from_static(b"{}"),
        ));
        assert_standard_headers(&build_file_response(b"hi".to_vec(), "text/plain", false));
    }

    #[tokio::test]
    async fn test_options_response_is_empty_200() {
        let response = build_options_response();
        assert_eq!(response.status(), 200);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_endpoint_not_found_body() {
        let response = build_endpoint_not_found();
        assert_eq!(response.status(), 404);
        assert_eq!(response.headers()["Content-Type"], "application/json");
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "Endpoint not found");
    }

    #[test]
    fn test_405_lists_allowed_methods() {
        let response = build_405_response();
        assert_eq!(response.status(), 405);
        assert_eq!(response.headers()["Allow"], "GET, HEAD, POST, OPTIONS");
    }

    #[tokio::test]
    async fn test_head_file_response_has_length_but_no_body() {
        let response = build_file_response(b"hello".to_vec(), "text/plain", true);
        assert_eq!(response.headers()["Content-Length"], "5");
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_passthrough_preserves_status_and_bytes() {
        let response =
            build_json_passthrough(StatusCode::IM_A_TEAPOT, Bytes::from_static(b"{\"ok\":true}"));
        assert_eq!(response.status(), 418);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"{\"ok\":true}");
    }
}
