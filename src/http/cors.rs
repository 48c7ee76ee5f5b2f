//! CORS and cache-control header policy.
//!
//! Every response leaving the server — static, proxied, or error — carries the
//! same cross-origin and no-cache header set, so a browser app served from any
//! origin can talk to this server and never sees stale content.

use hyper::http::response::Builder;

pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_METHODS: &str = "GET, POST, OPTIONS";
pub const ALLOW_HEADERS: &str = "Content-Type";
pub const CACHE_CONTROL: &str = "no-store, no-cache, must-revalidate";

/// Attach the standard header set to a response builder.
///
/// All response builders in this crate go through here; no response path may
/// skip it.
pub fn apply_headers(builder: Builder) -> Builder {
    builder
        .header("Access-Control-Allow-Origin", ALLOW_ORIGIN)
        .header("Access-Control-Allow-Methods", ALLOW_METHODS)
        .header("Access-Control-Allow-Headers", ALLOW_HEADERS)
        .header("Cache-Control", CACHE_CONTROL)
}
