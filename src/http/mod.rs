//! HTTP protocol layer module
//!
//! Response builders, the CORS/cache header policy, and MIME detection,
//! decoupled from specific business logic. Shared between the static file
//! responder and the proxy dispatcher.

pub mod cors;
pub mod mime;
pub mod response;

// Re-export commonly used builders
pub use response::{
    build_404_response, build_405_response, build_endpoint_not_found, build_error_response,
    build_file_response, build_json_passthrough, build_json_response, build_options_response,
};
