//! Request handler module
//!
//! Routing dispatch plus the static file responder. Requests under the
//! reserved prefix are handed to the proxy module before the static
//! responder runs.

pub mod router;
pub mod static_files;

// Re-export main entry point
pub use router::handle_request;
