//! Local development HTTP server: static files with permissive CORS, plus a
//! reverse proxy that forwards the reserved `/api/` prefix to an
//! Ollama-compatible model runtime.

pub mod config;
pub mod handler;
pub mod http;
pub mod logger;
pub mod proxy;
pub mod server;
