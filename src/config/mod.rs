// Configuration module entry point
// Manages application configuration loading and runtime state

mod state;
mod types;

use std::net::SocketAddr;

// Re-export public types
pub use state::AppState;
pub use types::{BackendConfig, Config, LoggingConfig, ServerConfig, StaticConfig};

impl Config {
    /// Load configuration from the default "config.toml" next to the binary
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from specified file path (without extension),
    /// layered over built-in defaults and `LLMGATE_`-prefixed environment
    /// variables
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("LLMGATE"))
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8000)?
            .set_default("static.root", ".")?
            .set_default(
                "static.index_files",
                vec!["index.html".to_string(), "index.htm".to_string()],
            )?
            .set_default("backend.base_url", "http://127.0.0.1:11434")?
            .set_default("backend.default_model", "llama3.2")?
            .set_default("logging.access_log", true)?
            .build()?;

        settings.try_deserialize()
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}
