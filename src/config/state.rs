// Application state module
// Read-only configuration snapshot plus the selected-model cell

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::{Notify, RwLock};

use super::types::Config;

/// Application state shared by every connection task.
///
/// Request handlers only ever read from this; the selected-model cell is
/// written through [`AppState::set_selected_model`] by whatever control
/// surface owns model selection.
pub struct AppState {
    pub config: Config,
    selected_model: RwLock<String>,
    /// Shared client for backend forwards; reqwest clients pool connections
    pub http_client: reqwest::Client,
    /// Breaks the accept loop when notified
    pub shutdown: Arc<Notify>,
    cached_access_log: AtomicBool,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            selected_model: RwLock::new(config.backend.default_model.clone()),
            cached_access_log: AtomicBool::new(config.logging.access_log),
            http_client: reqwest::Client::new(),
            shutdown: Arc::new(Notify::new()),
            config: config.clone(),
        }
    }

    /// Snapshot of the currently selected model identifier
    pub async fn selected_model(&self) -> String {
        self.selected_model.read().await.clone()
    }

    /// Replace the selected model identifier
    pub async fn set_selected_model(&self, model: String) {
        *self.selected_model.write().await = model;
    }

    /// Whether access logging is enabled (lock-free)
    pub fn access_log_enabled(&self) -> bool {
        self.cached_access_log.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config::load_from("does-not-exist").unwrap()
    }

    #[tokio::test]
    async fn test_selected_model_starts_at_default() {
        let state = AppState::new(&test_config());
        assert_eq!(state.selected_model().await, "llama3.2");
    }

    #[tokio::test]
    async fn test_set_selected_model() {
        let state = AppState::new(&test_config());
        state.set_selected_model("qwen2.5-coder:7b".to_string()).await;
        assert_eq!(state.selected_model().await, "qwen2.5-coder:7b");
    }
}
