use crate::config::TrackerConfig;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<TrackerConfig>,
    pub client: reqwest::Client,
}

impl AppState {
    pub fn new(config: TrackerConfig, client: reqwest::Client) -> Self {
        Self {
            config: Arc::new(config),
            client,
        }
    }
}
