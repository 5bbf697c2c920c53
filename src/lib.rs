pub mod app;
pub mod clipboard;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod loader;
pub mod models;
pub mod normalizer;
pub mod scheduler;
pub mod state;
pub mod tracker;
pub mod ui;

pub use app::router;
pub use config::{resolve_port, TrackerConfig};
pub use state::AppState;
