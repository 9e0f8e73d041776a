//! Stacks library circulation server
//!
//! Authenticates one patron at a time against the card catalog, lists titles
//! with their checkout status, and records checkouts and returns.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;
pub mod session;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use session::SessionState;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
    /// The single process-wide patron session
    pub session: SessionState,
}

impl AppState {
    pub fn new(config: AppConfig, store: Arc<dyn repository::CirculationStore>) -> Self {
        Self {
            config: Arc::new(config),
            services: Arc::new(services::Services::new(store)),
            session: SessionState::new(),
        }
    }
}
