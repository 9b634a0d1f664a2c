//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use std::sync::Arc;
use std::time::Instant;
use uuid::Uuid;

use crate::config::ServerConfig;
use crate::dataset::Dataset;
use crate::session::SessionRegistry;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// The fixed dataset, read-only
    pub dataset: Arc<Dataset>,
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Identifies this server process; pages in developer mode reload when it changes
    pub server_id: String,
    /// Server start time for uptime tracking
    pub start_time: Instant,
    /// Open page sessions
    pub sessions: SessionRegistry,
}

impl AppState {
    pub fn new(dataset: Arc<Dataset>, config: ServerConfig) -> Self {
        let sessions = SessionRegistry::new(config.max_sessions);
        Self {
            dataset,
            config: Arc::new(config),
            server_id: Uuid::new_v4().to_string(),
            start_time: Instant::now(),
            sessions,
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    /// Whether developer mode is on
    pub fn dev_mode(&self) -> bool {
        self.config.debug
    }
}
