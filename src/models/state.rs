use tracing::info;

use crate::services::guard::RequestGuard;

/// Application state shared across requests. Needs to be thread-safe.
pub struct AppState {
    /// Database check run before every request.
    pub guard: RequestGuard,
}

impl AppState {
    pub fn new(guard: RequestGuard) -> Self {
        info!("Initializing application state");
        Self { guard }
    }
}
