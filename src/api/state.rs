use crate::core::AppConfig;

/// Shared by every request handler. Nothing in here changes after
/// startup so it is shared without a lock.
pub struct AppState {
    pub config: AppConfig,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }
}
