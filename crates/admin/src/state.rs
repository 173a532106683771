//! Application state shared across handlers.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::AdminConfig;
use crate::dashboard::Dashboard;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AdminConfig,
    dashboard: RwLock<Dashboard>,
}

impl AppState {
    /// Create state around a seeded dashboard.
    #[must_use]
    pub fn new(config: AdminConfig) -> Self {
        Self::with_dashboard(config, Dashboard::default())
    }

    /// Create state around an existing dashboard.
    #[must_use]
    pub fn with_dashboard(config: AdminConfig, dashboard: Dashboard) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                dashboard: RwLock::new(dashboard),
            }),
        }
    }

    #[must_use]
    pub fn config(&self) -> &AdminConfig {
        &self.inner.config
    }

    /// The dashboard controller. Every command takes the write lock for its whole duration.
    #[must_use]
    pub fn dashboard(&self) -> &RwLock<Dashboard> {
        &self.inner.dashboard
    }

    /// Acknowledge a drawer transition once the configured duration has passed,
    /// in case the page never reports `transitionend` itself.
    pub fn schedule_transition_fallback(&self, generation: u64) {
        let state = self.clone();
        let delay = self.config().modal_transition;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let completed = state.dashboard().write().await.acknowledge_transition(generation);
            if completed {
                tracing::debug!(generation, "transition completed by fallback timer");
            }
        });
    }

    /// Transition length as seen by the page.
    #[must_use]
    pub fn transition_ms(&self) -> u128 {
        self.config().modal_transition.as_millis()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.inner.config)
            .finish_non_exhaustive()
    }
}
