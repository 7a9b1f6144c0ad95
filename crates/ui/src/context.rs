use std::sync::Arc;
use std::time::Duration;

use services::PortfolioService;

/// What the composition root provides to the UI.
pub trait UiApp: Send + Sync {
    fn portfolio(&self) -> Arc<PortfolioService>;

    /// Delay between sort animation frames.
    fn animation_step(&self) -> Duration;
}

#[derive(Clone)]
pub struct AppContext {
    portfolio: Arc<PortfolioService>,
    animation_step: Duration,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            portfolio: app.portfolio(),
            animation_step: app.animation_step(),
        }
    }

    #[must_use]
    pub fn portfolio(&self) -> Arc<PortfolioService> {
        Arc::clone(&self.portfolio)
    }

    #[must_use]
    pub fn animation_step(&self) -> Duration {
        self.animation_step
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: Arc<dyn UiApp>) -> AppContext {
    AppContext::new(&app)
}
