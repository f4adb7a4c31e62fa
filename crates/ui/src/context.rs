use std::sync::Arc;

use services::QuizEngine;

pub trait UiApp: Send + Sync {
    fn engine(&self) -> Arc<QuizEngine>;
}

#[derive(Clone)]
pub struct AppContext {
    engine: Arc<QuizEngine>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            engine: app.engine(),
        }
    }

    #[must_use]
    pub fn engine(&self) -> Arc<QuizEngine> {
        Arc::clone(&self.engine)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
