use std::sync::Arc;

use learnflow_core::Clock;
use learnflow_core::presentation::Variant;
use services::{AppServices, DeckExportService, GenerationService};

pub trait UiApp: Send + Sync {
    fn variant(&self) -> Variant;
    fn cursor_effect(&self) -> bool;
    fn clock(&self) -> Clock;

    fn services(&self) -> AppServices;
}

#[derive(Clone)]
pub struct AppContext {
    variant: Variant,
    cursor_effect: bool,
    clock: Clock,
    backend_label: String,

    generation: Arc<GenerationService>,
    deck_export: Arc<DeckExportService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        let services = app.services();

        Self {
            variant: app.variant(),
            cursor_effect: app.cursor_effect(),
            clock: app.clock(),
            backend_label: services.backend_label().to_string(),
            generation: services.generation(),
            deck_export: services.deck_export(),
        }
    }

    #[must_use]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Whether the custom cursor should replace the native one.
    #[must_use]
    pub fn cursor_effect(&self) -> bool {
        self.cursor_effect
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    #[must_use]
    pub fn backend_label(&self) -> &str {
        &self.backend_label
    }

    #[must_use]
    pub fn generation(&self) -> Arc<GenerationService> {
        Arc::clone(&self.generation)
    }

    #[must_use]
    pub fn deck_export(&self) -> Arc<DeckExportService> {
        Arc::clone(&self.deck_export)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
