use std::path::PathBuf;
use std::sync::Arc;

use crate::api::{HttpStudyPlanApi, StudyPlanApi};
use crate::config::AppConfig;
use crate::deck_export_service::DeckExportService;
use crate::generation_service::GenerationService;

/// Assembles app-facing services around one `StudyPlanApi`.
#[derive(Clone)]
pub struct AppServices {
    backend_label: String,
    generation: Arc<GenerationService>,
    deck_export: Arc<DeckExportService>,
}

impl AppServices {
    /// Build services that talk to the configured HTTP backend.
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        let api: Arc<dyn StudyPlanApi> =
            Arc::new(HttpStudyPlanApi::new(config.api_base_url.clone()));
        Self::with_api(api, config.backend_label(), config.download_dir.clone())
    }

    /// Build services around any `StudyPlanApi` implementation.
    #[must_use]
    pub fn with_api(
        api: Arc<dyn StudyPlanApi>,
        backend_label: impl Into<String>,
        download_dir: PathBuf,
    ) -> Self {
        Self {
            backend_label: backend_label.into(),
            generation: Arc::new(GenerationService::new(Arc::clone(&api))),
            deck_export: Arc::new(DeckExportService::new(api, download_dir)),
        }
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
