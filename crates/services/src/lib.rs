#![forbid(unsafe_code)]

pub mod api;
pub mod app_services;
pub mod config;
pub mod deck_export_service;
pub mod error;
pub mod generation_service;

pub use learnflow_core::Clock;

pub use api::{HttpStudyPlanApi, StudyPlanApi};
pub use app_services::AppServices;
pub use config::{AppConfig, ConfigOverrides};
pub use deck_export_service::DeckExportService;
pub use error::{ApiError, ConfigError, ExportError};
pub use generation_service::GenerationService;
