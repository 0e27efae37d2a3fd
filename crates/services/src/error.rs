//! Shared error types for the services crate.

use std::path::PathBuf;

use thiserror::Error;

/// Errors emitted by `StudyPlanApi` implementations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    #[error("request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error("response body could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted by `DeckExportService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExportError {
    #[error("no flashcards to export")]
    NoFlashcards,
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("could not write deck into {dir}: {source}")]
    Io {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not save deck as {path}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("deck writer stopped unexpectedly")]
    Interrupted,
}

/// Errors emitted while resolving `AppConfig`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("invalid API base URL {raw:?}: {source}")]
    InvalidBaseUrl {
        raw: String,
        #[source]
        source: url::ParseError,
    },
    #[error("API base URL must use http or https, got {scheme:?}")]
    UnsupportedScheme { scheme: String },
    #[error(transparent)]
    Variant(#[from] learnflow_core::presentation::VariantParseError),
    #[error("download directory {0} does not exist")]
    MissingDownloadDir(PathBuf),
}
