use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use learnflow_core::model::Flashcard;
use tracing::{info, warn};

use crate::api::StudyPlanApi;
use crate::error::ExportError;

pub const DECK_FILE_STEM: &str = "learnflow-deck";
pub const DECK_FILE_EXTENSION: &str = "apkg";

// Upper bound on " (n)" suffixes tried before giving up.
const MAX_NAME_ATTEMPTS: u32 = 100;

/// Sends flashcards to the deck-export service and saves the returned package.
#[derive(Clone)]
pub struct DeckExportService {
    api: Arc<dyn StudyPlanApi>,
    download_dir: PathBuf,
}

impl DeckExportService {
    #[must_use]
    pub fn new(api: Arc<dyn StudyPlanApi>, download_dir: PathBuf) -> Self {
        Self { api, download_dir }
    }

    #[must_use]
    pub fn download_dir(&self) -> &Path {
        &self.download_dir
    }

    /// Export `flashcards` and return where the deck was saved.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::NoFlashcards` without contacting the service when
    /// `flashcards` is empty, and other `ExportError`s when the request or the
    /// file write fails.
    pub async fn export(&self, flashcards: &[Flashcard]) -> Result<PathBuf, ExportError> {
        if flashcards.is_empty() {
            return Err(ExportError::NoFlashcards);
        }

        info!(flashcards = flashcards.len(), "exporting deck");
        let bytes = match self.api.export_deck(flashcards).await {
            Ok(bytes) => bytes,
            Err(err) => {
                warn!(error = %err, "deck export request failed");
                return Err(err.into());
            }
        };

        let dir = self.download_dir.clone();
        let saved = tokio::task::spawn_blocking(move || save_deck(&dir, &bytes))
            .await
            .map_err(|_| ExportError::Interrupted)?;

        match &saved {
            Ok(path) => info!(path = %path.display(), "deck saved"),
            Err(err) => warn!(error = %err, "deck could not be saved"),
        }
        saved
    }
}

/// File name for the `attempt`-th save into the same directory.
#[must_use]
pub fn deck_file_name(attempt: u32) -> String {
    if attempt == 0 {
        format!("{DECK_FILE_STEM}.{DECK_FILE_EXTENSION}")
    } else {
        format!("{DECK_FILE_STEM} ({attempt}).{DECK_FILE_EXTENSION}")
    }
}

/// Stage `bytes` in a temporary file inside `dir`, then move it to the first
/// free deck file name. The staged file is removed on every failure path.
///
/// # Errors
///
/// Returns `ExportError::Io` when staging fails and `ExportError::Persist`
/// when no deck file name could be claimed.
pub fn save_deck(dir: &Path, bytes: &[u8]) -> Result<PathBuf, ExportError> {
    let io_err = |source| ExportError::Io {
        dir: dir.to_path_buf(),
        source,
    };

    let mut staged = tempfile::Builder::new()
        .prefix(".learnflow-deck-")
        .suffix(".part")
        .tempfile_in(dir)
        .map_err(io_err)?;
    staged.write_all(bytes).map_err(io_err)?;
    staged.flush().map_err(io_err)?;

    let mut attempt = 0;
    loop {
        let target = dir.join(deck_file_name(attempt));
        match staged.persist_noclobber(&target) {
            Ok(_) => return Ok(target),
            Err(err)
                if err.error.kind() == ErrorKind::AlreadyExists
                    && attempt < MAX_NAME_ATTEMPTS =>
            {
                staged = err.file;
                attempt += 1;
            }
            Err(err) => {
                return Err(ExportError::Persist {
                    path: target,
                    source: err.error,
                });
            }
        }
    }
}
