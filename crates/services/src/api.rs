use async_trait::async_trait;
use learnflow_core::model::{Flashcard, StudyPlan, StudyRequest};
use reqwest::{Client, Response};
use url::Url;

use crate::error::ApiError;

pub const GENERATE_PATH: &str = "api/generate";
pub const DOWNLOAD_ANKI_PATH: &str = "api/download-anki";

/// The remote study-plan service.
#[async_trait]
pub trait StudyPlanApi: Send + Sync {
    /// Generate a study plan for the given topic and duration.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure, a non-success status, or a
    /// body that does not decode as a `StudyPlan`.
    async fn generate(&self, request: &StudyRequest) -> Result<StudyPlan, ApiError>;

    /// Build a flashcard deck package from the given cards.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure or a non-success status.
    async fn export_deck(&self, flashcards: &[Flashcard]) -> Result<Vec<u8>, ApiError>;
}

/// `StudyPlanApi` over HTTP with JSON bodies.
#[derive(Clone, Debug)]
pub struct HttpStudyPlanApi {
    client: Client,
    base_url: Url,
}

impl HttpStudyPlanApi {
    #[must_use]
    pub fn new(base_url: Url) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Use a preconfigured client, e.g. one with custom proxy or timeout settings.
    #[must_use]
    pub fn with_client(client: Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url.as_str().trim_end_matches('/'))
    }
}

fn ensure_success(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ApiError::HttpStatus(status))
    }
}

#[async_trait]
impl StudyPlanApi for HttpStudyPlanApi {
    async fn generate(&self, request: &StudyRequest) -> Result<StudyPlan, ApiError> {
        let response = self
            .client
            .post(self.endpoint(GENERATE_PATH))
            .json(request)
            .send()
            .await?;
        let body = ensure_success(response)?.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn export_deck(&self, flashcards: &[Flashcard]) -> Result<Vec<u8>, ApiError> {
        let response = self
            .client
            .post(self.endpoint(DOWNLOAD_ANKI_PATH))
            .json(flashcards)
            .send()
            .await?;
        let body = ensure_success(response)?.bytes().await?;
        Ok(body.to_vec())
    }
}
