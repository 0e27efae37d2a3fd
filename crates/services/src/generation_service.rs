use std::sync::Arc;
use std::time::Instant;

use learnflow_core::planner::{GenerateTicket, GenerationCompletion, GenerationOutcome};
use tracing::{info, warn};

use crate::api::StudyPlanApi;

/// Runs admitted generation requests against the study-plan service.
///
/// Every failure collapses into `GenerationOutcome::Failed`; the cause is
/// logged here and nowhere else.
#[derive(Clone)]
pub struct GenerationService {
    api: Arc<dyn StudyPlanApi>,
}

impl GenerationService {
    #[must_use]
    pub fn new(api: Arc<dyn StudyPlanApi>) -> Self {
        Self { api }
    }

    pub async fn run(&self, ticket: GenerateTicket) -> GenerationCompletion {
        let GenerateTicket { token, request } = ticket;
        let started = Instant::now();
        info!(%token, topic = %request.topic, days = %request.days, "generating study plan");

        let outcome = match self.api.generate(&request).await {
            Ok(plan) => {
                info!(
                    %token,
                    flashcards = plan.flashcards.len(),
                    elapsed_ms = started.elapsed().as_millis(),
                    "study plan ready"
                );
                GenerationOutcome::Ready(plan)
            }
            Err(err) => {
                warn!(
                    %token,
                    error = %err,
                    elapsed_ms = started.elapsed().as_millis(),
                    "study plan generation failed"
                );
                GenerationOutcome::Failed
            }
        };

        GenerationCompletion { token, outcome }
    }
}
