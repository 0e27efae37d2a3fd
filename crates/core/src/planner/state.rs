use crate::model::{Days, Flashcard, StudyPlan, StudyRequest};
use crate::planner::{Alert, CardFocus, RequestToken};

/// Coarse view phase derived from `PlannerState`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    ResultReady,
}

/// A generation request that has been admitted by the state machine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerateTicket {
    pub token: RequestToken,
    pub request: StudyRequest,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GenerationOutcome {
    Ready(StudyPlan),
    /// Transport failure, non-success status, or an unreadable body.
    Failed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationCompletion {
    pub token: RequestToken,
    pub outcome: GenerationOutcome,
}

/// Session state for one planner view.
///
/// Every user or network event maps to exactly one method. Methods never
/// perform I/O; the ones that start work hand back what to send.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlannerState {
    topic: String,
    days: Days,
    loading: bool,
    result: Option<StudyPlan>,
    // Result shown before the outstanding request started; restored on failure.
    previous: Option<StudyPlan>,
    latest_token: RequestToken,
    card_focus: CardFocus,
    alert: Option<Alert>,
}

impl PlannerState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn set_topic(&mut self, topic: impl Into<String>) {
        self.topic = topic.into();
    }

    #[must_use]
    pub fn days(&self) -> Days {
        self.days
    }

    pub fn set_days(&mut self, days: Days) {
        self.days = days;
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn result(&self) -> Option<&StudyPlan> {
        self.result.as_ref()
    }

    #[must_use]
    pub fn latest_token(&self) -> RequestToken {
        self.latest_token
    }

    #[must_use]
    pub fn card_focus(&self) -> CardFocus {
        self.card_focus
    }

    #[must_use]
    pub fn alert(&self) -> Option<Alert> {
        self.alert
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.loading {
            Phase::Loading
        } else if self.result.is_some() {
            Phase::ResultReady
        } else {
            Phase::Idle
        }
    }

    #[must_use]
    pub fn has_topic(&self) -> bool {
        !self.topic.trim().is_empty()
    }

    /// Whether the generate button should accept a click.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.has_topic() && !self.loading
    }

    /// Admit a generation request.
    ///
    /// Returns `None` (and changes nothing) when the trimmed topic is empty.
    /// Otherwise the current result is cleared from view and a ticket with a
    /// fresh token is returned.
    pub fn begin_generation(&mut self) -> Option<GenerateTicket> {
        if !self.has_topic() {
            return None;
        }

        let shown = self.result.take();
        if !self.loading {
            self.previous = shown;
        }
        self.loading = true;
        self.card_focus = CardFocus::Closed;
        self.latest_token = self.latest_token.next();

        Some(GenerateTicket {
            token: self.latest_token,
            request: StudyRequest::new(self.topic.clone(), self.days),
        })
    }

    /// Apply a finished generation request.
    ///
    /// Returns `false` when the completion belongs to a superseded request; in
    /// that case nothing changes.
    pub fn complete_generation(&mut self, completion: GenerationCompletion) -> bool {
        if completion.token != self.latest_token || !self.loading {
            return false;
        }

        self.loading = false;
        match completion.outcome {
            GenerationOutcome::Ready(plan) => {
                self.result = Some(plan);
                self.previous = None;
                self.card_focus = CardFocus::Closed;
            }
            GenerationOutcome::Failed => {
                self.result = self.previous.take();
                self.alert = Some(Alert::BackendUnreachable);
            }
        }
        true
    }

    /// Flashcards to export, or `None` when there is nothing to export.
    #[must_use]
    pub fn export_payload(&self) -> Option<Vec<Flashcard>> {
        self.result
            .as_ref()
            .filter(|plan| plan.has_flashcards())
            .map(|plan| plan.flashcards.clone())
    }

    pub fn fail_export(&mut self) {
        self.alert = Some(Alert::DeckExportFailed);
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    /// Open a flashcard on its question side. Unknown indices are ignored.
    pub fn select_card(&mut self, index: usize) {
        let exists = self
            .result
            .as_ref()
            .is_some_and(|plan| index < plan.flashcards.len());
        if exists {
            self.card_focus = CardFocus::open(index);
        }
    }

    pub fn toggle_flip(&mut self) {
        self.card_focus = self.card_focus.flipped();
    }

    pub fn dismiss_card(&mut self) {
        self.card_focus = CardFocus::Closed;
    }

    #[must_use]
    pub fn focused_card(&self) -> Option<&Flashcard> {
        let index = self.card_focus.index()?;
        self.result.as_ref()?.flashcards.get(index)
    }
}
