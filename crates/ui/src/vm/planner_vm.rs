use learnflow_core::model::{Days, StudyPlan};
use learnflow_core::planner::PlannerState;

use crate::vm::card_vm::{FlashcardVm, map_flashcards};
use crate::vm::markdown_vm::RichText;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputVm {
    pub topic: String,
    pub days: u8,
    pub days_min: u8,
    pub days_max: u8,
    pub days_label: String,
    pub submit_label: &'static str,
    pub submit_disabled: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsVm {
    pub study_plan: RichText,
    pub flashcards_heading: String,
    pub flashcards: Vec<FlashcardVm>,
    pub practice: Option<RichText>,
    pub motivation_quote: Option<String>,
}

#[must_use]
pub fn map_input(state: &PlannerState) -> InputVm {
    let days = state.days();
    InputVm {
        topic: state.topic().to_string(),
        days: days.get(),
        days_min: Days::MIN,
        days_max: Days::MAX,
        days_label: format!("{} {}", days.get(), days.unit_label()),
        submit_label: if state.is_loading() {
            "Generating Study Plan..."
        } else {
            "Generate Study Plan"
        },
        submit_disabled: !state.can_submit(),
    }
}

/// Results are hidden while a request is outstanding.
#[must_use]
pub fn map_results(state: &PlannerState) -> Option<ResultsVm> {
    if state.is_loading() {
        return None;
    }
    state.result().map(map_study_plan)
}

#[must_use]
pub fn map_study_plan(plan: &StudyPlan) -> ResultsVm {
    ResultsVm {
        study_plan: RichText::from_backend(&plan.study_plan),
        flashcards_heading: format!("Flashcards ({})", plan.flashcards.len()),
        flashcards: map_flashcards(&plan.flashcards),
        practice: plan
            .has_practice()
            .then(|| RichText::from_backend(&plan.practice)),
        motivation_quote: plan
            .has_motivation()
            .then(|| format!("\u{201c}{}\u{201d}", plan.motivation.trim())),
    }
}
