mod days;
mod study_plan;

pub use days::{Days, DaysError};
pub use study_plan::{Flashcard, StudyPlan, StudyRequest};
