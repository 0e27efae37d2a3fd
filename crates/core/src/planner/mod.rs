//! The planner state machine: topic and duration input, generation lifecycle,
//! deck export preconditions, flashcard focus, and one-shot alerts.

mod alert;
mod focus;
mod state;
mod token;

pub use alert::Alert;
pub use focus::{CardFocus, CardSide};
pub use state::{GenerateTicket, GenerationCompletion, GenerationOutcome, Phase, PlannerState};
pub use token::RequestToken;
