mod card_vm;
mod markdown_vm;
mod planner_vm;

pub use card_vm::{FlashcardVm, map_flashcards};
pub use markdown_vm::{RichText, looks_like_markdown, markdown_to_html, sanitize_html};
pub use planner_vm::{InputVm, ResultsVm, map_input, map_results, map_study_plan};
