mod chrome;
mod confetti;
mod cursor;
mod input;
mod modals;
mod results;
mod scripts;
mod view;

pub use view::{PlannerIntent, PlannerView};

#[cfg(test)]
pub(crate) use modals::{activates_button, overlay_key_intent};
#[cfg(test)]
pub(crate) use view::PlannerTestHandles;
