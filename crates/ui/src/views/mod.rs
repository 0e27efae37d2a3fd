mod planner;

pub use planner::{PlannerIntent, PlannerView};

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
