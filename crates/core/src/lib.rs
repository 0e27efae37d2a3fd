#![forbid(unsafe_code)]

pub mod model;
pub mod planner;
pub mod presentation;
pub mod time;

pub use time::Clock;
