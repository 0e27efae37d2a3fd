//! Cosmetic, stateless-to-the-workflow presentation behavior.

mod confetti;
mod cursor;
mod nav;
mod variant;

pub use confetti::{ConfettiBurst, ConfettiPiece};
pub use cursor::{CursorFollower, Point};
pub use nav::NavVisibility;
pub use variant::{Variant, VariantParseError};
