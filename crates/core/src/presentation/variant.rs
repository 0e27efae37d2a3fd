use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// The two presentations of the planner workflow.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Flashcards open in a flippable detail modal.
    #[default]
    Modal,
    /// Flashcards show question and answer inline; success plays confetti.
    Inline,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown variant {raw:?} (expected \"modal\" or \"inline\")")]
pub struct VariantParseError {
    raw: String,
}

impl Variant {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Modal => "modal",
            Variant::Inline => "inline",
        }
    }

    #[must_use]
    pub fn celebrates(self) -> bool {
        matches!(self, Variant::Inline)
    }

    #[must_use]
    pub fn footer_credit(self) -> &'static str {
        match self {
            Variant::Modal => "Developed by Sarmad, Abdullah, Asad, Mubashir, Zain, Ohm",
            Variant::Inline => "Built for focused, joyful studying.",
        }
    }
}

impl FromStr for Variant {
    type Err = VariantParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "modal" | "a" => Ok(Variant::Modal),
            "inline" | "b" => Ok(Variant::Inline),
            _ => Err(VariantParseError {
                raw: raw.to_string(),
            }),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
