#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardSide {
    Front,
    Back,
}

/// Detail view state for a single flashcard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CardFocus {
    #[default]
    Closed,
    FrontShown(usize),
    BackShown(usize),
}

impl CardFocus {
    /// Opening a card always starts on the question side.
    #[must_use]
    pub fn open(index: usize) -> Self {
        Self::FrontShown(index)
    }

    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Closed => Self::Closed,
            Self::FrontShown(index) => Self::BackShown(index),
            Self::BackShown(index) => Self::FrontShown(index),
        }
    }

    #[must_use]
    pub fn index(self) -> Option<usize> {
        match self {
            Self::Closed => None,
            Self::FrontShown(index) | Self::BackShown(index) => Some(index),
        }
    }

    #[must_use]
    pub fn side(self) -> Option<CardSide> {
        match self {
            Self::Closed => None,
            Self::FrontShown(_) => Some(CardSide::Front),
            Self::BackShown(_) => Some(CardSide::Back),
        }
    }
}
