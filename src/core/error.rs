use thiserror::Error;

use super::Card;

/// This is the core error type for cards and card sets.
/// It uses `thiserror` to provide readable error messages
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum CardError {
    #[error("Unable to parse value")]
    UnexpectedValueChar,
    #[error("Unable to parse suit")]
    UnexpectedSuitChar,
    #[error("Error reading characters while parsing")]
    TooFewChars,
    #[error("Extra un-used characters found after parsing")]
    UnparsedCharsRemaining,
    #[error("Holdem hands should never have more than 7 cards in them.")]
    HoldemHandSize,
    #[error("Card already added to hand {0}")]
    DuplicateCard(Card),
    #[error("Card slot {0} is out of range")]
    SlotOutOfRange(usize),
}
