use thiserror::Error;

use crate::core::CardError;
use crate::holdem::EquityConfigError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BotError {
    #[error("Tightness {0} is outside 0 to 100")]
    InvalidTightness(u32),
    #[error("Aggression {0} is outside 0 to 100")]
    InvalidAggression(u32),
    #[error("Asked to act before the hole cards were known")]
    HoleCardsUnknown,
    #[error("Asked to act before joining a table")]
    NotSeated,
    #[error("Invalid cards: {0}")]
    Cards(#[from] CardError),
    #[error("Invalid configuration: {0}")]
    Config(#[from] EquityConfigError),
}
