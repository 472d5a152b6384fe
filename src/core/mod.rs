//! This is the core module. It exports the card level code that the
//! equity estimator and the bot are built on.

/// card.rs has value and suit.
mod card;
/// Re-export Card, Value, and Suit
pub use self::card::{Card, Suit, Value};

/// Error type for parsing cards and building card sets.
mod error;
pub use self::error::CardError;

/// The ordered seven slot buffer of visible cards.
mod card_set;
/// Everything in there should be public.
pub use self::card_set::*;

/// Bitset of cards, used for the undealt deck.
mod card_bit_set;
/// Export `CardBitSet` and its iterator
pub use self::card_bit_set::{CardBitSet, CardBitSetIter};

/// 5, 6 and 7 card hand ranking code.
mod rank;
/// Export the trait and the results.
pub use self::rank::{Rank, Rankable, rank_cards};
