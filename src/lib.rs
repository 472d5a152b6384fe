//! holdem_bot is a library for playing Texas hold'em.
//! It scores a player's cards, looks one street ahead at the cards still to
//! come, and turns that score into a bet, call or fold.

/// Cards, sets of cards and hand ranking. Everything in core should be
/// agnostic to how the cards are used.
pub mod core;
/// Holdem specific scoring: the pre-flop formula, the look-ahead
/// estimator and the cutoff table.
pub mod holdem;
/// Perceptron based learning of cutoffs from labeled hands.
pub mod learning;
/// Bots that sit at a table and act.
pub mod bot;
