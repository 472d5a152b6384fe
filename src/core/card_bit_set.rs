use std::fmt::Debug;

use super::{Card, CardSet};

/// This struct is a bitset for cards
/// Each card is represented by a bit in a 64 bit integer
///
/// The bit is set if the card present
/// The bit is unset if the card not in the set
///
/// The equity look-ahead uses it to describe the undealt deck: start from
/// every card and knock out the ones that are already visible.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardBitSet {
    // The bitset
    cards: u64,
}

const FIFTY_TWO_ONES: u64 = (1 << 52) - 1;

impl CardBitSet {
    /// Every card that is not in `known`.
    ///
    /// ```
    /// use holdem_bot::core::{CardBitSet, CardSet};
    ///
    /// let known = CardSet::new_from_str("TsTcAsAc4d").unwrap();
    /// assert_eq!(47, CardBitSet::remaining(&known).count());
    /// ```
    pub fn remaining(known: &CardSet) -> Self {
        let mut deck = Self::default();
        for card in known.iter() {
            deck.remove(card);
        }
        deck
    }

    pub fn remove(&mut self, card: Card) {
        self.cards &= !(1 << u8::from(card));
    }

    /// Is the card in the bitset ?
    pub fn contains(&self, card: Card) -> bool {
        (self.cards & (1 << u8::from(card))) != 0
    }

    /// How many cards are in the bitset ?
    pub fn count(&self) -> usize {
        self.cards.count_ones() as usize
    }

    /// Collect the cards in index order. Handy when the caller needs
    /// random access, e.g. for walking pairs of cards.
    pub fn to_vec(&self) -> Vec<Card> {
        (*self).into_iter().collect()
    }
}

impl Default for CardBitSet {
    /// Create a new bitset with all the cards in it
    /// ```
    /// use holdem_bot::core::CardBitSet;
    ///
    /// let cards = CardBitSet::default();
    ///
    /// assert_eq!(52, cards.count());
    /// ```
    fn default() -> Self {
        Self {
            cards: FIFTY_TWO_ONES,
        }
    }
}

impl Debug for CardBitSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(*self).finish()
    }
}

/// The iterator for the CardBitSet
/// It iterates over the cards in the bitset
pub struct CardBitSetIter(u64);

impl IntoIterator for CardBitSet {
    type Item = Card;
    type IntoIter = CardBitSetIter;

    fn into_iter(self) -> Self::IntoIter {
        CardBitSetIter(self.cards)
    }
}

impl Iterator for CardBitSetIter {
    type Item = Card;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0 == 0 {
            return None;
        }

        let card = self.0.trailing_zeros();
        self.0 &= !(1 << card);

        Some(Card::from(card as u8))
    }
}

#[cfg(test)]
mod tests {
    use crate::core::{Suit, Value};

    use super::*;

    #[test]
    fn test_default_contains_every_card() {
        let mut cards = CardBitSet::default();
        assert_eq!(52, cards.count());

        for idx in 0..52u8 {
            let card = Card::from(idx);
            assert!(cards.contains(card));
            cards.remove(card);
        }

        assert_eq!(0, cards.count());
        assert_eq!(0, cards.into_iter().count());
    }

    #[test]
    fn test_remaining_skips_known() {
        let known = CardSet::new_from_str("TsTcAsAc4d2h").unwrap();
        let deck = CardBitSet::remaining(&known);

        assert_eq!(46, deck.count());
        for card in known.iter() {
            assert!(!deck.contains(card));
        }
        assert!(deck.contains(Card::new(Value::Ten, Suit::Heart)));
    }

    #[test]
    fn test_remaining_of_empty_set_is_full_deck() {
        assert_eq!(CardBitSet::default(), CardBitSet::remaining(&CardSet::new()));
    }

    fn only(keep: &[Card]) -> CardBitSet {
        let mut cards = CardBitSet::default();
        for card in CardBitSet::default() {
            if !keep.contains(&card) {
                cards.remove(card);
            }
        }
        cards
    }

    #[test]
    fn test_to_vec_ordered_by_index() {
        let cards = only(&[
            Card::new(Value::King, Suit::Diamond),
            Card::new(Value::Three, Suit::Heart),
            Card::new(Value::Ace, Suit::Club),
        ]);

        assert_eq!(
            vec![
                Card::new(Value::Ace, Suit::Club),
                Card::new(Value::Three, Suit::Heart),
                Card::new(Value::King, Suit::Diamond),
            ],
            cards.to_vec()
        );
        assert!(only(&[]).to_vec().is_empty());
    }

    #[test]
    fn test_formatting_cards() {
        let cards = only(&[
            Card::new(Value::Ace, Suit::Club),
            Card::new(Value::King, Suit::Diamond),
        ]);

        assert_eq!(
            format!("{:?}", cards),
            "{Card { value: Ace, suit: Club }, Card { value: King, suit: Diamond }}"
        );
    }
}
