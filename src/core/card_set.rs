use std::fmt;

use super::{Card, CardError, Suit, Value};

/// Most cards a holdem player ever sees: two hole cards and five on the
/// board.
pub const MAX_CARDS: usize = 7;

/// Number of private cards dealt to each player.
pub const NUM_HOLE_CARDS: usize = 2;

/// The cards visible to one player at a decision point.
///
/// This is an ordered buffer of seven slots. By convention the hole cards
/// sit in the first two slots and the community cards follow. Slots may be
/// left unset, so a flop decision is five populated slots and two empty
/// ones. No two populated slots ever hold the same card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CardSet {
    slots: [Option<Card>; MAX_CARDS],
}

impl CardSet {
    /// Create a new empty card set
    ///
    /// # Examples
    ///
    /// ```
    /// use holdem_bot::core::CardSet;
    ///
    /// let cards = CardSet::new();
    ///
    /// assert!(cards.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a card set from cards in order. Fails on the first duplicate or
    /// once more than seven cards are given.
    pub fn new_with_cards<I>(cards: I) -> Result<Self, CardError>
    where
        I: IntoIterator<Item = Card>,
    {
        let mut set = Self::new();
        for card in cards {
            set.push(card)?;
        }
        Ok(set)
    }

    /// Parse a string of two character card codes. Whitespace between
    /// cards is allowed.
    ///
    /// # Examples
    ///
    /// ```
    /// use holdem_bot::core::CardSet;
    ///
    /// let cards = CardSet::new_from_str("Ts Tc As Ac 4d").unwrap();
    /// assert_eq!(5, cards.count());
    ///
    /// assert!(CardSet::new_from_str("AsAs").is_err());
    /// ```
    pub fn new_from_str(hand_string: &str) -> Result<Self, CardError> {
        let mut chars = hand_string.chars().filter(|c| !c.is_whitespace());
        let mut set = Self::new();

        // Keep looping until we explicitly break
        while let Some(vc) = chars.next() {
            let v = Value::from_char(vc).ok_or(CardError::UnexpectedValueChar)?;
            let s = chars
                .next()
                .ok_or(CardError::TooFewChars)
                .map(Suit::from_char)?
                .ok_or(CardError::UnexpectedSuitChar)?;
            set.push(Card::new(v, s))?;
        }

        Ok(set)
    }

    /// Put a card into the first empty slot.
    ///
    /// # Examples
    ///
    /// ```
    /// use holdem_bot::core::{Card, CardSet, Suit, Value};
    ///
    /// let mut cards = CardSet::new();
    /// let card = Card::new(Value::Ace, Suit::Club);
    ///
    /// assert!(cards.push(card).is_ok());
    /// assert!(cards.push(card).is_err());
    /// ```
    pub fn push(&mut self, card: Card) -> Result<(), CardError> {
        if self.contains(&card) {
            return Err(CardError::DuplicateCard(card));
        }
        let slot = self
            .slots
            .iter_mut()
            .find(|slot| slot.is_none())
            .ok_or(CardError::HoldemHandSize)?;
        *slot = Some(card);
        Ok(())
    }

    /// Set a specific slot, replacing whatever was there.
    pub fn set(&mut self, slot: usize, card: Card) -> Result<(), CardError> {
        if slot >= MAX_CARDS {
            return Err(CardError::SlotOutOfRange(slot));
        }
        if self.slots[slot] != Some(card) && self.contains(&card) {
            return Err(CardError::DuplicateCard(card));
        }
        self.slots[slot] = Some(card);
        Ok(())
    }

    /// Given a card, is it in one of the populated slots?
    pub fn contains(&self, card: &Card) -> bool {
        self.iter().any(|c| c == *card)
    }

    /// Is `card` a repeat of something already in the set? Empty slots
    /// never match.
    ///
    /// ```
    /// use holdem_bot::core::{Card, CardSet, Suit, Value};
    ///
    /// let ace = Card::new(Value::Ace, Suit::Spade);
    /// assert!(!CardSet::new().repeat(ace));
    /// assert!(CardSet::new_from_str("As").unwrap().repeat(ace));
    /// ```
    pub fn repeat(&self, card: Card) -> bool {
        self.contains(&card)
    }

    /// Number of populated slots.
    pub fn count(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Populated cards in slot order.
    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        self.slots.iter().flatten().copied()
    }

    pub fn slots(&self) -> &[Option<Card>; MAX_CARDS] {
        &self.slots
    }

    /// The first two populated cards, which by convention are the hole
    /// cards.
    pub fn hole_cards(&self) -> Option<[Card; NUM_HOLE_CARDS]> {
        let mut cards = self.iter();
        Some([cards.next()?, cards.next()?])
    }

    /// Every populated card after the hole cards.
    pub fn board(&self) -> impl Iterator<Item = Card> + '_ {
        self.iter().skip(NUM_HOLE_CARDS)
    }

    /// Copy of this set with one more card in the first empty slot. The
    /// caller guarantees the card is new and there is room; the equity
    /// look-ahead only ever extends with cards drawn from the undealt deck.
    pub(crate) fn with(mut self, card: Card) -> Self {
        debug_assert!(!self.contains(&card), "{card} is already in the set");
        if let Some(slot) = self.slots.iter_mut().find(|slot| slot.is_none()) {
            *slot = Some(card);
        }
        self
    }
}

impl fmt::Display for CardSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for card in self.iter() {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
            first = false;
        }
        Ok(())
    }
}
