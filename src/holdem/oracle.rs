use crate::core::{CardSet, Rank, Rankable};

/// What the oracle knows about a set of cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandClass {
    /// Best five card hand out of the set.
    pub rank: Rank,
    /// One of the hole cards pairs the highest community card.
    pub top_pair: bool,
}

impl HandClass {
    /// Ordinal category of the hand, see `Rank::category`.
    pub fn category(&self) -> u8 {
        self.rank.category()
    }
}

/// Classifies a card set into a hand category.
///
/// Implementations must accept 5, 6 or 7 populated cards and be a total,
/// deterministic function over duplicate free sets. Closures work as
/// oracles too, which is handy for instrumenting the estimator.
pub trait HandRankOracle {
    fn classify(&self, cards: &CardSet) -> HandClass;
}

impl<F> HandRankOracle for F
where
    F: Fn(&CardSet) -> HandClass,
{
    fn classify(&self, cards: &CardSet) -> HandClass {
        self(cards)
    }
}

/// The default oracle backed by `Rankable`.
#[derive(Debug, Default, Clone, Copy)]
pub struct StandardOracle;

impl HandRankOracle for StandardOracle {
    fn classify(&self, cards: &CardSet) -> HandClass {
        HandClass {
            rank: cards.rank(),
            top_pair: has_top_pair(cards),
        }
    }
}

/// Does a hole card share its value with the highest card on the board?
///
/// The first two populated cards are the hole cards, the rest is the board.
/// Without a board there is nothing to pair.
///
/// ```
/// use holdem_bot::core::CardSet;
/// use holdem_bot::holdem::has_top_pair;
///
/// assert!(has_top_pair(&CardSet::new_from_str("AsKd Ac 9h 4d").unwrap()));
/// assert!(!has_top_pair(&CardSet::new_from_str("TsTc As Ac 4d").unwrap()));
/// ```
pub fn has_top_pair(cards: &CardSet) -> bool {
    let Some(hole) = cards.hole_cards() else {
        return false;
    };
    match cards.board().map(|c| c.value).max() {
        Some(top) => hole.iter().any(|c| c.value == top),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    fn set(s: &str) -> CardSet {
        CardSet::new_from_str(s).unwrap()
    }

    #[test]
    fn test_standard_oracle_classifies() {
        let class = StandardOracle.classify(&set("TsTcAsAc4d"));
        assert_eq!(2, class.category());
        assert!(!class.top_pair);

        let class = StandardOracle.classify(&set("AhKdAc9h4d"));
        assert_eq!(1, class.category());
        assert!(class.top_pair);
    }

    #[test]
    fn test_top_pair_needs_board() {
        assert!(!has_top_pair(&set("AsAc")));
        assert!(!has_top_pair(&set("As")));
        // Second hole card can make the pair too.
        assert!(has_top_pair(&set("2dKh Kc 9h 4d 3s 2s")));
        // An overpair is not top pair.
        assert!(!has_top_pair(&set("AsAc Kc 9h 4d")));
    }

    #[test]
    fn test_closure_oracle() {
        let calls = Cell::new(0);
        let oracle = |cards: &CardSet| {
            calls.set(calls.get() + 1);
            StandardOracle.classify(cards)
        };
        let class = oracle.classify(&set("AsKsQsJsTs"));
        assert_eq!(9, class.category());
        assert_eq!(1, calls.get());
    }
}
