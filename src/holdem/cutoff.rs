use super::EquityConfigError;

/// The two scores that split weak, decent and strong hands.
///
/// Below `call_score` the hand is only worth a free check. From
/// `call_score` up to `bet_score` it is worth calling. At `bet_score` and
/// above it is worth betting or raising.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CutoffPair {
    pub call_score: f64,
    pub bet_score: f64,
}

impl CutoffPair {
    pub const fn new(call_score: f64, bet_score: f64) -> Self {
        Self {
            call_score,
            bet_score,
        }
    }
}

/// Community card counts the game actually produces.
const MEANINGFUL: [usize; 4] = [0, 3, 4, 5];

/// Cutoffs indexed by the number of community cards. Pre-flop scores are
/// Chen points, later streets are hand categories. One and two community
/// cards never happen.
pub const CUTOFFS: [CutoffPair; 6] = [
    CutoffPair::new(4.0, 7.0),
    CutoffPair::new(0.0, 0.0),
    CutoffPair::new(0.0, 0.0),
    CutoffPair::new(2.0, 3.0),
    CutoffPair::new(2.0, 3.0),
    CutoffPair::new(2.0, 3.0),
];

/// Look up the default cutoff pair.
///
/// # Panics
///
/// Panics when `num_community_cards` is above five. The game never shows
/// more than five community cards, so that is a bug in the caller.
///
/// ```
/// use holdem_bot::holdem::{CutoffPair, cutoff};
///
/// assert_eq!(CutoffPair::new(4.0, 7.0), cutoff(0));
/// assert_eq!(CutoffPair::new(2.0, 3.0), cutoff(5));
/// ```
pub fn cutoff(num_community_cards: usize) -> CutoffPair {
    CUTOFFS[num_community_cards]
}

/// A full set of cutoffs, one pair per community card count.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CutoffTable {
    pairs: [CutoffPair; 6],
}

impl Default for CutoffTable {
    fn default() -> Self {
        Self { pairs: CUTOFFS }
    }
}

impl CutoffTable {
    /// Build a table, checking that calling never needs a higher score than
    /// betting for the counts the game produces.
    pub fn new(pairs: [CutoffPair; 6]) -> Result<Self, EquityConfigError> {
        let table = Self { pairs };
        table.validate()?;
        Ok(table)
    }

    pub fn validate(&self) -> Result<(), EquityConfigError> {
        for community_cards in MEANINGFUL {
            let pair = self.pairs[community_cards];
            if pair.call_score > pair.bet_score {
                return Err(EquityConfigError::InvertedCutoff {
                    community_cards,
                    call_score: pair.call_score,
                    bet_score: pair.bet_score,
                });
            }
        }
        Ok(())
    }

    /// # Panics
    ///
    /// Panics when `num_community_cards` is above five.
    pub fn lookup(&self, num_community_cards: usize) -> CutoffPair {
        self.pairs[num_community_cards]
    }

    pub fn get(&self, num_community_cards: usize) -> Option<CutoffPair> {
        self.pairs.get(num_community_cards).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_table() {
        assert_eq!(CutoffPair::new(4.0, 7.0), cutoff(0));
        assert_eq!(CutoffPair::new(0.0, 0.0), cutoff(1));
        assert_eq!(CutoffPair::new(0.0, 0.0), cutoff(2));
        assert_eq!(cutoff(3), cutoff(4));
        assert_eq!(cutoff(4), cutoff(5));
        assert_eq!(CutoffPair::new(2.0, 3.0), cutoff(3));
    }

    #[test]
    fn test_call_never_above_bet() {
        for n in MEANINGFUL {
            let pair = cutoff(n);
            assert!(pair.call_score <= pair.bet_score);
        }
        assert!(CutoffTable::default().validate().is_ok());
    }

    #[test]
    #[should_panic]
    fn test_out_of_range_panics() {
        cutoff(6);
    }

    #[test]
    fn test_table_lookup() {
        let table = CutoffTable::default();
        assert_eq!(cutoff(3), table.lookup(3));
        assert_eq!(Some(cutoff(0)), table.get(0));
        assert_eq!(None, table.get(6));
    }

    #[test]
    fn test_inverted_table_rejected() {
        let mut pairs = CUTOFFS;
        pairs[4] = CutoffPair::new(5.0, 3.0);
        assert_eq!(
            Err(EquityConfigError::InvertedCutoff {
                community_cards: 4,
                call_score: 5.0,
                bet_score: 3.0,
            }),
            CutoffTable::new(pairs)
        );

        // The unused slots are not checked.
        let mut pairs = CUTOFFS;
        pairs[1] = CutoffPair::new(5.0, 3.0);
        assert!(CutoffTable::new(pairs).is_ok());
    }
}
