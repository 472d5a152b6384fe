use super::{Card, CardSet};

/// All the different possible hand ranks.
/// For each hand rank the u32 corresponds to
/// the strength of the hand in comparison to others
/// of the same rank.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rank {
    /// The lowest rank.
    /// No matches
    HighCard(u32),
    /// One Card matches another.
    OnePair(u32),
    /// Two different pair of matching cards.
    TwoPair(u32),
    /// Three of the same value.
    ThreeOfAKind(u32),
    /// Five cards in a sequence
    Straight(u32),
    /// Five cards of the same suit
    Flush(u32),
    /// Three of one value and two of another value
    FullHouse(u32),
    /// Four of the same value.
    FourOfAKind(u32),
    /// Five cards in a sequence all of the same suit.
    StraightFlush(u32),
}

/// Index of the ten to ace straight as returned by `rank_straight`.
const ROYAL_STRAIGHT: u32 = 9;

/// Bit pattern for A2345. The ace sits on bit 12.
const WHEEL: u32 = 0b1_0000_0000_1111;

impl Rank {
    /// Ordinal category of the hand, from 0 for a high card hand up to 9
    /// for a royal flush. The royal flush gets its own step above the other
    /// straight flushes.
    ///
    /// ```
    /// use holdem_bot::core::Rank;
    ///
    /// assert_eq!(0, Rank::HighCard(0).category());
    /// assert_eq!(2, Rank::TwoPair(0).category());
    /// assert_eq!(8, Rank::StraightFlush(3).category());
    /// assert_eq!(9, Rank::StraightFlush(9).category());
    /// ```
    pub fn category(&self) -> u8 {
        match self {
            Rank::HighCard(_) => 0,
            Rank::OnePair(_) => 1,
            Rank::TwoPair(_) => 2,
            Rank::ThreeOfAKind(_) => 3,
            Rank::Straight(_) => 4,
            Rank::Flush(_) => 5,
            Rank::FullHouse(_) => 6,
            Rank::FourOfAKind(_) => 7,
            Rank::StraightFlush(ROYAL_STRAIGHT) => 9,
            Rank::StraightFlush(_) => 8,
        }
    }
}

/// Keep only the most significant bit.
fn keep_highest(rank: u32) -> u32 {
    if rank == 0 {
        return 0;
    }
    1 << (32 - rank.leading_zeros() - 1)
}

/// Keep the N most significant bits.
///
/// This works by removing the least significant bits.
fn keep_n(rank: u32, to_keep: u32) -> u32 {
    let mut result = rank;
    while result.count_ones() > to_keep {
        result &= result - 1;
    }
    result
}

/// From a bitset of values find the highest straight. 0 is the wheel, 9 is
/// ten to ace.
fn rank_straight(value_set: u32) -> Option<u32> {
    // Bit i survives when the values i, i - 1, ... i - 4 are all present.
    let left =
        value_set & (value_set << 1) & (value_set << 2) & (value_set << 3) & (value_set << 4);
    let idx = left.leading_zeros();

    if idx < 32 {
        Some(32 - 4 - idx)
    } else if value_set & WHEEL == WHEEL {
        Some(0)
    } else {
        None
    }
}

/// Rank the best five card hand that can be made out of `cards`.
///
/// Works for anything from five to seven cards. Fewer than five cards are
/// ranked as if the missing cards were blanks.
pub fn rank_cards<I: IntoIterator<Item = Card>>(cards: I) -> Rank {
    let mut value_to_count: [u8; 13] = [0; 13];
    let mut count_to_value: [u32; 5] = [0; 5];
    let mut suit_value_sets: [u32; 4] = [0; 4];
    let mut value_set: u32 = 0;

    for c in cards {
        let v = c.value as u8;
        let s = c.suit as u8;
        value_set |= 1 << v;
        value_to_count[v as usize] += 1;
        suit_value_sets[s as usize] |= 1 << v;
    }

    // Now rotate the value to count map.
    for (value, &count) in value_to_count.iter().enumerate() {
        count_to_value[usize::from(count)] |= 1 << value;
    }

    // Find out if there's a flush
    let flush: Option<usize> = suit_value_sets
        .iter()
        .position(|sv| sv.count_ones() >= 5);

    if let Some(flush_idx) = flush {
        // There can't be more than one flush in seven cards, and seven
        // cards can't hold a flush together with quads or a full house.
        let flush_set = suit_value_sets[flush_idx];
        if let Some(rank) = rank_straight(flush_set) {
            Rank::StraightFlush(rank)
        } else {
            Rank::Flush(keep_n(flush_set, 5))
        }
    } else if count_to_value[4] != 0 {
        let high = keep_highest(value_set ^ count_to_value[4]);
        Rank::FourOfAKind(count_to_value[4] << 13 | high)
    } else if count_to_value[3] != 0
        && (count_to_value[3].count_ones() == 2 || count_to_value[2] != 0)
    {
        full_house(&count_to_value)
    } else if let Some(s_rank) = rank_straight(value_set) {
        Rank::Straight(s_rank)
    } else if count_to_value[3] != 0 {
        let low = keep_n(value_set ^ count_to_value[3], 2);
        Rank::ThreeOfAKind(count_to_value[3] << 13 | low)
    } else if count_to_value[2].count_ones() >= 2 {
        // There can be three pair in seven cards. Only the top two count.
        let pairs = keep_n(count_to_value[2], 2);
        let low = keep_highest(value_set ^ pairs);
        Rank::TwoPair(pairs << 13 | low)
    } else if count_to_value[2] == 0 {
        Rank::HighCard(keep_n(value_set, 5))
    } else {
        let low = keep_n(value_set ^ count_to_value[2], 3);
        Rank::OnePair(count_to_value[2] << 13 | low)
    }
}

fn full_house(count_to_value: &[u32; 5]) -> Rank {
    if count_to_value[3].count_ones() == 2 {
        // Two sets; the lower one plays as the pair.
        let set = keep_highest(count_to_value[3]);
        let pair = count_to_value[3] ^ set;
        Rank::FullHouse(set << 13 | pair)
    } else {
        let set = count_to_value[3];
        let pair = keep_highest(count_to_value[2]);
        Rank::FullHouse(set << 13 | pair)
    }
}

/// Can this turn into a hand rank?
pub trait Rankable {
    /// The cards that take part in the ranking.
    fn cards(&self) -> impl Iterator<Item = Card>;

    /// Rank the cards. It doesn't do any caching so it's left up to the
    /// user to understand that duplicate work will be done if this is called
    /// more than once.
    fn rank(&self) -> Rank {
        rank_cards(self.cards())
    }
}

impl Rankable for CardSet {
    fn cards(&self) -> impl Iterator<Item = Card> {
        self.iter()
    }
}

impl Rankable for [Card] {
    fn cards(&self) -> impl Iterator<Item = Card> {
        self.iter().copied()
    }
}

impl Rankable for Vec<Card> {
    fn cards(&self) -> impl Iterator<Item = Card> {
        self.iter().copied()
    }
}
