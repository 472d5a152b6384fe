use std::fmt;

use super::CardError;

/// Card rank or value.
/// This is basically the face value - 2
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// 2
    Two = 0,
    /// 3
    Three = 1,
    /// 4
    Four = 2,
    /// 5
    Five = 3,
    /// 6
    Six = 4,
    /// 7
    Seven = 5,
    /// 8
    Eight = 6,
    /// 9
    Nine = 7,
    /// T
    Ten = 8,
    /// J
    Jack = 9,
    /// Q
    Queen = 10,
    /// K
    King = 11,
    /// A
    Ace = 12,
}

/// Every value in index order.
const VALUES: [Value; 13] = [
    Value::Two,
    Value::Three,
    Value::Four,
    Value::Five,
    Value::Six,
    Value::Seven,
    Value::Eight,
    Value::Nine,
    Value::Ten,
    Value::Jack,
    Value::Queen,
    Value::King,
    Value::Ace,
];

impl Value {
    /// Take a u8 and convert it to a value.
    /// Anything above the ace is clamped to the ace.
    ///
    /// ```
    /// use holdem_bot::core::Value;
    ///
    /// assert_eq!(Value::Four, Value::from_u8(2));
    /// assert_eq!(Value::Ace, Value::from_u8(12));
    /// ```
    pub fn from_u8(v: u8) -> Self {
        VALUES[usize::from(v.min(Value::Ace as u8))]
    }

    /// Given a character parse that char into a value.
    /// Case is ignored as long as the char is in the ascii range.
    ///
    /// ```
    /// use holdem_bot::core::Value;
    ///
    /// assert_eq!(Some(Value::Ten), Value::from_char('T'));
    /// assert_eq!(Some(Value::Ten), Value::from_char('t'));
    /// assert_eq!(None, Value::from_char('X'));
    /// ```
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'A' => Some(Value::Ace),
            'K' => Some(Value::King),
            'Q' => Some(Value::Queen),
            'J' => Some(Value::Jack),
            'T' => Some(Value::Ten),
            '9' => Some(Value::Nine),
            '8' => Some(Value::Eight),
            '7' => Some(Value::Seven),
            '6' => Some(Value::Six),
            '5' => Some(Value::Five),
            '4' => Some(Value::Four),
            '3' => Some(Value::Three),
            '2' => Some(Value::Two),
            _ => None,
        }
    }

    /// Convert this Value to a char.
    pub fn to_char(self) -> char {
        match self {
            Value::Ace => 'A',
            Value::King => 'K',
            Value::Queen => 'Q',
            Value::Jack => 'J',
            Value::Ten => 'T',
            Value::Nine => '9',
            Value::Eight => '8',
            Value::Seven => '7',
            Value::Six => '6',
            Value::Five => '5',
            Value::Four => '4',
            Value::Three => '3',
            Value::Two => '2',
        }
    }

    /// How many ranks seperate the two values.
    ///
    /// ```
    /// use holdem_bot::core::Value;
    ///
    /// assert_eq!(1, Value::Ace.gap(Value::King));
    /// assert_eq!(12, Value::Two.gap(Value::Ace));
    /// ```
    pub fn gap(self, other: Self) -> u8 {
        (self as u8).abs_diff(other as u8)
    }
}

/// Enum for the four different suits.
/// While this has support for ordering it's not
/// sensical. The sorting is only there to allow sorting cards.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Suit {
    /// Spades
    Spade = 0,
    /// Clubs
    Club = 1,
    /// Hearts
    Heart = 2,
    /// Diamonds
    Diamond = 3,
}

/// All of the `Suit`'s in index order.
const SUITS: [Suit; 4] = [Suit::Spade, Suit::Club, Suit::Heart, Suit::Diamond];

impl Suit {
    /// Take a u8 and convert it to a suit, clamping to the last suit.
    pub fn from_u8(s: u8) -> Self {
        SUITS[usize::from(s.min(Suit::Diamond as u8))]
    }

    /// Given a character that represents a suit try and parse that char.
    /// Case is ignored.
    ///
    /// ```
    /// use holdem_bot::core::Suit;
    ///
    /// assert_eq!(Some(Suit::Spade), Suit::from_char('s'));
    /// assert_eq!(Some(Suit::Heart), Suit::from_char('H'));
    /// assert_eq!(None, Suit::from_char('x'));
    /// ```
    pub fn from_char(s: char) -> Option<Self> {
        match s.to_ascii_lowercase() {
            'd' => Some(Suit::Diamond),
            's' => Some(Suit::Spade),
            'h' => Some(Suit::Heart),
            'c' => Some(Suit::Club),
            _ => None,
        }
    }

    /// This Suit to a char
    pub fn to_char(self) -> char {
        match self {
            Suit::Diamond => 'd',
            Suit::Spade => 's',
            Suit::Heart => 'h',
            Suit::Club => 'c',
        }
    }
}

/// The main struct of this library.
/// This is a carrier for Suit and Value combined.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    /// The face value of this card.
    pub value: Value,
    /// The suit of this card.
    pub suit: Suit,
}

impl Card {
    pub const fn new(value: Value, suit: Suit) -> Self {
        Self { value, suit }
    }
}

/// Dense index of a card, `suit * 13 + value`. Used by `CardBitSet`.
impl From<Card> for u8 {
    fn from(card: Card) -> Self {
        (card.suit as u8) * 13 + (card.value as u8)
    }
}

impl From<u8> for Card {
    fn from(idx: u8) -> Self {
        Self {
            value: Value::from_u8(idx % 13),
            suit: Suit::from_u8(idx / 13),
        }
    }
}

/// Parse the two character code used in training files, eg `Ts` or `4d`.
impl TryFrom<&str> for Card {
    type Error = CardError;

    fn try_from(code: &str) -> Result<Self, Self::Error> {
        let mut chars = code.chars();
        let value = chars
            .next()
            .ok_or(CardError::TooFewChars)
            .map(Value::from_char)?
            .ok_or(CardError::UnexpectedValueChar)?;
        let suit = chars
            .next()
            .ok_or(CardError::TooFewChars)
            .map(Suit::from_char)?
            .ok_or(CardError::UnexpectedSuitChar)?;
        if chars.next().is_some() {
            return Err(CardError::UnparsedCharsRemaining);
        }
        Ok(Self { value, suit })
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value.to_char(), self.suit.to_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem;

    #[test]
    fn test_constructor() {
        let c = Card {
            value: Value::Three,
            suit: Suit::Spade,
        };
        assert_eq!(Suit::Spade, c.suit);
        assert_eq!(Value::Three, c.value);
    }

    #[test]
    fn test_compare() {
        let c1 = Card::new(Value::Three, Suit::Spade);
        let c2 = Card::new(Value::Four, Suit::Spade);
        let c3 = Card::new(Value::Four, Suit::Club);

        // Make sure that equals works
        assert!(c1 == c1);
        // Make sure that the values are ordered
        assert!(c1 < c2);
        assert!(c2 > c1);
        // Same value different suit is a different card
        assert_ne!(c2, c3);
    }

    #[test]
    fn test_value_cmp() {
        assert!(Value::Two < Value::Ace);
        assert!(Value::King < Value::Ace);
        assert_eq!(Value::Two, Value::Two);
    }

    #[test]
    fn test_from_u8() {
        assert_eq!(Value::Two, Value::from_u8(0));
        assert_eq!(Value::Ace, Value::from_u8(12));
        assert_eq!(Value::Ace, Value::from_u8(200));
    }

    #[test]
    fn test_index_round_trip_covers_deck() {
        let mut seen = std::collections::HashSet::new();
        for idx in 0..52u8 {
            let card = Card::from(idx);
            assert_eq!(idx, u8::from(card));
            assert!(seen.insert(card));
        }
        assert_eq!(52, seen.len());
    }

    #[test]
    fn test_parse() {
        assert_eq!(
            Card::new(Value::Ten, Suit::Spade),
            Card::try_from("Ts").unwrap()
        );
        assert_eq!(
            Card::new(Value::Four, Suit::Diamond),
            Card::try_from("4d").unwrap()
        );
        assert!(matches!(
            Card::try_from("Xs"),
            Err(CardError::UnexpectedValueChar)
        ));
        assert!(matches!(
            Card::try_from("Tx"),
            Err(CardError::UnexpectedSuitChar)
        ));
        assert!(matches!(Card::try_from("T"), Err(CardError::TooFewChars)));
        assert!(matches!(
            Card::try_from("Tss"),
            Err(CardError::UnparsedCharsRemaining)
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!("Ac", Card::new(Value::Ace, Suit::Club).to_string());
    }

    #[test]
    fn test_size() {
        // Card should be really small. Hopefully just two u8's
        assert!(mem::size_of::<Card>() <= 4);
    }
}
