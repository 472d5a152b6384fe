use crate::core::{Card, Value};

/// Scores a two card starting hand without looking at the board.
pub trait PreflopScorer {
    fn score(&self, hole_cards: [Card; 2]) -> f64;
}

impl<F> PreflopScorer for F
where
    F: Fn([Card; 2]) -> f64,
{
    fn score(&self, hole_cards: [Card; 2]) -> f64 {
        self(hole_cards)
    }
}

/// Bill Chen's starting hand formula.
///
/// Scores run from -1 (seven deuce off suit) to 20 (pocket aces).
#[derive(Debug, Default, Clone, Copy)]
pub struct ChenScorer;

impl PreflopScorer for ChenScorer {
    fn score(&self, hole_cards: [Card; 2]) -> f64 {
        chen_score(hole_cards)
    }
}

fn high_card_points(value: Value) -> f64 {
    match value {
        Value::Ace => 10.0,
        Value::King => 8.0,
        Value::Queen => 7.0,
        Value::Jack => 6.0,
        // Face value is the enum value plus two.
        v => f64::from(v as u8 + 2) / 2.0,
    }
}

/// Chen points for a pair of hole cards, rounded up to the next whole
/// point.
///
/// ```
/// use holdem_bot::core::Card;
/// use holdem_bot::holdem::chen_score;
///
/// let aces = [Card::try_from("As").unwrap(), Card::try_from("Ac").unwrap()];
/// assert_eq!(20.0, chen_score(aces));
/// ```
pub fn chen_score(hole_cards: [Card; 2]) -> f64 {
    let [a, b] = hole_cards;
    let (high, low) = if a.value >= b.value { (a, b) } else { (b, a) };
    let mut score = high_card_points(high.value);

    if high.value == low.value {
        score = (score * 2.0).max(5.0);
    } else {
        if high.suit == low.suit {
            score += 2.0;
        }
        // Number of ranks strictly between the two cards.
        let gap = high.value.gap(low.value) - 1;
        score -= match gap {
            0 => 0.0,
            1 => 1.0,
            2 => 2.0,
            3 => 4.0,
            _ => 5.0,
        };
        if gap <= 1 && high.value < Value::Queen {
            score += 1.0;
        }
    }

    score.ceil()
}
