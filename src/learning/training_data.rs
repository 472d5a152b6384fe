use std::path::Path;

use crate::core::{Card, CardSet};
use crate::holdem::{EquityEstimator, HandRankOracle, PreflopScorer};

use super::{LearningError, TrainingExample};

/// A hand of cards and whether it should clear the cutoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabeledHand {
    pub cards: CardSet,
    pub label: u8,
}

/// Parse training data.
///
/// The first line is the number of examples. Each following line holds
/// whitespace separated card codes and ends with a `0` or `1` label. The
/// first two cards are the hole cards. Anything after the promised number
/// of examples is ignored.
///
/// ```
/// use holdem_bot::learning::parse_training_data;
///
/// let hands = parse_training_data("2\nAs Kd 1\nTs Tc As Ac 4d 0\n").unwrap();
/// assert_eq!(2, hands.len());
/// assert_eq!(5, hands[1].cards.count());
/// ```
pub fn parse_training_data(input: &str) -> Result<Vec<LabeledHand>, LearningError> {
    let mut lines = input.lines();
    let count_line = lines
        .next()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .ok_or(LearningError::MissingCount)?;
    let expected: usize = count_line
        .parse()
        .map_err(|_| LearningError::InvalidCount(count_line.to_string()))?;

    let mut hands = Vec::with_capacity(expected);
    for (idx, text) in lines.take(expected).enumerate() {
        // Line numbers are 1 based and the count takes line 1.
        hands.push(parse_line(text, idx + 2)?);
    }

    if hands.len() < expected {
        return Err(LearningError::MissingExamples {
            expected,
            found: hands.len(),
        });
    }
    Ok(hands)
}

fn parse_line(text: &str, line: usize) -> Result<LabeledHand, LearningError> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let Some((label_token, card_tokens)) = tokens.split_last() else {
        return Err(LearningError::TooFewTokens { line });
    };
    if card_tokens.len() < 2 {
        return Err(LearningError::TooFewTokens { line });
    }

    let label = match *label_token {
        "0" => 0,
        "1" => 1,
        other => {
            return Err(LearningError::InvalidLabel {
                line,
                label: other.to_string(),
            });
        }
    };

    let cards = card_tokens
        .iter()
        .map(|t| Card::try_from(*t))
        .collect::<Result<Vec<_>, _>>()
        .and_then(CardSet::new_with_cards)
        .map_err(|source| LearningError::InvalidCard { line, source })?;

    Ok(LabeledHand { cards, label })
}

/// Read and parse a training data file.
pub fn read_training_data<P: AsRef<Path>>(path: P) -> Result<Vec<LabeledHand>, LearningError> {
    let input = std::fs::read_to_string(path)?;
    parse_training_data(&input)
}

/// `[score of the hole cards, score of every card]`, or `None` when there
/// are no hole cards.
pub fn hand_features<O, P>(estimator: &EquityEstimator<O, P>, cards: &CardSet) -> Option<[f64; 2]>
where
    O: HandRankOracle,
    P: PreflopScorer,
{
    let hole = CardSet::new_with_cards(cards.hole_cards()?).ok()?;
    Some([estimator.eval(&hole), estimator.eval(cards)])
}

/// Turn a labeled hand into a perceptron example.
pub fn featurize<O, P>(
    estimator: &EquityEstimator<O, P>,
    hand: &LabeledHand,
) -> Option<TrainingExample>
where
    O: HandRankOracle,
    P: PreflopScorer,
{
    hand_features(estimator, &hand.cards)
        .map(|features| TrainingExample::new(features.to_vec(), hand.label))
}
