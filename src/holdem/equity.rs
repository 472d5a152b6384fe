use tracing::event;

use crate::core::{CardBitSet, CardSet};

use super::{ChenScorer, EquityConfigError, HandRankOracle, PreflopScorer, StandardOracle};

/// Weight given to the improving completions on the flop.
pub const FLOP_RATE: f64 = 0.1;
/// Weight given to the improving completions on the turn.
pub const RIVER_RATE: f64 = 0.05;
/// Flop weight for the aggressive parameterisation.
pub const AGGRESSIVE_FLOP_RATE: f64 = 0.5;
/// Turn weight for the aggressive parameterisation.
pub const AGGRESSIVE_RIVER_RATE: f64 = 0.25;

/// Which completions feed the forward looking average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BlendPolicy {
    /// Only completions that score strictly higher than the known cards.
    /// When nothing improves the score is the known score.
    #[default]
    Improving,
    /// Every completion.
    Symmetric,
}

/// How an oracle classification becomes a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScoringMode {
    /// The hand category ordinal.
    #[default]
    Category,
    /// The hand category, zeroed unless the hand holds top pair.
    TopPairGated,
}

/// Tunables for the `EquityEstimator`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquityConfig {
    pub flop_rate: f64,
    pub river_rate: f64,
    pub blend: BlendPolicy,
    pub scoring: ScoringMode,
}

impl Default for EquityConfig {
    fn default() -> Self {
        Self::conservative()
    }
}

impl EquityConfig {
    pub fn conservative() -> Self {
        Self {
            flop_rate: FLOP_RATE,
            river_rate: RIVER_RATE,
            blend: BlendPolicy::Improving,
            scoring: ScoringMode::Category,
        }
    }

    pub fn aggressive() -> Self {
        Self {
            flop_rate: AGGRESSIVE_FLOP_RATE,
            river_rate: AGGRESSIVE_RIVER_RATE,
            ..Self::conservative()
        }
    }

    pub fn with_blend(self, blend: BlendPolicy) -> Self {
        Self { blend, ..self }
    }

    pub fn with_scoring(self, scoring: ScoringMode) -> Self {
        Self { scoring, ..self }
    }

    pub fn validate(&self) -> Result<(), EquityConfigError> {
        if !(self.flop_rate > 0.0 && self.flop_rate < 1.0) {
            return Err(EquityConfigError::InvalidFlopRate(self.flop_rate));
        }
        if !(self.river_rate > 0.0 && self.river_rate < 1.0) {
            return Err(EquityConfigError::InvalidRiverRate(self.river_rate));
        }
        Ok(())
    }
}

/// Betting round implied by the number of visible cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Preflop,
    Flop,
    Turn,
    River,
}

impl Stage {
    /// Stage for a count of hole plus community cards.
    pub fn from_card_count(count: usize) -> Option<Self> {
        match count {
            2 => Some(Stage::Preflop),
            5 => Some(Stage::Flop),
            6 => Some(Stage::Turn),
            7 => Some(Stage::River),
            _ => None,
        }
    }
}

/// The result of enumerating every way the board can finish.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Score of the cards already visible.
    pub known: f64,
    /// Sum of the scores that take part in the average.
    pub sum: f64,
    /// How many scores take part in the average.
    pub count: usize,
    /// How many completions were looked at.
    pub completions: usize,
    /// Highest score of any completion.
    pub best: f64,
}

impl Projection {
    fn new(known: f64) -> Self {
        Self {
            known,
            sum: 0.0,
            count: 0,
            completions: 0,
            best: f64::NEG_INFINITY,
        }
    }

    fn observe(&mut self, value: f64, blend: BlendPolicy) {
        self.completions += 1;
        self.best = self.best.max(value);
        let include = match blend {
            BlendPolicy::Improving => value > self.known,
            BlendPolicy::Symmetric => true,
        };
        if include {
            self.sum += value;
            self.count += 1;
        }
    }

    /// Mix the known score with the average of the counted completions.
    pub fn blend(&self, rate: f64) -> f64 {
        if self.count == 0 {
            self.known
        } else {
            (1.0 - rate) * self.known + rate * (self.sum / self.count as f64)
        }
    }
}

/// Stage dispatching hand scorer.
///
/// Pre-flop it asks the pre-flop scorer. On the flop and turn it blends the
/// score of the visible cards with the average score of the ways the board
/// can finish. On the river it asks the oracle directly.
#[derive(Debug, Clone)]
pub struct EquityEstimator<O = StandardOracle, P = ChenScorer> {
    config: EquityConfig,
    oracle: O,
    preflop: P,
}

impl Default for EquityEstimator {
    fn default() -> Self {
        Self::new(EquityConfig::default())
    }
}

impl EquityEstimator {
    pub fn new(config: EquityConfig) -> Self {
        Self::with_collaborators(config, StandardOracle, ChenScorer)
    }
}

impl<O, P> EquityEstimator<O, P>
where
    O: HandRankOracle,
    P: PreflopScorer,
{
    pub fn with_collaborators(config: EquityConfig, oracle: O, preflop: P) -> Self {
        Self {
            config,
            oracle,
            preflop,
        }
    }

    pub fn config(&self) -> &EquityConfig {
        &self.config
    }

    /// Score of exactly the cards given, without looking ahead.
    pub fn value(&self, cards: &CardSet) -> f64 {
        let class = self.oracle.classify(cards);
        let category = f64::from(class.category());
        match self.config.scoring {
            ScoringMode::Category => category,
            ScoringMode::TopPairGated if class.top_pair => category,
            ScoringMode::TopPairGated => 0.0,
        }
    }

    /// Score a set of hole and community cards.
    ///
    /// Card counts other than 2, 5, 6 and 7 score 0. That is a sentinel
    /// rather than a real equity, callers that compare scores have to guard
    /// against it.
    pub fn eval(&self, cards: &CardSet) -> f64 {
        let score = match Stage::from_card_count(cards.count()) {
            Some(Stage::Preflop) => match cards.hole_cards() {
                Some(hole) => self.preflop.score(hole),
                None => 0.0,
            },
            Some(Stage::Flop) => self.look_ahead(cards, self.config.flop_rate),
            Some(Stage::Turn) => self.look_ahead(cards, self.config.river_rate),
            Some(Stage::River) => self.value(cards),
            None => {
                event!(
                    tracing::Level::WARN,
                    count = cards.count(),
                    "Unsupported number of cards, scoring 0"
                );
                0.0
            }
        };
        event!(tracing::Level::TRACE, %cards, score, "Evaluated cards");
        score
    }

    fn look_ahead(&self, cards: &CardSet, rate: f64) -> f64 {
        self.project(cards)
            .map_or_else(|| self.value(cards), |projection| projection.blend(rate))
    }

    /// Enumerate every way the board can finish from the flop or the turn.
    ///
    /// On the flop that is every unordered pair of undealt cards, on the
    /// turn every single undealt card. Other stages have nothing to project
    /// and return `None`.
    pub fn project(&self, cards: &CardSet) -> Option<Projection> {
        let stage = Stage::from_card_count(cards.count())?;
        let deck = CardBitSet::remaining(cards).to_vec();
        let mut projection = Projection::new(self.value(cards));

        match stage {
            Stage::Flop => {
                for (idx, &first) in deck.iter().enumerate() {
                    let partial = cards.with(first);
                    for &second in &deck[idx + 1..] {
                        projection.observe(self.value(&partial.with(second)), self.config.blend);
                    }
                }
            }
            Stage::Turn => {
                for &card in &deck {
                    projection.observe(self.value(&cards.with(card)), self.config.blend);
                }
            }
            Stage::Preflop | Stage::River => return None,
        }

        event!(
            tracing::Level::TRACE,
            ?stage,
            known = projection.known,
            counted = projection.count,
            completions = projection.completions,
            "Projected board"
        );
        Some(projection)
    }
}
