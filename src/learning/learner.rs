use std::path::Path;

use rand::Rng;
use tracing::event;

use crate::holdem::{EquityEstimator, HandRankOracle, PreflopScorer};

use super::{
    LearningError, LevelClassifier, Perceptron, TrainingExample, TrainingReport, featurize,
    read_training_data,
};

pub const LEARNING_RATE: f64 = 0.5;
pub const EPOCHS: usize = 2_000_000;
/// `[score of the hole cards, score of every card]`
pub const NUM_FEATURES: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrainingConfig {
    pub learning_rate: f64,
    pub epochs: usize,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            learning_rate: LEARNING_RATE,
            epochs: EPOCHS,
        }
    }
}

/// Learns where a cutoff lies from labeled hands.
///
/// Each hand is turned into two features with the estimator and a
/// perceptron is fit to them.
#[derive(Debug, Clone)]
pub struct CutoffLearner<'a, O, P> {
    estimator: &'a EquityEstimator<O, P>,
    config: TrainingConfig,
}

impl<'a, O, P> CutoffLearner<'a, O, P>
where
    O: HandRankOracle,
    P: PreflopScorer,
{
    pub fn new(estimator: &'a EquityEstimator<O, P>, config: TrainingConfig) -> Self {
        Self { estimator, config }
    }

    pub fn config(&self) -> &TrainingConfig {
        &self.config
    }

    /// Read a training file and featurize every hand in it.
    pub fn examples_from_file<Q: AsRef<Path>>(
        &self,
        path: Q,
    ) -> Result<Vec<TrainingExample>, LearningError> {
        let hands = read_training_data(path)?;
        Ok(hands
            .iter()
            .filter_map(|hand| featurize(self.estimator, hand))
            .collect())
    }

    pub fn learn<R: Rng>(
        &self,
        examples: &[TrainingExample],
        rng: &mut R,
    ) -> Result<(Perceptron, TrainingReport), LearningError> {
        let mut perceptron = Perceptron::untrained(NUM_FEATURES);
        let report = perceptron.train_with_rng(
            examples,
            self.config.learning_rate,
            self.config.epochs,
            rng,
        )?;
        event!(
            tracing::Level::DEBUG,
            examples = examples.len(),
            best_error = ?report.best_error(),
            best_epoch = ?report.best_epoch(),
            "Learned cutoff"
        );
        Ok((perceptron, report))
    }

    pub fn learn_from_file<Q: AsRef<Path>, R: Rng>(
        &self,
        path: Q,
        rng: &mut R,
    ) -> Result<(Perceptron, TrainingReport), LearningError> {
        let examples = self.examples_from_file(path)?;
        self.learn(&examples, rng)
    }

    /// Learn both halves of a `LevelClassifier`.
    ///
    /// `lower` labels hands worth playing with 1, `upper` labels hands
    /// worth betting with 1.
    pub fn learn_levels<Q: AsRef<Path>, S: AsRef<Path>, R: Rng>(
        &self,
        lower: Q,
        upper: S,
        rng: &mut R,
    ) -> Result<(LevelClassifier, [TrainingReport; 2]), LearningError> {
        let (lower, lower_report) = self.learn_from_file(lower, rng)?;
        let (upper, upper_report) = self.learn_from_file(upper, rng)?;
        Ok((
            LevelClassifier::new(lower, upper),
            [lower_report, upper_report],
        ))
    }

    /// Like `learn_from_file` but a bad file only gets logged. The result
    /// is then the all zero perceptron, which accepts every hand.
    pub fn learn_from_file_or_untrained<Q: AsRef<Path>, R: Rng>(
        &self,
        path: Q,
        rng: &mut R,
    ) -> Perceptron {
        let path = path.as_ref();
        match self.learn_from_file(path, rng) {
            Ok((perceptron, _)) => perceptron,
            Err(error) => {
                event!(
                    tracing::Level::ERROR,
                    path = %path.display(),
                    %error,
                    "Unable to learn cutoff, using untrained weights"
                );
                Perceptron::untrained(NUM_FEATURES)
            }
        }
    }
}
