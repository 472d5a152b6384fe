#[cfg(feature = "serde")]
use std::path::Path;

use crate::core::CardSet;
use crate::holdem::{EquityEstimator, HandRankOracle, PreflopScorer};

#[cfg(feature = "serde")]
use super::artifact::json::{read_json, write_json};
#[cfg(feature = "serde")]
use super::{ArtifactError, NUM_FEATURES};
use super::{Perceptron, PerceptronWeights, hand_features};

/// Coarse bucket for how good a hand is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HandQuality {
    Bad = 0,
    Decent = 1,
    Good = 2,
}

/// Two stacked cutoffs. `lower` separates bad hands from the rest and
/// `upper` separates good hands from decent ones.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelClassifier {
    lower: Perceptron,
    upper: Perceptron,
}

impl LevelClassifier {
    pub fn new(lower: Perceptron, upper: Perceptron) -> Self {
        Self { lower, upper }
    }

    pub fn lower(&self) -> &Perceptron {
        &self.lower
    }

    pub fn upper(&self) -> &Perceptron {
        &self.upper
    }

    pub fn classify_features(&self, features: &[f64]) -> HandQuality {
        if self.lower.output(features) == 0 {
            HandQuality::Bad
        } else if self.upper.output(features) == 1 {
            HandQuality::Good
        } else {
            HandQuality::Decent
        }
    }

    /// `None` when the cards have no hole cards to score.
    pub fn level<O, P>(
        &self,
        estimator: &EquityEstimator<O, P>,
        cards: &CardSet,
    ) -> Option<HandQuality>
    where
        O: HandRankOracle,
        P: PreflopScorer,
    {
        hand_features(estimator, cards).map(|features| self.classify_features(&features))
    }
}

/// Stored form of a `LevelClassifier`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelWeights {
    pub lower: PerceptronWeights,
    pub upper: PerceptronWeights,
}

impl From<&LevelClassifier> for LevelWeights {
    fn from(value: &LevelClassifier) -> Self {
        Self {
            lower: PerceptronWeights::from(&value.lower),
            upper: PerceptronWeights::from(&value.upper),
        }
    }
}

impl From<LevelWeights> for LevelClassifier {
    fn from(value: LevelWeights) -> Self {
        Self::new(value.lower.into(), value.upper.into())
    }
}

#[cfg(feature = "serde")]
impl LevelWeights {
    pub fn check_features(&self, num_features: usize) -> Result<(), ArtifactError> {
        self.lower.check_features(num_features)?;
        self.upper.check_features(num_features)
    }
}

#[cfg(feature = "serde")]
impl LevelClassifier {
    pub fn save<Q: AsRef<Path>>(&self, path: Q) -> Result<(), ArtifactError> {
        write_json(&LevelWeights::from(self), path)
    }

    /// Load a classifier saved with `save`. Both halves must take the two
    /// hand features.
    pub fn load<Q: AsRef<Path>>(path: Q) -> Result<Self, ArtifactError> {
        let weights: LevelWeights = read_json(path)?;
        weights.check_features(NUM_FEATURES)?;
        Ok(weights.into())
    }

    /// Build a classifier from two separately saved perceptrons.
    pub fn from_weight_files<Q: AsRef<Path>, R: AsRef<Path>>(
        lower: Q,
        upper: R,
    ) -> Result<Self, ArtifactError> {
        Ok(Self::from(LevelWeights {
            lower: PerceptronWeights::load_with_features(lower, NUM_FEATURES)?,
            upper: PerceptronWeights::load_with_features(upper, NUM_FEATURES)?,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::holdem::EquityConfig;

    fn classifier() -> LevelClassifier {
        // Decent from a whole hand score of 1, good from 3.
        LevelClassifier::new(
            Perceptron::new(-1.0, vec![0.0, 1.0]),
            Perceptron::new(-3.0, vec![0.0, 1.0]),
        )
    }

    #[test]
    fn test_buckets() {
        let c = classifier();
        assert_eq!(HandQuality::Bad, c.classify_features(&[10.0, 0.0]));
        assert_eq!(HandQuality::Decent, c.classify_features(&[10.0, 1.0]));
        assert_eq!(HandQuality::Decent, c.classify_features(&[10.0, 2.0]));
        assert_eq!(HandQuality::Good, c.classify_features(&[10.0, 3.0]));
        assert!(HandQuality::Bad < HandQuality::Good);
    }

    #[test]
    fn test_untrained_is_good() {
        let c = LevelClassifier::new(Perceptron::untrained(2), Perceptron::untrained(2));
        assert_eq!(HandQuality::Good, c.classify_features(&[-5.0, -5.0]));
    }

    #[test]
    fn test_level_of_cards() {
        let estimator = EquityEstimator::new(EquityConfig::default());
        let c = classifier();
        let river = |s: &str| CardSet::new_from_str(s).unwrap();

        assert_eq!(
            Some(HandQuality::Bad),
            c.level(&estimator, &river("7c2d 9h Js Kd 4c 3h"))
        );
        assert_eq!(
            Some(HandQuality::Decent),
            c.level(&estimator, &river("7c7d 9h Js Kd 4c 3h"))
        );
        assert_eq!(
            Some(HandQuality::Good),
            c.level(&estimator, &river("7c7d 7h Js Kd 4c 3h"))
        );
        assert_eq!(None, c.level(&estimator, &CardSet::new()));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("levels.json");
        let c = classifier();
        c.save(&path).unwrap();
        assert_eq!(c, LevelClassifier::load(&path).unwrap());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_load_rejects_wrong_feature_count() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("levels.json");
        let json = concat!(
            r#"{"lower":{"bias":-1.0,"weights":[0.0]},"#,
            r#""upper":{"bias":-3.0,"weights":[0.0,1.0,5.0]}}"#,
        );
        std::fs::write(&path, json).unwrap();
        assert!(matches!(
            LevelClassifier::load(&path),
            Err(ArtifactError::FeatureLength {
                expected: 2,
                found: 1
            })
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_weight_files() {
        let dir = tempfile::tempdir().unwrap();
        let lower = dir.path().join("lower.json");
        let upper = dir.path().join("upper.json");
        let c = classifier();
        PerceptronWeights::from(c.lower()).save(&lower).unwrap();
        PerceptronWeights::from(c.upper()).save(&upper).unwrap();
        assert_eq!(c, LevelClassifier::from_weight_files(&lower, &upper).unwrap());

        PerceptronWeights {
            bias: 0.0,
            weights: vec![1.0],
        }
        .save(&upper)
        .unwrap();
        assert!(matches!(
            LevelClassifier::from_weight_files(&lower, &upper),
            Err(ArtifactError::FeatureLength { .. })
        ));
    }
}
