//! Learning score cutoffs from labeled hands.
//!
//! A hand is reduced to two numbers, the score of its hole cards and the
//! score of all of its cards, and a perceptron learns which side of a
//! cutoff those numbers fall on.

mod artifact;
mod errors;
mod learner;
mod level;
mod perceptron;
mod training_data;

pub use artifact::PerceptronWeights;
#[cfg(feature = "serde")]
pub use errors::ArtifactError;
pub use errors::LearningError;
pub use learner::{CutoffLearner, EPOCHS, LEARNING_RATE, NUM_FEATURES, TrainingConfig};
pub use level::{HandQuality, LevelClassifier, LevelWeights};
pub use perceptron::{Improvement, Perceptron, TrainingExample, TrainingReport};
pub use training_data::{
    LabeledHand, featurize, hand_features, parse_training_data, read_training_data,
};
