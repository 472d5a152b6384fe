use thiserror::Error;

use crate::core::CardError;

/// Everything that can go wrong between a training file and a trained
/// classifier.
#[derive(Error, Debug)]
pub enum LearningError {
    #[error("Training set is empty")]
    EmptyTrainingSet,
    #[error("Example {index} has {found} features, expected {expected}")]
    FeatureLength {
        index: usize,
        expected: usize,
        found: usize,
    },
    #[error("Example {index} has label {label}, labels must be 0 or 1")]
    LabelOutOfRange { index: usize, label: u8 },
    #[error("Unable to read training data")]
    Io(#[from] std::io::Error),
    #[error("Training data is missing the example count")]
    MissingCount,
    #[error("Example count {0:?} is not a number")]
    InvalidCount(String),
    #[error("Expected {expected} examples but the data ends after {found}")]
    MissingExamples { expected: usize, found: usize },
    #[error("Line {line}: expected at least two cards followed by a label")]
    TooFewTokens { line: usize },
    #[error("Line {line}: label {label:?} must be 0 or 1")]
    InvalidLabel { line: usize, label: String },
    #[error("Line {line}: {source}")]
    InvalidCard {
        line: usize,
        #[source]
        source: CardError,
    },
}

/// Failure reading or writing a stored set of weights.
#[cfg(feature = "serde")]
#[derive(Error, Debug)]
pub enum ArtifactError {
    #[error("Unable to access weights file")]
    Io(#[from] std::io::Error),
    #[error("Unable to encode or decode weights")]
    Json(#[from] serde_json::Error),
    #[error("Weights have {found} features, expected {expected}")]
    FeatureLength { expected: usize, found: usize },
}
