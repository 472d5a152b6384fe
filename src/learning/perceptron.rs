use rand::Rng;
use tracing::event;

use super::LearningError;

/// One labeled point for the perceptron.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrainingExample {
    pub features: Vec<f64>,
    /// 0 or 1
    pub label: u8,
}

impl TrainingExample {
    pub fn new(features: Vec<f64>, label: u8) -> Self {
        Self { features, label }
    }
}

/// A new best training error seen during training.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Improvement {
    pub epoch: usize,
    pub total_error: usize,
}

/// What happened while training.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TrainingReport {
    /// Number of passes over the examples.
    pub epochs: usize,
    /// Every time the total error hit a new low, in epoch order.
    pub improvements: Vec<Improvement>,
    /// Total error after the final epoch, before the weights are rolled
    /// back to the best snapshot.
    pub last_error: Option<usize>,
}

impl TrainingReport {
    /// Lowest total error of any epoch.
    pub fn best_error(&self) -> Option<usize> {
        self.improvements.last().map(|i| i.total_error)
    }

    /// Epoch whose weights were kept.
    pub fn best_epoch(&self) -> Option<usize> {
        self.improvements.last().map(|i| i.epoch)
    }
}

/// Binary linear threshold unit.
///
/// Outputs 1 when `bias + weights · x` is at least zero, otherwise 0.
#[derive(Debug, Clone, PartialEq)]
pub struct Perceptron {
    bias: f64,
    weights: Vec<f64>,
}

impl Perceptron {
    pub fn new(bias: f64, weights: Vec<f64>) -> Self {
        Self { bias, weights }
    }

    /// All zero weights. This always outputs 1.
    pub fn untrained(num_features: usize) -> Self {
        Self::new(0.0, vec![0.0; num_features])
    }

    pub fn bias(&self) -> f64 {
        self.bias
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// `bias + weights · x`
    ///
    /// `x` must have one entry per weight.
    pub fn activation(&self, x: &[f64]) -> f64 {
        debug_assert_eq!(
            self.weights.len(),
            x.len(),
            "feature vector does not match the weights"
        );
        self.bias
            + self
                .weights
                .iter()
                .zip(x)
                .map(|(w, x)| w * x)
                .sum::<f64>()
    }

    /// Classify a feature vector. The threshold is inclusive.
    ///
    /// ```
    /// use holdem_bot::learning::Perceptron;
    ///
    /// let p = Perceptron::new(-1.0, vec![1.0, 0.0]);
    /// assert_eq!(1, p.output(&[1.0, 5.0]));
    /// assert_eq!(0, p.output(&[0.5, 5.0]));
    /// ```
    pub fn output(&self, x: &[f64]) -> u8 {
        if self.activation(x) >= 0.0 { 1 } else { 0 }
    }

    /// Sum of `|label - output|` over the examples.
    pub fn total_error(&self, examples: &[TrainingExample]) -> usize {
        examples
            .iter()
            .map(|ex| usize::from(ex.label.abs_diff(self.output(&ex.features))))
            .sum()
    }

    /// Train with the thread rng. See `train_with_rng`.
    pub fn train(
        &mut self,
        examples: &[TrainingExample],
        learning_rate: f64,
        epochs: usize,
    ) -> Result<TrainingReport, LearningError> {
        self.train_with_rng(examples, learning_rate, epochs, &mut rand::rng())
    }

    /// Train from scratch.
    ///
    /// The bias and weights start as uniform random values in `[0, 1)`.
    /// Epoch `i` walks the examples starting at offset `i mod len`. After
    /// each epoch the total error is measured with the updated weights and
    /// the weights are snapshotted whenever that error is a new low. Once
    /// every epoch has run the weights are rolled back to the best
    /// snapshot, so the result is the lowest error seen, not the last.
    pub fn train_with_rng<R: Rng>(
        &mut self,
        examples: &[TrainingExample],
        learning_rate: f64,
        epochs: usize,
        rng: &mut R,
    ) -> Result<TrainingReport, LearningError> {
        let num_features = validate(examples)?;
        let num_examples = examples.len();

        self.bias = rng.random::<f64>();
        self.weights = (0..num_features).map(|_| rng.random::<f64>()).collect();

        let mut best_bias = self.bias;
        let mut best_weights = self.weights.clone();
        let mut best_error = usize::MAX;
        let mut report = TrainingReport {
            epochs,
            ..TrainingReport::default()
        };

        for epoch in 0..epochs {
            for z in 0..num_examples {
                let example = &examples[(z + epoch) % num_examples];
                let error = f64::from(example.label) - f64::from(self.output(&example.features));
                if error == 0.0 {
                    continue;
                }
                self.bias += learning_rate * error;
                for (w, x) in self.weights.iter_mut().zip(&example.features) {
                    *w += learning_rate * error * x;
                }
            }

            let total_error = self.total_error(examples);
            report.last_error = Some(total_error);
            if total_error < best_error {
                best_error = total_error;
                best_bias = self.bias;
                best_weights.clone_from(&self.weights);
                report.improvements.push(Improvement { epoch, total_error });
                event!(
                    tracing::Level::DEBUG,
                    epoch,
                    total_error,
                    bias = self.bias,
                    weights = ?self.weights,
                    "New best training error"
                );
            }
        }

        self.bias = best_bias;
        self.weights = best_weights;
        event!(
            tracing::Level::DEBUG,
            bias = self.bias,
            weights = ?self.weights,
            best_error = ?report.best_error(),
            "Finished training"
        );
        Ok(report)
    }
}

/// Check the examples can be trained on and return the feature count.
fn validate(examples: &[TrainingExample]) -> Result<usize, LearningError> {
    let expected = examples
        .first()
        .map(|ex| ex.features.len())
        .ok_or(LearningError::EmptyTrainingSet)?;
    for (index, ex) in examples.iter().enumerate() {
        if ex.features.len() != expected {
            return Err(LearningError::FeatureLength {
                index,
                expected,
                found: ex.features.len(),
            });
        }
        if ex.label > 1 {
            return Err(LearningError::LabelOutOfRange {
                index,
                label: ex.label,
            });
        }
    }
    Ok(expected)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    fn examples(points: &[(f64, f64, u8)]) -> Vec<TrainingExample> {
        points
            .iter()
            .map(|&(a, b, label)| TrainingExample::new(vec![a, b], label))
            .collect()
    }

    #[test]
    fn test_output_boundary_is_inclusive() {
        let p = Perceptron::new(-2.0, vec![1.0, 1.0]);
        assert_eq!(1, p.output(&[1.0, 1.0]));
        assert_eq!(0, p.output(&[1.0, 0.5]));
        assert_relative_eq!(0.0, p.activation(&[1.0, 1.0]));
    }

    #[test]
    #[should_panic]
    #[cfg(debug_assertions)]
    fn test_short_feature_vector_panics() {
        Perceptron::new(-1.0, vec![0.0, 1.0]).output(&[10.0]);
    }

    #[test]
    fn test_zero_vector_outputs_one() {
        let p = Perceptron::untrained(2);
        assert_eq!(1, p.output(&[0.0, 0.0]));
        assert_eq!(1, p.output(&[-100.0, 42.0]));
        assert_eq!(1, Perceptron::new(0.0, vec![3.0, -2.0]).output(&[0.0, 0.0]));
    }

    #[test_log::test]
    fn test_learns_separable_data() {
        // Label is 1 when a + b >= 10.
        let data = examples(&[
            (1.0, 2.0, 0),
            (3.0, 2.0, 0),
            (1.0, 1.0, 0),
            (8.0, 7.0, 1),
            (9.0, 9.0, 1),
            (2.0, 1.0, 0),
            (7.0, 8.0, 1),
            (9.0, 6.0, 1),
        ]);
        let mut rng = StdRng::seed_from_u64(420);
        let mut p = Perceptron::untrained(2);
        let report = p.train_with_rng(&data, 0.5, 10_000, &mut rng).unwrap();

        assert_eq!(Some(0), report.best_error());
        assert_eq!(0, p.total_error(&data));
        assert_eq!(2, p.weights().len());
    }

    #[test_log::test]
    fn test_best_error_never_increases_and_is_kept() {
        // XOR can't be separated so training keeps bouncing around.
        let data = examples(&[
            (0.0, 0.0, 0),
            (1.0, 1.0, 0),
            (0.0, 1.0, 1),
            (1.0, 0.0, 1),
            (2.0, 2.0, 0),
            (2.0, 0.0, 1),
        ]);
        let mut rng = StdRng::seed_from_u64(7);
        let mut p = Perceptron::untrained(2);
        let report = p.train_with_rng(&data, 0.5, 500, &mut rng).unwrap();

        assert!(!report.improvements.is_empty());
        for pair in report.improvements.windows(2) {
            assert!(pair[1].total_error < pair[0].total_error);
            assert!(pair[1].epoch > pair[0].epoch);
        }
        // The kept weights are the snapshot with the best error.
        assert_eq!(report.best_error(), Some(p.total_error(&data)));
        assert!(report.last_error.unwrap() >= report.best_error().unwrap());
    }

    #[test]
    fn test_same_seed_same_weights() {
        let data = examples(&[(1.0, 0.0, 0), (5.0, 6.0, 1), (0.0, 2.0, 0), (6.0, 5.0, 1)]);
        let mut a = Perceptron::untrained(2);
        let mut b = Perceptron::untrained(2);
        a.train_with_rng(&data, 0.1, 50, &mut StdRng::seed_from_u64(1))
            .unwrap();
        b.train_with_rng(&data, 0.1, 50, &mut StdRng::seed_from_u64(1))
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_epochs_keeps_random_start() {
        let data = examples(&[(1.0, 1.0, 1)]);
        let mut p = Perceptron::untrained(2);
        let report = p
            .train_with_rng(&data, 0.5, 0, &mut StdRng::seed_from_u64(3))
            .unwrap();
        assert_eq!(None, report.best_error());
        assert!((0.0..1.0).contains(&p.bias()));
        assert!(p.weights().iter().all(|w| (0.0..1.0).contains(w)));
    }

    #[test]
    fn test_handles_any_number_of_features() {
        let data = vec![
            TrainingExample::new(vec![1.0, 0.0, 0.0, 4.0], 1),
            TrainingExample::new(vec![0.0, 0.0, -3.0, -4.0], 0),
        ];
        let mut p = Perceptron::untrained(0);
        p.train_with_rng(&data, 0.5, 100, &mut StdRng::seed_from_u64(9))
            .unwrap();
        assert_eq!(4, p.weights().len());
        assert_eq!(0, p.total_error(&data));
    }

    #[test]
    fn test_rejects_bad_input() {
        let mut p = Perceptron::untrained(2);
        assert!(matches!(
            p.train(&[], 0.5, 10),
            Err(LearningError::EmptyTrainingSet)
        ));

        let ragged = vec![
            TrainingExample::new(vec![1.0, 2.0], 0),
            TrainingExample::new(vec![1.0], 1),
        ];
        assert!(matches!(
            p.train(&ragged, 0.5, 10),
            Err(LearningError::FeatureLength {
                index: 1,
                expected: 2,
                found: 1
            })
        ));

        let bad_label = vec![TrainingExample::new(vec![1.0, 2.0], 2)];
        assert!(matches!(
            p.train(&bad_label, 0.5, 10),
            Err(LearningError::LabelOutOfRange { index: 0, label: 2 })
        ));
    }
}
