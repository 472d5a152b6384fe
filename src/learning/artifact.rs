use super::Perceptron;

/// The trained state of a perceptron in a storable form.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PerceptronWeights {
    pub bias: f64,
    pub weights: Vec<f64>,
}

impl From<&Perceptron> for PerceptronWeights {
    fn from(value: &Perceptron) -> Self {
        Self {
            bias: value.bias(),
            weights: value.weights().to_vec(),
        }
    }
}

impl From<PerceptronWeights> for Perceptron {
    fn from(value: PerceptronWeights) -> Self {
        Perceptron::new(value.bias, value.weights)
    }
}

impl PerceptronWeights {
    pub fn num_features(&self) -> usize {
        self.weights.len()
    }
}

#[cfg(feature = "serde")]
pub(crate) mod json {
    use std::{
        fs::File,
        io::{BufReader, BufWriter, Write},
        path::Path,
    };

    use serde::{Serialize, de::DeserializeOwned};
    use tracing::event;

    use super::PerceptronWeights;
    use crate::learning::ArtifactError;

    /// Write `value` as pretty JSON, flushing before returning so write
    /// errors are not lost on drop.
    pub(crate) fn write_json<T: Serialize, P: AsRef<Path>>(
        value: &T,
        path: P,
    ) -> Result<(), ArtifactError> {
        let mut writer = BufWriter::new(File::create(path.as_ref())?);
        serde_json::to_writer_pretty(&mut writer, value)?;
        writer.flush()?;
        event!(
            tracing::Level::DEBUG,
            path = %path.as_ref().display(),
            "Saved weights"
        );
        Ok(())
    }

    pub(crate) fn read_json<T: DeserializeOwned, P: AsRef<Path>>(
        path: P,
    ) -> Result<T, ArtifactError> {
        let value = serde_json::from_reader(BufReader::new(File::open(path.as_ref())?))?;
        event!(
            tracing::Level::DEBUG,
            path = %path.as_ref().display(),
            "Loaded weights"
        );
        Ok(value)
    }

    impl PerceptronWeights {
        pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ArtifactError> {
            write_json(self, path)
        }

        pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ArtifactError> {
            read_json(path)
        }

        /// Load and check that the weights match `num_features` inputs.
        pub fn load_with_features<P: AsRef<Path>>(
            path: P,
            num_features: usize,
        ) -> Result<Self, ArtifactError> {
            let weights = Self::load(path)?;
            weights.check_features(num_features)?;
            Ok(weights)
        }

        pub fn check_features(&self, num_features: usize) -> Result<(), ArtifactError> {
            if self.num_features() != num_features {
                return Err(ArtifactError::FeatureLength {
                    expected: num_features,
                    found: self.num_features(),
                });
            }
            Ok(())
        }
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::learning::ArtifactError;

    #[test]
    fn test_perceptron_conversion() {
        let p = Perceptron::new(-0.25, vec![1.5, -2.0]);
        let weights = PerceptronWeights::from(&p);
        assert_relative_eq!(-0.25, weights.bias);
        assert_eq!(p, Perceptron::from(weights));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("weights.json");
        let weights = PerceptronWeights {
            bias: 0.125,
            weights: vec![3.5, -7.25],
        };
        weights.save(&path).unwrap();

        assert_eq!(weights, PerceptronWeights::load(&path).unwrap());
        assert_eq!(
            weights,
            PerceptronWeights::load_with_features(&path, 2).unwrap()
        );
        assert!(matches!(
            PerceptronWeights::load_with_features(&path, 3),
            Err(ArtifactError::FeatureLength {
                expected: 3,
                found: 2
            })
        ));
    }

    #[test]
    fn test_load_failures() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            PerceptronWeights::load(dir.path().join("missing.json")),
            Err(ArtifactError::Io(_))
        ));

        let path = dir.path().join("garbage.json");
        std::fs::write(&path, "{\"bias\": ").unwrap();
        assert!(matches!(
            PerceptronWeights::load(&path),
            Err(ArtifactError::Json(_))
        ));
    }
}
