//! Two-layer sigmoid network trained sample by sample
//!
//! The network owns an ordered set of hidden units, each reading the full
//! feature vector, and an ordered set of output units, each reading the full
//! hidden activation vector.
//!
//! # Hidden-layer update
//!
//! Hidden units are not trained with textbook backpropagation. After the
//! output units take their step, one scalar
//!
//! ```text
//! e = Σ_j o_j * (t_j - o_j)
//! ```
//!
//! is computed from the pre-update output activations and handed to every
//! hidden unit as its training target. The output-layer weights never enter
//! the hidden update. Weights trained on deployed devices depend on this
//! rule, so it is kept as-is.

use crate::config::NetworkConfig;
use crate::error::{NetworkError, Result};
use crate::layers::{Unit, UnitConfig};
use crate::utils::SimpleRng;
use log::{debug, info, trace, warn};

/// One training example: a feature vector and one target per output unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub features: Vec<f64>,
    pub targets: Vec<f64>,
}

impl Sample {
    pub fn new(features: Vec<f64>, targets: Vec<f64>) -> Self {
        Self { features, targets }
    }
}

/// Feed-forward network with one hidden and one output layer of sigmoid units.
///
/// # Example
///
/// ```
/// use adaptive_mlp::layers::UnitConfig;
/// use adaptive_mlp::network::{Network, Sample};
/// use adaptive_mlp::utils::SimpleRng;
///
/// let mut rng = SimpleRng::new(42);
/// let mut network = Network::new(2, 3, 2, UnitConfig::default(), &mut rng).unwrap();
///
/// let dataset = vec![
///     Sample::new(vec![1.0, 0.0], vec![1.0, 0.0]),
///     Sample::new(vec![0.0, 1.0], vec![0.0, 1.0]),
/// ];
/// network.train(&dataset, 10).unwrap();
/// assert!(network.predict(&[1.0, 0.0]).unwrap() < 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Network {
    hidden_units: Vec<Unit>,
    output_units: Vec<Unit>,
}

impl Network {
    /// Build a network with `input_size` features, `hidden_size` hidden units
    /// and `output_size` output units.
    ///
    /// Hidden units draw their initial parameters from `rng` first, then the
    /// output units, each in index order.
    ///
    /// # Errors
    ///
    /// `InvalidArchitecture` if any of the three sizes is zero, and
    /// `InvalidConfig` if the Adam hyperparameters in `config` are out of range.
    pub fn new(
        input_size: usize,
        hidden_size: usize,
        output_size: usize,
        config: UnitConfig,
        rng: &mut SimpleRng,
    ) -> Result<Self> {
        for (name, size) in [
            ("input_size", input_size),
            ("hidden_size", hidden_size),
            ("output_size", output_size),
        ] {
            if size == 0 {
                return Err(NetworkError::InvalidArchitecture(format!(
                    "{} must be at least 1",
                    name
                )));
            }
        }
        config.validate()?;

        let hidden_units = (0..hidden_size)
            .map(|_| Unit::new(input_size, config, rng))
            .collect();
        let output_units = (0..output_size)
            .map(|_| Unit::new(hidden_size, config, rng))
            .collect();

        Ok(Self {
            hidden_units,
            output_units,
        })
    }

    /// Build a network from a validated configuration, seeding a fresh
    /// generator with `config.seed`.
    pub fn from_config(config: &NetworkConfig) -> Result<Self> {
        config.validate()?;
        let mut rng = SimpleRng::new(config.seed);
        Self::new(
            config.input_size,
            config.hidden_size,
            config.output_size,
            config.unit_config(),
            &mut rng,
        )
    }

    /// Feature dimension `d`.
    pub fn input_size(&self) -> usize {
        self.hidden_units[0].input_size()
    }

    /// Hidden unit count `h`.
    pub fn hidden_size(&self) -> usize {
        self.hidden_units.len()
    }

    /// Output unit count `k`.
    pub fn output_size(&self) -> usize {
        self.output_units.len()
    }

    pub fn hidden_units(&self) -> &[Unit] {
        &self.hidden_units
    }

    pub fn output_units(&self) -> &[Unit] {
        &self.output_units
    }

    /// Total number of weights and biases.
    pub fn parameter_count(&self) -> usize {
        self.units().map(Unit::parameter_count).sum()
    }

    /// Compute `(hidden_activations, output_activations)` for `features`.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if `features.len()` differs from `input_size()`.
    pub fn forward(&self, features: &[f64]) -> Result<(Vec<f64>, Vec<f64>)> {
        let hidden = self
            .hidden_units
            .iter()
            .map(|unit| unit.activate(features))
            .collect::<Result<Vec<f64>>>()?;
        let outputs = self
            .output_units
            .iter()
            .map(|unit| unit.activate(&hidden))
            .collect::<Result<Vec<f64>>>()?;
        Ok((hidden, outputs))
    }

    /// Index of the largest output activation; the first maximum wins ties.
    pub fn predict(&self, features: &[f64]) -> Result<usize> {
        let (_, outputs) = self.forward(features)?;
        Ok(argmax(&outputs))
    }

    /// Train for `epochs` passes over `dataset` in its given order.
    ///
    /// Every sample is checked against the network dimensions before any
    /// parameter changes, so a malformed dataset leaves the network intact.
    /// `epochs == 0` is a no-op.
    pub fn train(&mut self, dataset: &[Sample], epochs: usize) -> Result<()> {
        self.validate_dataset(dataset)?;
        info!(
            "Training {}-{}-{} network: {} samples x {} epochs",
            self.input_size(),
            self.hidden_size(),
            self.output_size(),
            dataset.len(),
            epochs
        );

        let mut loss = f64::NAN;
        for epoch in 0..epochs {
            loss = self.run_epoch(dataset)?;
            debug!("Epoch {}, Error: {:.6}", epoch + 1, loss);
        }

        if epochs > 0 {
            info!("Training finished, final epoch error {:.6}", loss);
        }
        Ok(())
    }

    /// One pass over `dataset`, returning the mean squared output error
    /// measured before each sample's update.
    pub fn train_epoch(&mut self, dataset: &[Sample]) -> Result<f64> {
        self.validate_dataset(dataset)?;
        self.run_epoch(dataset)
    }

    /// All parameters in a flat sequence: hidden units then output units,
    /// each contributing its weights followed by its bias.
    pub fn parameters(&self) -> Vec<f64> {
        let mut parameters = Vec::with_capacity(self.parameter_count());
        for unit in self.units() {
            parameters.extend_from_slice(unit.weights());
            parameters.push(unit.bias());
        }
        parameters
    }

    /// Restore parameters produced by `parameters()`.
    ///
    /// Optimizer moments and step counters are left as they are.
    ///
    /// # Errors
    ///
    /// `ParameterCount` if `parameters` has the wrong length; nothing is
    /// modified in that case.
    pub fn set_parameters(&mut self, parameters: &[f64]) -> Result<()> {
        let expected = self.parameter_count();
        if parameters.len() != expected {
            return Err(NetworkError::ParameterCount {
                expected,
                actual: parameters.len(),
            });
        }

        let mut offset = 0;
        for unit in self
            .hidden_units
            .iter_mut()
            .chain(self.output_units.iter_mut())
        {
            let input_size = unit.input_size();
            let weights = &parameters[offset..offset + input_size];
            let bias = parameters[offset + input_size];
            unit.set_parameters(weights, bias);
            offset += input_size + 1;
        }
        Ok(())
    }

    fn units(&self) -> impl Iterator<Item = &Unit> {
        self.hidden_units.iter().chain(self.output_units.iter())
    }

    fn validate_dataset(&self, dataset: &[Sample]) -> Result<()> {
        for sample in dataset {
            if sample.features.len() != self.input_size() {
                return Err(NetworkError::DimensionMismatch {
                    expected: self.input_size(),
                    actual: sample.features.len(),
                });
            }
            if sample.targets.len() != self.output_size() {
                return Err(NetworkError::DimensionMismatch {
                    expected: self.output_size(),
                    actual: sample.targets.len(),
                });
            }
        }
        Ok(())
    }

    fn run_epoch(&mut self, dataset: &[Sample]) -> Result<f64> {
        let mut total_error = 0.0;
        for sample in dataset {
            total_error += self.train_sample(sample)?;
        }
        if dataset.is_empty() {
            return Ok(0.0);
        }
        Ok(total_error / (dataset.len() * self.output_size()) as f64)
    }

    fn train_sample(&mut self, sample: &Sample) -> Result<f64> {
        let (hidden, outputs) = self.forward(&sample.features)?;
        if outputs.iter().any(|o| !o.is_finite()) {
            warn!("Non-finite output activation {:?}", outputs);
        }

        for (unit, &target) in self.output_units.iter_mut().zip(sample.targets.iter()) {
            unit.train(&hidden, target)?;
        }

        let hidden_error: f64 = outputs
            .iter()
            .zip(sample.targets.iter())
            .map(|(&o, &t)| o * (t - o))
            .sum();
        trace!("Hidden error signal {:.6}", hidden_error);

        for unit in self.hidden_units.iter_mut() {
            unit.train(&sample.features, hidden_error)?;
        }

        Ok(outputs
            .iter()
            .zip(sample.targets.iter())
            .map(|(&o, &t)| (t - o) * (t - o))
            .sum())
    }
}

/// Index of the first maximum in `values` (0 when empty).
pub fn argmax(values: &[f64]) -> usize {
    let mut best = 0;
    for (i, &value) in values.iter().enumerate().skip(1) {
        if value > values[best] {
            best = i;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_network(seed: u64) -> Network {
        let mut rng = SimpleRng::new(seed);
        Network::new(3, 2, 2, UnitConfig::default(), &mut rng).unwrap()
    }

    #[test]
    fn test_network_shape() {
        let network = small_network(1);
        assert_eq!(network.input_size(), 3);
        assert_eq!(network.hidden_size(), 2);
        assert_eq!(network.output_size(), 2);
        assert_eq!(network.parameter_count(), 2 * 4 + 2 * 3);
        assert!(network.output_units.iter().all(|u| u.input_size() == 2));
    }

    #[test]
    fn test_zero_sizes_rejected() {
        let mut rng = SimpleRng::new(1);
        for (d, h, k) in [(0, 1, 1), (1, 0, 1), (1, 1, 0)] {
            assert!(matches!(
                Network::new(d, h, k, UnitConfig::default(), &mut rng),
                Err(NetworkError::InvalidArchitecture(_))
            ));
        }
    }

    #[test]
    fn test_argmax_first_maximum_wins() {
        assert_eq!(argmax(&[0.2, 0.7, 0.7, 0.1]), 1);
        assert_eq!(argmax(&[0.5, 0.5]), 0);
        assert_eq!(argmax(&[0.1]), 0);
        assert_eq!(argmax(&[0.1, 0.2, 0.9]), 2);
    }

    #[test]
    fn test_invalid_dataset_leaves_network_untouched() {
        let mut network = small_network(5);
        let before = network.clone();
        let dataset = vec![
            Sample::new(vec![0.1, 0.2, 0.3], vec![1.0, 0.0]),
            Sample::new(vec![0.1, 0.2, 0.3], vec![1.0]),
        ];

        assert!(matches!(
            network.train(&dataset, 3),
            Err(NetworkError::DimensionMismatch {
                expected: 2,
                actual: 1
            })
        ));
        assert_eq!(network, before);
    }

    #[test]
    fn test_zero_epochs_is_noop() {
        let mut network = small_network(5);
        let before = network.clone();
        let dataset = vec![Sample::new(vec![0.1, 0.2, 0.3], vec![1.0, 0.0])];

        network.train(&dataset, 0).unwrap();
        assert_eq!(network, before);
    }

    #[test]
    fn test_one_sample_steps_every_unit_once() {
        let mut network = small_network(5);
        let dataset = vec![Sample::new(vec![0.1, 0.2, 0.3], vec![1.0, 0.0])];

        network.train(&dataset, 1).unwrap();
        assert!(network.units().all(|u| u.step() == 1));
    }

    #[test]
    fn test_parameters_round_trip_layout() {
        let mut rng = SimpleRng::new(3);
        let network = Network::new(2, 1, 1, UnitConfig::default(), &mut rng).unwrap();
        let parameters = network.parameters();

        assert_eq!(parameters.len(), 3 + 2);
        assert_eq!(&parameters[0..2], network.hidden_units[0].weights());
        assert_eq!(parameters[2], network.hidden_units[0].bias());
        assert_eq!(parameters[3], network.output_units[0].weights()[0]);
        assert_eq!(parameters[4], network.output_units[0].bias());
    }

    #[test]
    fn test_set_parameters_wrong_length() {
        let mut network = small_network(5);
        assert!(matches!(
            network.set_parameters(&[0.0; 3]),
            Err(NetworkError::ParameterCount {
                expected: 14,
                actual: 3
            })
        ));
    }
}
