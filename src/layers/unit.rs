//! Sigmoid unit with its own Adam state
//!
//! A `Unit` is a single neuron: weighted sum of its inputs plus a bias,
//! squashed by the logistic sigmoid. It owns its parameters and optimizer
//! moments exclusively and trains one sample at a time.

use crate::error::{NetworkError, Result};
use crate::optimizers::Adam;
use crate::utils::activations::{logistic, sigmoid_derivative};
use crate::utils::SimpleRng;

/// Range of the uniform distribution used for initial weights and bias.
pub const INIT_RANGE: f64 = 1.0;

/// Per-unit settings fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitConfig {
    /// Adam hyperparameters used by `Unit::train`.
    pub optimizer: Adam,
    /// Clamp the sigmoid argument to ±709 before exponentiating.
    pub clip_sigmoid: bool,
}

impl UnitConfig {
    /// Check the optimizer hyperparameters.
    ///
    /// # Errors
    ///
    /// `InvalidConfig` if any Adam hyperparameter is out of range.
    pub fn validate(&self) -> Result<()> {
        self.optimizer.validate()
    }
}

impl Default for UnitConfig {
    fn default() -> Self {
        Self {
            optimizer: Adam::default(),
            clip_sigmoid: true,
        }
    }
}

/// Single sigmoid neuron trained online with Adam.
///
/// # Fields
///
/// * `weights` - One weight per input, length fixed at construction
/// * `bias` - Additive bias
/// * `m_weights` / `v_weights` - First and second moment estimates per weight
/// * `m_bias` / `v_bias` - First and second moment estimates for the bias
/// * `t` - Number of completed training steps
///
/// # Example
///
/// ```
/// use adaptive_mlp::layers::{Unit, UnitConfig};
///
/// let unit = Unit::with_parameters(vec![0.0, 0.0], 0.0, UnitConfig::default());
/// assert_eq!(unit.activate(&[1.0, 1.0]).unwrap(), 0.5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    weights: Vec<f64>,
    bias: f64,
    m_weights: Vec<f64>,
    v_weights: Vec<f64>,
    m_bias: f64,
    v_bias: f64,
    t: u64,
    config: UnitConfig,
}

impl Unit {
    /// Create a unit with `input_size` weights.
    ///
    /// Each weight, then the bias, is drawn uniformly from [-1, 1] using
    /// `rng`. Optimizer moments start at zero and the step counter at 0.
    pub fn new(input_size: usize, config: UnitConfig, rng: &mut SimpleRng) -> Self {
        let weights = (0..input_size)
            .map(|_| rng.gen_range_f64(-INIT_RANGE, INIT_RANGE))
            .collect();
        let bias = rng.gen_range_f64(-INIT_RANGE, INIT_RANGE);
        Self::with_parameters(weights, bias, config)
    }

    /// Create a unit from explicit parameters with fresh optimizer state.
    pub fn with_parameters(weights: Vec<f64>, bias: f64, config: UnitConfig) -> Self {
        let input_size = weights.len();
        Self {
            weights,
            bias,
            m_weights: vec![0.0; input_size],
            v_weights: vec![0.0; input_size],
            m_bias: 0.0,
            v_bias: 0.0,
            t: 0,
            config,
        }
    }

    /// Number of inputs this unit expects.
    pub fn input_size(&self) -> usize {
        self.weights.len()
    }

    /// Weights plus the bias.
    pub fn parameter_count(&self) -> usize {
        self.weights.len() + 1
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn bias(&self) -> f64 {
        self.bias
    }

    /// Number of training steps taken so far.
    pub fn step(&self) -> u64 {
        self.t
    }

    pub fn m_weights(&self) -> &[f64] {
        &self.m_weights
    }

    pub fn v_weights(&self) -> &[f64] {
        &self.v_weights
    }

    pub fn m_bias(&self) -> f64 {
        self.m_bias
    }

    pub fn v_bias(&self) -> f64 {
        self.v_bias
    }

    pub fn config(&self) -> &UnitConfig {
        &self.config
    }

    /// Sigmoid of the weighted input sum plus bias.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if `inputs.len()` differs from `input_size()`.
    pub fn activate(&self, inputs: &[f64]) -> Result<f64> {
        self.check_dimension(inputs)?;
        Ok(self.output(inputs))
    }

    /// One online Adam step toward `target`.
    ///
    /// The error signal is `target - output` scaled by the sigmoid
    /// derivative (squared-error delta). Every weight and the bias get their
    /// own bias-corrected moment update; nothing is averaged across calls.
    ///
    /// # Gradient sign
    ///
    /// Adam is fed the loss gradient `-delta * x_i` (and `-delta` for the
    /// bias), not `delta * x_i`. The firmware this unit was ported from feeds
    /// `+delta * x_i` into the same subtracting update, which pushes the
    /// activation away from the target and diverges. Weights exported from
    /// that firmware load fine, but training here moves them the other way.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if `inputs.len()` differs from `input_size()`.
    /// The unit is left untouched in that case, including its step counter.
    pub fn train(&mut self, inputs: &[f64], target: f64) -> Result<()> {
        self.check_dimension(inputs)?;

        self.t += 1;
        let output = self.output(inputs);
        let error = target - output;
        let local_gradient = sigmoid_derivative(output) * error;

        // Loss gradient is the negated delta, so the descent step moves the
        // activation toward the target.
        let gradients: Vec<f64> = inputs.iter().map(|&x| -local_gradient * x).collect();
        let bias_gradient = -local_gradient;

        let adam = self.config.optimizer;
        adam.update(
            &mut self.weights,
            &mut self.m_weights,
            &mut self.v_weights,
            &gradients,
            self.t,
        );
        adam.update_scalar(
            &mut self.bias,
            &mut self.m_bias,
            &mut self.v_bias,
            bias_gradient,
            self.t,
        );
        Ok(())
    }

    /// Overwrite weights and bias, keeping optimizer state.
    pub(crate) fn set_parameters(&mut self, weights: &[f64], bias: f64) {
        debug_assert_eq!(weights.len(), self.weights.len());
        self.weights.copy_from_slice(weights);
        self.bias = bias;
    }

    fn output(&self, inputs: &[f64]) -> f64 {
        let z = self
            .weights
            .iter()
            .zip(inputs.iter())
            .map(|(w, x)| w * x)
            .sum::<f64>()
            + self.bias;
        logistic(z, self.config.clip_sigmoid)
    }

    fn check_dimension(&self, inputs: &[f64]) -> Result<()> {
        if inputs.len() != self.weights.len() {
            return Err(NetworkError::DimensionMismatch {
                expected: self.weights.len(),
                actual: inputs.len(),
            });
        }
        Ok(())
    }
}
