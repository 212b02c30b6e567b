//! Adam (Adaptive Moment Estimation) update rule
//!
//! This module provides the per-parameter Adam step applied by every unit
//! after each training sample. The moment vectors and the step counter live
//! in the unit that owns the parameters; `Adam` only carries the
//! hyperparameters and the arithmetic.

use crate::error::{NetworkError, Result};

/// Adam hyperparameters.
///
/// The update rule applied to every parameter is:
///
/// ```text
/// m_t = β1 * m_{t-1} + (1 - β1) * gradient
/// v_t = β2 * v_{t-1} + (1 - β2) * gradient²
/// m_hat = m_t / (1 - β1^t)
/// v_hat = v_t / (1 - β2^t)
/// parameter = parameter - α * m_hat / (√v_hat + ε)
/// ```
///
/// Updates are applied one sample at a time; gradients are never averaged
/// across samples.
///
/// # Fields
///
/// * `learning_rate` - The step size for parameter updates (α)
/// * `beta1` - Exponential decay rate for first moment estimates
/// * `beta2` - Exponential decay rate for second moment estimates
/// * `epsilon` - Small constant for numerical stability
///
/// # Example
///
/// ```
/// use adaptive_mlp::optimizers::Adam;
///
/// let adam = Adam::new(0.01, 0.9, 0.999, 1e-8);
/// let mut weights = vec![1.0, 2.0, 3.0];
/// let mut m = vec![0.0; 3];
/// let mut v = vec![0.0; 3];
///
/// adam.update(&mut weights, &mut m, &mut v, &[0.1, 0.2, 0.3], 1);
/// assert!(weights[0] < 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Adam {
    learning_rate: f64,
    beta1: f64,
    beta2: f64,
    epsilon: f64,
}

impl Default for Adam {
    /// Hyperparameters used by the deployed gesture firmware.
    ///
    /// The learning rate is far above the usual 0.001: the firmware trains
    /// for only a few hundred samples per gesture.
    fn default() -> Self {
        Self::new(0.95, 0.9, 0.999, 1e-8)
    }
}

impl Adam {
    /// Creates a new set of Adam hyperparameters.
    ///
    /// # Arguments
    ///
    /// * `learning_rate` - The step size for parameter updates (α, must be positive)
    /// * `beta1` - Exponential decay rate for first moment estimates (0 ≤ β1 < 1)
    /// * `beta2` - Exponential decay rate for second moment estimates (0 ≤ β2 < 1)
    /// * `epsilon` - Small constant for numerical stability (must be positive)
    pub fn new(learning_rate: f64, beta1: f64, beta2: f64, epsilon: f64) -> Self {
        Self {
            learning_rate,
            beta1,
            beta2,
            epsilon,
        }
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    pub fn beta1(&self) -> f64 {
        self.beta1
    }

    pub fn beta2(&self) -> f64 {
        self.beta2
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Check hyperparameter ranges.
    ///
    /// A β of 1 zeroes the bias correction and turns every step into
    /// inf or NaN, so it is rejected up front.
    ///
    /// # Errors
    ///
    /// `InvalidConfig` naming the first offending hyperparameter.
    pub fn validate(&self) -> Result<()> {
        if !(self.learning_rate > 0.0 && self.learning_rate.is_finite()) {
            return Err(NetworkError::InvalidConfig(
                "learning_rate must be positive".to_string(),
            ));
        }

        for (name, beta) in [("beta1", self.beta1), ("beta2", self.beta2)] {
            if !(0.0..1.0).contains(&beta) {
                return Err(NetworkError::InvalidConfig(format!(
                    "{} must be in [0, 1)",
                    name
                )));
            }
        }

        if !(self.epsilon > 0.0) {
            return Err(NetworkError::InvalidConfig(
                "epsilon must be positive".to_string(),
            ));
        }

        Ok(())
    }

    /// Bias correction denominators `(1 - β1^t, 1 - β2^t)` for step `t`.
    pub fn bias_corrections(&self, t: u64) -> (f64, f64) {
        let exponent = i32::try_from(t).unwrap_or(i32::MAX);
        (
            1.0 - self.beta1.powi(exponent),
            1.0 - self.beta2.powi(exponent),
        )
    }

    /// Apply one Adam step to a single scalar parameter.
    pub fn update_scalar(
        &self,
        parameter: &mut f64,
        m: &mut f64,
        v: &mut f64,
        gradient: f64,
        t: u64,
    ) {
        let (bias_correction1, bias_correction2) = self.bias_corrections(t);
        self.apply(parameter, m, v, gradient, bias_correction1, bias_correction2);
    }

    /// Apply one Adam step to every parameter in `parameters`.
    ///
    /// `t` is the step counter after incrementing for this sample, so the
    /// first call passes `t = 1`.
    ///
    /// # Panics
    ///
    /// Panics if the parameter, moment, and gradient slices differ in length.
    pub fn update(
        &self,
        parameters: &mut [f64],
        m: &mut [f64],
        v: &mut [f64],
        gradients: &[f64],
        t: u64,
    ) {
        assert_eq!(
            parameters.len(),
            gradients.len(),
            "Parameters and gradients must have the same length"
        );
        assert!(
            m.len() == parameters.len() && v.len() == parameters.len(),
            "Moment vectors must match the parameter length"
        );

        let (bias_correction1, bias_correction2) = self.bias_corrections(t);
        for i in 0..parameters.len() {
            self.apply(
                &mut parameters[i],
                &mut m[i],
                &mut v[i],
                gradients[i],
                bias_correction1,
                bias_correction2,
            );
        }
    }

    fn apply(
        &self,
        parameter: &mut f64,
        m: &mut f64,
        v: &mut f64,
        gradient: f64,
        bias_correction1: f64,
        bias_correction2: f64,
    ) {
        // Update biased first moment estimate
        *m = self.beta1 * *m + (1.0 - self.beta1) * gradient;

        // Update biased second raw moment estimate
        *v = self.beta2 * *v + (1.0 - self.beta2) * gradient * gradient;

        let m_hat = *m / bias_correction1;
        let v_hat = *v / bias_correction2;

        *parameter -= self.learning_rate * m_hat / (v_hat.sqrt() + self.epsilon);
    }
}
