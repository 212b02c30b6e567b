//! Threshold-based gesture recognition
//!
//! `Network::predict` always names a class. Deployed gesture firmware instead
//! compares each output activation against its own threshold, in class order,
//! and reports an unknown gesture when none fires. `ThresholdRecognizer`
//! implements that rule on top of the raw output activations.

use crate::error::{NetworkError, Result};
use crate::network::Network;

/// Per-class activation thresholds checked in class order.
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdRecognizer {
    thresholds: Vec<f64>,
}

impl ThresholdRecognizer {
    /// One threshold per output unit.
    pub fn new(thresholds: Vec<f64>) -> Self {
        Self { thresholds }
    }

    /// The same threshold for all `classes` outputs.
    pub fn uniform(threshold: f64, classes: usize) -> Self {
        Self::new(vec![threshold; classes])
    }

    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    /// First class whose activation strictly exceeds its threshold.
    ///
    /// Returns `Ok(None)` when no activation clears its threshold.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if `activations` and the thresholds differ in length.
    pub fn recognize(&self, activations: &[f64]) -> Result<Option<usize>> {
        if activations.len() != self.thresholds.len() {
            return Err(NetworkError::DimensionMismatch {
                expected: self.thresholds.len(),
                actual: activations.len(),
            });
        }
        Ok(activations
            .iter()
            .zip(self.thresholds.iter())
            .position(|(&activation, &threshold)| activation > threshold))
    }

    /// Run `network` forward on `features` and recognize its outputs.
    pub fn recognize_features(&self, network: &Network, features: &[f64]) -> Result<Option<usize>> {
        let (_, outputs) = network.forward(features)?;
        self.recognize(&outputs)
    }
}
