//! Configuration structures for building and training a network
//!
//! This module parses network configuration from JSON files: the three layer
//! sizes, the Adam hyperparameters, sigmoid clipping, epoch count and the
//! initialization seed.

use crate::error::{NetworkError, Result};
use crate::layers::UnitConfig;
use crate::optimizers::Adam;
use serde::Deserialize;
use std::fs;
use std::path::Path;

fn default_epochs() -> usize {
    100
}

fn default_seed() -> u64 {
    42
}

fn default_learning_rate() -> f64 {
    Adam::default().learning_rate()
}

fn default_beta1() -> f64 {
    Adam::default().beta1()
}

fn default_beta2() -> f64 {
    Adam::default().beta2()
}

fn default_epsilon() -> f64 {
    Adam::default().epsilon()
}

fn default_clip_sigmoid() -> bool {
    true
}

/// Network and training configuration.
///
/// Only the layer sizes are required; everything else falls back to the
/// values used on the deployed devices.
///
/// # Example
///
/// ```json
/// {
///   "input_size": 6,
///   "hidden_size": 1,
///   "output_size": 2,
///   "epochs": 100,
///   "seed": 42,
///   "learning_rate": 0.95,
///   "clip_sigmoid": true
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NetworkConfig {
    /// Feature dimension `d`
    pub input_size: usize,

    /// Number of hidden units `h`
    pub hidden_size: usize,

    /// Number of output units `k` (classes or regression targets)
    pub output_size: usize,

    /// Passes over the dataset (default 100)
    #[serde(default = "default_epochs")]
    pub epochs: usize,

    /// Seed for weight initialization (default 42)
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Adam step size (default 0.95)
    #[serde(default = "default_learning_rate")]
    pub learning_rate: f64,

    /// First moment decay (default 0.9)
    #[serde(default = "default_beta1")]
    pub beta1: f64,

    /// Second moment decay (default 0.999)
    #[serde(default = "default_beta2")]
    pub beta2: f64,

    /// Denominator stabilizer (default 1e-8)
    #[serde(default = "default_epsilon")]
    pub epsilon: f64,

    /// Clamp the sigmoid argument to ±709 (default true)
    #[serde(default = "default_clip_sigmoid")]
    pub clip_sigmoid: bool,
}

impl NetworkConfig {
    /// Configuration with default training settings for the given sizes.
    pub fn new(input_size: usize, hidden_size: usize, output_size: usize) -> Self {
        Self {
            input_size,
            hidden_size,
            output_size,
            epochs: default_epochs(),
            seed: default_seed(),
            learning_rate: default_learning_rate(),
            beta1: default_beta1(),
            beta2: default_beta2(),
            epsilon: default_epsilon(),
            clip_sigmoid: default_clip_sigmoid(),
        }
    }

    /// Per-unit settings derived from this configuration.
    pub fn unit_config(&self) -> UnitConfig {
        UnitConfig {
            optimizer: Adam::new(self.learning_rate, self.beta1, self.beta2, self.epsilon),
            clip_sigmoid: self.clip_sigmoid,
        }
    }

    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// `InvalidConfig` naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        for (name, size) in [
            ("input_size", self.input_size),
            ("hidden_size", self.hidden_size),
            ("output_size", self.output_size),
            ("epochs", self.epochs),
        ] {
            if size == 0 {
                return Err(invalid(format!("{} must be at least 1", name)));
            }
        }

        self.unit_config().validate()
    }
}

fn invalid(message: impl Into<String>) -> NetworkError {
    NetworkError::InvalidConfig(message.into())
}

/// Loads a network configuration from a JSON file.
///
/// Reads the file at `path`, deserializes it into a `NetworkConfig` and
/// validates it.
///
/// # Examples
///
/// ```no_run
/// use adaptive_mlp::config::load_config;
///
/// let cfg = load_config("config/gesture.json").unwrap();
/// assert_eq!(cfg.input_size, 6);
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<NetworkConfig> {
    let contents = fs::read_to_string(path)?;
    parse_config(&contents)
}

/// Parse and validate a configuration from a JSON string.
pub fn parse_config(contents: &str) -> Result<NetworkConfig> {
    let config: NetworkConfig = serde_json::from_str(contents)?;
    config.validate()?;
    Ok(config)
}
