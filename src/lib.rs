//! Adaptive MLP
//!
//! Minimal feed-forward network for on-device sensor classification and
//! regression: one hidden layer and one output layer of sigmoid units, each
//! unit trained online with its own per-parameter Adam state.
//!
//! # Modules
//!
//! - `layers`: The sigmoid `Unit` and its construction settings
//! - `network`: Two-layer `Network`, forward pass, prediction and training
//! - `optimizers`: Adam hyperparameters and update rule
//! - `recognition`: Threshold-based gesture recognition over output activations
//! - `config`: JSON network/training configuration
//! - `persistence`: Flat parameter save/load
//! - `utils`: Seeded RNG, sigmoid, input scaling
//! - `error`: Crate error type

pub mod config;
pub mod error;
pub mod layers;
pub mod network;
pub mod optimizers;
pub mod persistence;
pub mod recognition;
pub mod utils;

pub use error::{NetworkError, Result};
pub use network::{Network, Sample};
