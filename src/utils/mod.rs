//! Shared utilities for the network implementation
//!
//! This module provides random number generation, activation functions and
//! input scaling helpers used by the units and their callers.
pub mod activations;
pub mod rng;
pub mod scaling;

pub use rng::SimpleRng;
