//! Activation functions for the sigmoid units
//!
//! Two sigmoid variants exist in deployed firmware: one clamps the exponent
//! argument to ±709 before calling `exp`, the other does not. Both are kept
//! here and selected per unit via `UnitConfig::clip_sigmoid`.

/// Largest magnitude accepted by `sigmoid_clipped` before clamping.
///
/// `exp(709)` is the last power of e that fits in an f64.
pub const SIGMOID_CLIP: f64 = 709.0;

/// Sigmoid activation function.
///
/// Returns the sigmoid of the input: 1 / (1 + exp(-x))
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Sigmoid with the argument clamped to [-709, 709].
pub fn sigmoid_clipped(x: f64) -> f64 {
    sigmoid(x.clamp(-SIGMOID_CLIP, SIGMOID_CLIP))
}

/// Dispatch to the clipped or raw sigmoid.
pub fn logistic(x: f64, clip: bool) -> f64 {
    if clip {
        sigmoid_clipped(x)
    } else {
        sigmoid(x)
    }
}

/// Sigmoid derivative assuming x = sigmoid(z).
///
/// Returns the derivative: x * (1 - x)
pub fn sigmoid_derivative(x: f64) -> f64 {
    x * (1.0 - x)
}
