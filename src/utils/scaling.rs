//! Input and target preparation
//!
//! The units apply no guarding of their own beyond optional sigmoid clipping,
//! so raw sensor readings are expected to be scaled into a bounded range
//! before they reach `Network::forward` or `Network::train`.

use crate::error::{NetworkError, Result};

/// Full-scale magnitude of a signed 16-bit accelerometer or gyroscope channel.
pub const SENSOR_FULL_SCALE: f64 = 32768.0;

/// Scale one raw 16-bit reading into [-1, 1).
pub fn normalize_reading(raw: i16) -> f64 {
    raw as f64 / SENSOR_FULL_SCALE
}

/// Scale a full sensor frame (e.g. ax, ay, az, gx, gy, gz).
pub fn normalize_readings(raw: &[i16]) -> Vec<f64> {
    raw.iter().map(|&value| normalize_reading(value)).collect()
}

/// Clamp every feature into [-limit, limit] in place.
///
/// # Panics
///
/// Panics if `limit` is negative or NaN.
pub fn clip_features(features: &mut [f64], limit: f64) {
    assert!(limit >= 0.0, "clip limit must be non-negative");
    for value in features.iter_mut() {
        *value = value.clamp(-limit, limit);
    }
}

/// Build a one-hot target vector of length `classes` with `class` set to 1.0.
pub fn one_hot(class: usize, classes: usize) -> Result<Vec<f64>> {
    if class >= classes {
        return Err(NetworkError::InvalidClass { class, classes });
    }
    let mut target = vec![0.0; classes];
    target[class] = 1.0;
    Ok(target)
}
