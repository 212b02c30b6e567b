//! Optimizer used for unit parameter updates
//!
//! Units train online: one sample produces one gradient and one immediate
//! parameter update. The only rule in use is Adam, applied independently to
//! every weight and bias with bias-corrected moment estimates.
//!
//! # Example
//!
//! ```ignore
//! use adaptive_mlp::optimizers::Adam;
//!
//! let adam = Adam::default();
//! adam.update(&mut weights, &mut m_weights, &mut v_weights, &gradients, t);
//! ```

pub mod adam;

pub use adam::Adam;
