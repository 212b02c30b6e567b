//! Building blocks for the two network layers
//!
//! Both the hidden and output layers are plain ordered collections of
//! `Unit`s; there is no layer object beyond that.

pub mod unit;

pub use unit::{Unit, UnitConfig};
