//! Mathematical functions module
//!
//! Scalar conversions between power, dB and angle representations.

pub mod conversions;

pub use conversions::*;
