//! resonator-core: Loading and unit handling for microwave resonator data
//!
//! Reads complex transmission (S21) sweeps of superconducting and other
//! microwave resonators from text tables and network analyzer exports.
//!
//! ## Modules
//!
//! - `math` - Power (watt/dBm), dB and angle conversions
//! - `encoding` - Real/imaginary and magnitude/phase column encodings
//! - `io` - Delimited table and network file loaders
//! - `spectrum` - Frequency/value container and range trimming
//! - `resonator` - Measurement holder used by fitting code

pub mod constants;
pub mod encoding;
pub mod error;
pub mod frequency;
pub mod io;
pub mod math;
pub mod resonator;
pub mod spectrum;

pub use encoding::Encoding;
pub use error::{ResonatorError, Result};
pub use frequency::FrequencyUnit;
pub use resonator::ResonatorData;
pub use spectrum::Spectrum;
