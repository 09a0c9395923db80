//! Numerical constants shared by the conversion and loading code

/// Watts per milliwatt, the reference level of the dBm scale.
pub const WATT_PER_MILLIWATT: f64 = 1e-3;

/// Default column layout of a delimited table: frequency, first value, second value.
pub const DEFAULT_TABLE_COLUMNS: [usize; 3] = [0, 1, 2];
