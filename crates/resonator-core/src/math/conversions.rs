//! Unit conversion functions
//!
//! Power conversions between watts and dBm, plus the dB and angle helpers the
//! encoding converter builds on.

use num_complex::Complex64;
use std::f64::consts::PI;

use crate::constants::WATT_PER_MILLIWATT;

/// Convert power in watts to dBm (10*log10(P / 1 mW))
///
/// Not defined for `p <= 0`: zero gives `-inf` and negative powers give NaN,
/// following IEEE float semantics rather than returning an error.
pub fn watt_2_dbm(watts: f64) -> f64 {
    10.0 * (watts / WATT_PER_MILLIWATT).log10()
}

/// Convert power in dBm to watts (10^(dBm/10) mW)
pub fn dbm_2_watt(dbm: f64) -> f64 {
    10.0_f64.powf(dbm / 10.0) * WATT_PER_MILLIWATT
}

/// Convert magnitude to dB (20*log10(mag))
pub fn magnitude_2_db(mag: f64) -> f64 {
    20.0 * mag.log10()
}

/// Convert dB to magnitude (10^(dB/20))
pub fn db_2_magnitude(db: f64) -> f64 {
    10.0_f64.powf(db / 20.0)
}

/// Convert complex number to dB (20*log10(|z|))
pub fn complex_2_db(z: Complex64) -> f64 {
    magnitude_2_db(z.norm())
}

/// Convert complex number to phase in degrees
pub fn complex_2_degree(z: Complex64) -> f64 {
    radian_2_degree(z.arg())
}

/// Convert radians to degrees
pub fn radian_2_degree(rad: f64) -> f64 {
    rad * 180.0 / PI
}

/// Convert degrees to radians
pub fn degree_2_radian(deg: f64) -> f64 {
    deg * PI / 180.0
}
