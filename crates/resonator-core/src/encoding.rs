//! Complex encodings of two-column measurement data
//!
//! A network analyzer exports each complex sample as two real numbers. The
//! [`Encoding`] tag records how that pair maps back to one complex value.

use std::fmt;
use std::str::FromStr;

use ndarray::{Array1, ArrayView1, Zip};
use num_complex::Complex64;

use crate::error::{ResonatorError, Result};
use crate::math::conversions::{db_2_magnitude, degree_2_radian};

/// How a pair of real columns encodes one complex sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    /// `x + i*y`
    #[default]
    RealImag,
    /// Linear magnitude, phase in radians
    LinMagPhaseRad,
    /// Magnitude in dB, phase in radians
    DbMagPhaseRad,
    /// Linear magnitude, phase in degrees
    LinMagPhaseDeg,
    /// Magnitude in dB, phase in degrees
    DbMagPhaseDeg,
}

impl Encoding {
    pub const ALL: [Encoding; 5] = [
        Encoding::RealImag,
        Encoding::LinMagPhaseRad,
        Encoding::DbMagPhaseRad,
        Encoding::LinMagPhaseDeg,
        Encoding::DbMagPhaseDeg,
    ];

    /// Canonical name, as accepted by [`Encoding::from_str`]
    pub fn name(&self) -> &'static str {
        match self {
            Encoding::RealImag => "real_imag",
            Encoding::LinMagPhaseRad => "lin_mag_phase_rad",
            Encoding::DbMagPhaseRad => "db_mag_phase_rad",
            Encoding::LinMagPhaseDeg => "lin_mag_phase_deg",
            Encoding::DbMagPhaseDeg => "db_mag_phase_deg",
        }
    }

    /// True for the magnitude/phase encodings
    pub fn is_polar(&self) -> bool {
        !matches!(self, Encoding::RealImag)
    }

    /// True when the magnitude column is in dB
    pub fn is_db(&self) -> bool {
        matches!(self, Encoding::DbMagPhaseRad | Encoding::DbMagPhaseDeg)
    }

    /// True when the phase column is in degrees
    pub fn is_degrees(&self) -> bool {
        matches!(self, Encoding::LinMagPhaseDeg | Encoding::DbMagPhaseDeg)
    }

    /// Factor that turns the phase column into radians
    pub fn phase_factor(&self) -> f64 {
        if self.is_degrees() {
            degree_2_radian(1.0)
        } else {
            1.0
        }
    }

    /// Convert one pair of column values into a complex sample
    pub fn to_complex(&self, x: f64, y: f64) -> Complex64 {
        if !self.is_polar() {
            return Complex64::new(x, y);
        }
        let mag = if self.is_db() { db_2_magnitude(x) } else { x };
        Complex64::from_polar(mag, y * self.phase_factor())
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Encoding {
    type Err = ResonatorError;

    /// Accepts the canonical snake_case names and the run-together spellings
    /// (`realimag`, `dBmagphasedeg`, ...) used by older analysis scripts.
    fn from_str(s: &str) -> Result<Self> {
        let encoding = match s.trim().to_lowercase().as_str() {
            "real_imag" | "realimag" => Encoding::RealImag,
            "lin_mag_phase_rad" | "linmagphaserad" => Encoding::LinMagPhaseRad,
            "db_mag_phase_rad" | "dbmagphaserad" => Encoding::DbMagPhaseRad,
            "lin_mag_phase_deg" | "linmagphasedeg" => Encoding::LinMagPhaseDeg,
            "db_mag_phase_deg" | "dbmagphasedeg" => Encoding::DbMagPhaseDeg,
            _ => {
                log::warn!("undefined input type {s:?}");
                return Err(ResonatorError::InvalidEncoding(s.to_string()));
            }
        };
        Ok(encoding)
    }
}

/// Convert two real columns into complex samples, element-wise
///
/// # Arguments
/// * `x` - Real part, linear magnitude or dB magnitude
/// * `y` - Imaginary part or phase
/// * `encoding` - How `x` and `y` combine
pub fn convert(
    x: ArrayView1<f64>,
    y: ArrayView1<f64>,
    encoding: Encoding,
) -> Result<Array1<Complex64>> {
    if x.len() != y.len() {
        return Err(ResonatorError::ShapeMismatch {
            x: x.len(),
            y: y.len(),
        });
    }
    Ok(Zip::from(&x)
        .and(&y)
        .map_collect(|&a, &b| encoding.to_complex(a, b)))
}
