//! Spectrum - complex response versus frequency
//!
//! The raw S21 trace of a resonator measurement, as loaded from disk or
//! supplied by the caller.

use ndarray::{s, Array1};
use num_complex::Complex64;

use crate::error::{ResonatorError, Result};
use crate::frequency::last_index_below;
use crate::math::conversions::{complex_2_db, complex_2_degree};

/// Frequencies and complex values of equal length
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Spectrum {
    frequencies: Array1<f64>,
    values: Array1<Complex64>,
}

impl Spectrum {
    /// Create a spectrum, checking that both arrays have the same length
    pub fn new(frequencies: Array1<f64>, values: Array1<Complex64>) -> Result<Self> {
        if frequencies.len() != values.len() {
            return Err(ResonatorError::LengthMismatch {
                frequencies: frequencies.len(),
                values: values.len(),
            });
        }
        Ok(Self {
            frequencies,
            values,
        })
    }

    /// Create from plain vectors
    pub fn from_vec(frequencies: Vec<f64>, values: Vec<Complex64>) -> Result<Self> {
        Self::new(Array1::from(frequencies), Array1::from(values))
    }

    /// Empty spectrum
    pub fn empty() -> Self {
        Self::default()
    }

    /// Frequency vector, in the units it was loaded with (normally Hz)
    #[inline]
    pub fn frequencies(&self) -> &Array1<f64> {
        &self.frequencies
    }

    /// Complex values
    #[inline]
    pub fn values(&self) -> &Array1<Complex64> {
        &self.values
    }

    /// Get the number of frequency points
    #[inline]
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    /// Split into the frequency and value arrays
    pub fn into_parts(self) -> (Array1<f64>, Array1<Complex64>) {
        (self.frequencies, self.values)
    }

    /// Restrict to the samples between two frequencies
    ///
    /// Each bound is mapped to the last index whose frequency is strictly
    /// below it (or `0` when there is none), and the half-open range between
    /// the two positions is kept. With frequencies `[1, 2, 3, 4, 5]` and
    /// bounds `(2, 4)` the positions are 0 and 2, so the result holds the
    /// samples at 1 and 2: the sample just below the lower bound is kept and
    /// the one just below the upper bound is dropped. A reversed or
    /// degenerate range yields an empty spectrum.
    pub fn trim(&self, f_low: f64, f_high: f64) -> Spectrum {
        let start = last_index_below(&self.frequencies, f_low);
        let stop = last_index_below(&self.frequencies, f_high);
        if stop <= start {
            return Spectrum::empty();
        }
        Spectrum {
            frequencies: self.frequencies.slice(s![start..stop]).to_owned(),
            values: self.values.slice(s![start..stop]).to_owned(),
        }
    }

    /// Linear magnitude |z|
    pub fn magnitude(&self) -> Array1<f64> {
        self.values.mapv(|z| z.norm())
    }

    /// Magnitude in dB (20*log10|z|)
    pub fn magnitude_db(&self) -> Array1<f64> {
        self.values.mapv(complex_2_db)
    }

    /// Phase in radians
    pub fn phase(&self) -> Array1<f64> {
        self.values.mapv(|z| z.arg())
    }

    /// Phase in degrees
    pub fn phase_deg(&self) -> Array1<f64> {
        self.values.mapv(complex_2_degree)
    }
}
