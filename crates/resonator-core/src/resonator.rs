//! Resonator measurement holder
//!
//! Owns the raw S21 spectrum of one resonator and fills it from files or
//! caller-supplied arrays. Fitting and calibration code reads the spectrum
//! through [`ResonatorData::frequencies`] and [`ResonatorData::values`].

use std::path::Path;

use ndarray::Array1;
use num_complex::Complex64;

use crate::encoding::Encoding;
use crate::error::Result;
use crate::io::{load_network_file, load_table, NetworkFileOptions, TableOptions};
use crate::spectrum::Spectrum;

/// Raw measurement data of a resonator
#[derive(Debug, Clone, Default)]
pub struct ResonatorData {
    /// Raw spectrum (frequency, S21)
    spectrum: Spectrum,
}

impl ResonatorData {
    /// Create an empty holder
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from an existing spectrum
    pub fn from_spectrum(spectrum: Spectrum) -> Self {
        Self { spectrum }
    }

    /// Replace the data with caller-supplied arrays
    pub fn add_data(&mut self, frequencies: Array1<f64>, values: Array1<Complex64>) -> Result<()> {
        self.spectrum = Spectrum::new(frequencies, values)?;
        Ok(())
    }

    /// Replace the data with the contents of a delimited table
    ///
    /// On error the previous data is left untouched.
    pub fn add_from_txt<P: AsRef<Path>>(
        &mut self,
        path: P,
        encoding: Encoding,
        options: &TableOptions,
    ) -> Result<()> {
        self.spectrum = load_table(path, encoding, options)?;
        Ok(())
    }

    /// Replace the data with the contents of a network analyzer file
    ///
    /// On error the previous data is left untouched.
    pub fn add_from_snp<P: AsRef<Path>>(
        &mut self,
        path: P,
        options: &NetworkFileOptions,
    ) -> Result<()> {
        self.spectrum = load_network_file(path, options)?;
        Ok(())
    }

    /// Keep only the samples between `f_low` and `f_high`, see [`Spectrum::trim`]
    pub fn cut_data(&mut self, f_low: f64, f_high: f64) {
        let before = self.spectrum.len();
        self.spectrum = self.spectrum.trim(f_low, f_high);
        log::debug!(
            "cut data to [{f_low}, {f_high}): {before} -> {} samples",
            self.spectrum.len()
        );
    }

    #[inline]
    pub fn spectrum(&self) -> &Spectrum {
        &self.spectrum
    }

    /// Frequency vector
    #[inline]
    pub fn frequencies(&self) -> &Array1<f64> {
        self.spectrum.frequencies()
    }

    /// Raw complex S21 values
    #[inline]
    pub fn values(&self) -> &Array1<Complex64> {
        self.spectrum.values()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.spectrum.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ResonatorError;
    use ndarray::array;

    #[test]
    fn test_add_data() {
        let mut data = ResonatorData::new();
        assert!(data.is_empty());

        data.add_data(
            array![1.0, 2.0, 3.0],
            array![
                Complex64::new(1.0, 0.0),
                Complex64::new(0.5, 0.5),
                Complex64::new(0.0, 1.0)
            ],
        )
        .unwrap();
        assert_eq!(data.frequencies().len(), 3);
        assert_eq!(data.values()[2], Complex64::new(0.0, 1.0));
    }

    #[test]
    fn test_add_data_length_mismatch_keeps_previous() {
        let mut data = ResonatorData::new();
        data.add_data(array![1.0], array![Complex64::new(1.0, 0.0)])
            .unwrap();

        let err = data
            .add_data(array![1.0, 2.0], array![Complex64::new(1.0, 0.0)])
            .unwrap_err();
        assert!(matches!(err, ResonatorError::LengthMismatch { .. }));
        assert_eq!(data.frequencies().len(), 1);
    }

    #[test]
    fn test_from_spectrum() {
        let f = array![1e9, 2e9];
        let z = array![Complex64::new(1.0, 0.0), Complex64::new(0.0, 1.0)];
        let spectrum = Spectrum::new(f, z).unwrap();

        let data = ResonatorData::from_spectrum(spectrum.clone());
        assert_eq!(data.spectrum(), &spectrum);
        assert_eq!(data.values()[1], Complex64::new(0.0, 1.0));
    }

    #[test]
    fn test_cut_data() {
        let f: Array1<f64> = (0..10).map(|i| i as f64).collect();
        let z = f.mapv(|x| Complex64::new(x, 0.0));
        let mut data = ResonatorData::new();
        data.add_data(f, z).unwrap();

        // last f < 3 is index 2, last f < 7 is index 6
        data.cut_data(3.0, 7.0);
        assert_eq!(data.frequencies().to_vec(), vec![2.0, 3.0, 4.0, 5.0]);
        assert_eq!(data.values().len(), 4);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let mut data = ResonatorData::new();
        let err = data
            .add_from_txt(
                "/nonexistent/resonator.txt",
                Encoding::RealImag,
                &TableOptions::new(0),
            )
            .unwrap_err();
        assert!(matches!(err, ResonatorError::Io(_)));
    }
}
