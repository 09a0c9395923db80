//! Delimited table loader
//!
//! Reads a text table whose first `header_rows` lines are skipped verbatim.
//! Remaining lines hold a frequency column and two value columns that are
//! combined according to an [`Encoding`].

use std::path::Path;

use ndarray::{Array1, ArrayView1};

use super::{parse_column, Delimiter};
use crate::constants::DEFAULT_TABLE_COLUMNS;
use crate::encoding::{convert, Encoding};
use crate::error::{ResonatorError, Result};
use crate::frequency::FrequencyUnit;
use crate::spectrum::Spectrum;

/// Layout of a delimited table
#[derive(Debug, Clone, PartialEq)]
pub struct TableOptions {
    /// Number of leading lines skipped without inspection
    pub header_rows: usize,
    /// Columns holding frequency, first value and second value
    pub columns: [usize; 3],
    /// Factor applied to the frequency column
    pub freq_unit_scale: f64,
    pub delimiter: Delimiter,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            header_rows: 0,
            columns: DEFAULT_TABLE_COLUMNS,
            freq_unit_scale: 1.0,
            delimiter: Delimiter::Whitespace,
        }
    }
}

impl TableOptions {
    pub fn new(header_rows: usize) -> Self {
        Self {
            header_rows,
            ..Self::default()
        }
    }

    pub fn with_columns(mut self, columns: [usize; 3]) -> Self {
        self.columns = columns;
        self
    }

    pub fn with_freq_unit_scale(mut self, scale: f64) -> Self {
        self.freq_unit_scale = scale;
        self
    }

    /// Scale the frequency column from `unit` to Hz
    pub fn with_frequency_unit(self, unit: FrequencyUnit) -> Self {
        self.with_freq_unit_scale(unit.multiplier())
    }

    pub fn with_delimiter(mut self, delimiter: Delimiter) -> Self {
        self.delimiter = delimiter;
        self
    }
}

/// Load a delimited table file
///
/// # Arguments
/// * `path` - Path to the text file
/// * `encoding` - Encoding of the two value columns
/// * `options` - Header count, column layout, frequency scale and delimiter
///
/// # Example
/// ```ignore
/// let spec = load_table("sweep.txt", Encoding::DbMagPhaseDeg, &TableOptions::new(1))?;
/// ```
pub fn load_table<P: AsRef<Path>>(
    path: P,
    encoding: Encoding,
    options: &TableOptions,
) -> Result<Spectrum> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;
    let spectrum = parse_table(&content, encoding, options)?;
    log::debug!(
        "loaded {} samples from {} ({encoding})",
        spectrum.len(),
        path.display()
    );
    Ok(spectrum)
}

/// Parse delimited table content from a string
///
/// After the header, text following a `#` is ignored and lines left blank
/// are skipped. Any other line must provide all three columns as numbers,
/// otherwise the whole parse fails with [`ResonatorError::MalformedRow`].
pub fn parse_table(content: &str, encoding: Encoding, options: &TableOptions) -> Result<Spectrum> {
    let [f_col, x_col, y_col] = options.columns;

    let mut frequencies = Vec::new();
    let mut xs = Vec::new();
    let mut ys = Vec::new();

    for (idx, raw) in content.lines().enumerate().skip(options.header_rows) {
        let data = match raw.find('#') {
            Some(pos) => &raw[..pos],
            None => raw,
        };
        if data.trim().is_empty() {
            log::trace!("line {}: skipped", idx + 1);
            continue;
        }

        let fields = options.delimiter.split(data);
        let malformed = |message| ResonatorError::MalformedRow {
            line: idx + 1,
            message,
        };
        let f = parse_column(&fields, f_col).map_err(malformed)?;
        let x = parse_column(&fields, x_col).map_err(malformed)?;
        let y = parse_column(&fields, y_col).map_err(malformed)?;

        frequencies.push(f * options.freq_unit_scale);
        xs.push(x);
        ys.push(y);
    }

    let values = convert(ArrayView1::from(&xs), ArrayView1::from(&ys), encoding)?;
    Spectrum::new(Array1::from(frequencies), values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use num_complex::Complex64;

    #[test]
    fn test_single_row_real_imag() {
        let content = "freq re im\n1e9 1.0 0.0\n";
        let spec = parse_table(content, Encoding::RealImag, &TableOptions::new(1)).unwrap();
        assert_eq!(spec.len(), 1);
        assert_eq!(spec.frequencies()[0], 1e9);
        assert_eq!(spec.values()[0], Complex64::new(1.0, 0.0));
    }

    #[test]
    fn test_header_rows_skipped_unconditionally() {
        // Header lines are not parsed, even if they look like garbage
        let content = "not numbers at all\n@@@\n5 1 2\n";
        let spec = parse_table(content, Encoding::RealImag, &TableOptions::new(2)).unwrap();
        assert_eq!(spec.len(), 1);
        assert_eq!(spec.values()[0], Complex64::new(1.0, 2.0));
    }

    #[test]
    fn test_column_order_and_scale() {
        // phase, freq (GHz), magnitude
        let content = "90 1.5 2.0\n";
        let options = TableOptions::new(0)
            .with_columns([1, 2, 0])
            .with_frequency_unit(FrequencyUnit::GHz);
        let spec = parse_table(content, Encoding::LinMagPhaseDeg, &options).unwrap();
        assert_relative_eq!(spec.frequencies()[0], 1.5e9);
        assert_relative_eq!(spec.values()[0].re, 0.0, epsilon = 1e-12);
        assert_relative_eq!(spec.values()[0].im, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_custom_delimiter() {
        let content = "f,mag,phase\n1e9, -20, 0\n2e9,0,180\n";
        let options = TableOptions::new(1).with_delimiter(Delimiter::Char(','));
        let spec = parse_table(content, Encoding::DbMagPhaseDeg, &options).unwrap();
        assert_eq!(spec.len(), 2);
        assert_relative_eq!(spec.values()[0].re, 0.1, epsilon = 1e-12);
        assert_relative_eq!(spec.values()[1].re, -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_string_delimiter() {
        let content = "1e9, 1, 90\n2e9, 2, 0\n";
        let sep = Delimiter::Str(", ".to_string());
        let options = TableOptions::new(0).with_delimiter(sep);
        let spec = parse_table(content, Encoding::LinMagPhaseDeg, &options).unwrap();
        assert_eq!(spec.frequencies().to_vec(), vec![1e9, 2e9]);
        assert_relative_eq!(spec.values()[0].im, 1.0, epsilon = 1e-12);
        assert_relative_eq!(spec.values()[1].re, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_comments_and_blank_lines_after_header() {
        let content = "header\n\n# note\n1 2 3 # trailing\n   \n4 5 6\n";
        let spec = parse_table(content, Encoding::RealImag, &TableOptions::new(1)).unwrap();
        assert_eq!(spec.frequencies().to_vec(), vec![1.0, 4.0]);
    }

    #[test]
    fn test_short_row_fails() {
        let content = "h\n1 2 3\n4 5\n";
        let err = parse_table(content, Encoding::RealImag, &TableOptions::new(1)).unwrap_err();
        match err {
            ResonatorError::MalformedRow { line, message } => {
                assert_eq!(line, 3);
                assert!(message.contains("missing column 2"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_non_numeric_row_fails() {
        let content = "1 2 x\n";
        let err = parse_table(content, Encoding::RealImag, &TableOptions::new(0)).unwrap_err();
        assert!(matches!(err, ResonatorError::MalformedRow { line: 1, .. }));
    }

    #[test]
    fn test_empty_content() {
        let spec = parse_table("", Encoding::RealImag, &TableOptions::new(0)).unwrap();
        assert!(spec.is_empty());

        // Header longer than the file
        let spec = parse_table("a\nb\n", Encoding::RealImag, &TableOptions::new(5)).unwrap();
        assert!(spec.is_empty());
    }
}
