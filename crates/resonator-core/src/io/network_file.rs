//! Network analyzer file loader
//!
//! Reads one sample per line from `.s2p`-style exports: a frequency in the
//! first column and two value columns chosen by index. Comment and label
//! lines are recognised by their first character, depending on the
//! [`FileDialect`].

use std::path::Path;

use ndarray::Array1;

use super::{parse_column, Delimiter};
use crate::encoding::Encoding;
use crate::error::{ResonatorError, Result};
use crate::frequency::FrequencyUnit;
use crate::spectrum::Spectrum;

/// Comment conventions of a network analyzer export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileDialect {
    /// Only `#` starts a comment
    #[default]
    Simple,
    /// `#` and `!` start comments, `M`/`P` start column-label lines
    Touchstone,
}

/// What a physical line of a network file holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    Comment,
    Label,
    Data,
}

impl FileDialect {
    /// Dialect conventionally paired with an encoding: real/imaginary exports
    /// are plain tables, magnitude/phase exports come from Touchstone files.
    pub fn for_encoding(encoding: Encoding) -> Self {
        if encoding.is_polar() {
            FileDialect::Touchstone
        } else {
            FileDialect::Simple
        }
    }

    /// Classify a line (without its terminator) by its first character
    pub fn classify(&self, line: &str) -> LineKind {
        match (line.chars().next(), self) {
            (None, _) => LineKind::Blank,
            (Some('#'), _) => LineKind::Comment,
            (Some('!'), FileDialect::Touchstone) => LineKind::Comment,
            (Some('M' | 'P'), FileDialect::Touchstone) => LineKind::Label,
            _ => LineKind::Data,
        }
    }
}

/// Column selection and conventions of a network file
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkFileOptions {
    /// Column of the first value (real part or magnitude)
    pub y1_col: usize,
    /// Column of the second value (imaginary part or phase)
    pub y2_col: usize,
    pub encoding: Encoding,
    /// Factor applied to the frequency column
    pub freq_unit_scale: f64,
    pub delimiter: Delimiter,
    pub dialect: FileDialect,
}

impl NetworkFileOptions {
    /// Options reading `y1_col`/`y2_col` with the dialect matching `encoding`
    ///
    /// # Example
    /// ```ignore
    /// // S21 of a 2-port file in dB/degrees: columns 3 and 4
    /// let options = NetworkFileOptions::new(3, 4, Encoding::DbMagPhaseDeg)
    ///     .with_frequency_unit(FrequencyUnit::GHz);
    /// ```
    pub fn new(y1_col: usize, y2_col: usize, encoding: Encoding) -> Self {
        Self {
            y1_col,
            y2_col,
            encoding,
            freq_unit_scale: 1.0,
            delimiter: Delimiter::Whitespace,
            dialect: FileDialect::for_encoding(encoding),
        }
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

    /// Override the dialect chosen from the encoding
    pub fn with_dialect(mut self, dialect: FileDialect) -> Self {
        self.dialect = dialect;
        self
    }
}

/// Load a network analyzer file
///
/// The file is read completely before parsing. Samples are returned in file
/// order; frequencies are not checked for monotonicity.
pub fn load_network_file<P: AsRef<Path>>(
    path: P,
    options: &NetworkFileOptions,
) -> Result<Spectrum> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;
    let spectrum = parse_network_file(&content, options)?;
    log::debug!(
        "loaded {} samples from {} ({}, {:?} dialect)",
        spectrum.len(),
        path.display(),
        options.encoding,
        options.dialect
    );
    Ok(spectrum)
}

/// Parse network file content from a string
///
/// A line that is not blank, comment or label must hold a numeric frequency
/// in column 0 and numbers in both value columns; otherwise parsing stops
/// with [`ResonatorError::MalformedLine`] carrying the 1-based line number.
pub fn parse_network_file(content: &str, options: &NetworkFileOptions) -> Result<Spectrum> {
    let mut frequencies = Vec::new();
    let mut values = Vec::new();
    let mut skipped = 0usize;

    for (idx, line) in content.lines().enumerate() {
        match options.dialect.classify(line) {
            LineKind::Data => {}
            kind => {
                log::trace!("line {}: {kind:?}", idx + 1);
                skipped += 1;
                continue;
            }
        }

        let fields = options.delimiter.split(line);
        let malformed = |message| ResonatorError::MalformedLine {
            line: idx + 1,
            message,
        };
        let f = parse_column(&fields, 0).map_err(malformed)?;
        let y1 = parse_column(&fields, options.y1_col).map_err(malformed)?;
        let y2 = parse_column(&fields, options.y2_col).map_err(malformed)?;

        frequencies.push(f * options.freq_unit_scale);
        values.push(options.encoding.to_complex(y1, y2));
    }

    log::trace!("{skipped} non-data lines skipped");
    Spectrum::new(Array1::from(frequencies), Array1::from(values))
}
