//! Measurement file I/O
//!
//! Two loaders are provided:
//!
//! - [`table`] - delimited text tables with a fixed number of header rows
//! - [`network_file`] - line-oriented network analyzer exports (`.s2p` style)
//!   with comment and column-label lines

pub mod network_file;
pub mod table;

pub use network_file::{load_network_file, parse_network_file, FileDialect, NetworkFileOptions};
pub use table::{load_table, parse_table, TableOptions};

/// Field separator of a data line
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Delimiter {
    /// Any run of whitespace
    #[default]
    Whitespace,
    /// A single character; every occurrence separates two fields
    Char(char),
    /// A separator string such as `", "`; an empty string means whitespace
    Str(String),
}

impl Delimiter {
    /// Split a data line into fields
    ///
    /// With an explicit character the fields are trimmed, so `1.0, 2.0`
    /// splits on `,` into `["1.0", "2.0"]`.
    pub fn split<'a>(&self, line: &'a str) -> Vec<&'a str> {
        match self {
            Delimiter::Whitespace => line.split_whitespace().collect(),
            Delimiter::Char(c) => line.split(*c).map(str::trim).collect(),
            Delimiter::Str(s) if s.is_empty() => line.split_whitespace().collect(),
            Delimiter::Str(s) => line.split(s.as_str()).map(str::trim).collect(),
        }
    }
}

/// Parse column `col` of an already split line as a float.
///
/// The error is a message without line context; callers wrap it into the
/// row/line error of their format.
pub(crate) fn parse_column(fields: &[&str], col: usize) -> Result<f64, String> {
    let field = fields
        .get(col)
        .ok_or_else(|| format!("missing column {col} (found {} fields)", fields.len()))?;
    field
        .parse::<f64>()
        .map_err(|_| format!("invalid number {field:?} in column {col}"))
}
