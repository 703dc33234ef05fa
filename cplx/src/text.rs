//! Matrix text input and output
//!
//! A matrix is written one row per line, each row a whitespace separated
//! list of complex number tokens. Input ends at the first blank line or at
//! end of input. Rendered rows are wrapped in delimiters (`[` and `]` by
//! default) and the parser accepts rows with or without them, so rendered
//! text reads back as an equal matrix.

use cplx_core::{parse_complex, ComplexNumber, CplxError, FormatErrorKind, Result};
use std::fmt;
use std::io::BufRead;

use crate::ComplexMatrix;

/// Configuration for the matrix text grammar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFormat {
    /// Character opening each rendered row
    pub open: char,
    /// Character closing each rendered row
    pub close: char,
    /// Text placed between rendered cells
    pub separator: String,
    /// Reject rows that are not wrapped in `open`/`close` when parsing
    pub strict_delimiters: bool,
}

impl TextFormat {
    /// Set the row delimiters
    pub fn with_delimiters(mut self, open: char, close: char) -> Self {
        self.open = open;
        self.close = close;
        self
    }

    /// Set the cell separator used when rendering
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Require delimiters on every parsed row
    pub fn with_strict_delimiters(mut self, strict: bool) -> Self {
        self.strict_delimiters = strict;
        self
    }

    /// Strip the row delimiters from a trimmed line, if present
    fn unwrap_row<'a>(&self, line: &'a str) -> Result<&'a str> {
        let inner = line
            .strip_prefix(self.open)
            .and_then(|rest| rest.strip_suffix(self.close));
        match inner {
            Some(inner) => Ok(inner),
            None if self.strict_delimiters => Err(CplxError::InvalidFormat(
                FormatErrorKind::MissingDelimiter,
            )),
            None => Ok(line),
        }
    }
}

impl Default for TextFormat {
    fn default() -> Self {
        Self {
            open: '[',
            close: ']',
            separator: "  ".to_string(),
            strict_delimiters: false,
        }
    }
}

/// Parse one line into a row of complex numbers
pub fn parse_row(line: &str, format: &TextFormat) -> Result<Vec<ComplexNumber>> {
    let inner = format.unwrap_row(line.trim())?;
    let row = inner
        .split_whitespace()
        .map(parse_complex)
        .collect::<Result<Vec<_>>>()?;
    if row.is_empty() {
        return Err(CplxError::EmptyMatrix);
    }
    Ok(row)
}

/// Parse a sequence of lines into a matrix
///
/// Stops at the first blank line. Every row must have the same number of
/// tokens, otherwise [`CplxError::DimensionMismatch`] is returned.
pub fn parse_lines<I, S>(lines: I, format: &TextFormat) -> Result<ComplexMatrix>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut grid: Vec<Vec<ComplexNumber>> = Vec::new();
    for line in lines {
        let line = line.as_ref();
        if line.trim().is_empty() {
            break;
        }
        let row = parse_row(line, format).inspect_err(|err| {
            tracing::warn!(row = grid.len(), error = %err, "rejected matrix row");
        })?;
        if let Some(first) = grid.first() {
            if first.len() != row.len() {
                tracing::warn!(
                    row = grid.len(),
                    expected = first.len(),
                    found = row.len(),
                    "matrix row length differs from first row"
                );
                return Err(CplxError::DimensionMismatch {
                    left: (1, first.len()),
                    right: (1, row.len()),
                });
            }
        }
        tracing::debug!(row = grid.len(), cols = row.len(), "accepted matrix row");
        grid.push(row);
    }
    ComplexMatrix::from_rows(grid)
}

/// Parse a block of text into a matrix
pub fn parse_matrix(text: &str, format: &TextFormat) -> Result<ComplexMatrix> {
    parse_lines(text.lines(), format)
}

/// Write a matrix with one delimited row per line
pub fn write_matrix<W: fmt::Write>(
    out: &mut W,
    matrix: &ComplexMatrix,
    format: &TextFormat,
) -> fmt::Result {
    for row in matrix.iter_rows() {
        out.write_char(format.open)?;
        for (i, value) in row.iter().enumerate() {
            if i > 0 {
                out.write_str(&format.separator)?;
            }
            write!(out, "{value}")?;
        }
        out.write_char(format.close)?;
        out.write_char('\n')?;
    }
    Ok(())
}

/// Render a matrix to a string
pub fn render_matrix(matrix: &ComplexMatrix, format: &TextFormat) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail
    let _ = write_matrix(&mut out, matrix, format);
    out
}

/// Errors from reading a matrix off a line source
#[derive(Debug)]
pub enum ReadError {
    /// The underlying reader failed
    Io(std::io::Error),
    /// The text did not describe a valid matrix
    Parse(CplxError),
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadError::Io(err) => write!(f, "Failed to read matrix: {err}"),
            ReadError::Parse(err) => write!(f, "Failed to parse matrix: {err}"),
        }
    }
}

impl std::error::Error for ReadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReadError::Io(err) => Some(err),
            ReadError::Parse(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for ReadError {
    fn from(err: std::io::Error) -> Self {
        ReadError::Io(err)
    }
}

impl From<CplxError> for ReadError {
    fn from(err: CplxError) -> Self {
        ReadError::Parse(err)
    }
}

/// Read one matrix from a line source
///
/// Consumes lines up to and including the first blank line, so several
/// matrices can be read back to back from the same reader.
pub fn read_matrix<R: BufRead>(
    reader: R,
    format: &TextFormat,
) -> std::result::Result<ComplexMatrix, ReadError> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            break;
        }
        lines.push(line);
    }
    Ok(parse_lines(&lines, format)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(re: f64, im: f64) -> ComplexNumber {
        ComplexNumber::new(re, im)
    }

    #[test]
    fn test_parse_row() {
        let format = TextFormat::default();
        assert_eq!(
            parse_row("1  2-i\t-3.5i", &format),
            Ok(vec![c(1.0, 0.0), c(2.0, -1.0), c(0.0, -3.5)])
        );
        assert_eq!(
            parse_row("[1.0+i  2.0]", &format),
            Ok(vec![c(1.0, 1.0), c(2.0, 0.0)])
        );
        assert_eq!(parse_row("[ ]", &format), Err(CplxError::EmptyMatrix));
        assert_eq!(
            parse_row("1 x", &format),
            Err(CplxError::InvalidFormat(FormatErrorKind::InvalidReal))
        );
    }

    #[test]
    fn test_strict_delimiters() {
        let format = TextFormat::default()
            .with_delimiters('|', '|')
            .with_strict_delimiters(true);
        assert_eq!(parse_row("|1  2|", &format), Ok(vec![c(1.0, 0.0), c(2.0, 0.0)]));
        assert_eq!(
            parse_row("1 2", &format),
            Err(CplxError::InvalidFormat(FormatErrorKind::MissingDelimiter))
        );
    }

    #[test]
    fn test_parse_matrix() {
        let m = parse_matrix("1 2\n3 4i\n\nignored", &TextFormat::default()).unwrap();
        assert_eq!(m.dimensions(), (2, 2));
        assert_eq!(m.get(1, 1), Ok(c(0.0, 4.0)));

        assert_eq!(
            parse_matrix("1 2 3\n4 5", &TextFormat::default()),
            Err(CplxError::DimensionMismatch {
                left: (1, 3),
                right: (1, 2)
            })
        );
        assert_eq!(
            parse_matrix("", &TextFormat::default()),
            Err(CplxError::EmptyMatrix)
        );
        assert_eq!(
            parse_matrix("\n1 2", &TextFormat::default()),
            Err(CplxError::EmptyMatrix)
        );
    }

    #[test]
    fn test_render_matrix() {
        let m = ComplexMatrix::from_rows(vec![
            vec![c(1.0, 0.0), c(3.0, 1.0)],
            vec![c(0.0, -2.0), c(2.5, -0.5)],
        ])
        .unwrap();
        assert_eq!(
            render_matrix(&m, &TextFormat::default()),
            "[1.0  3.0+i]\n[0.0-2.0i  2.5-0.5i]\n"
        );
        assert_eq!(m.to_string(), render_matrix(&m, &TextFormat::default()));

        let pipes = TextFormat::default()
            .with_delimiters('|', '|')
            .with_separator(", ");
        assert_eq!(render_matrix(&m, &pipes), "|1.0, 3.0+i|\n|0.0-2.0i, 2.5-0.5i|\n");
    }

    #[test]
    fn test_read_matrix_back_to_back() {
        let input = "1 0\n0 1\n\n2 i\n-i 2\n\n";
        let mut reader = std::io::Cursor::new(input);
        let format = TextFormat::default();
        let first = read_matrix(&mut reader, &format).unwrap();
        let second = read_matrix(&mut reader, &format).unwrap();
        assert_eq!(first, ComplexMatrix::identity(2).unwrap());
        assert_eq!(second.get(0, 1), Ok(ComplexNumber::I));
        assert!(matches!(
            read_matrix(&mut reader, &format),
            Err(ReadError::Parse(CplxError::EmptyMatrix))
        ));
    }
}
