//! Error types for complex number and matrix operations

/// Reason a piece of text could not be read as a complex number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatErrorKind {
    /// Input was empty
    Empty,
    /// Input contained whitespace inside the token
    Whitespace,
    /// The real segment is not a decimal number
    InvalidReal,
    /// The imaginary coefficient is not a decimal number
    InvalidImaginary,
    /// A segment parsed to NaN or infinity
    NonFinite,
    /// A matrix row is missing its required delimiters
    MissingDelimiter,
}

impl core::fmt::Display for FormatErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            FormatErrorKind::Empty => "empty input",
            FormatErrorKind::Whitespace => "cannot contain spaces",
            FormatErrorKind::InvalidReal => "unparsable real part",
            FormatErrorKind::InvalidImaginary => "unparsable imaginary part",
            FormatErrorKind::NonFinite => "value is not finite",
            FormatErrorKind::MissingDelimiter => "row is missing its delimiters",
        };
        write!(f, "{msg}")
    }
}

/// Broad grouping of [`CplxError`] variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Malformed text input
    Format,
    /// Shapes of the operands do not line up
    Dimension,
    /// Row or column outside the matrix
    Index,
    /// Arithmetic with no defined result
    Arithmetic,
    /// Argument outside the accepted domain
    Argument,
}

/// Errors that can occur during complex number and matrix operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CplxError {
    /// Text is not a valid complex number
    InvalidFormat(FormatErrorKind),
    /// Operand shapes are incompatible, given as (rows, cols)
    DimensionMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },
    /// Row or column index out of range
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    /// Division by the zero complex number
    DivisionByZero,
    /// Exponent below 1 passed to `pow`
    InvalidExponent(i32),
    /// A matrix needs at least one row and one column
    EmptyMatrix,
    /// `rows * cols` does not fit in `usize`
    ShapeOverflow { rows: usize, cols: usize },
}

impl CplxError {
    /// Category this error belongs to
    pub fn category(&self) -> ErrorCategory {
        match self {
            CplxError::InvalidFormat(_) => ErrorCategory::Format,
            CplxError::DimensionMismatch { .. } | CplxError::ShapeOverflow { .. } => {
                ErrorCategory::Dimension
            }
            CplxError::IndexOutOfBounds { .. } => ErrorCategory::Index,
            CplxError::DivisionByZero => ErrorCategory::Arithmetic,
            CplxError::InvalidExponent(_) | CplxError::EmptyMatrix => ErrorCategory::Argument,
        }
    }
}

impl core::fmt::Display for CplxError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CplxError::InvalidFormat(kind) => write!(f, "Invalid format: {kind}"),
            CplxError::DimensionMismatch { left, right } => write!(
                f,
                "Dimension mismatch: {}x{} and {}x{}",
                left.0, left.1, right.0, right.1
            ),
            CplxError::IndexOutOfBounds {
                row,
                col,
                rows,
                cols,
            } => write!(
                f,
                "Index ({row}, {col}) out of bounds for {rows}x{cols} matrix"
            ),
            CplxError::DivisionByZero => write!(f, "Division by zero"),
            CplxError::InvalidExponent(n) => {
                write!(f, "Degree must be greater than 0. Was: {n}")
            }
            CplxError::EmptyMatrix => write!(f, "Matrix must have at least one row and column"),
            CplxError::ShapeOverflow { rows, cols } => {
                write!(f, "Matrix shape {rows}x{cols} is too large")
            }
        }
    }
}

impl std::error::Error for CplxError {}

/// Result type for complex number and matrix operations
pub type Result<T> = core::result::Result<T, CplxError>;
