//! Index and shape validation for dense matrices
//!
//! Pure checks on `(rows, cols)` pairs, shared by every matrix operation
//! that needs a bounds or dimension guarantee.

use crate::CplxError;

/// Validate that `(row, col)` lies inside a `rows x cols` matrix
///
/// Returns the row-major offset of the cell on success.
pub const fn validate_index(
    row: usize,
    col: usize,
    rows: usize,
    cols: usize,
) -> Result<usize, CplxError> {
    if row >= rows || col >= cols {
        return Err(CplxError::IndexOutOfBounds {
            row,
            col,
            rows,
            cols,
        });
    }
    Ok(row * cols + col)
}

/// Validate that two shapes are identical (elementwise operations)
pub const fn validate_same_shape(
    left: (usize, usize),
    right: (usize, usize),
) -> Result<(), CplxError> {
    if left.0 != right.0 || left.1 != right.1 {
        return Err(CplxError::DimensionMismatch { left, right });
    }
    Ok(())
}

/// Validate that `left * right` is defined, returning the product shape
pub const fn validate_product_shape(
    left: (usize, usize),
    right: (usize, usize),
) -> Result<(usize, usize), CplxError> {
    if left.1 != right.0 {
        return Err(CplxError::DimensionMismatch { left, right });
    }
    Ok((left.0, right.1))
}

/// Validate a non-empty shape and return its cell count with overflow protection
pub const fn validate_shape(rows: usize, cols: usize) -> Result<usize, CplxError> {
    if rows == 0 || cols == 0 {
        return Err(CplxError::EmptyMatrix);
    }
    match rows.checked_mul(cols) {
        Some(len) => Ok(len),
        None => Err(CplxError::ShapeOverflow { rows, cols }),
    }
}
