//! Core matrix abstraction traits
//!
//! This module defines the read-only interface every dense matrix
//! implementation provides, independent of how it stores its cells.

use super::element::MatrixElement;

/// Core dense matrix trait for layout-agnostic access
pub trait DenseMatrix {
    /// The element type stored in this matrix
    type Element: MatrixElement;

    /// Get an element at the specified position
    ///
    /// Returns `None` if the position is out of bounds.
    fn get_element(&self, row: usize, col: usize) -> Option<Self::Element>;

    /// Get matrix dimensions as (rows, cols)
    fn dimensions(&self) -> (usize, usize);

    /// Get number of non-zero elements
    fn nnz(&self) -> usize {
        let (rows, cols) = self.dimensions();
        (0..rows)
            .flat_map(|row| (0..cols).map(move |col| (row, col)))
            .filter_map(|(row, col)| self.get_element(row, col))
            .filter(|value| !value.is_zero())
            .count()
    }
}
