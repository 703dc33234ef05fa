//! Dense row-major matrix of complex numbers
//!
//! All arithmetic returns a new matrix. The only mutation is the
//! bounds-checked [`ComplexMatrix::set`].

use cplx_core::{
    validate_index, validate_product_shape, validate_same_shape, validation::validate_shape,
    ComplexNumber, CplxError, DenseMatrix, Result,
};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::text::{self, TextFormat};

/// Dense `rows x cols` matrix of [`ComplexNumber`] values
///
/// Invariant: `rows >= 1`, `cols >= 1` and `data.len() == rows * cols`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        try_from = "Vec<Vec<ComplexNumber>>",
        into = "Vec<Vec<ComplexNumber>>"
    )
)]
pub struct ComplexMatrix {
    rows: usize,
    cols: usize,
    data: Vec<ComplexNumber>,
}

impl ComplexMatrix {
    /// Build a matrix from row-major cell data
    pub fn from_vec(rows: usize, cols: usize, data: Vec<ComplexNumber>) -> Result<Self> {
        let len = validate_shape(rows, cols)?;
        if data.len() != len {
            return Err(CplxError::DimensionMismatch {
                left: (rows, cols),
                right: (1, data.len()),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Build a matrix from a grid of rows, which must all have the same length
    pub fn from_rows(grid: Vec<Vec<ComplexNumber>>) -> Result<Self> {
        let rows = grid.len();
        let cols = grid.first().map_or(0, Vec::len);
        let len = validate_shape(rows, cols)?;

        let mut data = Vec::with_capacity(len);
        for row in grid {
            if row.len() != cols {
                return Err(CplxError::DimensionMismatch {
                    left: (1, cols),
                    right: (1, row.len()),
                });
            }
            data.extend(row);
        }
        Ok(Self { rows, cols, data })
    }

    /// A `rows x cols` matrix of zeros
    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        let len = validate_shape(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            data: vec![ComplexNumber::ZERO; len],
        })
    }

    /// The `size x size` identity matrix
    pub fn identity(size: usize) -> Result<Self> {
        Self::diagonal(&vec![ComplexNumber::ONE; size])
    }

    /// Square matrix with `values[i]` at `(i, i)` and zero elsewhere
    pub fn diagonal(values: &[ComplexNumber]) -> Result<Self> {
        let size = values.len();
        let mut matrix = Self::zeros(size, size)?;
        for (i, &value) in values.iter().enumerate() {
            matrix.data[i * size + i] = value;
        }
        Ok(matrix)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Matrix shape as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Bounds-checked read of one cell
    pub fn get(&self, row: usize, col: usize) -> Result<ComplexNumber> {
        let offset = validate_index(row, col, self.rows, self.cols)?;
        Ok(self.data[offset])
    }

    /// Bounds-checked replacement of one cell
    pub fn set(&mut self, value: ComplexNumber, row: usize, col: usize) -> Result<()> {
        let offset = validate_index(row, col, self.rows, self.cols)?;
        self.data[offset] = value;
        Ok(())
    }

    /// One row as a slice, or `None` past the last row
    pub fn row(&self, row: usize) -> Option<&[ComplexNumber]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.cols;
        Some(&self.data[start..start + self.cols])
    }

    /// Iterate over rows in order
    pub fn iter_rows(&self) -> impl Iterator<Item = &[ComplexNumber]> {
        self.data.chunks_exact(self.cols)
    }

    /// Row-major cell data
    pub fn as_slice(&self) -> &[ComplexNumber] {
        &self.data
    }

    /// Row-major cell data viewed as interleaved `[re, im, re, im, ...]`
    pub fn as_f64_slice(&self) -> &[f64] {
        bytemuck::cast_slice(&self.data)
    }

    /// Elementwise sum; shapes must match
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, |a, b| a + b)
    }

    /// Elementwise difference; shapes must match
    pub fn subtract(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, |a, b| a - b)
    }

    /// Multiply every cell by a real scalar
    pub fn scale(&self, factor: f64) -> Self {
        Self {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|&value| value * factor).collect(),
        }
    }

    /// Matrix product `self * other`
    ///
    /// Requires `self.cols() == other.rows()`. Each cell of the
    /// `self.rows() x other.cols()` result is accumulated from zero over the
    /// shared dimension in index order.
    pub fn multiply(&self, other: &Self) -> Result<Self> {
        let (rows, cols) = validate_product_shape(self.dimensions(), other.dimensions())?;

        let inner = self.cols;
        let fill_row = |(i, out): (usize, &mut [ComplexNumber])| {
            let lhs = &self.data[i * inner..(i + 1) * inner];
            for (j, cell) in out.iter_mut().enumerate() {
                *cell = lhs
                    .iter()
                    .enumerate()
                    .map(|(k, &a)| a * other.data[k * cols + j])
                    .sum();
            }
        };

        let mut data = vec![ComplexNumber::ZERO; rows * cols];
        #[cfg(feature = "parallel")]
        data.par_chunks_mut(cols).enumerate().for_each(fill_row);
        #[cfg(not(feature = "parallel"))]
        data.chunks_mut(cols).enumerate().for_each(fill_row);

        let product = Self { rows, cols, data };
        tracing::debug!(
            left = ?self.dimensions(),
            right = ?other.dimensions(),
            nnz = product.nnz(),
            "multiplied matrices"
        );
        Ok(product)
    }

    fn zip_with(
        &self,
        other: &Self,
        op: impl Fn(ComplexNumber, ComplexNumber) -> ComplexNumber,
    ) -> Result<Self> {
        validate_same_shape(self.dimensions(), other.dimensions())?;
        Ok(Self {
            rows: self.rows,
            cols: self.cols,
            data: self
                .data
                .iter()
                .zip(&other.data)
                .map(|(&a, &b)| op(a, b))
                .collect(),
        })
    }
}

impl DenseMatrix for ComplexMatrix {
    type Element = ComplexNumber;

    fn get_element(&self, row: usize, col: usize) -> Option<ComplexNumber> {
        self.get(row, col).ok()
    }

    fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }
}

impl TryFrom<Vec<Vec<ComplexNumber>>> for ComplexMatrix {
    type Error = CplxError;

    fn try_from(grid: Vec<Vec<ComplexNumber>>) -> Result<Self> {
        Self::from_rows(grid)
    }
}

impl From<ComplexMatrix> for Vec<Vec<ComplexNumber>> {
    fn from(matrix: ComplexMatrix) -> Self {
        matrix.iter_rows().map(<[ComplexNumber]>::to_vec).collect()
    }
}

impl fmt::Display for ComplexMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        text::write_matrix(f, self, &TextFormat::default())
    }
}

impl FromStr for ComplexMatrix {
    type Err = CplxError;

    fn from_str(s: &str) -> Result<Self> {
        text::parse_matrix(s, &TextFormat::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn real(rows: &[&[f64]]) -> ComplexMatrix {
        ComplexMatrix::from_rows(
            rows.iter()
                .map(|row| row.iter().map(|&v| ComplexNumber::from_real(v)).collect())
                .collect(),
        )
        .unwrap()
    }

    fn c(re: f64, im: f64) -> ComplexNumber {
        ComplexNumber::new(re, im)
    }

    #[test]
    fn test_construction() {
        let m = real(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
        assert_eq!(m.dimensions(), (2, 3));
        assert_eq!(m.rows(), 2);
        assert_eq!(m.cols(), 3);
        assert_eq!(m.row(1), Some(&[c(4.0, 0.0), c(5.0, 0.0), c(6.0, 0.0)][..]));
        assert_eq!(m.row(2), None);
        assert_eq!(m.iter_rows().count(), 2);

        assert_eq!(
            ComplexMatrix::from_rows(vec![vec![c(1.0, 0.0)], vec![c(1.0, 0.0), c(2.0, 0.0)]]),
            Err(CplxError::DimensionMismatch {
                left: (1, 1),
                right: (1, 2)
            })
        );
        assert_eq!(ComplexMatrix::from_rows(vec![]), Err(CplxError::EmptyMatrix));
        assert_eq!(ComplexMatrix::from_rows(vec![vec![]]), Err(CplxError::EmptyMatrix));
        assert!(ComplexMatrix::from_vec(2, 2, vec![ComplexNumber::ONE; 3]).is_err());
        assert_eq!(
            ComplexMatrix::zeros(usize::MAX, 2),
            Err(CplxError::ShapeOverflow {
                rows: usize::MAX,
                cols: 2
            })
        );
    }

    #[test]
    fn test_get_set() {
        let mut m = ComplexMatrix::zeros(2, 2).unwrap();
        m.set(c(1.0, -1.0), 1, 0).unwrap();
        assert_eq!(m.get(1, 0), Ok(c(1.0, -1.0)));
        assert_eq!(m.get(0, 0), Ok(ComplexNumber::ZERO));

        let oob = CplxError::IndexOutOfBounds {
            row: 2,
            col: 0,
            rows: 2,
            cols: 2,
        };
        assert_eq!(m.get(2, 0), Err(oob));
        assert_eq!(m.set(ComplexNumber::ONE, 2, 0), Err(oob));
        assert!(m.get(0, 2).is_err());
        assert_eq!(m.get_element(0, 5), None);
    }

    #[test]
    fn test_identity_and_diagonal() {
        let id = ComplexMatrix::identity(3).unwrap();
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j {
                    ComplexNumber::ONE
                } else {
                    ComplexNumber::ZERO
                };
                assert_eq!(id.get(i, j), Ok(expected));
            }
        }
        assert_eq!(id.nnz(), 3);
        assert_eq!(ComplexMatrix::identity(0), Err(CplxError::EmptyMatrix));

        let d = ComplexMatrix::diagonal(&[c(1.0, 1.0), c(2.0, 0.0)]).unwrap();
        let zero = ComplexNumber::ZERO;
        assert_eq!(d.as_slice(), &[c(1.0, 1.0), zero, zero, c(2.0, 0.0)]);
        assert_eq!(ComplexMatrix::diagonal(&[]), Err(CplxError::EmptyMatrix));
    }

    #[test]
    fn test_add_subtract_scale() {
        let a = ComplexMatrix::from_rows(vec![vec![c(1.0, 2.0), c(3.0, -1.0)]]).unwrap();
        let b = ComplexMatrix::from_rows(vec![vec![c(0.5, 0.0), c(-3.0, 1.0)]]).unwrap();
        assert_eq!(a.add(&b).unwrap().as_slice(), &[c(1.5, 2.0), c(0.0, 0.0)]);
        assert_eq!(a.subtract(&b).unwrap().as_slice(), &[c(0.5, 2.0), c(6.0, -2.0)]);
        assert_eq!(a.scale(2.0).as_slice(), &[c(2.0, 4.0), c(6.0, -2.0)]);

        let tall = ComplexMatrix::zeros(2, 1).unwrap();
        let mismatch = CplxError::DimensionMismatch {
            left: (1, 2),
            right: (2, 1),
        };
        assert_eq!(a.add(&tall), Err(mismatch));
        assert_eq!(a.subtract(&tall), Err(mismatch));
    }

    #[test]
    fn test_multiply() {
        let id = real(&[&[1.0, 0.0], &[0.0, 1.0]]);
        let m = real(&[&[1.0, 2.0], &[3.0, 4.0]]);
        assert_eq!(id.multiply(&m), Ok(m.clone()));

        let n = real(&[&[5.0, 6.0], &[7.0, 8.0]]);
        assert_eq!(m.multiply(&n), Ok(real(&[&[19.0, 22.0], &[43.0, 50.0]])));

        let row = ComplexMatrix::from_rows(vec![vec![c(1.0, 1.0), c(0.0, 2.0)]]).unwrap();
        let col = ComplexMatrix::from_rows(vec![vec![c(2.0, 0.0)], vec![c(0.0, -1.0)]]).unwrap();
        let product = row.multiply(&col).unwrap();
        assert_eq!(product.dimensions(), (1, 1));
        assert_eq!(product.get(0, 0), Ok(c(4.0, 2.0)));
        assert_eq!(col.multiply(&row).unwrap().dimensions(), (2, 2));

        assert_eq!(
            row.multiply(&row),
            Err(CplxError::DimensionMismatch {
                left: (1, 2),
                right: (1, 2)
            })
        );
    }

    #[test]
    fn test_identity_is_left_neutral() {
        let m = ComplexMatrix::from_rows(vec![
            vec![c(1.0, -2.0), c(0.5, 0.0), c(0.0, 3.0)],
            vec![c(-1.0, 1.0), c(2.0, 2.0), c(7.0, 0.0)],
        ])
        .unwrap();
        let id = ComplexMatrix::identity(2).unwrap();
        assert_eq!(id.multiply(&m), Ok(m.clone()));
        assert_eq!(m.multiply(&ComplexMatrix::identity(3).unwrap()), Ok(m));
    }

    #[test]
    fn test_f64_view() {
        let m = ComplexMatrix::from_rows(vec![vec![c(1.0, 2.0), c(3.0, 4.0)]]).unwrap();
        assert_eq!(m.as_f64_slice(), &[1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_nested_vec_conversion() {
        let grid = vec![vec![c(1.0, 0.0), c(0.0, 1.0)]];
        let m = ComplexMatrix::try_from(grid.clone()).unwrap();
        assert_eq!(Vec::<Vec<ComplexNumber>>::from(m), grid);
    }
}
