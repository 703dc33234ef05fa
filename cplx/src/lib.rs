//! CPLX - Dense Complex Matrices
//!
//! This library provides a dense matrix of complex numbers with addition,
//! subtraction, scalar and matrix multiplication, identity/diagonal
//! construction and a plain-text input/output format.
//!
//! ## Architecture
//!
//! - **cplx-core**: the [`ComplexNumber`] value type, its text grammar,
//!   errors and traits (no I/O)
//! - **cplx**: the [`ComplexMatrix`] implementation, matrix text parsing and
//!   rendering, and reading matrices from a line source
//!
//! ## Quick Start
//!
//! ```rust
//! use cplx::{ComplexMatrix, ComplexNumber};
//!
//! fn example() -> cplx::Result<()> {
//!     let a: ComplexMatrix = "1 2\n3 4".parse()?;
//!     let b = ComplexMatrix::identity(2)?;
//!     let product = a.multiply(&b)?;
//!     assert_eq!(product, a);
//!
//!     let z: ComplexNumber = "3-2i".parse()?;
//!     println!("{z} has magnitude {}", z.abs());
//!     print!("{product}");
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! ## Features
//!
//! - **parallel**: rows of a matrix product are computed with rayon
//! - **serde**: `Serialize`/`Deserialize` for numbers and matrices
//! - **cli**: the `cplx` command line tool

// Re-export core abstractions
pub use cplx_core::{
    // Core traits
    DenseMatrix, MatrixElement,
    // Value type and grammar
    parse_complex, ComplexNumber,
    // Error handling
    CplxError, ErrorCategory, FormatErrorKind, Result,
};

pub mod matrix;
pub mod text;

pub use matrix::ComplexMatrix;
pub use text::{parse_matrix, read_matrix, render_matrix, ReadError, TextFormat};
