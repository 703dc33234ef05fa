//! Abstract interfaces for dense matrices and their elements
//!
//! Traits are pure interfaces; the concrete matrix lives in the `cplx` crate.

pub mod element;
pub mod matrix;

pub use element::MatrixElement;
pub use matrix::DenseMatrix;
