//! CPLX Core - Complex Number Value Type and Text Grammar
//!
//! This crate provides the immutable [`ComplexNumber`] type, its text
//! grammar, the shared error type and the element/matrix traits used by
//! the `cplx` matrix crate. It performs no I/O.

pub mod complex;
pub mod error;
pub mod traits;
pub mod validation;

pub use complex::ComplexNumber;
pub use error::*;
pub use traits::*;
pub use validation::{parse_complex, validate_index, validate_product_shape, validate_same_shape};
