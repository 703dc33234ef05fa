//! Validation utilities for complex numbers and matrices
//!
//! This module contains pure validation and parsing functions with no I/O
//! dependencies.

pub mod bounds;
pub mod parsing;

pub use bounds::{validate_index, validate_product_shape, validate_same_shape, validate_shape};
pub use parsing::{is_decimal, parse_complex, split_imaginary_term};
