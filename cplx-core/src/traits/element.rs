//! Matrix element type constraints
//!
//! This module defines the trait that constrains what types can be
//! stored as dense matrix elements.

use crate::ComplexNumber;

/// Trait for types that can be stored as matrix elements
///
/// All matrix element types must be:
/// - Copy: Can be copied without allocation
/// - PartialEq: Can be compared for equality
/// - Sized: Have a known size at compile time
pub trait MatrixElement: Copy + PartialEq + Sized {
    /// Additive identity
    fn zero() -> Self;

    /// True when this is the additive identity
    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
}

impl MatrixElement for ComplexNumber {
    fn zero() -> Self {
        ComplexNumber::ZERO
    }
}
