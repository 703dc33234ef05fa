//! Immutable complex number value type
//!
//! Every arithmetic operation returns a new value. Operations that can fail
//! (division, reciprocal, integer power) return [`Result`] instead of
//! producing NaN or panicking.

use crate::{CplxError, Result};
use core::fmt;
use core::iter::Sum;
use core::ops::{Add, Mul, Neg, Sub};
use core::str::FromStr;

/// A complex number with `f64` real and imaginary parts
///
/// The layout is `#[repr(C)]` and [`bytemuck::Pod`], so a slice of complex
/// numbers can be viewed as interleaved `[re, im, re, im, ...]` values.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, bytemuck::Pod, bytemuck::Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComplexNumber {
    real: f64,
    imaginary: f64,
}

impl ComplexNumber {
    /// The complex constant `0+0i`
    pub const ZERO: Self = Self::from_parts(0.0, 0.0);

    /// The complex constant `1+0i`
    pub const ONE: Self = Self::from_parts(1.0, 0.0);

    /// The imaginary unit `i`
    pub const I: Self = Self::from_parts(0.0, 1.0);

    /// Create a complex number from its real and imaginary parts
    ///
    /// Both parts must be finite.
    pub fn new(real: f64, imaginary: f64) -> Self {
        debug_assert!(
            real.is_finite() && imaginary.is_finite(),
            "complex parts must be finite: ({real}, {imaginary})"
        );
        Self::from_parts(real, imaginary)
    }

    /// Create a complex number with no imaginary part
    pub fn from_real(real: f64) -> Self {
        Self::new(real, 0.0)
    }

    /// Unchecked constructor for arithmetic results, which may overflow to infinity
    const fn from_parts(real: f64, imaginary: f64) -> Self {
        Self { real, imaginary }
    }

    /// Parse text such as `3-2i`, `-i` or `7` into a complex number
    pub fn parse(s: &str) -> Result<Self> {
        crate::validation::parse_complex(s)
    }

    pub const fn real(&self) -> f64 {
        self.real
    }

    pub const fn imaginary(&self) -> f64 {
        self.imaginary
    }

    /// True when neither part is NaN or infinite
    pub fn is_finite(&self) -> bool {
        self.real.is_finite() && self.imaginary.is_finite()
    }

    /// True when both parts are exactly zero
    pub fn is_zero(&self) -> bool {
        self.real == 0.0 && self.imaginary == 0.0
    }

    /// Magnitude: `sqrt(re^2 + im^2)`
    pub fn abs(&self) -> f64 {
        (self.real * self.real + self.imaginary * self.imaginary).sqrt()
    }

    /// Complex conjugate: `re - im i`
    pub fn conjugate(&self) -> Self {
        Self::from_parts(self.real, -self.imaginary)
    }

    /// Divide by `divisor`
    ///
    /// Uses `(a+bi)/(c+di) = ((ac+bd) + (bc-ad)i) / (c^2+d^2)`. Fails with
    /// [`CplxError::DivisionByZero`] when the divisor is `0+0i`.
    pub fn divide(&self, divisor: Self) -> Result<Self> {
        let denominator = divisor.real * divisor.real + divisor.imaginary * divisor.imaginary;
        if denominator == 0.0 {
            return Err(CplxError::DivisionByZero);
        }
        Ok(Self::from_parts(
            (self.real * divisor.real + self.imaginary * divisor.imaginary) / denominator,
            (self.imaginary * divisor.real - self.real * divisor.imaginary) / denominator,
        ))
    }

    /// Multiplicative inverse, `1 / self`
    pub fn reciprocal(&self) -> Result<Self> {
        Self::ONE.divide(*self)
    }

    /// Raise to a positive integer power by repeated multiplication
    ///
    /// Exponents below 1 are rejected with [`CplxError::InvalidExponent`].
    pub fn pow(&self, exponent: i32) -> Result<Self> {
        if exponent < 1 {
            return Err(CplxError::InvalidExponent(exponent));
        }
        let mut acc = *self;
        for _ in 1..exponent {
            acc = acc * *self;
        }
        Ok(acc)
    }
}

impl From<f64> for ComplexNumber {
    fn from(real: f64) -> Self {
        Self::from_real(real)
    }
}

impl From<(f64, f64)> for ComplexNumber {
    fn from((real, imaginary): (f64, f64)) -> Self {
        Self::new(real, imaginary)
    }
}

impl Add for ComplexNumber {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_parts(self.real + rhs.real, self.imaginary + rhs.imaginary)
    }
}

impl Add<f64> for ComplexNumber {
    type Output = Self;

    fn add(self, rhs: f64) -> Self {
        Self::from_parts(self.real + rhs, self.imaginary)
    }
}

impl Sub for ComplexNumber {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_parts(self.real - rhs.real, self.imaginary - rhs.imaginary)
    }
}

impl Sub<f64> for ComplexNumber {
    type Output = Self;

    fn sub(self, rhs: f64) -> Self {
        Self::from_parts(self.real - rhs, self.imaginary)
    }
}

impl Mul for ComplexNumber {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::from_parts(
            self.real * rhs.real - self.imaginary * rhs.imaginary,
            self.real * rhs.imaginary + self.imaginary * rhs.real,
        )
    }
}

impl Mul<f64> for ComplexNumber {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::from_parts(self.real * rhs, self.imaginary * rhs)
    }
}

impl Neg for ComplexNumber {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_parts(-self.real, -self.imaginary)
    }
}

impl Sum for ComplexNumber {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| acc + x)
    }
}

/// Shortest round-trip rendering of a finite `f64`, always with a decimal point
fn write_decimal(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    let text = value.to_string();
    if text.contains('.') || !value.is_finite() {
        f.write_str(&text)
    } else {
        write!(f, "{text}.0")
    }
}

impl fmt::Display for ComplexNumber {
    /// Canonical form: `3.0-2.0i`, `3.0+i`, `0.0`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_decimal(f, self.real)?;
        if self.imaginary == 0.0 {
            return Ok(());
        }
        f.write_str(if self.imaginary > 0.0 { "+" } else { "-" })?;
        let magnitude = self.imaginary.abs();
        if magnitude != 1.0 {
            write_decimal(f, magnitude)?;
        }
        f.write_str("i")
    }
}

impl FromStr for ComplexNumber {
    type Err = CplxError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
