//! Text grammar for complex numbers
//!
//! A token is an optional real part followed by an optional imaginary term
//! at the end of the string:
//!
//! ```text
//! real      := [+-] digits [. digits]
//! imaginary := [+-] [digits [. digits]] 'i'
//! ```
//!
//! The imaginary term is found with a small backwards scanner rather than a
//! regular expression, so the accepted grammar is exactly what is written
//! here.

use crate::{ComplexNumber, CplxError, FormatErrorKind, Result};

/// Parse a single token such as `3+2i`, `-i`, `5` or `2.5-3.75i`
///
/// Leading and trailing whitespace is ignored; whitespace inside the token
/// is rejected.
pub fn parse_complex(s: &str) -> Result<ComplexNumber> {
    let token = s.trim();
    if token.is_empty() {
        return Err(CplxError::InvalidFormat(FormatErrorKind::Empty));
    }
    if token.chars().any(char::is_whitespace) {
        return Err(CplxError::InvalidFormat(FormatErrorKind::Whitespace));
    }

    let (real_text, imaginary_text) = split_imaginary_term(token);

    let real = if real_text.is_empty() {
        0.0
    } else {
        // "3.5.2i" would otherwise split into 3. and 5.2i
        if imaginary_text.is_some_and(|term| !term.starts_with(['+', '-'])) {
            return Err(CplxError::InvalidFormat(FormatErrorKind::InvalidReal));
        }
        parse_finite(real_text, FormatErrorKind::InvalidReal)?
    };

    let imaginary = match imaginary_text {
        None => 0.0,
        Some("") | Some("+") => 1.0,
        Some("-") => -1.0,
        Some(coefficient) => parse_finite(coefficient, FormatErrorKind::InvalidImaginary)?,
    };

    Ok(ComplexNumber::new(real, imaginary))
}

/// Split a token into its real text and the coefficient of a trailing
/// imaginary term (without the `i`)
///
/// Returns `None` for the coefficient when the token has no imaginary term.
pub fn split_imaginary_term(token: &str) -> (&str, Option<&str>) {
    let bytes = token.as_bytes();
    let Some((&b'i', _)) = bytes.split_last() else {
        return (token, None);
    };

    let end = bytes.len() - 1;
    let mut start = scan_digits_back(bytes, end);

    // A fractional point only counts when at least one digit precedes it
    if start > 0 && bytes[start - 1] == b'.' {
        let int_start = scan_digits_back(bytes, start - 1);
        if int_start < start - 1 {
            start = int_start;
        }
    }

    if start > 0 && matches!(bytes[start - 1], b'+' | b'-') {
        start -= 1;
    }

    (&token[..start], Some(&token[start..end]))
}

/// Index of the first byte in the run of ASCII digits ending just before `end`
fn scan_digits_back(bytes: &[u8], end: usize) -> usize {
    let mut start = end;
    while start > 0 && bytes[start - 1].is_ascii_digit() {
        start -= 1;
    }
    start
}

/// Index just past the run of ASCII digits starting at `start`
fn scan_digits_forward(bytes: &[u8], start: usize) -> usize {
    let mut end = start;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    end
}

/// True when `text` matches `[+-] digits [. digits]`
pub fn is_decimal(text: &str) -> bool {
    let bytes = text.as_bytes();
    let int_start = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let mut pos = scan_digits_forward(bytes, int_start);
    if pos == int_start {
        return false;
    }
    if pos < bytes.len() && bytes[pos] == b'.' {
        let frac_start = pos + 1;
        pos = scan_digits_forward(bytes, frac_start);
        if pos == frac_start {
            return false;
        }
    }
    pos == bytes.len()
}

fn parse_finite(text: &str, kind: FormatErrorKind) -> Result<f64> {
    if !is_decimal(text) {
        return Err(CplxError::InvalidFormat(kind));
    }
    // Only overlong digit runs can still overflow to infinity here
    let value: f64 = text.parse().map_err(|_| CplxError::InvalidFormat(kind))?;
    if !value.is_finite() {
        return Err(CplxError::InvalidFormat(FormatErrorKind::NonFinite));
    }
    Ok(value)
}
