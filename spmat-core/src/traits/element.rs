//! Matrix element type constraints
//!
//! This module defines the trait that constrains what types can be
//! stored as values in a [`SparseMatrix`](crate::SparseMatrix).

use core::fmt::{Debug, Display};

/// Trait for types that can be stored as matrix elements
///
/// All matrix element types must be:
/// - Copy: Can be copied without allocation
/// - PartialEq: Can be compared against the additive identity
/// - Display: Can be rendered back into the text format
///
/// Arithmetic is checked: `None` means the result does not fit the type.
pub trait MatrixElement: Copy + PartialEq + Debug + Display {
    /// The additive identity
    fn zero() -> Self;

    /// Whether this value is the additive identity and must not be stored
    fn is_zero(self) -> bool {
        self == Self::zero()
    }

    fn checked_add(self, rhs: Self) -> Option<Self>;

    fn checked_sub(self, rhs: Self) -> Option<Self>;

    fn checked_mul(self, rhs: Self) -> Option<Self>;

    /// Parse a value field from the text format
    ///
    /// Surrounding whitespace has already been removed by the caller.
    fn parse_value(text: &str) -> Option<Self>;
}

impl MatrixElement for i64 {
    fn zero() -> Self {
        0
    }

    fn checked_add(self, rhs: Self) -> Option<Self> {
        i64::checked_add(self, rhs)
    }

    fn checked_sub(self, rhs: Self) -> Option<Self> {
        i64::checked_sub(self, rhs)
    }

    fn checked_mul(self, rhs: Self) -> Option<Self> {
        i64::checked_mul(self, rhs)
    }

    fn parse_value(text: &str) -> Option<Self> {
        text.parse().ok()
    }
}

impl MatrixElement for f64 {
    fn zero() -> Self {
        0.0
    }

    fn checked_add(self, rhs: Self) -> Option<Self> {
        finite(self + rhs)
    }

    fn checked_sub(self, rhs: Self) -> Option<Self> {
        finite(self - rhs)
    }

    fn checked_mul(self, rhs: Self) -> Option<Self> {
        finite(self * rhs)
    }

    fn parse_value(text: &str) -> Option<Self> {
        // `str::parse` accepts "inf" and "NaN", neither of which is a usable entry
        text.parse().ok().and_then(finite)
    }
}

fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_parsing() {
        assert_eq!(i64::parse_value("42"), Some(42));
        assert_eq!(i64::parse_value("-7"), Some(-7));
        assert_eq!(i64::parse_value("+3"), Some(3));
        assert_eq!(i64::parse_value("1.5"), None);
        assert_eq!(i64::parse_value("c"), None);
        assert_eq!(i64::parse_value(""), None);
    }

    #[test]
    fn test_float_parsing() {
        assert_eq!(f64::parse_value("1.5"), Some(1.5));
        assert_eq!(f64::parse_value("-2"), Some(-2.0));
        assert_eq!(f64::parse_value("1e3"), Some(1000.0));
        assert_eq!(f64::parse_value("inf"), None);
        assert_eq!(f64::parse_value("NaN"), None);
        assert_eq!(f64::parse_value("abc"), None);
    }

    #[test]
    fn test_zero_detection() {
        assert!(0i64.is_zero());
        assert!(!5i64.is_zero());
        assert!(0.0f64.is_zero());
        assert!((-0.0f64).is_zero());
        assert!(!1e-300f64.is_zero());
    }

    #[test]
    fn test_checked_arithmetic() {
        assert_eq!(MatrixElement::checked_add(i64::MAX, 1), None);
        assert_eq!(MatrixElement::checked_mul(i64::MIN, -1), None);
        assert_eq!(MatrixElement::checked_sub(5i64, 7), Some(-2));
        assert_eq!(MatrixElement::checked_mul(f64::MAX, 2.0), None);
        assert_eq!(MatrixElement::checked_add(1.5f64, 2.5), Some(4.0));
    }
}
