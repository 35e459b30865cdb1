//! A numeric key for trees built from floating point input.
//!
//! `f64` is only `PartialOrd` because `NaN` compares unequal to everything, itself included. A
//! [`Number`] is an `f64` that is known not to be `NaN` and so can be totally ordered and stored
//! in a [`Tree`][crate::Tree].
//!
//! # Examples
//!
//! ```
//! use balanced_bst::{Error, Number};
//!
//! let one = Number::new(1.0).unwrap();
//! let two = Number::new(2.0).unwrap();
//! assert!(one < two);
//!
//! assert!(matches!(Number::new(f64::NAN), Err(Error::InvalidInput(_))));
//! ```

use std::cmp::Ordering;
use std::convert::TryFrom;
use std::fmt;

use crate::error::{Error, Result};

/// An `f64` that is guaranteed not to be `NaN`.
#[derive(Clone, Copy)]
pub struct Number(f64);

impl Number {
    /// Wraps `value`, failing with [`Error::InvalidInput`] if it is `NaN`.
    ///
    /// `-0.0` is stored as `0.0` so the two zeroes are the same key.
    pub fn new(value: f64) -> Result<Self> {
        if value.is_nan() {
            return Err(Error::InvalidInput(value));
        }
        // `-0.0 == 0.0` so this also normalizes negative zero.
        Ok(Self(if value == 0.0 { 0.0 } else { value }))
    }

    /// The wrapped value.
    pub fn get(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Number {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Self(f64::from(value))
    }
}

impl From<Number> for f64 {
    fn from(n: Number) -> Self {
        n.0
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Number {}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Number {
    fn cmp(&self, other: &Self) -> Ordering {
        // Without `NaN` and with a single zero, `total_cmp` agrees with numeric comparison.
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Debug for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_nan() {
        assert!(matches!(Number::new(f64::NAN), Err(Error::InvalidInput(v)) if v.is_nan()));
        assert!(Number::try_from(-f64::NAN).is_err());
    }

    #[test]
    fn orders_numerically() {
        let mut xs: Vec<Number> = [3.5, -1.0, f64::INFINITY, 0.0, f64::NEG_INFINITY, 2.0]
            .iter()
            .map(|&x| Number::new(x).unwrap())
            .collect();
        xs.sort();

        let xs: Vec<f64> = xs.into_iter().map(f64::from).collect();
        assert_eq!(xs, vec![f64::NEG_INFINITY, -1.0, 0.0, 2.0, 3.5, f64::INFINITY]);
    }

    #[test]
    fn negative_zero_is_zero() {
        let neg = Number::new(-0.0).unwrap();
        let pos = Number::new(0.0).unwrap();

        assert_eq!(neg, pos);
        assert!(neg.get().is_sign_positive());
    }

    #[test]
    fn from_integers() {
        assert_eq!(Number::from(7), Number::new(7.0).unwrap());
        assert_eq!(Number::from(-3).to_string(), "-3");
    }
}
