// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Checked arithmetic landing in the containers instead of `Option`.

use crate::maybe::Maybe;
use crate::outcome::Outcome;
use num_traits::{CheckedAdd, CheckedDiv, CheckedMul, CheckedRem, CheckedSub, Zero};

/// Checked arithmetic by value, returning a [`Maybe`] that is absent on
/// overflow, underflow, or division by zero.
///
/// This mirrors the semantics of primitive `checked_*` operations but lands
/// the result in the optional container, so arithmetic slots directly into
/// combinator chains. The cause of a failure is not distinguished; use
/// [`OutcomeDiv`] where division needs a typed error.
///
/// # Examples
///
/// ```rust
/// # use marline_core::maybe::Maybe;
/// use marline_core::num::MaybeArith;
///
/// let a: u8 = 200;
/// assert_eq!(a.checked_add_maybe(100), Maybe::absent()); // overflow
/// assert_eq!(a.checked_add_maybe(50), Maybe::present(250));
/// ```
pub trait MaybeArith: Sized {
    /// Checked addition; absent on overflow.
    fn checked_add_maybe(self, rhs: Self) -> Maybe<Self>;
    /// Checked subtraction; absent on underflow.
    fn checked_sub_maybe(self, rhs: Self) -> Maybe<Self>;
    /// Checked multiplication; absent on overflow.
    fn checked_mul_maybe(self, rhs: Self) -> Maybe<Self>;
    /// Checked division; absent on division by zero or overflow.
    fn checked_div_maybe(self, rhs: Self) -> Maybe<Self>;
    /// Checked remainder; absent on division by zero or overflow.
    fn checked_rem_maybe(self, rhs: Self) -> Maybe<Self>;
}

impl<T> MaybeArith for T
where
    T: CheckedAdd + CheckedSub + CheckedMul + CheckedDiv + CheckedRem,
{
    #[inline]
    fn checked_add_maybe(self, rhs: Self) -> Maybe<Self> {
        self.checked_add(&rhs).into()
    }

    #[inline]
    fn checked_sub_maybe(self, rhs: Self) -> Maybe<Self> {
        self.checked_sub(&rhs).into()
    }

    #[inline]
    fn checked_mul_maybe(self, rhs: Self) -> Maybe<Self> {
        self.checked_mul(&rhs).into()
    }

    #[inline]
    fn checked_div_maybe(self, rhs: Self) -> Maybe<Self> {
        self.checked_div(&rhs).into()
    }

    #[inline]
    fn checked_rem_maybe(self, rhs: Self) -> Maybe<Self> {
        self.checked_rem(&rhs).into()
    }
}

/// The error type for [`OutcomeDiv::checked_div_outcome`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DivideError {
    /// The divisor was zero.
    DivideByZero,
    /// The quotient does not fit the operand type (e.g. `MIN / -1`).
    Overflow,
}

impl std::fmt::Display for DivideError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DivideError::DivideByZero => write!(f, "division by zero"),
            DivideError::Overflow => write!(f, "division overflow"),
        }
    }
}

impl std::error::Error for DivideError {}

/// Checked division landing in an [`Outcome`] with a typed error.
///
/// # Examples
///
/// ```rust
/// # use marline_core::outcome::Outcome;
/// use marline_core::num::{DivideError, OutcomeDiv};
///
/// assert_eq!(10i32.checked_div_outcome(2), Outcome::Ok(5));
/// assert_eq!(10i32.checked_div_outcome(0), Outcome::Err(DivideError::DivideByZero));
/// ```
pub trait OutcomeDiv: Sized {
    /// Divides by `rhs`, reporting zero divisors and overflow as typed
    /// errors.
    fn checked_div_outcome(self, rhs: Self) -> Outcome<Self, DivideError>;
}

impl<T> OutcomeDiv for T
where
    T: CheckedDiv + Zero,
{
    #[inline]
    fn checked_div_outcome(self, rhs: Self) -> Outcome<Self, DivideError> {
        if rhs.is_zero() {
            return Outcome::Err(DivideError::DivideByZero);
        }
        match self.checked_div(&rhs) {
            Some(quotient) => Outcome::Ok(quotient),
            None => Outcome::Err(DivideError::Overflow),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_add_maybe() {
        let a: u8 = 200;
        assert!(a.checked_add_maybe(100).is_absent());
        assert_eq!(a.checked_add_maybe(50), Maybe::present(250));
    }

    #[test]
    fn test_checked_sub_maybe() {
        let a: u8 = 50;
        assert!(a.checked_sub_maybe(100).is_absent());
        assert_eq!(a.checked_sub_maybe(20), Maybe::present(30));
    }

    #[test]
    fn test_checked_mul_maybe() {
        let a: u8 = 20;
        assert_eq!(a.checked_mul_maybe(10), Maybe::present(200));
        assert!(a.checked_mul_maybe(20).is_absent());
    }

    #[test]
    fn test_checked_div_rem_maybe() {
        assert_eq!(100u8.checked_div_maybe(4), Maybe::present(25));
        assert!(100u8.checked_div_maybe(0).is_absent());
        assert_eq!(10u8.checked_rem_maybe(3), Maybe::present(1));
        assert!(10u8.checked_rem_maybe(0).is_absent());
    }

    #[test]
    fn test_divide_pipeline_ok() {
        let message = 10i32
            .checked_div_outcome(2)
            .map(|x| format!("Result: {x}"))
            .unwrap_or("default".to_string());
        assert_eq!(message, "Result: 5");
    }

    #[test]
    fn test_divide_pipeline_recovers() {
        let err = 10i32.checked_div_outcome(0);
        assert_eq!(err, Outcome::Err(DivideError::DivideByZero));
        assert_eq!(err.unwrap_err().to_string(), "division by zero");

        let recovered = 10i32.checked_div_outcome(0).or_else(|_| Outcome::Ok(0));
        assert_eq!(recovered.unwrap(), 0);
    }

    #[test]
    fn test_divide_overflow() {
        assert_eq!(
            i32::MIN.checked_div_outcome(-1),
            Outcome::Err(DivideError::Overflow)
        );
    }
}
