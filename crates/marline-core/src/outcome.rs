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

//! # Fallible-Result Container
//!
//! `Outcome<T, E>` holds a value-or-typed-error state. Unlike the optional
//! container, failure carries a full error value, preserved through
//! `map`/`and_then` chains until explicitly handled via `match_with`,
//! `fold`, or `or_else`.
//!
//! ## Motivation
//!
//! Absence is sometimes too little information: a caller recovering from a
//! failure usually needs to know what went wrong. `Outcome` keeps the error
//! in the chain, lets `try_with` remap a raw failure into a domain error
//! type at the boundary, and only gives it up when the caller asks.
//!
//! ## Highlights
//!
//! - Exactly one of value/error is inhabited, by construction.
//! - `or_else` recovery runs only in the error state; `Ok` passes through
//!   untouched.
//! - `map` transforms the ok value while the error passes through
//!   unexamined; the error type is invariant across `map`.
//! - Bridges to and from `std::result::Result`, and a one-way demotion to
//!   [`Maybe`] that discards the error.
//!
//! ## Usage
//!
//! ```rust
//! use marline_core::outcome::Outcome;
//!
//! let recovered: Outcome<i32, String> = Outcome::Err("boom".to_string())
//!     .or_else(|_| Outcome::Ok(0))
//!     .map(|x| x + 1);
//! assert_eq!(recovered, Outcome::Ok(1));
//! ```

use crate::maybe::Maybe;

/// A container holding either an ok value or a typed error.
///
/// Constructed once, immutable afterwards; combinators return new
/// instances. Exactly one variant is inhabited, so neither field can be
/// read in the wrong state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome<T, E> {
    /// The computation succeeded with a value.
    Ok(T),
    /// The computation failed with a typed error.
    Err(E),
}

impl<T, E> Outcome<T, E> {
    /// Runs a fallible computation exactly once, remapping its raw error.
    ///
    /// On success the value is stored as-is; on failure the raw error is
    /// passed through `wrap` so the container carries a domain-specific
    /// error type rather than whatever the source produced.
    ///
    /// A panicking computation is not caught; it unwinds to the caller.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use marline_core::outcome::Outcome;
    ///
    /// let parsed = Outcome::try_with(|| "7".parse::<i32>(), |e| e.to_string());
    /// assert_eq!(parsed, Outcome::Ok(7));
    ///
    /// let failed = Outcome::try_with(|| "x".parse::<i32>(), |_| "bad input");
    /// assert_eq!(failed, Outcome::Err("bad input"));
    /// ```
    #[inline]
    pub fn try_with<E0, F, W>(f: F, wrap: W) -> Self
    where
        F: FnOnce() -> Result<T, E0>,
        W: FnOnce(E0) -> E,
    {
        match f() {
            Ok(value) => Outcome::Ok(value),
            Err(raw) => Outcome::Err(wrap(raw)),
        }
    }

    /// Returns `true` if the container holds a value.
    #[inline]
    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok(_))
    }

    /// Returns `true` if the container holds an error.
    #[inline]
    pub fn is_err(&self) -> bool {
        matches!(self, Outcome::Err(_))
    }

    /// Returns the contained value.
    ///
    /// Reserved for access paths where the caller has already verified the
    /// ok state.
    ///
    /// # Panics
    ///
    /// Panics if the container holds an error.
    #[inline]
    pub fn unwrap(self) -> T {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Err(_) => panic!("called `Outcome::unwrap()` on an `Err` value"),
        }
    }

    /// Returns the contained value or the supplied default. Never panics.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Err(_) => default,
        }
    }

    /// Returns the contained error.
    ///
    /// # Panics
    ///
    /// Panics if the container holds a value.
    #[inline]
    pub fn unwrap_err(self) -> E {
        match self {
            Outcome::Ok(_) => panic!("called `Outcome::unwrap_err()` on an `Ok` value"),
            Outcome::Err(err) => err,
        }
    }

    /// Recovers from the error state.
    ///
    /// `Ok` passes through unchanged without invoking `recover`; on `Err`
    /// the recovery function receives the error and produces the
    /// replacement container, which may itself be `Ok` or `Err`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use marline_core::outcome::Outcome;
    ///
    /// let ok: Outcome<i32, &str> = Outcome::Ok(3).or_else(|_| Outcome::Ok(0));
    /// assert_eq!(ok, Outcome::Ok(3));
    ///
    /// let recovered: Outcome<i32, &str> = Outcome::Err("gone").or_else(|_| Outcome::Ok(0));
    /// assert_eq!(recovered, Outcome::Ok(0));
    /// ```
    #[inline]
    pub fn or_else<F>(self, recover: F) -> Outcome<T, E>
    where
        F: FnOnce(E) -> Outcome<T, E>,
    {
        match self {
            Outcome::Ok(_) => self,
            Outcome::Err(err) => recover(err),
        }
    }

    /// Transforms the ok value; the error state passes through unchanged
    /// and unexamined. The error type is invariant across `map`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use marline_core::outcome::Outcome;
    ///
    /// let mapped: Outcome<String, &str> = Outcome::Ok(5).map(|x| format!("Result: {x}"));
    /// assert_eq!(mapped, Outcome::Ok("Result: 5".to_string()));
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Ok(value) => Outcome::Ok(f(value)),
            Outcome::Err(err) => Outcome::Err(err),
        }
    }

    /// Transforms the error; the ok value passes through unexamined.
    #[inline]
    pub fn map_err<F2, F>(self, f: F) -> Outcome<T, F2>
    where
        F: FnOnce(E) -> F2,
    {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Err(err) => Outcome::Err(f(err)),
        }
    }

    /// Sequences a dependent fallible computation sharing the error type.
    ///
    /// Short-circuits on `Err` without invoking `f`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use marline_core::outcome::Outcome;
    ///
    /// let chained: Outcome<i32, &str> = Outcome::Ok(4).and_then(|x| {
    ///     if x > 0 { Outcome::Ok(x * 10) } else { Outcome::Err("negative") }
    /// });
    /// assert_eq!(chained, Outcome::Ok(40));
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Outcome::Ok(value) => f(value),
            Outcome::Err(err) => Outcome::Err(err),
        }
    }

    /// Invokes exactly one of the two callbacks based on state.
    ///
    /// Procedural dispatch: nothing is propagated back. Use
    /// [`fold`](Outcome::fold) to reduce to a value instead.
    #[inline]
    pub fn match_with<F, G>(&self, ok_fn: F, err_fn: G)
    where
        F: FnOnce(&T),
        G: FnOnce(&E),
    {
        match self {
            Outcome::Ok(value) => ok_fn(value),
            Outcome::Err(err) => err_fn(err),
        }
    }

    /// Reduces the container to a plain value via exactly one branch.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use marline_core::outcome::Outcome;
    ///
    /// let label = Outcome::<i32, &str>::Ok(3).fold(|v| v.to_string(), |e| e.to_string());
    /// assert_eq!(label, "3");
    /// ```
    #[inline]
    pub fn fold<R, F, G>(self, ok_fn: F, err_fn: G) -> R
    where
        F: FnOnce(T) -> R,
        G: FnOnce(E) -> R,
    {
        match self {
            Outcome::Ok(value) => ok_fn(value),
            Outcome::Err(err) => err_fn(err),
        }
    }

    /// Observes the ok value for its side effect, passing the container
    /// through unchanged. No-op on `Err`.
    #[inline]
    pub fn tap<F>(self, f: F) -> Outcome<T, E>
    where
        F: FnOnce(&T),
    {
        if let Outcome::Ok(value) = &self {
            f(value);
        }
        self
    }

    /// Demotes the container to a [`Maybe`], discarding the error.
    ///
    /// One-way by design: the error cannot be recovered afterwards,
    /// mirroring the information loss [`Maybe::try_with`] applies at
    /// construction.
    #[inline]
    pub fn ok(self) -> Maybe<T> {
        match self {
            Outcome::Ok(value) => Maybe::Present(value),
            Outcome::Err(_) => Maybe::Absent,
        }
    }

    /// Returns a borrowing view of the container.
    #[inline]
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Err(err) => Outcome::Err(err),
        }
    }
}

impl<T, E> std::fmt::Display for Outcome<T, E>
where
    T: std::fmt::Display,
    E: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Ok(value) => write!(f, "Ok({})", value),
            Outcome::Err(err) => write!(f, "Err({})", err),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Ok(value),
            Err(err) => Outcome::Err(err),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Ok(value) => Ok(value),
            Outcome::Err(err) => Err(err),
        }
    }
}
