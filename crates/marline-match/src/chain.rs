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

//! # Predicate-Chain Matcher
//!
//! Ordered first-match-wins dispatch over (predicate, action) pairs. The
//! chain scans its cases in declaration order; the first predicate that
//! holds on the contained value fires its action, and no further case is
//! examined. If no predicate holds, the fallback fires. Absent and error
//! inputs route to their handler immediately, before any predicate runs.
//!
//! Exactly one action fires per invocation; case order is part of the
//! observable contract.
//!
//! ## Usage
//!
//! ```rust
//! use marline_core::maybe::Maybe;
//! use marline_match::chain::{match_maybe, Case, CaseList};
//! use std::cell::Cell;
//!
//! let fired = Cell::new("");
//! let mut cases: CaseList<'_, i32> = CaseList::new();
//! cases.push(Case::new(|x: &i32| *x < 0, |_: &i32| fired.set("negative")));
//! cases.push(Case::new(|x: &i32| *x % 2 == 0, |_: &i32| fired.set("even")));
//!
//! match_maybe(&Maybe::present(4), &mut cases, || fired.set("other"));
//! assert_eq!(fired.get(), "even");
//! ```

use marline_core::maybe::Maybe;
use marline_core::outcome::Outcome;
use smallvec::SmallVec;

/// One (predicate, action) pair of a chain.
///
/// The predicate is pure; the action may close over mutable caller state
/// and fires at most once per invocation of the chain.
pub struct Case<'a, T> {
    predicate: Box<dyn Fn(&T) -> bool + 'a>,
    action: Box<dyn FnMut(&T) + 'a>,
}

impl<'a, T> Case<'a, T> {
    /// Creates a case from a predicate and the action it guards.
    #[inline]
    pub fn new<P, A>(predicate: P, action: A) -> Self
    where
        P: Fn(&T) -> bool + 'a,
        A: FnMut(&T) + 'a,
    {
        Self {
            predicate: Box::new(predicate),
            action: Box::new(action),
        }
    }
}

impl<'a, T> std::fmt::Debug for Case<'a, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Case").finish_non_exhaustive()
    }
}

/// A chain of cases. Chains are short in practice; the inline capacity
/// keeps typical chains off the heap.
pub type CaseList<'a, T> = SmallVec<[Case<'a, T>; 4]>;

/// Matches an optional container against an ordered chain of cases.
///
/// An absent container fires `otherwise` immediately without evaluating
/// any predicate. Otherwise the cases are scanned in order and the first
/// predicate that holds fires its action; if none holds, `otherwise`
/// fires. Exactly one action fires per invocation.
///
/// # Examples
///
/// ```rust
/// # use marline_core::maybe::Maybe;
/// # use marline_match::chain::{match_maybe, Case, CaseList};
/// use std::cell::Cell;
///
/// let fired = Cell::new("");
/// let mut cases: CaseList<'_, i32> = CaseList::new();
/// cases.push(Case::new(|x: &i32| *x > 10, |_: &i32| fired.set("big")));
///
/// match_maybe(&Maybe::<i32>::absent(), &mut cases, || fired.set("none"));
/// assert_eq!(fired.get(), "none");
/// ```
pub fn match_maybe<T, F>(subject: &Maybe<T>, cases: &mut [Case<'_, T>], otherwise: F)
where
    F: FnOnce(),
{
    let value = match subject {
        Maybe::Present(value) => value,
        Maybe::Absent => {
            otherwise();
            return;
        }
    };

    for case in cases.iter_mut() {
        if (case.predicate)(value) {
            (case.action)(value);
            return;
        }
    }
    otherwise();
}

/// Matches a fallible container against an ordered chain of cases.
///
/// An error input routes the error to `on_err` immediately without
/// evaluating any predicate; an ok value is scanned exactly like
/// [`match_maybe`]. Exactly one of {case action, `on_err`, `otherwise`}
/// fires per invocation.
///
/// # Examples
///
/// ```rust
/// # use marline_core::outcome::Outcome;
/// # use marline_match::chain::{match_outcome, Case, CaseList};
/// use std::cell::Cell;
///
/// let fired = Cell::new(String::new());
/// let mut cases: CaseList<'_, i32> = CaseList::new();
/// cases.push(Case::new(|x: &i32| *x > 0, |x: &i32| fired.set(format!("positive {x}"))));
///
/// let subject: Outcome<i32, &str> = Outcome::Err("boom");
/// match_outcome(
///     &subject,
///     &mut cases,
///     |e| fired.set(format!("error {e}")),
///     || fired.set("other".to_string()),
/// );
/// assert_eq!(fired.take(), "error boom");
/// ```
pub fn match_outcome<T, E, G, F>(
    subject: &Outcome<T, E>,
    cases: &mut [Case<'_, T>],
    on_err: G,
    otherwise: F,
) where
    G: FnOnce(&E),
    F: FnOnce(),
{
    let value = match subject {
        Outcome::Ok(value) => value,
        Outcome::Err(err) => {
            on_err(err);
            return;
        }
    };

    for case in cases.iter_mut() {
        if (case.predicate)(value) {
            (case.action)(value);
            return;
        }
    }
    otherwise();
}
