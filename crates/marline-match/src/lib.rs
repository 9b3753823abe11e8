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

//! # Marline Match
//!
//! Pattern-dispatch matchers over the `marline-core` containers. A matcher
//! terminates a combinator chain by routing the contained value to exactly
//! one handler:
//!
//! - `chain`: ordered first-match-wins dispatch over (predicate, action)
//!   pairs, for both optional and fallible containers.
//! - `dispatch`: single-level dispatch on the concrete shape of a contained
//!   polymorphic value, keyed either by an explicit tag type or by a stable
//!   string capability key.
//!
//! Matchers borrow their input container; they never own or mutate it.

pub mod chain;
pub mod dispatch;
