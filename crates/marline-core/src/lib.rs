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

//! # Marline Core
//!
//! Functional value containers for the Marline utility layer. This crate
//! provides the two container types everything else composes over, together
//! with their combinator surface, so calling code can express "value or
//! absence" and "value or typed error" without unchecked access or
//! exception-style control flow.
//!
//! ## Modules
//!
//! - `maybe`: The optional-value container `Maybe<T>` with its combinators
//!   (`map`, `and_then`, `filter`, `fold`, `tap`, `flatten`, conversions),
//!   bridges to `std::option::Option`, and iterator integration.
//! - `outcome`: The fallible-result container `Outcome<T, E>` carrying a
//!   typed error through `map`/`and_then` chains until it is handled via
//!   `match_with`, `fold`, or `or_else`.
//! - `num`: Checked-arithmetic adapters that land primitive overflow and
//!   division checks in the containers instead of `Option`.
//!
//! ## Purpose
//!
//! Every container is an immutable value after construction: combinators
//! return new instances rather than mutating their input, keeping chains
//! pure and safe to share. Misuse (unwrapping the wrong state) is a panic,
//! never a recoverable error, so programming mistakes surface immediately.
//!
//! Refer to each module for detailed APIs and examples.

pub mod maybe;
pub mod num;
pub mod outcome;
