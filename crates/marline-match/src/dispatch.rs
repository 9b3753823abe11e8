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

//! # Type-Dispatch Matchers
//!
//! Single-level dispatch on the concrete shape of a contained polymorphic
//! value. Two independent strategies share the same contract:
//!
//! - [`TagDispatcher`] keys handlers by an explicit discriminant type
//!   ([`Tagged::Tag`]), typically a fieldless enum derived by exhaustive
//!   match over a closed value union. No reflection is involved; the tag
//!   map cannot express a variant hierarchy, so matching is exact by
//!   construction.
//! - [`KeyDispatcher`] keys handlers by a stable string identifier
//!   ([`Keyed::type_key`]), the minimal capability a dispatchable value
//!   must expose.
//!
//! Each invocation runs exactly one handler or the fallback, never both;
//! an absent container always runs the fallback without any lookup. Lookup
//! is O(1) expected via `FxHashMap`.

use marline_core::maybe::Maybe;
use rustc_hash::FxHashMap;
use std::hash::Hash;

/// A value dispatchable by an explicit discriminant.
///
/// The tag is typically a fieldless enum produced by an exhaustive match
/// over the closed set of value shapes, so adding a shape forces the
/// `tag` implementation to account for it.
///
/// # Examples
///
/// ```rust
/// use marline_match::dispatch::Tagged;
///
/// enum Shape {
///     Circle(f64),
///     Rect(f64, f64),
/// }
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
/// enum ShapeTag {
///     Circle,
///     Rect,
/// }
///
/// impl Tagged for Shape {
///     type Tag = ShapeTag;
///
///     fn tag(&self) -> ShapeTag {
///         match self {
///             Shape::Circle(_) => ShapeTag::Circle,
///             Shape::Rect(_, _) => ShapeTag::Rect,
///         }
///     }
/// }
/// ```
pub trait Tagged {
    /// The discriminant type handlers are keyed by.
    type Tag: Copy + Eq + Hash;

    /// Returns the discriminant of this value's concrete shape.
    fn tag(&self) -> Self::Tag;
}

/// A value dispatchable by a stable string identifier.
///
/// The key must be stable across invocations for the same shape; two
/// shapes sharing a key are indistinguishable to the dispatcher.
pub trait Keyed {
    /// Returns the stable type key of this value's concrete shape.
    fn type_key(&self) -> &'static str;
}

/// Dispatches a contained value to the handler registered for its exact
/// tag.
///
/// There is no supertype or structural fallback: either the value's tag
/// is registered, or the fallback runs.
pub struct TagDispatcher<'a, V>
where
    V: Tagged,
{
    handlers: FxHashMap<V::Tag, Box<dyn FnMut(&V) + 'a>>,
}

impl<'a, V> Default for TagDispatcher<'a, V>
where
    V: Tagged,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, V> std::fmt::Debug for TagDispatcher<'a, V>
where
    V: Tagged,
    V::Tag: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TagDispatcher")
            .field("tags", &self.handlers.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl<'a, V> TagDispatcher<'a, V>
where
    V: Tagged,
{
    /// Creates an empty dispatcher.
    #[inline]
    pub fn new() -> Self {
        Self {
            handlers: FxHashMap::default(),
        }
    }

    /// Creates an empty dispatcher with room for `capacity` handlers.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            handlers: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Registers a handler for `tag`, replacing any earlier registration
    /// for the same tag.
    #[inline]
    pub fn on<H>(&mut self, tag: V::Tag, handler: H) -> &mut Self
    where
        H: FnMut(&V) + 'a,
    {
        self.handlers.insert(tag, Box::new(handler));
        self
    }

    /// Returns the number of registered handlers.
    #[inline]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Returns `true` if no handler is registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Returns `true` if a handler is registered for `tag`.
    #[inline]
    pub fn handles(&self, tag: V::Tag) -> bool {
        self.handlers.contains_key(&tag)
    }

    /// Dispatches the contained value to the handler registered for its
    /// exact tag, or to `fallback`.
    ///
    /// An absent container runs `fallback` without any lookup. Exactly one
    /// of {handler, fallback} runs per invocation.
    pub fn dispatch<F>(&mut self, subject: &Maybe<V>, fallback: F)
    where
        F: FnOnce(),
    {
        let value = match subject {
            Maybe::Present(value) => value,
            Maybe::Absent => {
                fallback();
                return;
            }
        };

        match self.handlers.get_mut(&value.tag()) {
            Some(handler) => handler(value),
            None => fallback(),
        }
    }
}

/// Dispatches a contained value to the handler registered under its type
/// key.
///
/// The string key is the only identity the dispatcher consults; exact
/// equality or fallback, nothing in between.
pub struct KeyDispatcher<'a, V>
where
    V: Keyed,
{
    handlers: FxHashMap<&'static str, Box<dyn FnMut(&V) + 'a>>,
}

impl<'a, V> Default for KeyDispatcher<'a, V>
where
    V: Keyed,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, V> std::fmt::Debug for KeyDispatcher<'a, V>
where
    V: Keyed,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut keys = self.handlers.keys().collect::<Vec<_>>();
        keys.sort();
        f.debug_struct("KeyDispatcher").field("keys", &keys).finish()
    }
}

impl<'a, V> KeyDispatcher<'a, V>
where
    V: Keyed,
{
    /// Creates an empty dispatcher.
    #[inline]
    pub fn new() -> Self {
        Self {
            handlers: FxHashMap::default(),
        }
    }

    /// Creates an empty dispatcher with room for `capacity` handlers.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            handlers: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Registers a handler for `key`, replacing any earlier registration
    /// for the same key.
    #[inline]
    pub fn on<H>(&mut self, key: &'static str, handler: H) -> &mut Self
    where
        H: FnMut(&V) + 'a,
    {
        self.handlers.insert(key, Box::new(handler));
        self
    }

    /// Returns the number of registered handlers.
    #[inline]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Returns `true` if no handler is registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Returns `true` if a handler is registered for `key`.
    #[inline]
    pub fn handles(&self, key: &str) -> bool {
        self.handlers.contains_key(key)
    }

    /// Dispatches the contained value to the handler registered under its
    /// type key, or to `fallback`.
    ///
    /// An absent container runs `fallback` without any lookup. Exactly one
    /// of {handler, fallback} runs per invocation.
    pub fn dispatch<F>(&mut self, subject: &Maybe<V>, fallback: F)
    where
        F: FnOnce(),
    {
        let value = match subject {
            Maybe::Present(value) => value,
            Maybe::Absent => {
                fallback();
                return;
            }
        };

        match self.handlers.get_mut(value.type_key()) {
            Some(handler) => handler(value),
            None => fallback(),
        }
    }
}
