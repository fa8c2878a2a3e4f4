//! Maybe type - a value or its absence.
//!
//! `Maybe<T>` is either `Just(T)` or `Nothing`. It is a Functor, an
//! Applicative and a Monad: mapping, applying a wrapped function and chaining
//! dependent computations all short-circuit on `Nothing`.
//!
//! # Examples
//!
//! ```rust
//! use monadic::control::Maybe;
//! use monadic::typeclass::{Applicative, Functor, Monad};
//!
//! // Functor
//! assert_eq!(Maybe::Just(3).fmap(|i| i + 2), Maybe::Just(5));
//! assert_eq!(Maybe::<i32>::Nothing.fmap(|i| i + 3), Maybe::Nothing);
//!
//! // Applicative
//! let add_three: Maybe<fn(i32) -> i32> = Maybe::Just(|i| i + 3);
//! assert_eq!(add_three.apply(Maybe::Just(2)), Maybe::Just(5));
//!
//! // Monad
//! fn half(value: i32) -> Maybe<i32> {
//!     if value % 2 == 0 { Maybe::Just(value / 2) } else { Maybe::Nothing }
//! }
//! assert_eq!(Maybe::Just(20).flat_map(half).flat_map(half), Maybe::Just(5));
//! assert_eq!(Maybe::Just(20).flat_map(half).flat_map(half).flat_map(half), Maybe::Nothing);
//! ```

use std::fmt;

use crate::typeclass::{Applicative, Functor, Monad, TypeConstructor};

/// A value that may be absent.
///
/// Exactly one variant holds at any time and `Nothing` carries no payload.
/// Every transformation returns a new `Maybe`; existing values are never
/// modified.
///
/// # Type Parameters
///
/// * `T` - The type of the contained value
///
/// # Examples
///
/// ```rust
/// use monadic::control::Maybe;
///
/// let present: Maybe<i32> = Maybe::Just(42);
/// let absent: Maybe<i32> = Maybe::Nothing;
///
/// assert!(present.is_just());
/// assert!(absent.is_nothing());
/// assert_eq!(absent.unwrap_or(0), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<T> {
    /// A present value.
    Just(T),
    /// No value.
    Nothing,
}

impl<T> Maybe<T> {
    /// Returns `true` if this is a `Just` value.
    #[inline]
    pub const fn is_just(&self) -> bool {
        matches!(self, Self::Just(_))
    }

    /// Returns `true` if this is `Nothing`.
    #[inline]
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    /// Borrows the contained value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Maybe;
    ///
    /// let name = Maybe::Just("Thor".to_string());
    /// assert_eq!(name.as_ref(), Maybe::Just(&"Thor".to_string()));
    /// ```
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Just(value) => Maybe::Just(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Returns the contained value or `default`.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Just(value) => value,
            Self::Nothing => default,
        }
    }

    /// Returns the contained value or computes one from `fallback`.
    ///
    /// `fallback` runs only for `Nothing`.
    #[inline]
    pub fn unwrap_or_else<F>(self, fallback: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Just(value) => value,
            Self::Nothing => fallback(),
        }
    }

    /// Converts into the standard library's `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.into()
    }

    /// Applies a wrapped function to this value.
    ///
    /// This is [`Applicative::apply`] seen from the value side: if `functions`
    /// is `Just(f)` the result is `self.fmap(f)`, and if it is `Nothing` the
    /// result is `Nothing` whatever `self` holds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Maybe;
    ///
    /// let add_three: Maybe<fn(i32) -> i32> = Maybe::Just(|i| i + 3);
    /// assert_eq!(Maybe::Just(2).ap(add_three), Maybe::Just(5));
    ///
    /// let missing: Maybe<fn(i32) -> i32> = Maybe::Nothing;
    /// assert_eq!(Maybe::Just(2).ap(missing), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn ap<U, F>(self, functions: Maybe<F>) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match functions {
            Maybe::Just(function) => self.fmap(function),
            Maybe::Nothing => Maybe::Nothing,
        }
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Self::Nothing
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Just(value) => write!(formatter, "Just({value})"),
            Self::Nothing => write!(formatter, "Nothing"),
        }
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(option: Option<T>) -> Self {
        option.map_or(Self::Nothing, Self::Just)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(maybe: Maybe<T>) -> Self {
        match maybe {
            Maybe::Just(value) => Some(value),
            Maybe::Nothing => None,
        }
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<A> TypeConstructor for Maybe<A> {
    type Inner = A;
    type WithType<B> = Maybe<B>;
}

impl<A> Functor for Maybe<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Just(value) => Maybe::Just(function(value)),
            Self::Nothing => Maybe::Nothing,
        }
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Maybe<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().fmap(function)
    }
}

impl<A> Applicative for Maybe<A> {
    #[inline]
    fn pure<B>(value: B) -> Maybe<B> {
        Maybe::Just(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Maybe<B>, function: F) -> Maybe<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Self::Just(a), Maybe::Just(b)) => Maybe::Just(function(a, b)),
            _ => Maybe::Nothing,
        }
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Maybe<B>, third: Maybe<C>, function: F) -> Maybe<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        match (self, second, third) {
            (Self::Just(a), Maybe::Just(b), Maybe::Just(c)) => Maybe::Just(function(a, b, c)),
            _ => Maybe::Nothing,
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Maybe<B>) -> Maybe<Output>
    where
        A: FnOnce(B) -> Output,
    {
        match self {
            Self::Just(function) => other.fmap(function),
            Self::Nothing => Maybe::Nothing,
        }
    }
}

impl<A> Monad for Maybe<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        match self {
            Self::Just(value) => function(value),
            Self::Nothing => Maybe::Nothing,
        }
    }
}
