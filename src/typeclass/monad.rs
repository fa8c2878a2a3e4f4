//! Monad type class - sequencing computations within a context.
//!
//! `Monad` extends `Applicative` with `flat_map`, which lets each step of a
//! chain depend on the result of the previous one. Once a step produces an
//! empty or failed container, the remaining steps are skipped.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use monadic::control::Maybe;
//! use monadic::typeclass::Monad;
//!
//! fn half(value: i32) -> Maybe<i32> {
//!     if value % 2 == 0 { Maybe::Just(value / 2) } else { Maybe::Nothing }
//! }
//!
//! assert_eq!(Maybe::Just(3).flat_map(half), Maybe::Nothing);
//! assert_eq!(Maybe::Just(4).flat_map(half), Maybe::Just(2));
//! assert_eq!(Maybe::<i32>::Nothing.flat_map(half), Maybe::Nothing);
//! ```

use super::applicative::Applicative;

/// A type class for types that support sequencing of computations.
///
/// # Laws
///
/// ```text
/// Self::pure(a).flat_map(f) == f(a)
/// m.flat_map(Self::pure) == m
/// m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
/// ```
pub trait Monad: Applicative {
    /// Applies a function to the value inside the monad and flattens the result.
    ///
    /// In Haskell, this is `>>=` (bind). An empty or failed monad is returned
    /// unchanged and `function` is never invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Maybe;
    /// use monadic::typeclass::Monad;
    ///
    /// let just: Maybe<i32> = Maybe::Just(2);
    /// assert_eq!(just.flat_map(|_| Maybe::<i32>::Nothing), Maybe::Nothing);
    /// ```
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for `flat_map` to match Rust's naming conventions.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences two monadic computations, discarding the first result.
    ///
    /// In Haskell, this is the `>>` operator. A failure in `self` wins over
    /// `next`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Maybe;
    /// use monadic::typeclass::Monad;
    ///
    /// assert_eq!(Maybe::Just(5).then(Maybe::Just("hello")), Maybe::Just("hello"));
    /// assert_eq!(Maybe::<i32>::Nothing.then(Maybe::Just("hello")), Maybe::Nothing);
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}
