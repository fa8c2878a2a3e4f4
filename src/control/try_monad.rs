//! Try type - a computation that either succeeded or failed.
//!
//! `Try<T, E>` is either `Success(T)` or `Failure(E)`. Failures raised by the
//! computation a `Try` is built from are captured once, at construction.
//! Functions passed to `fmap` and `flat_map` afterwards are not guarded: if
//! one of them panics, the panic reaches the caller.
//!
//! # Examples
//!
//! ```rust
//! use monadic::control::Try;
//!
//! #[derive(Debug, Clone, PartialEq)]
//! enum Doomsday {
//!     Boom,
//!     Bang,
//! }
//!
//! let quotient = Try::new(|| Ok::<_, Doomsday>(4 / 2));
//! assert_eq!(quotient, Try::Success(2));
//!
//! let end_of_the_world: Try<i32, Doomsday> = Try::new(|| Err(Doomsday::Bang));
//! let result = quotient.flat_map(|_| end_of_the_world).fmap(|n| n + 1);
//! assert_eq!(result, Try::Failure(Doomsday::Bang));
//! ```

use std::any::Any;
use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};

use crate::typeclass::{Applicative, Functor, Monad, TypeConstructor};

/// The error captured by [`Try::catching`] when the computation panics.
///
/// Carries the panic message when the payload was a string, or a fixed
/// placeholder otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("computation panicked: {message}")]
pub struct Panicked {
    /// The panic message.
    pub message: String,
}

impl Panicked {
    fn from_payload(payload: &(dyn Any + Send)) -> Self {
        let message = payload
            .downcast_ref::<&str>()
            .map(|message| (*message).to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "<non-string panic payload>".to_string());
        Self { message }
    }
}

/// The result of a computation that may have failed.
///
/// The failure is opaque data: `Try` never inspects or rewrites it.
///
/// # Type Parameters
///
/// * `T` - The type of the success value
/// * `E` - The type of the captured failure
///
/// # Examples
///
/// ```rust
/// use monadic::control::Try;
///
/// let parsed: Try<i32, std::num::ParseIntError> = Try::new(|| "42".parse());
/// assert_eq!(parsed.success(), Some(42));
///
/// let failed: Try<i32, std::num::ParseIntError> = Try::new(|| "forty-two".parse());
/// assert!(failed.is_failure());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Try<T, E> {
    /// The computation produced a value.
    Success(T),
    /// The computation failed with the captured error.
    Failure(E),
}

impl<T, E> Try<T, E> {
    /// Runs a fallible computation and captures its outcome.
    ///
    /// `Ok(value)` becomes `Success(value)` and `Err(error)` becomes
    /// `Failure(error)`. The error does not propagate any further.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Try;
    ///
    /// let divided: Try<i32, &str> = Try::new(|| Ok(4 / 2));
    /// assert_eq!(divided, Try::Success(2));
    ///
    /// let failed: Try<i32, &str> = Try::new(|| Err("boom"));
    /// assert_eq!(failed, Try::Failure("boom"));
    /// ```
    pub fn new<F>(computation: F) -> Self
    where
        F: FnOnce() -> Result<T, E>,
    {
        computation().into()
    }

    /// Returns `true` if this is a `Success`.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is a `Failure`.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Returns the success value, discarding any failure.
    #[inline]
    pub fn success(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Returns the captured failure, discarding any success value.
    #[inline]
    pub fn failure(self) -> Option<E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Returns the success value or computes one from the failure.
    #[inline]
    pub fn get_or_else<F>(self, fallback: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => fallback(error),
        }
    }

    /// Converts into the standard library's `Result`.
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        self.into()
    }

    /// Maps the success value, moving any failure through untouched.
    ///
    /// Unlike [`Functor::fmap`], this places no bound on `E`, so errors
    /// that are not `Clone` (such as `std::io::Error`) can be chained too.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Try;
    ///
    /// let read: Try<usize, std::io::Error> = Try::new(|| Ok(3));
    /// assert_eq!(read.fmap(|n| n * 2).success(), Some(6));
    /// ```
    #[inline]
    pub fn fmap<B, F>(self, function: F) -> Try<B, E>
    where
        F: FnOnce(T) -> B,
    {
        match self {
            Self::Success(value) => Try::Success(function(value)),
            Self::Failure(error) => Try::Failure(error),
        }
    }

    /// Chains a computation that may itself fail.
    ///
    /// A `Failure` is returned as is and `function` is never invoked. No
    /// bound is placed on `E`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Try;
    /// use std::io;
    ///
    /// let gone: Try<i32, io::Error> = Try::new(|| Err(io::Error::other("disk gone")));
    /// let next = gone.flat_map(|n| Try::Success(n + 1));
    /// assert_eq!(next.failure().map(|error| error.to_string()), Some("disk gone".to_string()));
    /// ```
    #[inline]
    pub fn flat_map<B, F>(self, function: F) -> Try<B, E>
    where
        F: FnOnce(T) -> Try<B, E>,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(error) => Try::Failure(error),
        }
    }

    /// Alias for [`Try::flat_map`].
    #[inline]
    pub fn and_then<B, F>(self, function: F) -> Try<B, E>
    where
        F: FnOnce(T) -> Try<B, E>,
    {
        self.flat_map(function)
    }

    /// Applies the function held by this `Try` to the value held by `other`.
    ///
    /// The failure of `self` wins over the failure of `other`.
    #[inline]
    pub fn apply<B, Output>(self, other: Try<B, E>) -> Try<Output, E>
    where
        T: FnOnce(B) -> Output,
    {
        match self {
            Self::Success(function) => other.fmap(function),
            Self::Failure(error) => Try::Failure(error),
        }
    }
}

impl<T> Try<T, Panicked> {
    /// Runs a computation and captures a panic as `Failure(Panicked)`.
    ///
    /// The panic hook still runs, so the panic message is reported on
    /// stderr before being captured.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Try;
    ///
    /// let exploded: Try<i32, _> = Try::catching(|| panic!("boom"));
    /// assert_eq!(exploded.failure().map(|error| error.message), Some("boom".to_string()));
    /// ```
    pub fn catching<F>(computation: F) -> Self
    where
        F: FnOnce() -> T,
    {
        match catch_unwind(AssertUnwindSafe(computation)) {
            Ok(value) => Self::Success(value),
            Err(payload) => Self::Failure(Panicked::from_payload(payload.as_ref())),
        }
    }
}

impl<T: fmt::Display, E: fmt::Display> fmt::Display for Try<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => write!(formatter, "Success({value})"),
            Self::Failure(error) => write!(formatter, "Failure({error})"),
        }
    }
}

impl<T, E> From<Result<T, E>> for Try<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<T, E> From<Try<T, E>> for Result<T, E> {
    fn from(attempt: Try<T, E>) -> Self {
        match attempt {
            Try::Success(value) => Ok(value),
            Try::Failure(error) => Err(error),
        }
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T, E> TypeConstructor for Try<T, E> {
    type Inner = T;
    type WithType<B> = Try<B, E>;
}

impl<T, E: Clone> Functor for Try<T, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Try<B, E>
    where
        F: FnOnce(T) -> B,
    {
        Self::fmap(self, function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Try<B, E>
    where
        F: FnOnce(&T) -> B,
    {
        match self {
            Self::Success(value) => Try::Success(function(value)),
            Self::Failure(error) => Try::Failure(error.clone()),
        }
    }
}

impl<T, E: Clone> Applicative for Try<T, E> {
    #[inline]
    fn pure<B>(value: B) -> Try<B, E> {
        Try::Success(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Try<B, E>, function: F) -> Try<C, E>
    where
        F: FnOnce(T, B) -> C,
    {
        match (self, other) {
            (Self::Success(a), Try::Success(b)) => Try::Success(function(a, b)),
            (Self::Failure(error), _) | (_, Try::Failure(error)) => Try::Failure(error),
        }
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Try<B, E>, third: Try<C, E>, function: F) -> Try<D, E>
    where
        F: FnOnce(T, B, C) -> D,
    {
        match (self, second, third) {
            (Self::Success(a), Try::Success(b), Try::Success(c)) => {
                Try::Success(function(a, b, c))
            }
            (Self::Failure(error), _, _)
            | (_, Try::Failure(error), _)
            | (_, _, Try::Failure(error)) => Try::Failure(error),
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Try<B, E>) -> Try<Output, E>
    where
        T: FnOnce(B) -> Output,
    {
        Self::apply(self, other)
    }
}

impl<T, E: Clone> Monad for Try<T, E> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Try<B, E>
    where
        F: FnOnce(T) -> Try<B, E>,
    {
        Self::flat_map(self, function)
    }
}
