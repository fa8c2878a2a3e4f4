//! Control structures for functional programming.
//!
//! - [`Maybe`]: A value or its absence
//! - [`Try`]: A computation that either succeeded or failed with a captured error
//! - [`Panicked`]: The failure recorded when [`Try::catching`] intercepts a panic
//!
//! # Examples
//!
//! ## Short-circuiting on absence
//!
//! ```rust
//! use monadic::control::Maybe;
//! use monadic::typeclass::Monad;
//!
//! fn half(value: i32) -> Maybe<i32> {
//!     if value % 2 == 0 { Maybe::Just(value / 2) } else { Maybe::Nothing }
//! }
//!
//! assert_eq!(Maybe::Just(8).flat_map(half).flat_map(half), Maybe::Just(2));
//! assert_eq!(Maybe::Just(6).flat_map(half).flat_map(half), Maybe::Nothing);
//! ```
//!
//! ## Capturing failures
//!
//! ```rust
//! use monadic::control::Try;
//!
//! let result: Try<i32, &str> = Try::new(|| Ok(4 / 2)).flat_map(|_| Try::Failure("bang"));
//! assert_eq!(result, Try::Failure("bang"));
//! ```

mod maybe;
mod try_monad;

pub use maybe::Maybe;
pub use try_monad::{Panicked, Try};
