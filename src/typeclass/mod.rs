//! Type class traits for functional programming abstractions.
//!
//! - [`Functor`]: Mapping over container values
//! - [`Applicative`]: Lifting values and applying functions within containers
//! - [`ApplicativeVec`]: The list applicative, as an extension trait on `Vec`
//! - [`Monad`]: Sequencing computations with dependency
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! [`TypeConstructor`] uses Generic Associated Types to name "the same
//! container applied to another type", which is all `Functor` and `Monad`
//! need.
//!
//! # Examples
//!
//! ```rust
//! use monadic::control::Maybe;
//! use monadic::typeclass::{Applicative, Functor, Monad};
//!
//! let lifted: Maybe<i32> = <Maybe<()>>::pure(3);
//! assert_eq!(lifted.fmap(|n| n + 2), Maybe::Just(5));
//!
//! let sum = Maybe::Just(1).map2(Maybe::Just(2), |x, y| x + y);
//! assert_eq!(sum, Maybe::Just(3));
//!
//! let chained = Maybe::Just(4).flat_map(|n| Maybe::Just(n / 2));
//! assert_eq!(chained, Maybe::Just(2));
//! ```

mod applicative;
mod functor;
mod higher;
mod monad;

pub use applicative::{Applicative, ApplicativeVec};
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
