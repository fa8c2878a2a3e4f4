//! # monadic
//!
//! Functor, Applicative and Monad abstractions for three small containers.
//!
//! ## Overview
//!
//! - **Type Classes**: `Functor`, `Applicative`, `Monad` over a GAT-based
//!   `TypeConstructor`
//! - **Control Structures**: [`Maybe`](control::Maybe) for optional values and
//!   [`Try`](control::Try) for computations that can fail
//! - **Effects**: [`Reader`](effect::Reader) for computations that depend on an
//!   environment
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Functor, Applicative, Monad)
//! - `control`: `Maybe` and `Try`
//! - `effect`: `Reader`
//! - `serde`: `Serialize`/`Deserialize` for `Maybe` and `Try`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use monadic::prelude::*;
//!
//! fn half(value: i32) -> Maybe<i32> {
//!     if value % 2 == 0 { Maybe::Just(value / 2) } else { Maybe::Nothing }
//! }
//!
//! assert_eq!(Maybe::Just(4).flat_map(half), Maybe::Just(2));
//! assert_eq!(Maybe::Just(20).flat_map(half).flat_map(half).flat_map(half), Maybe::Nothing);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// ```rust
/// use monadic::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "effect")]
pub mod effect;
