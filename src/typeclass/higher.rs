//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over `Maybe<_>` or `Try<_, E>` as type constructors.
//! [`TypeConstructor`] works around this: an implementor names its current
//! inner type and how to rebuild itself around another one.
//!
//! # Example
//!
//! ```rust
//! use monadic::control::Maybe;
//! use monadic::typeclass::TypeConstructor;
//!
//! fn emptied<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let number: Maybe<i32> = Maybe::Just(3);
//! let text: Maybe<String> = emptied(number);
//! assert!(text.is_nothing());
//! ```

/// A trait representing a type constructor.
///
/// # Associated Types
///
/// - `Inner`: The type parameter that this type constructor is currently applied to.
/// - `WithType<B>`: The same type constructor applied to a different type `B`.
///
/// # Laws
///
/// 1. **Consistency**: `<F as TypeConstructor>::WithType<F::Inner>` should be
///    equivalent to `F` (up to type equality).
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    ///
    /// The bound keeps the result a type constructor, so transformations
    /// can be chained.
    type WithType<B>: TypeConstructor<Inner = B>;
}
