//! Applicative type class - applying functions within contexts.
//!
//! `Applicative` extends `Functor` with the ability to:
//!
//! - Lift pure values into the applicative context (`pure`)
//! - Combine multiple applicative values using a function (`map2`, `map3`)
//! - Apply a function that is itself inside the context (`apply`)
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! pure(|x| x).apply(v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! pure(f).apply(pure(x)) == pure(f(x))
//! ```
//!
//! ## Interchange Law
//!
//! ```text
//! u.apply(pure(y)) == pure(|f| f(y)).apply(u)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use monadic::control::Maybe;
//! use monadic::typeclass::Applicative;
//!
//! let add_three: Maybe<fn(i32) -> i32> = Maybe::Just(|i| i + 3);
//! assert_eq!(add_three.apply(Maybe::Just(2)), Maybe::Just(5));
//!
//! let x = Maybe::Just(1);
//! let y = Maybe::Just("hello");
//! assert_eq!(x.product(y), Maybe::Just((1, "hello")));
//! ```

use super::functor::Functor;

/// A type class for types that support lifting values and combining contexts.
///
/// # Laws
///
/// ```text
/// pure(|x| x).apply(v) == v
/// pure(f).apply(pure(x)) == pure(f(x))
/// u.apply(pure(y)) == pure(|f| f(y)).apply(u)
/// ```
pub trait Applicative: Functor {
    /// Lifts a pure value into the applicative context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::{Maybe, Try};
    /// use monadic::typeclass::Applicative;
    ///
    /// let x: Maybe<i32> = <Maybe<()>>::pure(42);
    /// assert_eq!(x, Maybe::Just(42));
    ///
    /// let y: Try<&str, ()> = <Try<(), ()>>::pure("hello");
    /// assert_eq!(y, Try::Success("hello"));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two applicative values using a binary function.
    ///
    /// If either side is empty or failed, the result is too and `function`
    /// is not invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Maybe;
    /// use monadic::typeclass::Applicative;
    ///
    /// assert_eq!(Maybe::Just(1).map2(Maybe::Just(2), |x, y| x + y), Maybe::Just(3));
    /// assert_eq!(Maybe::Just(1).map2(Maybe::<i32>::Nothing, |x, y| x + y), Maybe::Nothing);
    /// ```
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines three applicative values using a ternary function.
    fn map3<B, C, D, F>(
        self,
        second: Self::WithType<B>,
        third: Self::WithType<C>,
        function: F,
    ) -> Self::WithType<D>
    where
        F: FnOnce(Self::Inner, B, C) -> D;

    /// Combines two applicative values into a tuple.
    ///
    /// This is equivalent to `map2(other, |a, b| (a, b))`.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Evaluates two applicatives and keeps the left value.
    #[inline]
    fn product_left<B>(self, other: Self::WithType<B>) -> Self::WithType<Self::Inner>
    where
        Self: Sized,
    {
        self.map2(other, |a, _| a)
    }

    /// Evaluates two applicatives and keeps the right value.
    #[inline]
    fn product_right<B>(self, other: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.map2(other, |_, b| b)
    }

    /// Applies the function inside `self` to the value inside `other`.
    ///
    /// If `self` holds no function, the result is empty regardless of
    /// `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Maybe;
    /// use monadic::typeclass::Applicative;
    ///
    /// let function: Maybe<fn(i32) -> i32> = Maybe::Just(|x| x + 1);
    /// assert_eq!(function.apply(Maybe::Just(5)), Maybe::Just(6));
    ///
    /// let missing: Maybe<fn(i32) -> i32> = Maybe::Nothing;
    /// assert_eq!(missing.apply(Maybe::Just(5)), Maybe::Nothing);
    /// ```
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output;
}

// =============================================================================
// Vec<A> Implementation
//
// The list applicative needs to call its functions more than once, so it is
// expressed through a separate trait with FnMut and Clone bounds.
// =============================================================================

/// Extension trait for Vec to provide Applicative-like operations.
///
/// Vec's Applicative instance represents non-deterministic computation:
/// combining two Vecs produces every combination, ordered by the left Vec
/// first. For `apply` that means function-major order: every output of the
/// first function, then every output of the second, and so on.
///
/// # Examples
///
/// ```rust
/// use monadic::typeclass::ApplicativeVec;
///
/// let functions: Vec<fn(i32) -> i32> = vec![|i| i + 3, |i| i * 2];
/// assert_eq!(functions.apply(vec![1, 2, 3]), vec![4, 5, 6, 2, 4, 6]);
/// ```
pub trait ApplicativeVec: Sized {
    /// The inner type of the Vec.
    type VecInner;

    /// Lifts a pure value into a singleton Vec.
    fn pure<B>(value: B) -> Vec<B> {
        vec![value]
    }

    /// Combines two Vecs using a binary function (cartesian product).
    fn map2<B: Clone, C, F>(self, other: Vec<B>, function: F) -> Vec<C>
    where
        Self::VecInner: Clone,
        F: FnMut(Self::VecInner, B) -> C;

    /// Creates the cartesian product of two Vecs as tuples.
    fn product<B: Clone>(self, other: Vec<B>) -> Vec<(Self::VecInner, B)>
    where
        Self::VecInner: Clone;

    /// Applies every function in this Vec to every value in `other`.
    fn apply<B: Clone, Output>(self, other: Vec<B>) -> Vec<Output>
    where
        Self::VecInner: FnMut(B) -> Output;

    /// Applies every function in `functions` to every value in this Vec.
    ///
    /// The same function-major order as [`ApplicativeVec::apply`], seen from
    /// the value side.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::typeclass::ApplicativeVec;
    ///
    /// let functions: Vec<fn(i32) -> i32> = vec![|i| i + 3, |i| i * 2];
    /// assert_eq!(vec![1, 2, 3].ap(functions), vec![4, 5, 6, 2, 4, 6]);
    /// ```
    fn ap<F, Output>(self, functions: Vec<F>) -> Vec<Output>
    where
        Self::VecInner: Clone,
        F: FnMut(Self::VecInner) -> Output;
}

impl<A> ApplicativeVec for Vec<A> {
    type VecInner = A;

    #[inline]
    fn map2<B: Clone, C, F>(self, other: Vec<B>, mut function: F) -> Vec<C>
    where
        A: Clone,
        F: FnMut(A, B) -> C,
    {
        let capacity = self.len().saturating_mul(other.len());
        let mut result = Vec::with_capacity(capacity);
        for a in &self {
            for b in &other {
                result.push(function(a.clone(), b.clone()));
            }
        }
        result
    }

    #[inline]
    fn product<B: Clone>(self, other: Vec<B>) -> Vec<(A, B)>
    where
        A: Clone,
    {
        self.map2(other, |a, b| (a, b))
    }

    #[inline]
    fn apply<B: Clone, Output>(self, other: Vec<B>) -> Vec<Output>
    where
        A: FnMut(B) -> Output,
    {
        let capacity = self.len().saturating_mul(other.len());
        let mut result = Vec::with_capacity(capacity);
        for mut function in self {
            result.extend(other.iter().cloned().map(&mut function));
        }
        result
    }

    #[inline]
    fn ap<F, Output>(self, functions: Vec<F>) -> Vec<Output>
    where
        A: Clone,
        F: FnMut(A) -> Output,
    {
        functions.apply(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn vec_pure_creates_singleton() {
        let result: Vec<i32> = Vec::<i32>::pure(42);
        assert_eq!(result, vec![42]);
    }

    #[rstest]
    fn vec_map2_all_combinations() {
        let a = vec![1, 2];
        let b = vec![10, 20];
        let result = a.map2(b, |x, y| x + y);
        assert_eq!(result, vec![11, 21, 12, 22]);
    }

    #[rstest]
    fn vec_map2_with_empty() {
        let a = vec![1, 2];
        let b: Vec<i32> = vec![];
        assert!(a.map2(b, |x, y| x + y).is_empty());
    }

    #[rstest]
    fn vec_product_creates_tuples() {
        let result = vec![1, 2].product(vec!["a", "b"]);
        assert_eq!(result, vec![(1, "a"), (1, "b"), (2, "a"), (2, "b")]);
    }

    #[rstest]
    fn vec_apply_is_function_major() {
        let functions: Vec<fn(i32) -> i32> = vec![|i| i + 3, |i| i * 2];
        assert_eq!(functions.apply(vec![1, 2, 3]), vec![4, 5, 6, 2, 4, 6]);
    }

    #[rstest]
    fn vec_apply_accepts_boxed_closures() {
        let offset = 100;
        let functions: Vec<Box<dyn Fn(i32) -> i32>> =
            vec![Box::new(move |i| i + offset), Box::new(|i| -i)];
        assert_eq!(functions.apply(vec![1, 2]), vec![101, 102, -1, -2]);
    }

    #[rstest]
    fn vec_ap_matches_apply() {
        let functions: Vec<fn(i32) -> i32> = vec![|i| i + 3, |i| i * 2];
        let values = vec![1, 2, 3];
        assert_eq!(
            values.clone().ap(functions.clone()),
            functions.apply(values)
        );
    }

    #[rstest]
    fn vec_apply_without_functions_is_empty() {
        let functions: Vec<fn(i32) -> i32> = vec![];
        assert!(functions.apply(vec![1, 2, 3]).is_empty());
    }

    #[rstest]
    fn vec_apply_without_values_is_empty() {
        let functions: Vec<fn(i32) -> i32> = vec![|i| i + 1];
        assert!(functions.apply(Vec::<i32>::new()).is_empty());
    }
}
