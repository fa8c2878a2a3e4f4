//! Reader Monad - environment reading computation.
//!
//! A `Reader<E, A>` wraps a function `E -> A`, where `E` is the environment
//! (configuration, dependencies) and `A` is the result. Composing readers
//! builds a bigger function; nothing runs until the composed reader is given
//! an environment, and every step of the chain then receives that same
//! environment.
//!
//! # Note on Type Classes
//!
//! Reader provides `fmap`, `flat_map`, `map2`, etc. as inherent methods
//! rather than implementing the Functor/Applicative/Monad traits. The wrapped
//! closures must be `'static` and the environment must be `Clone` to be
//! threaded through a chain, and the trait signatures carry neither bound.
//!
//! # Laws
//!
//! ## Functor Laws
//!
//! - Identity: `reader.fmap(|x| x) == reader`
//! - Composition: `reader.fmap(f).fmap(g) == reader.fmap(|x| g(f(x)))`
//!
//! ## Monad Laws
//!
//! - Left Identity: `Reader::pure(a).flat_map(f) == f(a)`
//! - Right Identity: `m.flat_map(Reader::pure) == m`
//! - Associativity: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
//!
//! ## Environment Laws
//!
//! - Ask Retrieval: `Reader::ask().run(r) == r`
//! - Local Identity: `Reader::local(|r| r, m) == m`
//!
//! # Examples
//!
//! ```rust
//! use monadic::effect::Reader;
//!
//! fn half(value: f32) -> Reader<f32, f32> {
//!     Reader::new(move |_| value / 2.0)
//! }
//!
//! let halved = Reader::new(|environment: f32| environment)
//!     .flat_map(half)
//!     .flat_map(half)
//!     .flat_map(half);
//! assert_eq!(halved.run(20.0), 2.5);
//! ```
//!
//! Dependency injection:
//!
//! ```rust
//! use monadic::effect::Reader;
//!
//! #[derive(Clone)]
//! struct Config {
//!     port: u16,
//!     host: String,
//! }
//!
//! fn address() -> Reader<Config, String> {
//!     Reader::asks(|config: Config| config.host)
//!         .map2(Reader::asks(|config: Config| config.port), |host, port| {
//!             format!("{host}:{port}")
//!         })
//! }
//!
//! let config = Config { port: 8080, host: "localhost".to_string() };
//! assert_eq!(address().run(config), "localhost:8080");
//! ```

use std::fmt;

/// A computation that reads from an environment.
///
/// `Reader<E, A>` owns its wrapped function. Composed readers own new closures
/// that in turn own their parents, so no state is shared between readers.
///
/// # Type Parameters
///
/// - `E`: The environment type (read-only context)
/// - `A`: The result type
///
/// # Examples
///
/// ```rust
/// use monadic::effect::Reader;
///
/// let computation: Reader<i32, i32> = Reader::ask()
///     .flat_map(|environment| Reader::pure(environment * 2));
///
/// assert_eq!(computation.run(21), 42);
/// ```
pub struct Reader<E, A>
where
    E: 'static,
    A: 'static,
{
    run_function: Box<dyn Fn(E) -> A>,
}

impl<E, A> Reader<E, A>
where
    E: 'static,
    A: 'static,
{
    /// Creates a new Reader from a function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::effect::Reader;
    ///
    /// let reader: Reader<i32, i32> = Reader::new(|environment| environment * 2);
    /// assert_eq!(reader.run(21), 42);
    /// ```
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(E) -> A + 'static,
    {
        Self {
            run_function: Box::new(function),
        }
    }

    /// Runs the Reader computation with the given environment.
    ///
    /// Side effects of the wrapped function, if any, happen here and only
    /// here. A Reader can be run any number of times.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::effect::Reader;
    ///
    /// let reader: Reader<i32, i32> = Reader::new(|environment| environment + 1);
    /// assert_eq!(reader.run(41), 42);
    /// assert_eq!(reader.run(0), 1);
    /// ```
    pub fn run(&self, environment: E) -> A {
        (self.run_function)(environment)
    }

    /// Creates a Reader that returns a constant value, ignoring the environment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::effect::Reader;
    ///
    /// let reader: Reader<i32, &str> = Reader::pure("constant");
    /// assert_eq!(reader.run(0), "constant");
    /// assert_eq!(reader.run(100), "constant");
    /// ```
    pub fn pure(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |_| value.clone())
    }

    /// Creates a Reader that projects a value from the environment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::effect::Reader;
    ///
    /// #[derive(Clone)]
    /// struct Config { port: u16 }
    ///
    /// let reader: Reader<Config, u16> = Reader::asks(|config: Config| config.port);
    /// assert_eq!(reader.run(Config { port: 8080 }), 8080);
    /// ```
    pub fn asks<F>(projection: F) -> Self
    where
        F: Fn(E) -> A + 'static,
    {
        Self::new(projection)
    }

    /// Maps a function over the result of this Reader.
    ///
    /// Neither function runs until the new Reader is run.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::effect::Reader;
    ///
    /// let reader: Reader<i32, i32> = Reader::new(|environment| environment);
    /// let mapped = reader.fmap(|value| value * 2);
    /// assert_eq!(mapped.run(21), 42);
    /// ```
    pub fn fmap<B, F>(self, function: F) -> Reader<E, B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        let original_function = self.run_function;
        Reader::new(move |environment| {
            let result = (original_function)(environment);
            function(result)
        })
    }

    /// Chains this Reader with a function that produces another Reader.
    ///
    /// The environment given to the composed Reader is passed both to this
    /// Reader and to the Reader returned by `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::effect::Reader;
    ///
    /// let reader: Reader<i32, i32> = Reader::new(|environment| environment);
    /// let chained = reader.flat_map(|value| Reader::new(move |environment| value + environment));
    /// assert_eq!(chained.run(10), 20);
    /// ```
    pub fn flat_map<B, F>(self, function: F) -> Reader<E, B>
    where
        F: Fn(A) -> Reader<E, B> + 'static,
        B: 'static,
        E: Clone,
    {
        let original_function = self.run_function;
        Reader::new(move |environment: E| {
            let a = (original_function)(environment.clone());
            let next_reader = function(a);
            next_reader.run(environment)
        })
    }

    /// Alias for `flat_map` to match Rust's naming conventions.
    pub fn and_then<B, F>(self, function: F) -> Reader<E, B>
    where
        F: Fn(A) -> Reader<E, B> + 'static,
        B: 'static,
        E: Clone,
    {
        self.flat_map(function)
    }

    /// Sequences two Readers, discarding the first result.
    ///
    /// Both Readers still run, in order, against the same environment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::effect::Reader;
    ///
    /// let first: Reader<i32, i32> = Reader::new(|environment| environment);
    /// let second: Reader<i32, &str> = Reader::pure("result");
    /// assert_eq!(first.then(second).run(42), "result");
    /// ```
    #[must_use]
    pub fn then<B>(self, next: Reader<E, B>) -> Reader<E, B>
    where
        B: 'static,
        E: Clone,
    {
        let self_function = self.run_function;
        let next_function = next.run_function;
        Reader::new(move |environment: E| {
            (self_function)(environment.clone());
            (next_function)(environment)
        })
    }

    /// Combines two Readers using a binary function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::effect::Reader;
    ///
    /// let reader1: Reader<i32, i32> = Reader::new(|environment| environment);
    /// let reader2: Reader<i32, i32> = Reader::new(|environment| environment * 2);
    /// let combined = reader1.map2(reader2, |a, b| a + b);
    /// assert_eq!(combined.run(10), 30);
    /// ```
    pub fn map2<B, C, F>(self, other: Reader<E, B>, function: F) -> Reader<E, C>
    where
        F: Fn(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
        E: Clone,
    {
        let self_function = self.run_function;
        let other_function = other.run_function;
        Reader::new(move |environment: E| {
            let a = (self_function)(environment.clone());
            let b = (other_function)(environment);
            function(a, b)
        })
    }

    /// Combines three Readers using a ternary function.
    pub fn map3<B, C, D, F>(
        self,
        second: Reader<E, B>,
        third: Reader<E, C>,
        function: F,
    ) -> Reader<E, D>
    where
        F: Fn(A, B, C) -> D + 'static,
        B: 'static,
        C: 'static,
        D: 'static,
        E: Clone,
    {
        let self_function = self.run_function;
        let second_function = second.run_function;
        let third_function = third.run_function;
        Reader::new(move |environment: E| {
            let a = (self_function)(environment.clone());
            let b = (second_function)(environment.clone());
            let c = (third_function)(environment);
            function(a, b, c)
        })
    }

    /// Combines two Readers into a tuple.
    #[must_use]
    pub fn product<B>(self, other: Reader<E, B>) -> Reader<E, (A, B)>
    where
        B: 'static,
        E: Clone,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Applies a function inside this Reader to a value inside another Reader.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::effect::Reader;
    ///
    /// let function_reader: Reader<i32, fn(i32) -> i32> = Reader::pure(|x| x + 1);
    /// let value_reader: Reader<i32, i32> = Reader::new(|environment| environment);
    /// assert_eq!(function_reader.apply(value_reader).run(41), 42);
    /// ```
    #[must_use]
    pub fn apply<B, Output>(self, other: Reader<E, B>) -> Reader<E, Output>
    where
        A: Fn(B) -> Output,
        B: 'static,
        Output: 'static,
        E: Clone,
    {
        self.map2(other, |function, b| function(b))
    }

    /// Runs a computation with a modified environment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::effect::Reader;
    ///
    /// let reader: Reader<i32, i32> = Reader::new(|environment| environment * 2);
    /// let local_reader = Reader::local(|environment| environment + 10, reader);
    /// assert_eq!(local_reader.run(5), 30);
    /// ```
    pub fn local<F>(modifier: F, computation: Self) -> Self
    where
        F: Fn(E) -> E + 'static,
    {
        let computation_function = computation.run_function;
        Self::new(move |environment| {
            let modified_environment = modifier(environment);
            (computation_function)(modified_environment)
        })
    }
}

impl<E> Reader<E, E>
where
    E: 'static,
{
    /// Creates a Reader that returns the entire environment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::effect::Reader;
    ///
    /// let reader: Reader<i32, i32> = Reader::ask();
    /// assert_eq!(reader.run(42), 42);
    /// ```
    #[must_use]
    pub fn ask() -> Self {
        Self::new(|environment| environment)
    }
}

impl<E, A> fmt::Display for Reader<E, A>
where
    E: 'static,
    A: 'static,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "<Reader>")
    }
}

impl<E, A> fmt::Debug for Reader<E, A>
where
    E: 'static,
    A: 'static,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Reader").finish_non_exhaustive()
    }
}

static_assertions::assert_not_impl_any!(Reader<i32, i32>: Send, Sync, Clone);
