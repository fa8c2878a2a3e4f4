//! Effects: computations that depend on something outside themselves.
//!
//! - [`Reader`]: Computations that read from an environment
//!
//! # Dependency Injection
//!
//! A function that would otherwise reach for a global (a database path, a
//! client, a clock) can instead return a `Reader` over an environment that
//! holds it. The caller decides which environment to run it with.
//!
//! ```rust
//! use monadic::effect::Reader;
//!
//! #[derive(Clone)]
//! struct Environment {
//!     path: String,
//! }
//!
//! fn describe(user: &'static str) -> Reader<Environment, String> {
//!     Reader::new(move |environment: Environment| format!("{user} in: {}", environment.path))
//! }
//!
//! let test = Environment { path: "path_to_sqlite".to_string() };
//! let production = Environment { path: "path_to_realm".to_string() };
//!
//! assert_eq!(describe("Thor").run(test), "Thor in: path_to_sqlite");
//! assert_eq!(describe("Thor").run(production), "Thor in: path_to_realm");
//! ```

mod reader;

pub use reader::Reader;
