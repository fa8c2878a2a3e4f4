//! # Monadic Playground
//!
//! A walkthrough of the containers in `monadic`, printed section by section
//! by the `monadic-playground` binary.
//!
//! ## Module Structure
//!
//! - `database`: An in-memory user store and the direct `rename_user` workflow
//! - `injection`: The same workflow with the store location supplied by a `Reader`
//! - `demos`: The values printed by each section
//! - `error`: `Doomsday`, the failure used by the `Try` section

#![forbid(unsafe_code)]

pub mod database;
pub mod demos;
pub mod error;
pub mod injection;

pub use database::{DB_PATH, Database, User, rename_user};
pub use error::Doomsday;
pub use injection::{Environment, rename_user_in};
