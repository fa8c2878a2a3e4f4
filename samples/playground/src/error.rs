//! Errors raised by the `Try` walkthrough.

use thiserror::Error;

/// The ways the world can end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Doomsday {
    /// A loud ending.
    #[error("Boom")]
    Boom,
    /// A louder one.
    #[error("Bang")]
    Bang,
}
