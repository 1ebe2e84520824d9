//! Error type returned by cache construction.
//!
//! Only construction can fail. A lookup that misses returns `None`, and
//! `put` has no failure mode once a cache exists.

use thiserror::Error;

/// Errors produced while building a cache.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The requested capacity was below 1 or not representable as `usize`.
    #[error("capacity must be greater than 0")]
    InvalidCapacity,
}

/// Shorthand for results whose error is [`Error`].
pub type Result<T> = core::result::Result<T, Error>;
