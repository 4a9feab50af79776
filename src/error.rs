//! The crate's error taxonomy: exactly two kinds.

use thiserror::Error;

/// Everything fallible in this crate returns one of these two variants.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A claim string failed the claim grammar: empty, no
    /// colon, a wildcard outside the trailing position, or similar.
    #[error("invalid claim: {0}")]
    InvalidClaim(String),

    /// A query hash was malformed: not a single-entry mapping, a
    /// non-mapping value, a missing verb, or a resource string that does
    /// not conform to the grammar.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, Error>;
