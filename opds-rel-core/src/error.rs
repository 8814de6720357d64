//! Error types for opds-rel-core

use thiserror::Error;

/// Result type alias using the crate error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the strict parsing paths.
///
/// `classify` never produces one of these; unrecognized relations are a
/// normal result there.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Unknown OPDS relation: {0:?}")]
    UnknownRelation(String),
}
