//! OPDS link relation vocabulary
//!
//! This crate provides the closed set of OPDS link relation identifiers and the
//! logic to classify a raw `rel` attribute against them. Relations outside the
//! set are reported as [`Relation::Unknown`] rather than as errors, since OPDS
//! relations are extensible.

pub mod error;
pub mod link;
pub mod rel;
pub mod relation;

pub use error::{Error, Result};
pub use link::{LinkSet, OpdsLink};
pub use relation::{classify, Relation, RelationCategory, RelationKind};
