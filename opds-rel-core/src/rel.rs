//! OPDS link relation identifiers
//!
//! These literals are matched byte-for-byte against `rel` attributes in
//! external feed documents.

/// Acquisition link (generic)
pub const ACQUISITION: &str = "http://opds-spec.org/acquisition";
/// Open access acquisition, no authorization required
pub const ACQUISITION_OPEN_ACCESS: &str = "http://opds-spec.org/acquisition/open-access";
/// Acquisition via lending
pub const ACQUISITION_BORROW: &str = "http://opds-spec.org/acquisition/borrow";
/// Preview or sample acquisition
pub const ACQUISITION_SAMPLE: &str = "http://opds-spec.org/acquisition/sample";
/// Featured content
pub const FEATURED: &str = "http://opds-spec.org/featured";
/// Cover image
pub const IMAGE: &str = "http://opds-spec.org/image";
/// Thumbnail image
pub const THUMBNAIL: &str = "http://opds-spec.org/image/thumbnail";
/// Next page
pub const NEXT: &str = "next";
/// Navigation feed
pub const SUBSECTION: &str = "subsection";
