//! Relation kinds and classification

use crate::error::Error;
use crate::rel;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A link relation from the OPDS vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RelationKind {
    /// Generic acquisition
    Acquisition,

    /// Acquisition requiring no authorization
    AcquisitionOpenAccess,

    /// Acquisition via lending
    Borrow,

    /// Acquisition of a preview
    Sample,

    /// Featured content
    Featured,

    /// Cover image
    Image,

    /// Thumbnail image
    Thumbnail,

    /// Pagination continuation
    PaginationNext,

    /// Sub-catalog
    Subsection,
}

impl RelationKind {
    /// Every relation kind, in vocabulary order
    pub const ALL: [RelationKind; 9] = [
        RelationKind::Acquisition,
        RelationKind::AcquisitionOpenAccess,
        RelationKind::Borrow,
        RelationKind::Sample,
        RelationKind::Featured,
        RelationKind::Image,
        RelationKind::Thumbnail,
        RelationKind::PaginationNext,
        RelationKind::Subsection,
    ];

    /// The literal `rel` value for this kind
    pub const fn as_str(self) -> &'static str {
        match self {
            RelationKind::Acquisition => rel::ACQUISITION,
            RelationKind::AcquisitionOpenAccess => rel::ACQUISITION_OPEN_ACCESS,
            RelationKind::Borrow => rel::ACQUISITION_BORROW,
            RelationKind::Sample => rel::ACQUISITION_SAMPLE,
            RelationKind::Featured => rel::FEATURED,
            RelationKind::Image => rel::IMAGE,
            RelationKind::Thumbnail => rel::THUMBNAIL,
            RelationKind::PaginationNext => rel::NEXT,
            RelationKind::Subsection => rel::SUBSECTION,
        }
    }

    /// Look up a kind by its exact literal. Matching is case-sensitive and
    /// the input is not trimmed.
    pub fn from_literal(s: &str) -> Option<RelationKind> {
        match s {
            rel::ACQUISITION => Some(RelationKind::Acquisition),
            rel::ACQUISITION_OPEN_ACCESS => Some(RelationKind::AcquisitionOpenAccess),
            rel::ACQUISITION_BORROW => Some(RelationKind::Borrow),
            rel::ACQUISITION_SAMPLE => Some(RelationKind::Sample),
            rel::FEATURED => Some(RelationKind::Featured),
            rel::IMAGE => Some(RelationKind::Image),
            rel::THUMBNAIL => Some(RelationKind::Thumbnail),
            rel::NEXT => Some(RelationKind::PaginationNext),
            rel::SUBSECTION => Some(RelationKind::Subsection),
            _ => None,
        }
    }

    /// Variant name, as used in CLI and JSON output
    pub const fn name(self) -> &'static str {
        match self {
            RelationKind::Acquisition => "Acquisition",
            RelationKind::AcquisitionOpenAccess => "AcquisitionOpenAccess",
            RelationKind::Borrow => "Borrow",
            RelationKind::Sample => "Sample",
            RelationKind::Featured => "Featured",
            RelationKind::Image => "Image",
            RelationKind::Thumbnail => "Thumbnail",
            RelationKind::PaginationNext => "PaginationNext",
            RelationKind::Subsection => "Subsection",
        }
    }

    /// Human-readable meaning
    pub const fn meaning(self) -> &'static str {
        match self {
            RelationKind::Acquisition => "generic acquisition link",
            RelationKind::AcquisitionOpenAccess => "acquisition requiring no authorization",
            RelationKind::Borrow => "acquisition via lending",
            RelationKind::Sample => "acquisition of a preview/sample",
            RelationKind::Featured => "link to featured content",
            RelationKind::Image => "cover image",
            RelationKind::Thumbnail => "thumbnail image",
            RelationKind::PaginationNext => "pagination continuation",
            RelationKind::Subsection => "link to a sub-catalog",
        }
    }

    /// Coarse category used when routing links
    pub const fn category(self) -> RelationCategory {
        match self {
            RelationKind::Acquisition
            | RelationKind::AcquisitionOpenAccess
            | RelationKind::Borrow
            | RelationKind::Sample => RelationCategory::Acquisition,
            RelationKind::Image | RelationKind::Thumbnail => RelationCategory::Image,
            RelationKind::Featured | RelationKind::PaginationNext | RelationKind::Subsection => {
                RelationCategory::Navigation
            }
        }
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RelationKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RelationKind::from_literal(s).ok_or_else(|| Error::UnknownRelation(s.to_string()))
    }
}

impl Serialize for RelationKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RelationKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Grouping of relation kinds by what a client does with the link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationCategory {
    /// Leads to obtaining a publication
    Acquisition,

    /// Artwork for an entry
    Image,

    /// Leads to another feed
    Navigation,
}

impl fmt::Display for RelationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RelationCategory::Acquisition => "acquisition",
            RelationCategory::Image => "image",
            RelationCategory::Navigation => "navigation",
        };
        f.pad(name)
    }
}

/// Result of classifying a raw `rel` attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    /// One of the vocabulary's relations
    Known(RelationKind),

    /// Anything else; extension relations end up here
    Unknown,
}

impl Relation {
    /// The matched kind, if any
    pub fn kind(self) -> Option<RelationKind> {
        match self {
            Relation::Known(kind) => Some(kind),
            Relation::Unknown => None,
        }
    }

    /// The matched kind's category, if any
    pub fn category(self) -> Option<RelationCategory> {
        self.kind().map(RelationKind::category)
    }

    pub fn is_known(self) -> bool {
        matches!(self, Relation::Known(_))
    }
}

impl From<RelationKind> for Relation {
    fn from(kind: RelationKind) -> Self {
        Relation::Known(kind)
    }
}

/// Classify a raw relation string.
///
/// Returns [`Relation::Known`] only on an exact, case-sensitive match against
/// a vocabulary literal. Never fails.
pub fn classify(raw: &str) -> Relation {
    match RelationKind::from_literal(raw) {
        Some(kind) => Relation::Known(kind),
        None => {
            tracing::debug!(rel = raw, "Unrecognized OPDS relation");
            Relation::Unknown
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_literals_are_distinct() {
        let literals: HashSet<&str> = RelationKind::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(literals.len(), RelationKind::ALL.len());
    }

    #[test]
    fn test_round_trip_every_kind() {
        for kind in RelationKind::ALL {
            assert_eq!(classify(kind.as_str()), Relation::Known(kind));
        }
    }

    #[test]
    fn test_scenarios() {
        assert_eq!(
            classify("http://opds-spec.org/acquisition/borrow"),
            Relation::Known(RelationKind::Borrow)
        );
        assert_eq!(classify("next"), Relation::Known(RelationKind::PaginationNext));
        assert_eq!(classify("NEXT"), Relation::Unknown);
        assert_eq!(classify("subsection"), Relation::Known(RelationKind::Subsection));
        assert_eq!(
            classify("http://opds-spec.org/acquisition/rent"),
            Relation::Unknown
        );
    }

    #[test]
    fn test_unknown_inputs() {
        for raw in ["http://example.com/made-up", "", "Next", " next", "next\n"] {
            assert_eq!(classify(raw), Relation::Unknown, "input {:?}", raw);
        }
    }

    #[test]
    fn test_from_str_is_strict() {
        assert_eq!("next".parse::<RelationKind>(), Ok(RelationKind::PaginationNext));
        assert_eq!(
            "next ".parse::<RelationKind>(),
            Err(Error::UnknownRelation("next ".to_string()))
        );
    }

    #[test]
    fn test_display_is_literal() {
        assert_eq!(
            RelationKind::Thumbnail.to_string(),
            "http://opds-spec.org/image/thumbnail"
        );
        assert_eq!(RelationCategory::Navigation.to_string(), "navigation");
    }

    #[test]
    fn test_categories() {
        assert_eq!(RelationKind::Sample.category(), RelationCategory::Acquisition);
        assert_eq!(RelationKind::Thumbnail.category(), RelationCategory::Image);
        assert_eq!(RelationKind::Featured.category(), RelationCategory::Navigation);
        assert_eq!(Relation::Unknown.category(), None);
    }

    #[test]
    fn test_serde_uses_literal() {
        let json = serde_json::to_string(&RelationKind::Borrow).unwrap();
        assert_eq!(json, "\"http://opds-spec.org/acquisition/borrow\"");

        let kind: RelationKind = serde_json::from_str("\"subsection\"").unwrap();
        assert_eq!(kind, RelationKind::Subsection);

        assert!(serde_json::from_str::<RelationKind>("\"Subsection\"").is_err());
    }
}
