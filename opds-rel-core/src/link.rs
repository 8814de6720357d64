//! Classification of links already extracted from a feed entry

use crate::relation::{classify, Relation, RelationCategory, RelationKind};
use serde::{Deserialize, Serialize};

/// OPDS Link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpdsLink {
    /// Link relation, as found in the feed
    pub rel: String,
    /// Target URL
    pub href: String,
    /// MIME type
    #[serde(rename = "type")]
    pub media_type: String,
    /// Title (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl OpdsLink {
    /// Create a new link
    pub fn new(
        rel: impl Into<String>,
        href: impl Into<String>,
        media_type: impl Into<String>,
    ) -> Self {
        Self {
            rel: rel.into(),
            href: href.into(),
            media_type: media_type.into(),
            title: None,
        }
    }

    /// Set the link title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Classify this link's relation
    pub fn relation(&self) -> Relation {
        classify(&self.rel)
    }

    /// The relation kind, if the relation is in the vocabulary
    pub fn kind(&self) -> Option<RelationKind> {
        self.relation().kind()
    }
}

/// Read-only view over the links of one entry or feed.
///
/// Links keep their document order; unknown relations are never dropped.
#[derive(Debug, Clone, Copy)]
pub struct LinkSet<'a> {
    links: &'a [OpdsLink],
}

impl<'a> LinkSet<'a> {
    pub fn new(links: &'a [OpdsLink]) -> Self {
        Self { links }
    }

    /// All links, in document order
    pub fn iter(&self) -> impl Iterator<Item = &'a OpdsLink> {
        self.links.iter()
    }

    /// Links paired with their classification
    pub fn classified(&self) -> impl Iterator<Item = (&'a OpdsLink, Relation)> {
        self.links.iter().map(|link| (link, link.relation()))
    }

    /// All links of one kind
    pub fn by_kind(&self, kind: RelationKind) -> impl Iterator<Item = &'a OpdsLink> {
        self.links
            .iter()
            .filter(move |link| link.kind() == Some(kind))
    }

    /// All links in one category
    pub fn by_category(&self, category: RelationCategory) -> impl Iterator<Item = &'a OpdsLink> {
        self.links
            .iter()
            .filter(move |link| link.relation().category() == Some(category))
    }

    /// First link of one kind
    pub fn first(&self, kind: RelationKind) -> Option<&'a OpdsLink> {
        self.by_kind(kind).next()
    }

    /// Every acquisition link, whatever its flavor
    pub fn acquisitions(&self) -> impl Iterator<Item = &'a OpdsLink> {
        self.by_category(RelationCategory::Acquisition)
    }

    pub fn borrow(&self) -> Option<&'a OpdsLink> {
        self.first(RelationKind::Borrow)
    }

    pub fn open_access(&self) -> Option<&'a OpdsLink> {
        self.first(RelationKind::AcquisitionOpenAccess)
    }

    pub fn sample(&self) -> Option<&'a OpdsLink> {
        self.first(RelationKind::Sample)
    }

    /// Cover image
    pub fn cover(&self) -> Option<&'a OpdsLink> {
        self.first(RelationKind::Image)
    }

    pub fn thumbnail(&self) -> Option<&'a OpdsLink> {
        self.first(RelationKind::Thumbnail)
    }

    /// Pagination continuation
    pub fn next_page(&self) -> Option<&'a OpdsLink> {
        self.first(RelationKind::PaginationNext)
    }

    pub fn subsections(&self) -> impl Iterator<Item = &'a OpdsLink> {
        self.by_kind(RelationKind::Subsection)
    }

    /// Links whose relation is outside the vocabulary
    pub fn unknown(&self) -> impl Iterator<Item = &'a OpdsLink> {
        self.links
            .iter()
            .filter(|link| link.relation() == Relation::Unknown)
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

impl<'a> From<&'a [OpdsLink]> for LinkSet<'a> {
    fn from(links: &'a [OpdsLink]) -> Self {
        Self::new(links)
    }
}

impl<'a> From<&'a Vec<OpdsLink>> for LinkSet<'a> {
    fn from(links: &'a Vec<OpdsLink>) -> Self {
        Self::new(links)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rel;

    fn entry_links() -> Vec<OpdsLink> {
        vec![
            OpdsLink::new(rel::IMAGE, "/covers/1.jpg", "image/jpeg"),
            OpdsLink::new(rel::THUMBNAIL, "/covers/1-thumb.jpg", "image/jpeg"),
            OpdsLink::new(rel::ACQUISITION_BORROW, "/loans/1", "application/atom+xml"),
            OpdsLink::new(rel::ACQUISITION_SAMPLE, "/samples/1.epub", "application/epub+zip"),
            OpdsLink::new("alternate", "/works/1", "text/html"),
            OpdsLink::new(rel::ACQUISITION, "/books/1.epub", "application/epub+zip"),
        ]
    }

    #[test]
    fn test_link_relation() {
        let link = OpdsLink::new("next", "/feed?page=2", "application/atom+xml")
            .with_title("Next page");
        assert_eq!(link.relation(), Relation::Known(RelationKind::PaginationNext));
        assert_eq!(link.title.as_deref(), Some("Next page"));
    }

    #[test]
    fn test_acquisitions_keep_document_order() {
        let links = entry_links();
        let set = LinkSet::from(&links);
        let hrefs: Vec<&str> = set.acquisitions().map(|l| l.href.as_str()).collect();
        assert_eq!(hrefs, ["/loans/1", "/samples/1.epub", "/books/1.epub"]);
    }

    #[test]
    fn test_first_of_kind() {
        let links = entry_links();
        let set = LinkSet::new(&links);
        assert_eq!(set.borrow().map(|l| l.href.as_str()), Some("/loans/1"));
        assert_eq!(set.cover().map(|l| l.href.as_str()), Some("/covers/1.jpg"));
        assert_eq!(
            set.thumbnail().map(|l| l.href.as_str()),
            Some("/covers/1-thumb.jpg")
        );
        assert!(set.open_access().is_none());
        assert!(set.next_page().is_none());
    }

    #[test]
    fn test_unknown_links_retained() {
        let links = entry_links();
        let set = LinkSet::new(&links);
        let unknown: Vec<&str> = set.unknown().map(|l| l.rel.as_str()).collect();
        assert_eq!(unknown, ["alternate"]);
        assert_eq!(set.len(), 6);
        assert_eq!(set.classified().filter(|(_, r)| r.is_known()).count(), 5);
    }

    #[test]
    fn test_empty_set() {
        let set = LinkSet::new(&[]);
        assert!(set.is_empty());
        assert!(set.cover().is_none());
        assert_eq!(set.subsections().count(), 0);
    }
}
