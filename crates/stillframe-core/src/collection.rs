//! Thematic collections
//!
//! Collections are named, curated groupings over the catalog, defined by a
//! membership predicate rather than a stored subset. Membership is
//! re-evaluated against the catalog on every call, so a swapped catalog is
//! always reflected - there is no snapshot to go stale.

use crate::catalog::{Catalog, Photo, Tag};

/// A curated grouping of catalog photos.
///
/// The predicate must be pure and deterministic for a fixed catalog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collection {
    /// URL-safe unique identifier
    pub slug: &'static str,
    /// Display title
    pub title: &'static str,
    /// One-line description shown on the collection card
    pub blurb: &'static str,
    predicate: fn(&Photo) -> bool,
}

impl Collection {
    /// Photos belonging to this collection, in catalog order
    pub fn members<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Photo> {
        catalog.photos().iter().filter(|p| (self.predicate)(p)).collect()
    }

    /// Number of member photos
    pub fn count(&self, catalog: &Catalog) -> usize {
        catalog.photos().iter().filter(|p| (self.predicate)(p)).count()
    }

    /// Cover photo for the collection card: the first member, if any
    pub fn cover<'a>(&self, catalog: &'a Catalog) -> Option<&'a Photo> {
        catalog.photos().iter().find(|p| (self.predicate)(p))
    }
}

/// The fixed, ordered list of collections shown on the site.
pub const COLLECTIONS: [Collection; 4] = [
    Collection {
        slug: "editorial",
        title: "Editorial",
        blurb: "Story-driven portraiture with a refined, magazine-ready aesthetic.",
        predicate: |p| p.has_tag(Tag::Portraits) || p.has_tag(Tag::Studio),
    },
    Collection {
        slug: "events",
        title: "Events & Concerts",
        blurb: "High-energy coverage that preserves atmosphere without sacrificing detail.",
        predicate: |p| p.has_tag(Tag::Events) || p.has_tag(Tag::Concerts),
    },
    Collection {
        slug: "street",
        title: "Street",
        blurb: "Candid life moments and graphic compositions from cities worldwide.",
        predicate: |p| p.has_tag(Tag::Street),
    },
    Collection {
        slug: "landscape",
        title: "Landscape",
        blurb: "Quiet, expansive scenes with natural color and minimal retouching.",
        predicate: |p| p.has_tag(Tag::Landscape),
    },
];

/// Look up a collection by slug
pub fn find(slug: &str) -> Option<&'static Collection> {
    COLLECTIONS.iter().find(|c| c.slug == slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photo(id: &str, tags: Vec<Tag>) -> Photo {
        Photo {
            id: id.to_string(),
            src: format!("https://photos.example/{id}.jpg"),
            width: 1600,
            height: 1067,
            title: None,
            tags,
            year: 2024,
            location: None,
        }
    }

    fn catalog() -> Catalog {
        Catalog::from_photos(vec![
            photo("p1", vec![Tag::Portraits]),
            photo("s1", vec![Tag::Street]),
            photo("e1", vec![Tag::Concerts]),
            photo("p2", vec![Tag::Studio, Tag::Portraits]),
            photo("l1", vec![Tag::Landscape]),
        ])
    }

    #[test]
    fn test_slugs_are_unique() {
        for (i, a) in COLLECTIONS.iter().enumerate() {
            for b in &COLLECTIONS[i + 1..] {
                assert_ne!(a.slug, b.slug);
            }
        }
    }

    #[test]
    fn test_members_follow_catalog_order() {
        let catalog = catalog();
        let editorial = find("editorial").unwrap();
        let ids: Vec<&str> = editorial.members(&catalog).iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["p1", "p2"]);
    }

    #[test]
    fn test_membership_is_recomputed_not_snapshotted() {
        let street = find("street").unwrap();
        let small = Catalog::from_photos(vec![photo("s1", vec![Tag::Street])]);
        assert_eq!(street.count(&small), 1);
        let bigger = Catalog::from_photos(vec![
            photo("s1", vec![Tag::Street]),
            photo("s2", vec![Tag::Street]),
        ]);
        assert_eq!(street.count(&bigger), 2);
    }

    #[test]
    fn test_members_is_pure() {
        let catalog = catalog();
        let events = find("events").unwrap();
        let first: Vec<&str> = events.members(&catalog).iter().map(|p| p.id.as_str()).collect();
        let second: Vec<&str> = events.members(&catalog).iter().map(|p| p.id.as_str()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_cover_is_first_member() {
        let catalog = catalog();
        assert_eq!(find("editorial").unwrap().cover(&catalog).unwrap().id, "p1");
        assert_eq!(find("landscape").unwrap().cover(&catalog).unwrap().id, "l1");
        // Empty catalog has no cover
        assert!(find("street").unwrap().cover(&Catalog::default()).is_none());
    }

    #[test]
    fn test_unknown_slug_finds_nothing() {
        assert!(find("weddings").is_none());
    }
}
