//! Gallery filter engine
//!
//! Combines the active tag and the free-text search query into a filtered
//! view of the catalog. Filtering is a pure function of
//! (catalog, tag, query): no hidden state, no caching, catalog order
//! preserved. The UI recomputes the visible set on every input change.

use crate::catalog::{Catalog, Photo, Tag};
use crate::error::PortfolioResult;
use crate::tabs::TabStrip;

/// The photos visible for a given tag and query, in catalog order.
///
/// - `Tag::All` passes every photo; any other tag requires membership in the
///   photo's tag set.
/// - A query that trims to empty passes every photo; otherwise the query must
///   be a case-insensitive substring of the photo's title or location, with
///   missing fields treated as empty strings.
pub fn visible<'a>(catalog: &'a Catalog, active: Tag, query: &str) -> Vec<&'a Photo> {
    let needle = query.trim().to_lowercase();

    catalog
        .photos()
        .iter()
        .filter(|photo| tag_matches(photo, active) && query_matches(photo, &needle))
        .collect()
}

fn tag_matches(photo: &Photo, active: Tag) -> bool {
    active == Tag::All || photo.has_tag(active)
}

/// `needle` must already be trimmed and lowercased.
fn query_matches(photo: &Photo, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    photo.title_str().to_lowercase().contains(needle)
        || photo.location_str().to_lowercase().contains(needle)
}

/// Page-level filter state: the tag tab strip plus the search query.
///
/// Owns no photos - callers pass the catalog to [`GalleryFilter::photos`]
/// each time, so a swapped catalog is reflected immediately.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryFilter {
    tabs: TabStrip<Tag>,
    query: String,
}

impl GalleryFilter {
    /// Fresh filter: tag `All`, empty query.
    pub fn new() -> Self {
        Self {
            tabs: TabStrip::new(Tag::tabs()),
            query: String::new(),
        }
    }

    /// The tab domain, for rendering the strip
    pub fn tags(&self) -> &[Tag] {
        self.tabs.domain()
    }

    /// The currently active tag
    pub fn active_tag(&self) -> Tag {
        *self.tabs.selected()
    }

    /// Select a tag from the fixed domain
    pub fn select_tag(&mut self, tag: Tag) -> PortfolioResult<()> {
        self.tabs.select(&tag)
    }

    /// The current search query, as typed
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Replace the search query
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// The filtered view of `catalog` under the current tag and query
    pub fn photos<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Photo> {
        visible(catalog, self.active_tag(), &self.query)
    }
}

impl Default for GalleryFilter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photo(id: &str, title: &str, location: &str, tags: Vec<Tag>) -> Photo {
        Photo {
            id: id.to_string(),
            src: format!("https://photos.example/{id}.jpg"),
            width: 1600,
            height: 1067,
            title: Some(title.to_string()),
            tags,
            year: 2023,
            location: Some(location.to_string()),
        }
    }

    fn three_photo_catalog() -> Catalog {
        Catalog::from_photos(vec![
            photo("1", "Photo #1", "NYC", vec![Tag::Portraits]),
            photo("2", "Photo #2", "Seoul", vec![Tag::Street]),
            photo("3", "Photo #3", "Tokyo", vec![Tag::Portraits, Tag::Studio]),
        ])
    }

    #[test]
    fn test_no_filter_is_identity() {
        let catalog = three_photo_catalog();
        let ids: Vec<&str> = visible(&catalog, Tag::All, "")
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, ["1", "2", "3"]);
    }

    #[test]
    fn test_tag_filter_keeps_catalog_order() {
        let catalog = three_photo_catalog();
        let ids: Vec<&str> = visible(&catalog, Tag::Portraits, "")
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, ["1", "3"]);
    }

    #[test]
    fn test_query_matches_location_when_title_does_not() {
        let catalog = Catalog::from_photos(vec![photo(
            "sunset",
            "Sunset",
            "Tokyo",
            vec![Tag::Landscape],
        )]);
        let hits = visible(&catalog, Tag::All, "tok");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "sunset");
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let catalog = three_photo_catalog();
        assert_eq!(visible(&catalog, Tag::All, "SEOUL").len(), 1);
        assert_eq!(visible(&catalog, Tag::All, "seoul").len(), 1);
    }

    #[test]
    fn test_whitespace_query_means_no_query() {
        let catalog = three_photo_catalog();
        assert_eq!(visible(&catalog, Tag::All, "   \t").len(), 3);
    }

    #[test]
    fn test_tag_and_query_combine_with_and() {
        let catalog = three_photo_catalog();
        // "Photo" matches every title, so the tag does the narrowing
        let ids: Vec<&str> = visible(&catalog, Tag::Portraits, "photo")
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, ["1", "3"]);
        // Query narrows within the tag
        let hits = visible(&catalog, Tag::Portraits, "tokyo");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "3");
    }

    #[test]
    fn test_missing_title_and_location_are_empty_not_failing() {
        let mut p = photo("bare", "", "", vec![Tag::Street]);
        p.title = None;
        p.location = None;
        let catalog = Catalog::from_photos(vec![p]);
        // No query: passes
        assert_eq!(visible(&catalog, Tag::All, "").len(), 1);
        // Any query: no match, but no panic either
        assert_eq!(visible(&catalog, Tag::All, "x").len(), 0);
    }

    #[test]
    fn test_filter_state_defaults() {
        let filter = GalleryFilter::new();
        assert_eq!(filter.active_tag(), Tag::All);
        assert_eq!(filter.query(), "");
        assert_eq!(filter.tags()[0], Tag::All);
    }

    #[test]
    fn test_filter_state_drives_visible_set() {
        let catalog = three_photo_catalog();
        let mut filter = GalleryFilter::new();
        filter.select_tag(Tag::Studio).unwrap();
        filter.set_query("  ");
        let hits = filter.photos(&catalog);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "3");
    }
}
