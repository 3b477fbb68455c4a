//! Property-based tests for the gallery filter engine
//!
//! Uses proptest to verify the filter's algebraic properties over generated
//! catalogs: identity, soundness, idempotence, and order preservation.

use proptest::prelude::*;
use stillframe_core::{visible, Catalog, Photo, Tag, TabStrip, COLLECTIONS};

// ============================================================================
// Strategy Generators
// ============================================================================

/// Any tag that can appear on a photo (never the `All` sentinel)
fn photo_tag_strategy() -> impl Strategy<Value = Tag> {
    prop::sample::select(Tag::GALLERY.to_vec())
}

/// Any tag the tab strip can select, including `All`
fn active_tag_strategy() -> impl Strategy<Value = Tag> {
    prop::sample::select(Tag::tabs())
}

/// Short printable titles/locations, sometimes missing
fn field_strategy() -> impl Strategy<Value = Option<String>> {
    prop::option::of(prop::string::string_regex("[a-zA-Z0-9 ]{0,16}").expect("valid regex"))
}

/// Search queries, including empty and whitespace-heavy ones
fn query_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9 ]{0,6}").expect("valid regex")
}

/// A catalog of up to 20 photos with index-derived unique ids
fn catalog_strategy() -> impl Strategy<Value = Catalog> {
    prop::collection::vec(
        (
            field_strategy(),
            field_strategy(),
            prop::collection::vec(photo_tag_strategy(), 0..3),
            2019..2026i32,
        ),
        0..20,
    )
    .prop_map(|entries| {
        let photos = entries
            .into_iter()
            .enumerate()
            .map(|(i, (title, location, tags, year))| Photo {
                id: format!("{i}"),
                src: format!("https://photos.example/{i}.jpg"),
                width: 1600,
                height: 1067,
                title,
                tags,
                year,
                location,
            })
            .collect();
        Catalog::from_photos(photos)
    })
}

fn ids(photos: &[&Photo]) -> Vec<String> {
    photos.iter().map(|p| p.id.clone()).collect()
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// With no tag and no query active, filtering is the identity
    #[test]
    fn filter_identity(catalog in catalog_strategy()) {
        let all = visible(&catalog, Tag::All, "");
        prop_assert_eq!(all.len(), catalog.len());
        let expected: Vec<String> = catalog.photos().iter().map(|p| p.id.clone()).collect();
        prop_assert_eq!(ids(&all), expected);
    }

    /// Every photo passing a non-`All` tag filter carries that tag
    #[test]
    fn tag_filter_is_sound(catalog in catalog_strategy(), tag in photo_tag_strategy(), query in query_strategy()) {
        for photo in visible(&catalog, tag, &query) {
            prop_assert!(photo.has_tag(tag));
        }
    }

    /// Every photo passing a query filter contains the query in title or location
    #[test]
    fn query_filter_is_sound(catalog in catalog_strategy(), query in query_strategy()) {
        let needle = query.trim().to_lowercase();
        for photo in visible(&catalog, Tag::All, &query) {
            if !needle.is_empty() {
                let hit = photo.title_str().to_lowercase().contains(&needle)
                    || photo.location_str().to_lowercase().contains(&needle);
                prop_assert!(hit, "photo {} passed query {:?}", photo.id, query);
            }
        }
    }

    /// Filtering an already-filtered catalog changes nothing
    #[test]
    fn filter_is_idempotent(catalog in catalog_strategy(), tag in active_tag_strategy(), query in query_strategy()) {
        let once = visible(&catalog, tag, &query);
        let refiltered = Catalog::from_photos(once.iter().map(|p| (*p).clone()).collect());
        let twice = visible(&refiltered, tag, &query);
        prop_assert_eq!(ids(&once), ids(&twice));
    }

    /// The filtered view is a subsequence of the catalog, in catalog order
    #[test]
    fn filter_preserves_order(catalog in catalog_strategy(), tag in active_tag_strategy(), query in query_strategy()) {
        let positions: Vec<usize> = visible(&catalog, tag, &query)
            .iter()
            .map(|photo| {
                catalog
                    .photos()
                    .iter()
                    .position(|p| p.id == photo.id)
                    .expect("filtered photo comes from the catalog")
            })
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    /// Identical inputs produce identical outputs
    #[test]
    fn filter_is_deterministic(catalog in catalog_strategy(), tag in active_tag_strategy(), query in query_strategy()) {
        let first = ids(&visible(&catalog, tag, &query));
        let second = ids(&visible(&catalog, tag, &query));
        prop_assert_eq!(first, second);
    }

    /// Collection membership is pure: two evaluations agree
    #[test]
    fn collection_membership_is_pure(catalog in catalog_strategy()) {
        for collection in &COLLECTIONS {
            let first = ids(&collection.members(&catalog));
            let second = ids(&collection.members(&catalog));
            prop_assert_eq!(first, second);
            prop_assert_eq!(collection.members(&catalog).len(), collection.count(&catalog));
        }
    }

    /// Selecting any in-domain tag always succeeds and sticks
    #[test]
    fn tab_strip_accepts_its_whole_domain(tag in active_tag_strategy()) {
        let mut strip = TabStrip::new(Tag::tabs());
        strip.select(&tag).expect("in-domain selection");
        prop_assert_eq!(*strip.selected(), tag);
    }
}
