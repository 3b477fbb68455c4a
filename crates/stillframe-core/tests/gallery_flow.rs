//! End-to-end gallery session tests
//!
//! Exercises the core the way the desktop app drives it: load a catalog,
//! filter it, open the lightbox, unlock the client gallery, send an inquiry.

use stillframe_core::{
    demo_catalog, AccessGate, Catalog, ContactRequest, ContactSink, DemoAccess, GalleryFilter,
    Lightbox, LogSink, Tag, COLLECTIONS, DEFAULT_SEED,
};

/// A full browse session over the demo catalog
#[test]
fn test_browse_session() {
    let catalog = demo_catalog(DEFAULT_SEED);
    let mut filter = GalleryFilter::new();
    let mut lightbox = Lightbox::default();

    // Landing state: everything visible
    assert_eq!(filter.photos(&catalog).len(), catalog.len());

    // Narrow by tag, then by query
    filter.select_tag(Tag::Street).unwrap();
    let street = filter.photos(&catalog);
    assert!(!street.is_empty());
    assert!(street.iter().all(|p| p.has_tag(Tag::Street)));

    filter.set_query("seoul");
    let narrowed = filter.photos(&catalog);
    assert!(narrowed.len() <= street.len());

    // Open the first visible photo, then dismiss
    if let Some(first) = filter.photos(&catalog).first() {
        lightbox.select((*first).clone());
        assert!(lightbox.is_open());
    }
    lightbox.dismiss();
    assert!(!lightbox.is_open());

    // Back to everything
    filter.select_tag(Tag::All).unwrap();
    filter.set_query("");
    assert_eq!(filter.photos(&catalog).len(), catalog.len());
}

/// Collections cover the catalog views shown on the home page
#[test]
fn test_collection_cards_view() {
    let catalog = demo_catalog(DEFAULT_SEED);

    for collection in &COLLECTIONS {
        let members = collection.members(&catalog);
        assert_eq!(members.len(), collection.count(&catalog));
        if let Some(cover) = collection.cover(&catalog) {
            assert_eq!(cover.id, members[0].id);
        } else {
            assert!(members.is_empty());
        }
    }

    // The demo tag pools feed every collection
    let total: usize = COLLECTIONS.iter().map(|c| c.count(&catalog)).sum();
    assert!(total >= catalog.len(), "pools overlap, so counts can exceed");
}

/// Unlocking the client gallery and sending an inquiry
#[test]
fn test_client_handoff_session() {
    let catalog = demo_catalog(DEFAULT_SEED);
    let provider = DemoAccess::new(&catalog);
    let mut gate = AccessGate::new();

    gate.submit(&provider, "letmein");
    assert!(!gate.is_unlocked());
    assert!(gate.error().is_some());

    gate.submit(&provider, "  Demo ");
    assert!(gate.is_unlocked());
    assert_eq!(gate.deliverables().unwrap().len(), 6);

    let inquiry = ContactRequest {
        name: "Jane Doe".to_string(),
        email: "jane@example.com".to_string(),
        message: "Loved the deliverables - booking a follow-up shoot.".to_string(),
    };
    assert!(LogSink.send(&inquiry).is_ok());
}

/// A catalog written to JSON loads back identically
#[test]
fn test_catalog_json_file_roundtrip() {
    let catalog = demo_catalog(42);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    let json = serde_json::to_string_pretty(catalog.photos()).unwrap();
    std::fs::write(&path, json).unwrap();

    let loaded = Catalog::from_json_file(&path).unwrap();
    assert_eq!(loaded, catalog);
}

/// Loading a missing or malformed catalog file fails cleanly
#[test]
fn test_catalog_json_file_errors() {
    let dir = tempfile::tempdir().unwrap();

    let missing = Catalog::from_json_file(dir.path().join("nope.json"));
    assert!(missing.is_err());

    let bad = dir.path().join("bad.json");
    std::fs::write(&bad, "{not json").unwrap();
    assert!(Catalog::from_json_file(&bad).is_err());
}
