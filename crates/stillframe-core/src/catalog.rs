//! Core catalog types for Stillframe
//!
//! The catalog is a fixed, ordered set of photo records loaded once at
//! startup. Photos are immutable after construction; every downstream view
//! (gallery filter, collections, client deliverables) is computed from the
//! catalog on demand rather than stored.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::PortfolioResult;

/// Subject tag attached to a photo.
///
/// `All` is a sentinel used only by the gallery tab strip to mean
/// "no tag filter" - it is never attached to a photo record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tag {
    All,
    Portraits,
    Events,
    Street,
    Landscape,
    Studio,
    Concerts,
}

impl Tag {
    /// Every tag that can appear on a photo, in display order.
    pub const GALLERY: [Tag; 6] = [
        Tag::Portraits,
        Tag::Events,
        Tag::Street,
        Tag::Landscape,
        Tag::Studio,
        Tag::Concerts,
    ];

    /// The tab-strip domain: the `All` sentinel followed by every photo tag.
    pub fn tabs() -> Vec<Tag> {
        let mut tabs = vec![Tag::All];
        tabs.extend(Tag::GALLERY);
        tabs
    }

    /// Human-readable label for this tag
    pub fn label(&self) -> &'static str {
        match self {
            Tag::All => "All",
            Tag::Portraits => "Portraits",
            Tag::Events => "Events",
            Tag::Street => "Street",
            Tag::Landscape => "Landscape",
            Tag::Studio => "Studio",
            Tag::Concerts => "Concerts",
        }
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A single photo record.
///
/// `width` and `height` are the intrinsic pixel dimensions used for layout
/// aspect ratio only; they are not verified against the actual asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    /// Unique identifier within the catalog
    pub id: String,
    /// Image reference (URI)
    pub src: String,
    /// Intrinsic width in pixels
    pub width: u32,
    /// Intrinsic height in pixels
    pub height: u32,
    /// Optional display title
    #[serde(default)]
    pub title: Option<String>,
    /// Subject tags (never contains `Tag::All`)
    pub tags: Vec<Tag>,
    /// Year the photo was taken
    pub year: i32,
    /// Optional free-text location
    #[serde(default)]
    pub location: Option<String>,
}

impl Photo {
    /// Whether this photo carries the given tag
    pub fn has_tag(&self, tag: Tag) -> bool {
        self.tags.contains(&tag)
    }

    /// Title shown in the UI, or empty when untitled
    pub fn title_str(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    /// Location shown in the UI, or empty when unknown
    pub fn location_str(&self) -> &str {
        self.location.as_deref().unwrap_or("")
    }
}

/// The photo catalog: an ordered, immutable collection of photos.
///
/// Catalog order is the presentation order; every derived view preserves it.
/// On disk a catalog is a plain JSON array of photo records.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalog {
    photos: Vec<Photo>,
}

impl Catalog {
    /// Build a catalog from an already-ordered list of photos
    pub fn from_photos(photos: Vec<Photo>) -> Self {
        Self { photos }
    }

    /// Load a catalog from a JSON file.
    ///
    /// The file holds a JSON array of photo records.
    pub fn from_json_file(path: impl AsRef<Path>) -> PortfolioResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        let photos: Vec<Photo> = serde_json::from_str(&raw)?;
        Ok(Self { photos })
    }

    /// All photos in catalog order
    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    /// Number of photos in the catalog
    pub fn len(&self) -> usize {
        self.photos.len()
    }

    /// Whether the catalog holds no photos
    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    /// Look up a photo by id
    pub fn get(&self, id: &str) -> Option<&Photo> {
        self.photos.iter().find(|p| p.id == id)
    }
}
