//! Hero Component
//!
//! Full-bleed cover photo with the site's headline panel and tag row.

use dioxus::prelude::*;
use stillframe_core::Tag;

use crate::components::{Badge, BadgeVariant};
use crate::context::use_catalog;

/// Preferred catalog index for the cover photo
const COVER_INDEX: usize = 4;

#[component]
pub fn Hero() -> Element {
    let catalog = use_catalog();
    let snapshot = catalog();
    let cover = snapshot
        .photos()
        .get(COVER_INDEX)
        .or_else(|| snapshot.photos().first())
        .cloned();

    rsx! {
        section { class: "hero",
            if let Some(photo) = cover {
                div { class: "hero__image",
                    img { src: "{photo.src}", alt: "cover photo" }
                }
            }

            div { class: "hero__inner",
                div { class: "hero__panel",
                    h1 { class: "hero__title",
                        "Clean, client-ready photography sites without the headache."
                    }
                    p { class: "hero__sub",
                        "Searchable galleries, curated collections, and a private hand-off area for clients."
                    }
                    div { class: "hero__tags",
                        for tag in Tag::GALLERY {
                            Badge {
                                label: tag.label().to_string(),
                                variant: BadgeVariant::Outline,
                            }
                        }
                    }
                }
            }
        }
    }
}
