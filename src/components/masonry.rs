//! Masonry Grid Component
//!
//! CSS-columns photo grid with per-photo metadata cards. Used by the Work
//! section, the collection pages, and nothing else - the deliverable grid in
//! the client portal is a plain grid, not a masonry.

use dioxus::prelude::*;
use stillframe_core::Photo;

use crate::components::{Badge, BadgeVariant};

/// Tags shown per card before truncation
const CARD_TAG_LIMIT: usize = 2;

#[component]
pub fn MasonryGrid(
    /// Photos to lay out, already filtered and ordered
    photos: Vec<Photo>,
    /// Called with the clicked photo (opens the lightbox)
    on_select: EventHandler<Photo>,
) -> Element {
    if photos.is_empty() {
        return rsx! {
            p { class: "empty-note", "No photos match the current filters." }
        };
    }

    rsx! {
        div { class: "masonry",
            for photo in photos.iter() {
                {
                    let selected = photo.clone();
                    let alt = if photo.title_str().is_empty() {
                        "photo".to_string()
                    } else {
                        photo.title_str().to_string()
                    };
                    rsx! {
                        article { key: "{photo.id}", class: "photo-card",
                            button {
                                r#type: "button",
                                class: "photo-card__frame",
                                onclick: move |_| on_select.call(selected.clone()),

                                img {
                                    src: "{photo.src}",
                                    alt: "{alt}",
                                    loading: "lazy",
                                    width: "{photo.width}",
                                    height: "{photo.height}",
                                }
                            }

                            div { class: "photo-card__meta",
                                div {
                                    div { class: "photo-card__title", "{photo.title_str()}" }
                                    div { class: "photo-card__sub",
                                        "{photo.location_str()} \u{2022} {photo.year}"
                                    }
                                }
                                div { class: "photo-card__tags",
                                    for tag in photo.tags.iter().take(CARD_TAG_LIMIT) {
                                        Badge {
                                            label: tag.label().to_string(),
                                            variant: BadgeVariant::Secondary,
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
