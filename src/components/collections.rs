//! Collections Section Component
//!
//! Cover cards for each curated collection, linking to the full gallery
//! route. Counts and covers are recomputed from the catalog on render.

use dioxus::prelude::*;
use stillframe_core::COLLECTIONS;

use crate::app::Route;
use crate::components::icons;
use crate::context::use_catalog;

#[component]
pub fn CollectionsSection() -> Element {
    let catalog = use_catalog();
    let snapshot = catalog();

    rsx! {
        section { id: "collections", class: "section section--band",
            div { class: "section-inner",
                h2 { class: "section-title", "Collections" }

                div { class: "collection-grid",
                    for collection in COLLECTIONS.iter() {
                        {
                            let cover = collection.cover(&snapshot).cloned();
                            let count = collection.count(&snapshot);
                            rsx! {
                                div { key: "{collection.slug}", class: "collection-card",
                                    div { class: "collection-card__cover",
                                        if let Some(photo) = cover {
                                            img { src: "{photo.src}", alt: "{collection.title}" }
                                        }
                                        div { class: "collection-card__caption",
                                            h3 { "{collection.title}" }
                                            p { "{collection.blurb}" }
                                        }
                                    }

                                    div { class: "collection-card__footer",
                                        span { "{count} photos" }
                                        Link {
                                            class: "collection-card__view",
                                            to: Route::CollectionPage { slug: collection.slug.to_string() },
                                            "View"
                                            {icons::chevron_right(16)}
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
