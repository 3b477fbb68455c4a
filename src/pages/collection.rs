//! Collection page - the full gallery for one curated collection.

use dioxus::prelude::*;
use stillframe_core::{collection, Lightbox, Photo};

use crate::app::Route;
use crate::components::{icons, MasonryGrid, PhotoLightbox, SiteFooter};
use crate::context::use_catalog;

#[component]
pub fn CollectionPage(slug: String) -> Element {
    let catalog = use_catalog();
    let mut lightbox = use_signal(Lightbox::default);

    let Some(found) = collection::find(&slug) else {
        return rsx! {
            main { class: "not-found",
                h1 { "Collection not found" }
                p { class: "section-sub", "No collection lives at \"{slug}\"." }
                Link { class: "btn btn--secondary", to: Route::Home {}, "Back to the portfolio" }
            }
        };
    };

    let snapshot = catalog();
    let members: Vec<Photo> = found.members(&snapshot).into_iter().cloned().collect();
    let count = members.len();
    let open_photo = lightbox.read().photo().cloned();

    rsx! {
        main {
            div { class: "section-inner collection-page__head",
                Link { class: "back-link", to: Route::Home {},
                    {icons::chevron_left(16)}
                    "All work"
                }
                h1 { class: "collection-page__title", "{found.title}" }
                p { class: "collection-page__blurb", "{found.blurb}" }
                p { class: "section-sub", "{count} photos" }
            }

            section { class: "section",
                div { class: "section-inner",
                    MasonryGrid {
                        photos: members,
                        on_select: move |photo| lightbox.write().select(photo),
                    }
                }
            }

            SiteFooter {}
        }

        if let Some(photo) = open_photo {
            PhotoLightbox {
                photo: photo,
                on_close: move |_| lightbox.write().dismiss(),
            }
        }
    }
}
