//! Home page - the single-page portfolio.
//!
//! Owns the page-level state machines (gallery filter, lightbox, mobile
//! menu) and composes the section components around them. Every state
//! transition is synchronous; the visible photo set is recomputed from
//! (catalog, tag, query) on each render.

use dioxus::prelude::*;
use stillframe_core::{Disclosure, GalleryFilter, Lightbox, Photo, Tag};

use crate::components::{
    icons, AboutSection, ClientPortal, CollectionsSection, ContactSection, Hero, MasonryGrid,
    MobileMenu, NavHeader, PhotoLightbox, SiteFooter, TagTabs,
};
use crate::context::use_catalog;

#[component]
pub fn Home() -> Element {
    let catalog = use_catalog();

    // Page-level UI state
    let mut filter = use_signal(GalleryFilter::new);
    let mut lightbox = use_signal(Lightbox::default);
    let mut menu = use_signal(Disclosure::default);

    // Derive this render's view of the catalog
    let snapshot = catalog();
    let visible: Vec<Photo> = filter
        .read()
        .photos(&snapshot)
        .into_iter()
        .cloned()
        .collect();
    let active = filter.read().active_tag();
    let query = filter.read().query().to_string();
    let open_photo = lightbox.read().photo().cloned();
    let menu_open = menu.read().is_open();

    let select_tag = move |tag: Tag| {
        // The tab strip only emits values from the fixed domain
        if filter.write().select_tag(tag).is_err() {
            tracing::error!(%tag, "tag outside the gallery domain");
        }
    };

    rsx! {
        NavHeader { on_menu_open: move |_| menu.write().open() }

        if menu_open {
            MobileMenu { on_close: move |_| menu.write().close() }
        }

        Hero {}

        // Filterable gallery
        section { id: "work", class: "section",
            div { class: "section-inner",
                div { class: "work-toolbar",
                    div {
                        h2 { class: "section-title", "Selected Work" }
                        p { class: "section-sub", "Filter by tag or search by title and location." }
                    }

                    div { class: "work-toolbar__controls",
                        div { class: "search-box",
                            span { class: "search-box__icon", {icons::search(16)} }
                            input {
                                class: "text-input",
                                r#type: "search",
                                placeholder: "Search\u{2026}",
                                "aria-label": "Search photos",
                                value: "{query}",
                                oninput: move |e| filter.write().set_query(e.value()),
                            }
                        }

                        TagTabs { active: active, on_select: select_tag }
                    }
                }

                MasonryGrid {
                    photos: visible,
                    on_select: move |photo| lightbox.write().select(photo),
                }
            }
        }

        CollectionsSection {}
        ClientPortal {}
        AboutSection {}
        ContactSection {}
        SiteFooter {}

        if let Some(photo) = open_photo {
            PhotoLightbox {
                photo: photo,
                on_close: move |_| lightbox.write().dismiss(),
            }
        }
    }
}
