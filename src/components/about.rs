//! About Section Component

use dioxus::prelude::*;

use crate::context::use_catalog;

/// Feature bullets shown beside the about copy
const FEATURES: [&str; 6] = [
    "Fast, responsive layout",
    "Masonry galleries with lightbox",
    "Tag filtering & search",
    "Client area with access codes",
    "Dark and light themes",
    "No backend required to start",
];

#[component]
pub fn AboutSection() -> Element {
    let catalog = use_catalog();
    let headshot = catalog().photos().first().cloned();

    rsx! {
        section { id: "about", class: "section",
            div { class: "section-inner section-inner--narrow about-grid",
                div {
                    h2 { class: "section-title", "About" }
                    p { class: "about-copy",
                        "I photograph people and places in honest color and natural light. "
                        "I've worked with student orgs, startups, and local venues, and this "
                        "site is built around the same idea as a clean portfolio hand-off: "
                        "simple navigation, curated collections, and a private client area."
                    }

                    ul { class: "feature-list",
                        for feature in FEATURES {
                            li { key: "{feature}", "{feature}" }
                        }
                    }
                }

                div { class: "headshot-card",
                    if let Some(photo) = headshot {
                        img { src: "{photo.src}", alt: "headshot" }
                    }
                    div { class: "headshot-card__body",
                        div { class: "photo-card__title", "Stillframe Studio" }
                        div { class: "photo-card__sub",
                            "Photographer \u{2022} Charlottesville, VA"
                        }
                        a { class: "btn btn--secondary", href: "#contact", "Book a session" }
                    }
                }
            }
        }
    }
}
