//! Lightbox Component
//!
//! Full-screen enlarged view of one photo. Clicking the scrim dismisses;
//! clicking the photo does not.

use dioxus::prelude::*;
use stillframe_core::Photo;

#[component]
pub fn PhotoLightbox(
    /// The photo to enlarge
    photo: Photo,
    /// Callback when the lightbox is dismissed
    on_close: EventHandler<()>,
) -> Element {
    let alt = if photo.title_str().is_empty() {
        "photo".to_string()
    } else {
        photo.title_str().to_string()
    };

    rsx! {
        div {
            class: "lightbox-overlay",
            onclick: move |_| on_close.call(()),

            img {
                class: "lightbox-photo",
                src: "{photo.src}",
                alt: "{alt}",
                onclick: move |e| e.stop_propagation(),
            }
        }
    }
}
