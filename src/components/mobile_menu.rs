//! Mobile Menu Component
//!
//! Modal navigation for narrow windows. Mirrors the header's section links
//! and carries the theme toggle in its footer.

use dioxus::prelude::*;

use crate::components::nav_header::NAV_LINKS;
use crate::components::{icons, Button, ButtonVariant};
use crate::context::{toggle_theme, use_theme};

#[component]
pub fn MobileMenu(
    /// Callback when the menu is dismissed
    on_close: EventHandler<()>,
) -> Element {
    let theme = use_theme();

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_close.call(()),

            div {
                class: "mobile-menu",
                onclick: move |e| e.stop_propagation(),

                div { class: "mobile-menu__head",
                    span { class: "mobile-menu__title", "Menu" }
                    button {
                        r#type: "button",
                        class: "icon-button",
                        "aria-label": "Close menu",
                        onclick: move |_| on_close.call(()),
                        {icons::close(18)}
                    }
                }

                div { class: "mobile-menu__links",
                    for (label, href) in NAV_LINKS {
                        a {
                            href: "{href}",
                            onclick: move |_| on_close.call(()),
                            "{label}"
                        }
                    }
                }

                div { class: "mobile-menu__footer",
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| toggle_theme(theme),

                        if theme().is_dark() {
                            {icons::sun(16)}
                        } else {
                            {icons::moon(16)}
                        }
                        "Toggle theme"
                    }
                }
            }
        }
    }
}
