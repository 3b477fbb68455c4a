//! Navigation Header Component
//!
//! Desktop: sticky header with brand, section links, theme toggle.
//! Mobile: section links collapse behind the menu button (see MobileMenu).

use dioxus::prelude::*;

use crate::components::icons;
use crate::context::{toggle_theme, use_theme};

/// Section links on the home page, in display order
pub const NAV_LINKS: [(&str, &str); 5] = [
    ("Work", "#work"),
    ("Collections", "#collections"),
    ("Clients", "#clients"),
    ("About", "#about"),
    ("Contact", "#contact"),
];

#[component]
pub fn NavHeader(
    /// Callback when the mobile menu button is pressed
    on_menu_open: EventHandler<()>,
) -> Element {
    let theme = use_theme();

    rsx! {
        header { class: "site-header",
            div { class: "site-header__inner",
                // Left: brand
                div { class: "brand",
                    {icons::camera(20)}
                    span { class: "brand__name", "Stillframe Photography" }
                }

                // Center: section links (hidden on mobile via CSS)
                nav { class: "site-nav",
                    for (label, href) in NAV_LINKS {
                        a { href: "{href}", "{label}" }
                    }
                }

                // Right: theme toggle and menu button
                div { class: "site-header__actions",
                    button {
                        r#type: "button",
                        class: "icon-button",
                        "aria-label": "Toggle theme",
                        onclick: move |_| toggle_theme(theme),

                        if theme().is_dark() {
                            {icons::sun(16)}
                        } else {
                            {icons::moon(16)}
                        }
                    }

                    button {
                        r#type: "button",
                        class: "icon-button menu-button",
                        "aria-label": "Open menu",
                        onclick: move |_| on_menu_open.call(()),

                        {icons::menu(20)}
                    }
                }
            }
        }
    }
}
