//! Site Footer Component

use chrono::Datelike;
use dioxus::prelude::*;

#[component]
pub fn SiteFooter() -> Element {
    let year = chrono::Utc::now().year();

    rsx! {
        footer { class: "site-footer",
            div { class: "site-footer__inner",
                div { class: "site-footer__copy",
                    "\u{a9} {year} Stillframe Photography"
                }
                div { class: "site-footer__links",
                    a { href: "#", "Privacy" }
                    a { href: "#", "Licensing" }
                    a { href: "#", "Credits" }
                }
            }
        }
    }
}
