//! Tag Tab Strip Component
//!
//! Renders the gallery's tag selector. The domain comes from the core tab
//! state; this component only draws it and reports clicks.

use dioxus::prelude::*;
use stillframe_core::Tag;

#[component]
pub fn TagTabs(
    /// The currently active tag
    active: Tag,
    /// Called with the clicked tag (always from the fixed domain)
    on_select: EventHandler<Tag>,
) -> Element {
    rsx! {
        div { class: "tag-tabs", role: "tablist", "aria-label": "Filter by tag",
            for tag in Tag::tabs() {
                button {
                    r#type: "button",
                    role: "tab",
                    key: "{tag.label()}",
                    class: if tag == active { "tag-tab active" } else { "tag-tab" },
                    "aria-selected": if tag == active { "true" } else { "false" },
                    onclick: move |_| on_select.call(tag),
                    "{tag.label()}"
                }
            }
        }
    }
}
