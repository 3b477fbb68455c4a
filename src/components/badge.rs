//! Badge Component
//!
//! Small pill label used for photo tags and the hero tag row.

use dioxus::prelude::*;

/// Visual style of a badge. A closed set - variant dispatch is a match,
/// not a class-string comparison.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BadgeVariant {
    /// Filled accent pill
    #[default]
    Default,
    /// Muted fill, for metadata rows
    Secondary,
    /// Border only, for the hero tag row
    Outline,
}

impl BadgeVariant {
    fn class(self) -> &'static str {
        match self {
            BadgeVariant::Default => "badge",
            BadgeVariant::Secondary => "badge badge--secondary",
            BadgeVariant::Outline => "badge badge--outline",
        }
    }
}

#[component]
pub fn Badge(
    /// Text shown inside the pill
    label: String,
    /// Visual style
    #[props(default)]
    variant: BadgeVariant,
) -> Element {
    rsx! {
        span { class: variant.class(), "{label}" }
    }
}
