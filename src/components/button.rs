//! Button Component
//!
//! Shared button with a closed variant set.

use dioxus::prelude::*;

/// Visual style of a button.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ButtonVariant {
    /// Filled accent, for the primary action in a block
    #[default]
    Primary,
    /// Muted fill, for secondary actions
    Secondary,
    /// No fill, for toolbar actions
    Ghost,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn--primary",
            ButtonVariant::Secondary => "btn btn--secondary",
            ButtonVariant::Ghost => "btn btn--ghost",
        }
    }
}

#[component]
pub fn Button(
    /// Visual style
    #[props(default)]
    variant: ButtonVariant,
    /// Click handler
    onclick: EventHandler<MouseEvent>,
    /// Button content (text, icon + text)
    children: Element,
) -> Element {
    rsx! {
        button {
            r#type: "button",
            class: variant.class(),
            onclick: move |e| onclick.call(e),
            {children}
        }
    }
}
